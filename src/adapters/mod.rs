pub use self::boxed::{Boxed, ExactBoxed};
pub use self::chain::Chain;
pub use self::enumerate::Enumerate;
pub use self::filter::Filter;
pub use self::map::Map;
pub use self::reverse::Reverse;
pub use self::skip::Skip;
pub use self::step_by::StepBy;
pub use self::take::Take;
pub use self::zip::Zip;

mod boxed;
mod chain;
mod enumerate;
mod filter;
mod map;
mod reverse;
mod skip;
mod step_by;
mod take;
mod zip;
