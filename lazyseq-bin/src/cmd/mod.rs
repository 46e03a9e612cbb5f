pub mod concat;
pub mod run;
pub mod zip;
