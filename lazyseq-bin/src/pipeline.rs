/*!
Stages and terminals that can be named on the command line.

A pipeline is built at runtime, so every stage wraps the chain built so far
and erases its type again. Until the first filter, the chain's length is
known exactly and it is erased with `boxed_exact`. After that only an upper
bound is known and it is erased with `boxed`.
*/

use std::fmt;
use std::io;
use std::str::FromStr;

use lazyseq::{iter, Adapter, Boxed, ExactBoxed};

use crate::Error;

/// A pipeline under construction.
#[derive(Debug)]
pub enum Chain<'a> {
    Exact(ExactBoxed<'a, i64>),
    Bounded(Boxed<'a, i64>),
}

impl<'a> Chain<'a> {
    pub fn new(xs: &'a [i64]) -> Chain<'a> {
        Chain::Exact(iter(xs).map(|&x| x).boxed_exact())
    }

    fn into_boxed(self) -> Boxed<'a, i64> {
        match self {
            Chain::Exact(c) => c.boxed(),
            Chain::Bounded(c) => c,
        }
    }
}

/// Applies a stage that keeps the chain exact if it already was.
macro_rules! keep_kind {
    ($chain:expr, |$c:ident| $stage:expr) => {
        match $chain {
            Chain::Exact($c) => Chain::Exact($stage.boxed_exact()),
            Chain::Bounded($c) => Chain::Bounded($stage.boxed()),
        }
    };
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Pred {
    Odd,
    Even,
    Gt(i64),
    Lt(i64),
    Eq(i64),
    Ne(i64),
}

impl Pred {
    pub fn test(&self, x: i64) -> bool {
        match *self {
            Pred::Odd => x % 2 != 0,
            Pred::Even => x % 2 == 0,
            Pred::Gt(n) => x > n,
            Pred::Lt(n) => x < n,
            Pred::Eq(n) => x == n,
            Pred::Ne(n) => x != n,
        }
    }
}

impl FromStr for Pred {
    type Err = Error;

    fn from_str(s: &str) -> Result<Pred, Error> {
        let (name, arg) = split_arg(s, '=');
        let pred = match (name, arg) {
            ("odd", None) => Pred::Odd,
            ("even", None) => Pred::Even,
            ("gt", Some(n)) => Pred::Gt(parse_num(n)?),
            ("lt", Some(n)) => Pred::Lt(parse_num(n)?),
            ("eq", Some(n)) => Pred::Eq(parse_num(n)?),
            ("ne", Some(n)) => Pred::Ne(parse_num(n)?),
            _ => anyhow::bail!("unrecognized predicate: {:?}", s),
        };
        Ok(pred)
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Func {
    Square,
    Neg,
    Abs,
    Add(i64),
    Mul(i64),
}

impl Func {
    pub fn call(&self, x: i64) -> i64 {
        match *self {
            Func::Square => x.wrapping_mul(x),
            Func::Neg => x.wrapping_neg(),
            Func::Abs => x.wrapping_abs(),
            Func::Add(n) => x.wrapping_add(n),
            Func::Mul(n) => x.wrapping_mul(n),
        }
    }
}

impl FromStr for Func {
    type Err = Error;

    fn from_str(s: &str) -> Result<Func, Error> {
        let (name, arg) = split_arg(s, '=');
        let func = match (name, arg) {
            ("square", None) => Func::Square,
            ("neg", None) => Func::Neg,
            ("abs", None) => Func::Abs,
            ("add", Some(n)) => Func::Add(parse_num(n)?),
            ("mul", Some(n)) => Func::Mul(parse_num(n)?),
            _ => anyhow::bail!("unrecognized function: {:?}", s),
        };
        Ok(func)
    }
}

/// One composable step of a pipeline.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Stage {
    Reverse,
    Skip(usize),
    Take(usize),
    Step(usize),
    Filter(Pred),
    Map(Func),
}

impl Stage {
    /// Wraps `chain` in this stage.
    ///
    /// This fails for a step of zero, and for a step following a filter.
    pub fn apply<'a>(&self, chain: Chain<'a>) -> Result<Chain<'a>, Error> {
        tracing::debug!(stage = ?self, "applying stage");
        Ok(match *self {
            Stage::Reverse => keep_kind!(chain, |c| c.reverse()),
            Stage::Skip(n) => keep_kind!(chain, |c| c.skip(n)),
            Stage::Take(n) => keep_kind!(chain, |c| c.take(n)),
            Stage::Map(func) => {
                keep_kind!(chain, |c| c.map(move |x| func.call(x)))
            }
            Stage::Filter(pred) => {
                let test = move |x: &i64| pred.test(*x);
                Chain::Bounded(match chain {
                    Chain::Exact(c) => c.filter(test).boxed(),
                    Chain::Bounded(c) => c.filter(test).boxed(),
                })
            }
            Stage::Step(n) => match chain {
                Chain::Exact(c) => {
                    Chain::Exact(c.try_step_by(n)?.boxed_exact())
                }
                Chain::Bounded(_) => anyhow::bail!(
                    "step:{} cannot follow a filter, since stepping needs \
                     the exact number of remaining elements",
                    n
                ),
            },
        })
    }
}

impl FromStr for Stage {
    type Err = Error;

    fn from_str(s: &str) -> Result<Stage, Error> {
        let (name, arg) = split_arg(s, ':');
        let stage = match (name, arg) {
            ("reverse", None) => Stage::Reverse,
            ("skip", Some(n)) => Stage::Skip(parse_num(n)?),
            ("take", Some(n)) => Stage::Take(parse_num(n)?),
            ("step", Some(n)) => Stage::Step(parse_num(n)?),
            ("filter", Some(p)) => Stage::Filter(p.parse()?),
            ("map", Some(f)) => Stage::Map(f.parse()?),
            _ => anyhow::bail!("unrecognized stage: {:?}", s),
        };
        Ok(stage)
    }
}

/// The operation that drives a pipeline.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Terminal {
    Collect,
    Count,
    Sum,
    Last,
    Nth(usize),
    Position(i64),
    Any(Pred),
    All(Pred),
    Partition(Pred),
}

impl Terminal {
    pub fn apply(&self, chain: Chain<'_>) -> Output {
        tracing::debug!(terminal = ?self, "driving pipeline");
        let chain = chain.into_boxed();
        match *self {
            Terminal::Collect => Output::Values(chain.collect()),
            Terminal::Count => Output::Count(chain.count()),
            Terminal::Sum => {
                let sum = chain.fold(0i64, |sum, x| sum.wrapping_add(x));
                Output::Value(Some(sum))
            }
            Terminal::Last => Output::Value(chain.last()),
            Terminal::Nth(n) => Output::Value(chain.nth(n)),
            Terminal::Position(v) => {
                Output::Index(chain.position(|x| x == v))
            }
            Terminal::Any(pred) => Output::Bool(chain.any(|x| pred.test(x))),
            Terminal::All(pred) => Output::Bool(chain.all(|x| pred.test(x))),
            Terminal::Partition(pred) => {
                let (yes, no) = chain.partition(|&x| pred.test(x));
                Output::Partition(yes, no)
            }
        }
    }
}

impl FromStr for Terminal {
    type Err = Error;

    fn from_str(s: &str) -> Result<Terminal, Error> {
        let (name, arg) = split_arg(s, ':');
        let terminal = match (name, arg) {
            ("collect", None) => Terminal::Collect,
            ("count", None) => Terminal::Count,
            ("sum", None) => Terminal::Sum,
            ("last", None) => Terminal::Last,
            ("nth", Some(n)) => Terminal::Nth(parse_num(n)?),
            ("position", Some(v)) => Terminal::Position(parse_num(v)?),
            ("any", Some(p)) => Terminal::Any(p.parse()?),
            ("all", Some(p)) => Terminal::All(p.parse()?),
            ("partition", Some(p)) => Terminal::Partition(p.parse()?),
            _ => anyhow::bail!("unrecognized terminal: {:?}", s),
        };
        Ok(terminal)
    }
}

/// The result of a terminal operation.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Output {
    Values(Vec<i64>),
    Count(usize),
    Value(Option<i64>),
    Index(Option<usize>),
    Bool(bool),
    Partition(Vec<i64>, Vec<i64>),
}

impl Output {
    /// Writes this output with one value per line. A missing value is
    /// written as an empty line.
    pub fn write<W: io::Write>(&self, mut wtr: W) -> io::Result<()> {
        match *self {
            Output::Values(ref xs) => write_lines(&mut wtr, xs),
            Output::Count(n) => writeln!(wtr, "{}", n),
            Output::Value(x) => writeln!(wtr, "{}", Maybe(x)),
            Output::Index(i) => writeln!(wtr, "{}", Maybe(i)),
            Output::Bool(b) => writeln!(wtr, "{}", b),
            Output::Partition(ref yes, ref no) => {
                write_lines(&mut wtr, yes)?;
                writeln!(wtr)?;
                write_lines(&mut wtr, no)
            }
        }
    }
}

fn write_lines<W: io::Write>(wtr: &mut W, xs: &[i64]) -> io::Result<()> {
    for x in xs {
        writeln!(wtr, "{}", x)?;
    }
    Ok(())
}

struct Maybe<T>(Option<T>);

impl<T: fmt::Display> fmt::Display for Maybe<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            None => Ok(()),
            Some(ref x) => x.fmt(f),
        }
    }
}

fn split_arg(s: &str, sep: char) -> (&str, Option<&str>) {
    match s.find(sep) {
        None => (s, None),
        Some(i) => (&s[..i], Some(&s[i + sep.len_utf8()..])),
    }
}

fn parse_num<T>(s: &str) -> Result<T, Error>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    s.parse()
        .map_err(|e| anyhow::Error::new(e).context(format!("{:?}", s)))
}

#[cfg(test)]
mod tests {
    use super::{Chain, Func, Output, Pred, Stage, Terminal};

    fn run(xs: &[i64], stages: &[&str], terminal: &str) -> Output {
        let mut chain = Chain::new(xs);
        for stage in stages {
            let stage: Stage = stage.parse().unwrap();
            chain = stage.apply(chain).unwrap();
        }
        terminal.parse::<Terminal>().unwrap().apply(chain)
    }

    #[test]
    fn parse_stages() {
        assert_eq!("reverse".parse::<Stage>().unwrap(), Stage::Reverse);
        assert_eq!("skip:3".parse::<Stage>().unwrap(), Stage::Skip(3));
        assert_eq!(
            "filter:gt=-2".parse::<Stage>().unwrap(),
            Stage::Filter(Pred::Gt(-2)),
        );
        assert_eq!(
            "map:add=5".parse::<Stage>().unwrap(),
            Stage::Map(Func::Add(5)),
        );
        assert!("skip".parse::<Stage>().is_err());
        assert!("skip:-1".parse::<Stage>().is_err());
        assert!("filter:odd=1".parse::<Stage>().is_err());
        assert!("shuffle".parse::<Stage>().is_err());
    }

    #[test]
    fn parse_terminals() {
        assert_eq!("sum".parse::<Terminal>().unwrap(), Terminal::Sum);
        assert_eq!(
            "any:even".parse::<Terminal>().unwrap(),
            Terminal::Any(Pred::Even),
        );
        assert!("nth".parse::<Terminal>().is_err());
    }

    #[test]
    fn reverse_filter_map() {
        let got = run(
            &[1, 2, 3, 4, 5],
            &["reverse", "filter:odd", "map:square"],
            "collect",
        );
        assert_eq!(got, Output::Values(vec![25, 9, 1]));
    }

    #[test]
    fn zero_step_is_an_error() {
        let xs = [1, 2, 3];
        let err = Stage::Step(0).apply(Chain::new(&xs)).unwrap_err();
        assert!(err.downcast_ref::<lazyseq::Error>().is_some());
    }

    #[test]
    fn step_after_filter_is_an_error() {
        let xs = [1, 2, 3];
        let chain = Stage::Filter(Pred::Odd).apply(Chain::new(&xs)).unwrap();
        assert!(Stage::Step(2).apply(chain).is_err());
    }

    #[test]
    fn filter_after_step() {
        let xs: Vec<i64> = (0..12).collect();
        let stages = ["step:3", "filter:gt=2", "reverse", "take:2"];
        let got = run(&xs, &stages, "collect");
        assert_eq!(got, Output::Values(vec![9, 6]));
    }

    #[test]
    fn step_from_the_back() {
        let xs: Vec<i64> = (0..10).collect();
        let got = run(&xs, &["step:4", "reverse"], "collect");
        assert_eq!(got, Output::Values(vec![8, 4, 0]));
    }

    #[test]
    fn terminals() {
        let xs = [2, 4, 6, 8];
        assert_eq!(run(&xs, &[], "count"), Output::Count(4));
        assert_eq!(run(&xs, &[], "sum"), Output::Value(Some(20)));
        assert_eq!(run(&xs, &["take:2"], "last"), Output::Value(Some(4)));
        assert_eq!(run(&xs, &[], "nth:9"), Output::Value(None));
        assert_eq!(run(&xs, &[], "position:6"), Output::Index(Some(2)));
        assert_eq!(run(&xs, &[], "position:0"), Output::Index(None));
        assert_eq!(run(&xs, &[], "all:even"), Output::Bool(true));
        assert_eq!(run(&xs, &[], "any:gt=8"), Output::Bool(false));
        assert_eq!(
            run(&xs, &[], "partition:lt=5"),
            Output::Partition(vec![2, 4], vec![6, 8]),
        );
    }

    #[test]
    fn write_partition() {
        let mut buf = vec![];
        Output::Partition(vec![1], vec![2, 3]).write(&mut buf).unwrap();
        assert_eq!(buf, b"1\n\n2\n3\n");
        let mut buf = vec![];
        Output::Value(None).write(&mut buf).unwrap();
        assert_eq!(buf, b"\n");
    }
}
