use std::io::Write;
use std::path::PathBuf;

use lazyseq::{iter, Adapter};

use crate::{util, Error};

pub fn run(matches: &clap::ArgMatches) -> Result<(), Error> {
    Args::new(matches).and_then(|args| args.run())
}

#[derive(Debug)]
struct Args {
    input: Vec<PathBuf>,
    output: Option<PathBuf>,
    reverse: bool,
}

impl Args {
    fn new(m: &clap::ArgMatches) -> Result<Args, Error> {
        let input = match m.values_of_os("input") {
            None => anyhow::bail!("at least one input is required"),
            Some(values) => values.map(PathBuf::from).collect(),
        };
        Ok(Args {
            input,
            output: m.value_of_os("output").map(PathBuf::from),
            reverse: m.is_present("reverse"),
        })
    }

    fn run(&self) -> Result<(), Error> {
        let mut lists = vec![];
        for path in &self.input {
            lists.push(util::read_ints(Some(path))?);
        }

        let empty: Vec<i64> = vec![];
        let mut chain = iter(&empty).boxed();
        for list in &lists {
            chain = chain.chain(iter(list)).boxed();
        }
        if self.reverse {
            chain = chain.reverse().boxed();
        }

        let mut wtr = util::get_buf_writer(self.output.as_ref())?;
        for x in chain {
            writeln!(wtr, "{}", x)?;
        }
        wtr.flush()?;
        Ok(())
    }
}
