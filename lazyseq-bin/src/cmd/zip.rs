use std::io::Write;
use std::path::PathBuf;

use lazyseq::{iter, Adapter, ExactBoxed};

use crate::{util, Error};

/// An optional forward index followed by the left and right values.
type Row = (Option<usize>, i64, i64);

pub fn run(matches: &clap::ArgMatches) -> Result<(), Error> {
    Args::new(matches).and_then(|args| args.run())
}

#[derive(Debug)]
struct Args {
    left: PathBuf,
    right: PathBuf,
    output: Option<PathBuf>,
    enumerate: bool,
    reverse: bool,
}

impl Args {
    fn new(m: &clap::ArgMatches) -> Result<Args, Error> {
        let path = |name: &str| match m.value_of_os(name) {
            None => Err(anyhow::anyhow!("missing <{}> input", name)),
            Some(path) => Ok(PathBuf::from(path)),
        };
        Ok(Args {
            left: path("left")?,
            right: path("right")?,
            output: m.value_of_os("output").map(PathBuf::from),
            enumerate: m.is_present("enumerate"),
            reverse: m.is_present("reverse"),
        })
    }

    fn run(&self) -> Result<(), Error> {
        let left = util::read_ints(Some(&self.left))?;
        let right = util::read_ints(Some(&self.right))?;

        let pairs = iter(&left).zip(iter(&right));
        let mut rows: ExactBoxed<'_, Row> = if self.enumerate {
            pairs
                .enumerate()
                .map(|(i, (&a, &b))| (Some(i), a, b))
                .boxed_exact()
        } else {
            pairs.map(|(&a, &b)| (None, a, b)).boxed_exact()
        };
        if self.reverse {
            rows = rows.reverse().boxed_exact();
        }

        let mut wtr = util::get_buf_writer(self.output.as_ref())?;
        for (i, a, b) in rows {
            match i {
                None => writeln!(wtr, "{}\t{}", a, b)?,
                Some(i) => writeln!(wtr, "{}\t{}\t{}", i, a, b)?,
            }
        }
        wtr.flush()?;
        Ok(())
    }
}
