use std::io::Write;
use std::path::PathBuf;

use crate::pipeline::{Chain, Stage, Terminal};
use crate::{util, Error};

pub fn run(matches: &clap::ArgMatches) -> Result<(), Error> {
    Args::new(matches).and_then(|args| args.run())
}

#[derive(Debug)]
struct Args {
    input: Option<PathBuf>,
    output: Option<PathBuf>,
    stages: Vec<Stage>,
    terminal: Terminal,
}

impl Args {
    fn new(m: &clap::ArgMatches) -> Result<Args, Error> {
        let mut stages = vec![];
        if let Some(values) = m.values_of("stage") {
            for value in values {
                stages.push(value.parse::<Stage>()?);
            }
        }
        Ok(Args {
            input: m.value_of_os("input").map(PathBuf::from),
            output: m.value_of_os("output").map(PathBuf::from),
            stages,
            terminal: m.value_of("terminal").unwrap_or("collect").parse()?,
        })
    }

    fn run(&self) -> Result<(), Error> {
        let ints = util::read_ints(self.input.as_ref())?;
        let mut chain = Chain::new(&ints);
        for stage in &self.stages {
            chain = stage.apply(chain)?;
        }
        let output = self.terminal.apply(chain);

        let mut wtr = util::get_buf_writer(self.output.as_ref())?;
        output.write(&mut wtr)?;
        wtr.flush()?;
        Ok(())
    }
}
