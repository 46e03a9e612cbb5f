use std::io::{self, Write};
use std::process;

use tracing_subscriber::EnvFilter;

mod app;
mod cmd;
mod pipeline;
mod util;

pub type Error = anyhow::Error;

fn main() {
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    if let Err(err) = try_main() {
        if is_broken_pipe(&err) {
            process::exit(0);
        }
        let _ = writeln!(io::stderr(), "{:#}", err);
        process::exit(1);
    }
}

fn try_main() -> Result<(), Error> {
    let matches = app::app().get_matches();
    match matches.subcommand() {
        ("concat", Some(m)) => cmd::concat::run(m),
        ("run", Some(m)) => cmd::run::run(m),
        ("zip", Some(m)) => cmd::zip::run(m),
        (unknown, _) => anyhow::bail!("unrecognized command: {}", unknown),
    }
}

fn is_broken_pipe(err: &Error) -> bool {
    match err.downcast_ref::<io::Error>() {
        Some(err) => err.kind() == io::ErrorKind::BrokenPipe,
        None => false,
    }
}
