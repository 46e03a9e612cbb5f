use std::fs::File;
use std::io::{self, BufRead};
use std::path::{Path, PathBuf};

use anyhow::Context;

use crate::Error;

/// Reads one integer per line, skipping blank lines.
pub fn read_ints<T: AsRef<Path>>(path: Option<T>) -> Result<Vec<i64>, Error> {
    let name = match path {
        None => "<stdin>".to_string(),
        Some(ref p) => p.as_ref().display().to_string(),
    };
    let rdr = get_buf_reader(path)
        .with_context(|| format!("failed to open {}", name))?;
    parse_ints(rdr).with_context(|| format!("failed to read {}", name))
}

fn parse_ints<R: BufRead>(rdr: R) -> Result<Vec<i64>, Error> {
    let mut ints = vec![];
    for (i, line) in rdr.lines().enumerate() {
        let line = line?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let n = line.parse::<i64>().with_context(|| {
            format!("line {}: invalid integer {:?}", i + 1, line)
        })?;
        ints.push(n);
    }
    tracing::debug!(count = ints.len(), "read integers");
    Ok(ints)
}

pub fn get_buf_reader<T: AsRef<Path>>(
    path: Option<T>,
) -> io::Result<io::BufReader<Box<dyn io::Read + 'static>>> {
    Ok(io::BufReader::new(get_reader(path)?))
}

pub fn get_buf_writer<T: AsRef<Path>>(
    path: Option<T>,
) -> io::Result<io::BufWriter<Box<dyn io::Write + 'static>>> {
    Ok(io::BufWriter::new(get_writer(path)?))
}

fn get_reader<T: AsRef<Path>>(
    path: Option<T>,
) -> io::Result<Box<dyn io::Read + 'static>> {
    Ok(match to_stdio(path) {
        None => Box::new(io::stdin()),
        Some(path) => Box::new(File::open(path)?),
    })
}

fn get_writer<T: AsRef<Path>>(
    path: Option<T>,
) -> io::Result<Box<dyn io::Write + 'static>> {
    Ok(match to_stdio(path) {
        None => Box::new(io::stdout()),
        Some(path) => Box::new(File::create(path)?),
    })
}

fn to_stdio<T: AsRef<Path>>(path: Option<T>) -> Option<PathBuf> {
    let path = path?;
    if path.as_ref().to_string_lossy() == "-" {
        None
    } else {
        Some(path.as_ref().to_path_buf())
    }
}
