//! csrandom - print a `System.Random` compatible sequence for a seed
//!
//! ```text
//! csrandom <seed> [--count N] [--mode int|double|bytes|ceiling MAX|range MIN MAX]
//! ```
//!
//! Used to generate replay fixtures. Values go to stdout one per line
//! (bytes as a single lowercase hex line); errors go to stderr.

use csrandom_core_rs::{CsRandom, RandomError};
use std::io::{self, Write};
use std::process::ExitCode;
use thiserror::Error;

const USAGE: &str =
    "usage: csrandom <seed> [--count N] [--mode int|double|bytes|ceiling MAX|range MIN MAX]";

#[derive(Debug, Error)]
enum CliError {
    #[error("{0}")]
    Usage(String),

    #[error("Invalid integer '{0}'")]
    BadInt(String),

    #[error(transparent)]
    Random(#[from] RandomError),

    #[error("Write failed: {0}")]
    Io(#[from] io::Error),
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum Mode {
    Int,
    Double,
    Bytes,
    Ceiling(i32),
    Range(i32, i32),
}

#[derive(Debug, PartialEq)]
struct Args {
    seed: i32,
    count: usize,
    mode: Mode,
}

fn parse_int<T: std::str::FromStr>(raw: &str) -> Result<T, CliError> {
    raw.parse().map_err(|_| CliError::BadInt(raw.to_string()))
}

fn next_arg<'a>(
    iter: &mut impl Iterator<Item = &'a String>,
    what: &str,
) -> Result<&'a String, CliError> {
    iter.next()
        .ok_or_else(|| CliError::Usage(format!("missing {}\n{}", what, USAGE)))
}

fn parse_args(raw: &[String]) -> Result<Args, CliError> {
    let mut iter = raw.iter();
    let seed = parse_int(next_arg(&mut iter, "seed")?)?;
    let mut count = 10;
    let mut mode = Mode::Int;

    while let Some(flag) = iter.next() {
        match flag.as_str() {
            "--count" => count = parse_int(next_arg(&mut iter, "count")?)?,
            "--mode" => {
                mode = match next_arg(&mut iter, "mode")?.as_str() {
                    "int" => Mode::Int,
                    "double" => Mode::Double,
                    "bytes" => Mode::Bytes,
                    "ceiling" => Mode::Ceiling(parse_int(next_arg(&mut iter, "MAX")?)?),
                    "range" => {
                        let min = parse_int(next_arg(&mut iter, "MIN")?)?;
                        let max = parse_int(next_arg(&mut iter, "MAX")?)?;
                        Mode::Range(min, max)
                    }
                    other => {
                        return Err(CliError::Usage(format!("unknown mode '{}'\n{}", other, USAGE)))
                    }
                }
            }
            other => return Err(CliError::Usage(format!("unknown argument '{}'\n{}", other, USAGE))),
        }
    }

    Ok(Args { seed, count, mode })
}

fn run(args: &Args, out: &mut impl Write) -> Result<(), CliError> {
    let mut rng = CsRandom::new(args.seed);

    if args.mode == Mode::Bytes {
        let mut buf = vec![0u8; args.count];
        rng.next_bytes(Some(&mut buf))?;
        let hex: String = buf.iter().map(|b| format!("{:02x}", b)).collect();
        writeln!(out, "{}", hex)?;
        return Ok(());
    }

    for _ in 0..args.count {
        match args.mode {
            Mode::Int => writeln!(out, "{}", rng.next_int())?,
            Mode::Double => writeln!(out, "{:?}", rng.next_double())?,
            Mode::Ceiling(max) => writeln!(out, "{}", rng.next_ceiling(max)?)?,
            Mode::Range(min, max) => writeln!(out, "{}", rng.next_range(min, max)?)?,
            Mode::Bytes => unreachable!("handled above"),
        }
    }
    Ok(())
}

fn main() -> ExitCode {
    let raw: Vec<String> = std::env::args().skip(1).collect();
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match parse_args(&raw).and_then(|args| run(&args, &mut out)) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("csrandom: {}", e);
            ExitCode::FAILURE
        }
    }
}
