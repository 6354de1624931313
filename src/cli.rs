// src/cli.rs
use std::io::{self, Write};
use std::path::PathBuf;

use crate::config::Params;
use crate::error::{Error, Result};
use crate::progress::Progress;
use crate::runner::{self, RunSummary};

pub const HELP: &str = include_str!("cli_help.txt");

#[derive(Debug, PartialEq, Eq)]
pub enum Command {
    Run(Params),
    Help,
}

/// Forwards progress to the logger.
struct LogProgress;

impl Progress for LogProgress {
    fn begin(&mut self, total: usize) { log::info!("Run: {total} stages"); }
    fn log(&mut self, msg: &str) { log::info!("{msg}"); }
    fn item_done(&mut self, stage: usize) { log::debug!("Run: stage {stage} done"); }
    fn finish(&mut self) { log::info!("Run: done"); }
}

pub fn run(params: Params) -> Result<RunSummary> {
    run_to(params, io::stdout().lock())
}

/// Run the pipeline and write the single result line to `out`.
pub fn run_to<W: Write>(params: Params, mut out: W) -> Result<RunSummary> {
    let summary = runner::run(&params, Some(&mut LogProgress))?;
    writeln!(out, "{}", summary.message())?;
    out.flush()?;
    Ok(summary)
}

/// Parse arguments (program name already skipped). No arguments → defaults.
pub fn parse_args<I>(args: I) -> Result<Command>
where
    I: IntoIterator<Item = String>,
{
    let mut params = Params::default();
    let mut args = args.into_iter();

    while let Some(a) = args.next() {
        match a.as_str() {
            "-o" | "--out" => {
                let v = args.next().ok_or_else(|| missing(&a))?;
                params.out = PathBuf::from(v);
            }
            "-u" | "--url" => {
                params.source_url = args.next().ok_or_else(|| missing(&a))?;
            }
            "-h" | "--help" => return Ok(Command::Help),
            _ => return Err(Error::Args(format!("Unknown arg: {}", a))),
        }
    }

    Ok(Command::Run(params))
}

fn missing(flag: &str) -> Error {
    Error::Args(format!("Missing value for {}", flag))
}
