mod cli;

fn main() -> ExitCode {
    utils::init_logging();
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("histogram2d: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<(), Box<dyn Error>> {
    let invocation = std::env::args().collect::<Vec<_>>();
    let config = Cli::parse().into_config()?;

    let stdout = std::io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    pipeline::run_2d(&config, &invocation, &mut out)?;
    out.flush()?;
    Ok(())
}

// ----- Imports -----------------------------------------------------------------------------------------
use std::{
    error::Error,
    io::{BufWriter, Write},
    process::ExitCode,
};
use clap::Parser;
use freehist::{pipeline, utils};
use cli::Cli;
