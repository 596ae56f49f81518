mod cli;
mod logging;

use std::process;

use anyhow::{Context, Result};
use clap::Parser;

use chronos_calendar::{weekday_span, Date};

use crate::cli::Cli;

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = run(&cli) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<()> {
    let start: Date = cli
        .start
        .parse()
        .with_context(|| format!("invalid start date {:?}", cli.start))?;
    let end: Date = cli
        .end
        .parse()
        .with_context(|| format!("invalid end date {:?}", cli.end))?;

    let count = weekday_span(start, end);
    println!("Between {start} and {end} there are {count} weekdays");
    Ok(())
}
