use clap::Parser;

/// Chronos weekday span counter.
#[derive(Parser)]
#[command(
    name = "chronos",
    version,
    about = "Count the weekdays (Mon-Fri) in a closed date interval"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Start date, "YEAR-MONTH-DAY".
    #[arg(default_value = "1776-7-4")]
    pub start: String,

    /// End date, "YEAR-MONTH-DAY" (inclusive).
    #[arg(default_value = "1845-12-29")]
    pub end: String,
}
