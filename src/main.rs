use std::io;

use clap::{Parser, ValueEnum};
use nextday::{advance, Date, DateError, DateRanges, Range, Rollover};
use tracing::{debug, info};

mod logging;

#[derive(thiserror::Error, Debug)]
pub enum NextDayCliError {
    #[error("{0}")]
    LibraryError(#[from] DateError),

    #[error("Could not read date from stdin: {0}")]
    Stdin(#[from] io::Error),
}

impl NextDayCliError {
    fn exit_code(&self) -> i32 {
        match self {
            NextDayCliError::LibraryError(e) => e.exit_code(),
            NextDayCliError::Stdin(_) => 1,
        }
    }

    fn diagnostics(&self) -> Vec<String> {
        match self {
            NextDayCliError::LibraryError(e) => e.diagnostics(),
            other => vec![other.to_string()],
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum, Debug)]
enum RolloverArg {
    /// Follow the calendar
    Strict,
    /// Any December date rolls into next January; other month ends wrap within the month
    Legacy,
}

impl From<RolloverArg> for Rollover {
    fn from(arg: RolloverArg) -> Self {
        match arg {
            RolloverArg::Strict => Rollover::Strict,
            RolloverArg::Legacy => Rollover::Legacy,
        }
    }
}

/// Validates a date and prints the day after it as `YYYY-MM-DD`.
///
/// The date is given as DAY MONTH YEAR arguments, or, if they are omitted, as three
/// whitespace-separated integers on stdin.
///
/// Exits with 1 if a field is out of range, and 2 if the day does not exist in its month.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about)]
struct Cli {
    /// Day of the month
    #[arg(requires = "month", allow_negative_numbers = true)]
    day: Option<i32>,

    /// Month of the year
    #[arg(requires = "year", allow_negative_numbers = true)]
    month: Option<i32>,

    /// Year
    #[arg(allow_negative_numbers = true)]
    year: Option<i32>,

    /// Smallest allowed day
    #[arg(long, default_value_t = DateRanges::DAY.min(), allow_negative_numbers = true)]
    min_day: i32,

    /// Largest allowed day
    #[arg(long, default_value_t = DateRanges::DAY.max(), allow_negative_numbers = true)]
    max_day: i32,

    /// Smallest allowed month
    #[arg(long, default_value_t = DateRanges::MONTH.min(), allow_negative_numbers = true)]
    min_month: i32,

    /// Largest allowed month
    #[arg(long, default_value_t = DateRanges::MONTH.max(), allow_negative_numbers = true)]
    max_month: i32,

    /// Smallest allowed year
    #[arg(long, default_value_t = DateRanges::YEAR.min(), allow_negative_numbers = true)]
    min_year: i32,

    /// Largest allowed year
    #[arg(long, default_value_t = DateRanges::YEAR.max(), allow_negative_numbers = true)]
    max_year: i32,

    /// How months and years roll over
    #[arg(long, value_enum, default_value_t = RolloverArg::Strict)]
    rollover: RolloverArg,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace). Logs go to stderr.
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    fn ranges(&self) -> Result<DateRanges, DateError> {
        Ok(DateRanges {
            day: Range::new(self.min_day, self.max_day)?,
            month: Range::new(self.min_month, self.max_month)?,
            year: Range::new(self.min_year, self.max_year)?,
        })
    }

    fn date(&self) -> Result<Date, NextDayCliError> {
        if let (Some(day), Some(month), Some(year)) = (self.day, self.month, self.year) {
            return Ok(Date::new(day, month, year));
        }
        debug!("reading date from stdin");
        let input = io::read_to_string(io::stdin())?;
        Ok(input.parse::<Date>()?)
    }
}

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            // help and version go to stdout and are not failures
            let exit_code = if e.use_stderr() { 1 } else { 0 };
            let _ = e.print();
            std::process::exit(exit_code);
        }
    };

    logging::init(cli.verbose);

    match do_work(&cli) {
        Ok(next) => {
            println!("{next}");
        }
        Err(e) => {
            for line in e.diagnostics() {
                eprintln!("{line}");
            }
            std::process::exit(e.exit_code());
        }
    }
}

fn do_work(cli: &Cli) -> Result<Date, NextDayCliError> {
    let ranges = cli.ranges()?;
    let date = cli.date()?;
    info!(%date, ?ranges, rollover = ?cli.rollover, "computing next day");
    Ok(advance(&date, &ranges, cli.rollover.into())?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::*;

    fn run(args: &[&str]) -> Result<Date, NextDayCliError> {
        let cli = Cli::try_parse_from(["nextday"].iter().chain(args)).unwrap();
        do_work(&cli)
    }

    #[rstest]
    #[case(&["31", "12", "2023"], Date::new(1, 1, 2024))]
    #[case(&["15", "12", "2023"], Date::new(16, 12, 2023))]
    #[case(&["15", "12", "2023", "--rollover", "legacy"], Date::new(16, 1, 2024))]
    #[case(&["1", "1", "1000", "--min-year", "1000"], Date::new(2, 1, 1000))]
    fn test_do_work_ok(#[case] args: &[&str], #[case] expected: Date) {
        assert_eq!(expected, run(args).unwrap());
    }

    #[rstest]
    #[case(&["32", "1", "2023"], 1)]
    #[case(&["-1", "1", "2023"], 1)]
    #[case(&["30", "2", "2023"], 2)]
    #[case(&["1", "1", "2023", "--min-day", "5", "--max-day", "4"], 1)]
    #[case(&["31", "12", "2147483647", "--max-year", "2147483647"], 1)]
    fn test_do_work_exit_code(#[case] args: &[&str], #[case] expected: i32) {
        assert_eq!(expected, run(args).unwrap_err().exit_code());
    }

    #[test]
    fn test_diagnostics_one_line_per_field() {
        let err = run(&["0", "13", "1000"]).unwrap_err();
        assert_eq!(
            vec![
                "Day out of range [1,31]",
                "Month out of range [1,12]",
                "Year out of range [1538,2300]",
            ],
            err.diagnostics()
        );
    }

    #[rstest]
    #[case(&["15"])]
    #[case(&["15", "12"])]
    #[case(&["15", "12", "2023", "1"])]
    #[case(&["15", "12", "2023", "--rollover", "sideways"])]
    fn test_cli_rejects_bad_usage(#[case] args: &[&str]) {
        assert!(Cli::try_parse_from(["nextday"].iter().chain(args)).is_err());
    }

    #[test]
    fn verify_cli() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
