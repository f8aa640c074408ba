//! Calendar CLI application.
//!
//! # Usage
//! ```ignore
//! monthcal              // Current month
//! monthcal 2 2024       // February 2024
//! monthcal 2 2024 su    // February 2024, weeks start on Sunday
//! ```

use std::io::Write;

use monthcal::args::{Args, get_today_date};
use monthcal::error::CalError;
use monthcal::formatter::{get_system_locale, print_month};
use monthcal::logging;
use monthcal::types::CalendarRequest;

fn main() {
    let args = Args::parse();
    logging::init(args.verbose);

    match run(&args) {
        Ok(()) => {}
        Err(CalError::Validation(e)) => {
            // stdout may already be closed
            let _ = writeln!(std::io::stdout(), "{}", e);
            std::process::exit(1);
        }
        Err(e) => {
            eprintln!("monthcal: {}", e);
            std::process::exit(1);
        }
    }
}

fn run(args: &Args) -> Result<(), CalError> {
    let request = CalendarRequest::new(args, get_today_date())?;
    let stdout = std::io::stdout();
    print_month(&mut stdout.lock(), &request, get_system_locale())?;
    Ok(())
}
