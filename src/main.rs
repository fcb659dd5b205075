use std::process::ExitCode;

use clap::Parser;

use stalesweep::cli::Cli;
use stalesweep::{logging, output, Sweeper};

fn main() -> ExitCode {
    let cli = Cli::parse();
    let config = cli.into_config();

    logging::init_console(config.verbose);
    output::print_banner();

    match Sweeper::new().run(&config) {
        Ok(report) => {
            output::print_report(&report, config.verbose);
            ExitCode::SUCCESS
        }
        Err(e) => {
            output::print_error(&e.to_string());
            ExitCode::FAILURE
        }
    }
}
