use std::io::Write;

use colored::Colorize;

use crate::cleaner::{RemovalCandidate, RunReport, RunStatus};
use crate::utils;

/// Console lines never fail the run; a closed or full stdout is ignored.
macro_rules! say {
    ($($arg:tt)*) => {{
        let _ = writeln!(std::io::stdout().lock(), $($arg)*);
    }};
}

pub fn print_banner() {
    say!(
        "{}",
        concat!("stalesweep v", env!("CARGO_PKG_VERSION"))
            .bold()
            .cyan()
    );
    say!();
}

pub fn print_scan_entry(candidate: &RemovalCandidate) {
    let entry = &candidate.entry;
    let size = if entry.is_dir() {
        "[dir]".to_string()
    } else {
        utils::format_size(entry.size_bytes)
    };
    say!(
        "  {}  {}  {}",
        utils::display_path(&entry.path).dimmed(),
        size.yellow(),
        format!("({})", candidate.category).dimmed()
    );
}

pub fn print_summary_row(label: &str, value: &str) {
    say!("  {:<20} {}", label, value.green());
}

pub fn print_warning(msg: &str) {
    say!("{} {}", "Warning:".red().bold(), msg.red());
}

pub fn print_info(msg: &str) {
    say!("{} {}", "Info:".cyan().bold(), msg);
}

pub fn print_error(msg: &str) {
    let _ = writeln!(
        std::io::stderr().lock(),
        "{} {}",
        "Error:".red().bold(),
        msg.red()
    );
}

pub fn print_dry_run_footer() {
    say!(
        "{}",
        "This was a dry run. Run again without --dry-run to delete."
            .yellow()
            .bold()
    );
}

pub fn print_delete_error(path: &str, err: &str) {
    say!("  {} {} - {}", "Failed".red().bold(), path.dimmed(), err.red());
}

fn items(n: usize) -> String {
    format!("{n} {}", if n == 1 { "item" } else { "items" })
}

/// Human-readable account of a finished run.
pub fn print_report(report: &RunReport, verbose: bool) {
    let summary = &report.summary;
    match report.status {
        RunStatus::ScanAborted => {
            print_warning("Scan aborted; nothing was removed.");
        }
        RunStatus::NothingFound => {
            print_info("No stale files found.");
        }
        RunStatus::DryRun => {
            say!(
                "{}",
                format!(
                    "Would remove {}, freeing {}",
                    items(summary.found),
                    utils::format_size(summary.bytes_found)
                )
                .bold()
            );
            if verbose {
                for candidate in &report.pending {
                    print_scan_entry(candidate);
                }
            }
            print_dry_run_footer();
        }
        RunStatus::Cancelled => {
            print_info(&format!(
                "Cancelled. {} left in place.",
                items(summary.found)
            ));
        }
        RunStatus::Completed => {
            for failure in &report.failures {
                print_delete_error(
                    &utils::display_path(&failure.candidate.entry.path),
                    &failure.message,
                );
            }
            print_summary_row("Found:", &summary.found.to_string());
            print_summary_row("Removed:", &summary.removed.to_string());
            print_summary_row("Failed:", &summary.failed.to_string());
            print_summary_row("Freed:", &utils::format_size(summary.bytes_freed));
            let done = format!(
                "Done in {:.2}s: {} files, {} folders removed.",
                summary.elapsed.as_secs_f64(),
                summary.files_removed,
                summary.dirs_removed
            );
            if summary.failed == 0 {
                say!("{}", done.green().bold());
            } else {
                say!("{}", done.yellow().bold());
            }
        }
    }
}
