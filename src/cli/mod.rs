//! Command-line interface layer.

use anyhow::Result;

mod args;
mod exit_status;
mod report;
mod run;

pub use args::{Arguments, Command, ExtractCommand};
pub use exit_status::ExitStatus;
pub use report::{print as print_report, print_to as print_report_to};

pub fn run_cli(args: Arguments) -> Result<ExitStatus> {
    let Some(args) = args.with_command_or_help() else {
        return Ok(ExitStatus::Success);
    };

    run::run(args)?;
    Ok(ExitStatus::Success)
}
