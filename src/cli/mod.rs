use anyhow::Result;

use crate::core::CompileError;

pub mod args;
pub mod commands;
mod exit_code;
mod exit_status;
mod report;
mod run;

pub use args::{Arguments, Command};
pub use exit_status::ExitStatus;

use exit_code::exit_status_from_result;

/// Run the parsed command and print its report.
///
/// Compile errors are reported with their location and mapped to
/// [`ExitStatus::Error`]; other failures are returned to the caller.
pub fn run_cli(args: Arguments) -> Result<ExitStatus> {
    let verbose = args.verbose();

    let Some(args) = args.with_command_or_help() else {
        return Ok(ExitStatus::Success);
    };

    match run::run(args) {
        Ok(result) => {
            report::print(&result, verbose);
            Ok(exit_status_from_result(&result))
        }
        Err(err) => match err.downcast_ref::<CompileError>() {
            Some(compile_error) => {
                report::print_compile_error(compile_error);
                Ok(ExitStatus::Error)
            }
            None => Err(err),
        },
    }
}
