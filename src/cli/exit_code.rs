use super::commands::{CommandResult, CommandSummary, OutputStatus};
use super::exit_status::ExitStatus;

/// Warnings never fail a run; only a stale or missing output under `check` does.
pub fn exit_status_from_result(result: &CommandResult) -> ExitStatus {
    match &result.summary {
        CommandSummary::Check(summary) if summary.status != OutputStatus::UpToDate => {
            ExitStatus::Failure
        }
        _ => ExitStatus::Success,
    }
}
