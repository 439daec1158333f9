use std::process::ExitCode;

/// Exit status for CLI commands.
///
/// - `Success` (0): Command completed; generated output is written or current
/// - `Failure` (1): `check` found the generated output missing or stale
/// - `Error` (2): Command failed (malformed source plural, missing source locale, I/O, config)
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ExitStatus {
    /// Command completed successfully.
    Success,
    /// Command completed but the generated output is out of date.
    Failure,
    /// Command failed; nothing was written.
    Error,
}

impl From<ExitStatus> for ExitCode {
    fn from(status: ExitStatus) -> Self {
        match status {
            ExitStatus::Success => ExitCode::from(0),
            ExitStatus::Failure => ExitCode::from(1),
            ExitStatus::Error => ExitCode::from(2),
        }
    }
}
