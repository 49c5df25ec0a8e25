use std::process::ExitCode;

/// Process exit status of the CLI.
///
/// - `Success` (0): nothing to report, or warnings only
/// - `Failure` (1): a command found errors (diagnostics, parse errors, existing config)
/// - `Error` (2): a command could not run (bad config, unreadable input)
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ExitStatus {
    Success,
    Failure,
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
