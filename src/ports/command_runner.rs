//! Command runner port definition.

use crate::domain::AppError;

/// Captured result of the user command.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandOutput {
    /// Exit status. A child killed by a signal reports 1.
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
    /// Stdout followed by stderr.
    pub combined_output: String,
}

impl CommandOutput {
    pub fn success(&self) -> bool {
        self.exit_code == 0
    }
}

/// Port for running the user command.
pub trait CommandRunner {
    /// Run `args[0]` with the remaining arguments and wait for it to finish.
    fn run(&self, args: &[String]) -> Result<CommandOutput, AppError>;
}
