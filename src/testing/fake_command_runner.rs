use std::sync::Mutex;

use crate::domain::AppError;
use crate::ports::{CommandOutput, CommandRunner};

/// Returns a canned output and records every invocation.
pub struct FakeCommandRunner {
    pub output: CommandOutput,
    pub invocations: Mutex<Vec<Vec<String>>>,
}

impl FakeCommandRunner {
    pub fn new(exit_code: i32, stdout: &str, stderr: &str) -> Self {
        Self {
            output: CommandOutput {
                exit_code,
                stdout: stdout.to_string(),
                stderr: stderr.to_string(),
                combined_output: format!("{}{}", stdout, stderr),
            },
            invocations: Mutex::new(Vec::new()),
        }
    }

    pub fn invocations(&self) -> Vec<Vec<String>> {
        self.invocations.lock().unwrap().clone()
    }
}

impl CommandRunner for FakeCommandRunner {
    fn run(&self, args: &[String]) -> Result<CommandOutput, AppError> {
        self.invocations.lock().unwrap().push(args.to_vec());
        Ok(self.output.clone())
    }
}
