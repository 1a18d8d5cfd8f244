//! Command runner backed by `std::process::Command`.

use std::io::{self, Read, Write};
use std::process::{Command, Stdio};
use std::sync::{Mutex, PoisonError};
use std::thread;

use tracing::{debug, warn};

use crate::domain::AppError;
use crate::ports::{CommandOutput, CommandRunner};

const CHUNK_SIZE: usize = 8 * 1024;

/// Runs the user command as a child process.
///
/// Stdout and stderr are read on their own threads while the child runs.
/// Each chunk is echoed to this process's stdout or stderr as it arrives, so
/// long-running commands still stream into CI logs, and is captured for the
/// comment. `combined_output` keeps the chunks in arrival order.
#[derive(Debug, Clone)]
pub struct ProcessCommandRunner {
    echo: bool,
}

impl ProcessCommandRunner {
    pub fn new() -> Self {
        Self { echo: true }
    }

    /// Capture only, without echoing.
    #[cfg(test)]
    pub fn quiet() -> Self {
        Self { echo: false }
    }
}

impl Default for ProcessCommandRunner {
    fn default() -> Self {
        Self::new()
    }
}

impl CommandRunner for ProcessCommandRunner {
    fn run(&self, args: &[String]) -> Result<CommandOutput, AppError> {
        let Some((program, rest)) = args.split_first() else {
            return Err(AppError::MissingField("command"));
        };

        let mut child = Command::new(program)
            .args(rest)
            .stdin(Stdio::inherit())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|source| AppError::CommandSpawn { command: args.join(" "), source })?;

        let child_stdout =
            child.stdout.take().ok_or_else(|| io::Error::other("child stdout was not piped"))?;
        let child_stderr =
            child.stderr.take().ok_or_else(|| io::Error::other("child stderr was not piped"))?;

        let combined = Mutex::new(Vec::new());
        let echo = self.echo;
        let (stdout, stderr) = thread::scope(|scope| {
            let out = scope.spawn(|| pump(child_stdout, echo.then(io::stdout), &combined));
            let err = scope.spawn(|| pump(child_stderr, echo.then(io::stderr), &combined));
            (join_reader(out), join_reader(err))
        });

        let status = child.wait()?;
        let stdout = stdout?;
        let stderr = stderr?;
        let combined = combined.into_inner().unwrap_or_else(PoisonError::into_inner);

        let exit_code = status.code().unwrap_or(1);
        debug!(program = %program, exit_code, "command finished");

        Ok(CommandOutput {
            exit_code,
            stdout: String::from_utf8_lossy(&stdout).into_owned(),
            stderr: String::from_utf8_lossy(&stderr).into_owned(),
            combined_output: String::from_utf8_lossy(&combined).into_owned(),
        })
    }
}

/// Copy `reader` to the end, echoing each chunk and appending it to `combined`.
///
/// An echo failure (a closed stdout, for example) stops echoing for this
/// stream but capture continues; only a read failure is an error.
fn pump<R: Read, W: Write>(
    mut reader: R,
    mut echo: Option<W>,
    combined: &Mutex<Vec<u8>>,
) -> io::Result<Vec<u8>> {
    let mut captured = Vec::new();
    let mut buf = [0u8; CHUNK_SIZE];
    loop {
        let read = match reader.read(&mut buf) {
            Ok(0) => break,
            Ok(read) => read,
            Err(err) if err.kind() == io::ErrorKind::Interrupted => continue,
            Err(err) => return Err(err),
        };
        let chunk = &buf[..read];

        if let Some(writer) = echo.as_mut()
            && let Err(err) = writer.write_all(chunk).and_then(|()| writer.flush())
        {
            warn!(error = %err, "failed to echo command output, capturing only");
            echo = None;
        }

        captured.extend_from_slice(chunk);
        combined.lock().unwrap_or_else(PoisonError::into_inner).extend_from_slice(chunk);
    }
    Ok(captured)
}

fn join_reader(handle: thread::ScopedJoinHandle<'_, io::Result<Vec<u8>>>) -> io::Result<Vec<u8>> {
    handle.join().unwrap_or_else(|_| Err(io::Error::other("command output reader panicked")))
}
