//! prexec: run a command against a pull request or commit and report the result as a GitHub comment.

pub mod adapters;
pub mod app;
pub mod domain;
pub mod ports;

#[cfg(test)]
pub(crate) mod testing;

pub use app::api::{exec, exec_in};
pub use app::commands::exec::ExecOutcome;
pub use domain::{
    AppError, CiProvider, CommentTarget, ExecConfig, ExecOptions, complement_exec,
    complement_token, validate_exec,
};
pub use ports::EnvLookup;
