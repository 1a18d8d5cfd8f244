//! API Facade for the application.
//!
//! This module exposes high-level functions that glue together context creation
//! and command execution.

use std::path::Path;

use crate::adapters::{HttpCommentPoster, ProcessCommandRunner, ProcessEnv, load_config};
use crate::app::{AppContext, commands::exec};

pub use crate::app::commands::exec::ExecOutcome;
pub use crate::domain::{AppError, ExecOptions};

/// Run `options.args` in the current directory and comment the result.
///
/// Missing org, repo, commit, PR number, and token are inferred from the
/// process environment. With `dry_run` the comment is rendered but not posted.
pub fn exec(options: ExecOptions, dry_run: bool) -> Result<ExecOutcome, AppError> {
    let cwd = std::env::current_dir()?;
    exec_in(&cwd, options, dry_run)
}

/// Like [`exec`], resolving the config file against `cwd`.
pub fn exec_in(cwd: &Path, options: ExecOptions, dry_run: bool) -> Result<ExecOutcome, AppError> {
    let config = load_config(options.config_path.as_deref(), cwd)?;
    let ctx =
        AppContext::new(ProcessEnv, ProcessCommandRunner::new(), HttpCommentPoster::new(&config.github)?);

    exec::execute(&ctx, &config, options, dry_run)
}
