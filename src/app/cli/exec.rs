//! Exec command implementation.

use std::collections::HashMap;
use std::path::PathBuf;

use clap::Args;

use crate::domain::{AppError, ExecOptions};

#[derive(Args)]
pub struct ExecArgs {
    /// Repository owner (default: inferred from CI)
    #[arg(short = 'o', long)]
    org: Option<String>,
    /// Repository name (default: inferred from CI)
    #[arg(short = 'r', long)]
    repo: Option<String>,
    /// GitHub token (default: GITHUB_TOKEN or GITHUB_ACCESS_TOKEN)
    #[arg(short = 'k', long)]
    token: Option<String>,
    /// Commit to comment on
    #[arg(short = 's', long)]
    sha1: Option<String>,
    /// Pull request number to comment on
    #[arg(short = 'p', long)]
    pr: Option<u64>,
    /// Inline comment template (overrides --template-key)
    #[arg(short = 't', long)]
    template: Option<String>,
    /// Template key in the config file
    #[arg(short = 'u', long, default_value = crate::domain::DEFAULT_TEMPLATE_KEY)]
    template_key: String,
    /// Config file path (default: .prexec.toml or prexec.toml)
    #[arg(long)]
    config: Option<PathBuf>,
    /// Template variable as NAME:VALUE (repeatable)
    #[arg(long = "var", value_name = "NAME:VALUE")]
    vars: Vec<String>,
    /// Print the comment instead of posting it
    #[arg(long)]
    dry_run: bool,
    /// Command to run
    #[arg(last = true)]
    command: Vec<String>,
}

pub fn run_exec(args: ExecArgs) -> Result<i32, AppError> {
    let dry_run = args.dry_run;
    let options = into_options(args)?;

    let outcome = crate::app::api::exec(options, dry_run)?;

    if dry_run && let Some(comment) = &outcome.comment {
        println!("{}", comment);
    }

    Ok(outcome.exit_code)
}

fn into_options(args: ExecArgs) -> Result<ExecOptions, AppError> {
    let vars = args.vars.iter().map(|raw| parse_var(raw)).collect::<Result<HashMap<_, _>, _>>()?;

    Ok(ExecOptions {
        pr_number: args.pr,
        org: args.org.unwrap_or_default(),
        repo: args.repo.unwrap_or_default(),
        token: args.token.unwrap_or_default(),
        sha1: args.sha1.unwrap_or_default(),
        template: args.template.unwrap_or_default(),
        template_key: args.template_key,
        config_path: args.config,
        args: args.command,
        vars,
    })
}

/// Split `NAME:VALUE` at the first colon. The value may be empty or hold colons.
fn parse_var(raw: &str) -> Result<(String, String), AppError> {
    match raw.split_once(':') {
        Some((name, value)) if !name.is_empty() => Ok((name.to_string(), value.to_string())),
        _ => Err(AppError::InvalidVar(raw.to_string())),
    }
}
