//! Fill unset exec options from the CI environment.

use tracing::{debug, info};

use crate::domain::{AppError, CiProvider, ExecOptions};
use crate::ports::EnvLookup;

/// Variables consulted, in order, when no token was given.
pub const TOKEN_VARS: [&str; 2] = ["GITHUB_TOKEN", "GITHUB_ACCESS_TOKEN"];

/// Populate org, repo, commit and pull request from the active CI provider.
///
/// Values already present on `opts` are never overwritten. Outside a
/// recognized CI provider this is a no-op, and so is a CircleCI pull request
/// value with no `/` in it: neither the PR number nor the commit is set.
///
/// Mutations are not rolled back: when the provider's pull request value
/// fails to parse, org and repo may already have been filled in. Callers
/// must not continue with `opts` after an error.
pub fn complement_exec(
    opts: &mut ExecOptions,
    env: &(impl EnvLookup + ?Sized),
) -> Result<(), AppError> {
    let Some(provider) = CiProvider::detect(env) else {
        debug!("no CI provider detected, skipping completion");
        return Ok(());
    };
    info!(%provider, "completing exec options from CI environment");

    if opts.org.is_empty() {
        opts.org = env.var(provider.owner_var());
    }
    if opts.repo.is_empty() {
        opts.repo = env.var(provider.repo_var());
    }

    if opts.has_target() {
        return Ok(());
    }

    let pull_request = env.var(provider.pull_request_var());
    if pull_request.is_empty() {
        opts.sha1 = env.var(provider.sha_var());
        debug!(sha1 = %opts.sha1, "resolved commit from CI environment");
        return Ok(());
    }

    let Some(digits) = provider.pull_request_digits(&pull_request) else {
        debug!(
            variable = provider.pull_request_var(),
            value = %pull_request,
            "pull request value has no number segment, leaving target unset"
        );
        return Ok(());
    };
    let number = digits.parse::<u64>().map_err(|source| AppError::InvalidPrNumber {
        variable: provider.pull_request_var(),
        value: pull_request.clone(),
        source,
    })?;
    opts.pr_number = Some(number);
    debug!(pr_number = number, "resolved pull request from CI environment");

    Ok(())
}

/// Fall back to the token variables when no token was given.
pub fn complement_token(opts: &mut ExecOptions, env: &(impl EnvLookup + ?Sized)) {
    if !opts.token.is_empty() {
        return;
    }
    if let Some(token) = TOKEN_VARS.iter().map(|name| env.var(name)).find(|v| !v.is_empty()) {
        opts.token = token;
    }
}
