use crate::domain::{AppError, ExecOptions};

/// Check that `opts` carries the minimum needed to run and report.
///
/// Rules are checked in a fixed order and the first failure is returned.
pub fn validate_exec(opts: &ExecOptions) -> Result<(), AppError> {
    if opts.org.is_empty() {
        return Err(AppError::MissingField("org"));
    }
    if opts.repo.is_empty() {
        return Err(AppError::MissingField("repo"));
    }
    if opts.token.is_empty() {
        return Err(AppError::MissingField("token"));
    }
    if opts.template_key.is_empty() {
        return Err(AppError::MissingField("template-key"));
    }
    if !opts.has_target() {
        return Err(AppError::MissingField("sha1-or-pr"));
    }
    if opts.args.is_empty() {
        return Err(AppError::MissingField("command"));
    }
    Ok(())
}
