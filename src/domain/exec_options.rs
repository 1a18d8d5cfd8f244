use std::collections::HashMap;
use std::fmt;
use std::path::PathBuf;

/// Template key used when the caller does not pick one.
pub const DEFAULT_TEMPLATE_KEY: &str = "default";

/// Everything needed to run the target command and report on it.
///
/// Created once per invocation, filled in by completion, then read-only.
/// An empty string means "unset" for the string fields; `pr_number` uses
/// `None` so that an explicit PR #0 stays distinguishable from "absent".
#[derive(Clone, Default, PartialEq, Eq)]
pub struct ExecOptions {
    pub pr_number: Option<u64>,
    pub org: String,
    pub repo: String,
    pub token: String,
    pub sha1: String,
    /// Inline template source. Empty means "look up `template_key` in config".
    pub template: String,
    pub template_key: String,
    pub config_path: Option<PathBuf>,
    /// Command to execute, program first.
    pub args: Vec<String>,
    pub vars: HashMap<String, String>,
}

impl fmt::Debug for ExecOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ExecOptions")
            .field("pr_number", &self.pr_number)
            .field("org", &self.org)
            .field("repo", &self.repo)
            .field("token", &if self.token.is_empty() { "" } else { "[REDACTED]" })
            .field("sha1", &self.sha1)
            .field("template", &self.template)
            .field("template_key", &self.template_key)
            .field("config_path", &self.config_path)
            .field("args", &self.args)
            .field("vars", &self.vars)
            .finish()
    }
}

/// Where a comment about the command result is posted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommentTarget {
    PullRequest(u64),
    Commit(String),
}

impl ExecOptions {
    /// Whether a commit or pull request has already been picked.
    pub fn has_target(&self) -> bool {
        !self.sha1.is_empty() || self.pr_number.is_some()
    }

    /// The comment target, preferring the pull request when both are set.
    pub fn target(&self) -> Option<CommentTarget> {
        match self.pr_number {
            Some(number) => Some(CommentTarget::PullRequest(number)),
            None if !self.sha1.is_empty() => Some(CommentTarget::Commit(self.sha1.clone())),
            None => None,
        }
    }

    /// The command joined by spaces, for display and templates.
    pub fn joined_command(&self) -> String {
        self.args.join(" ")
    }
}

impl fmt::Display for CommentTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CommentTarget::PullRequest(number) => write!(f, "pull request #{}", number),
            CommentTarget::Commit(sha) => write!(f, "commit {}", sha),
        }
    }
}
