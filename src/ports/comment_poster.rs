//! Comment poster port definition.

use crate::domain::{AppError, CommentTarget};

/// A rendered comment ready to be published.
#[derive(Clone, PartialEq, Eq)]
pub struct CommentRequest {
    pub org: String,
    pub repo: String,
    pub token: String,
    pub target: CommentTarget,
    pub body: String,
}

impl std::fmt::Debug for CommentRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CommentRequest")
            .field("org", &self.org)
            .field("repo", &self.repo)
            .field("token", &"[REDACTED]")
            .field("target", &self.target)
            .field("body", &self.body)
            .finish()
    }
}

/// Port for publishing comments on a pull request or commit.
pub trait CommentPoster {
    fn post(&self, request: &CommentRequest) -> Result<(), AppError>;
}
