use std::sync::Mutex;

use crate::domain::AppError;
use crate::ports::{CommentPoster, CommentRequest};

/// Records posted comments instead of sending them.
#[derive(Default)]
pub struct RecordingCommentPoster {
    pub posted: Mutex<Vec<CommentRequest>>,
    pub fail_with_status: Option<u16>,
}

impl RecordingCommentPoster {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing(status: u16) -> Self {
        Self { fail_with_status: Some(status), ..Self::default() }
    }

    pub fn posted(&self) -> Vec<CommentRequest> {
        self.posted.lock().unwrap().clone()
    }
}

impl CommentPoster for RecordingCommentPoster {
    fn post(&self, request: &CommentRequest) -> Result<(), AppError> {
        if let Some(status) = self.fail_with_status {
            return Err(AppError::GitHubApi { status, message: "rejected".to_string() });
        }
        self.posted.lock().unwrap().push(request.clone());
        Ok(())
    }
}
