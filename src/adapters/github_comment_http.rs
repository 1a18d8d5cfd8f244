//! GitHub comment client implementation using reqwest.

use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::header::{ACCEPT, AUTHORIZATION, USER_AGENT};
use serde::Serialize;
use tracing::info;
use url::Url;

use crate::domain::{AppError, CommentTarget, GitHubConfig};
use crate::ports::{CommentPoster, CommentRequest};

const GITHUB_JSON: &str = "application/vnd.github+json";

/// HTTP client posting issue and commit comments.
#[derive(Debug, Clone)]
pub struct HttpCommentPoster {
    api_url: Url,
    client: Client,
}

#[derive(Debug, Serialize)]
struct CommentBody<'a> {
    body: &'a str,
}

impl HttpCommentPoster {
    /// Create a new HTTP client from the GitHub configuration.
    pub fn new(config: &GitHubConfig) -> Result<Self, AppError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| AppError::Http(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { api_url: config.api_url.clone(), client })
    }

    /// Endpoint for the comment collection of `request.target`.
    fn endpoint(&self, request: &CommentRequest) -> Result<Url, AppError> {
        let mut url = self.api_url.clone();
        {
            let mut segments = url.path_segments_mut().map_err(|_| {
                AppError::InvalidConfig(format!("github.api_url is not a base URL: {}", self.api_url))
            })?;
            segments.pop_if_empty().extend(["repos", request.org.as_str(), request.repo.as_str()]);
            match &request.target {
                CommentTarget::PullRequest(number) => {
                    segments.extend(["issues", number.to_string().as_str(), "comments"]);
                }
                CommentTarget::Commit(sha) => {
                    segments.extend(["commits", sha.as_str(), "comments"]);
                }
            }
        }
        Ok(url)
    }
}

impl CommentPoster for HttpCommentPoster {
    fn post(&self, request: &CommentRequest) -> Result<(), AppError> {
        let url = self.endpoint(request)?;

        let response = self
            .client
            .post(url)
            .header(AUTHORIZATION, format!("token {}", request.token))
            .header(ACCEPT, GITHUB_JSON)
            .header(USER_AGENT, concat!("prexec/", env!("CARGO_PKG_VERSION")))
            .json(&CommentBody { body: &request.body })
            .send()
            .map_err(|e| AppError::Http(e.to_string()))?;

        let status = response.status();
        if status.is_success() {
            info!(org = %request.org, repo = %request.repo, target = %request.target, "posted comment");
            return Ok(());
        }

        let message = response.text().unwrap_or_else(|_| "Unknown error".to_string());
        Err(AppError::GitHubApi { status: status.as_u16(), message })
    }
}
