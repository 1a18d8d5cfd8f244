use std::io;
use std::num::ParseIntError;

use thiserror::Error;

/// Library-wide error type for prexec operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// A field required for execution is empty after completion.
    #[error("{0} is required")]
    MissingField(&'static str),

    /// A CI provider exported a pull request value that is not a number.
    #[error(
        "Failed to extract a pull request number from the environment variable {variable} ('{value}'): {source}"
    )]
    InvalidPrNumber {
        variable: &'static str,
        value: String,
        #[source]
        source: ParseIntError,
    },

    /// Config file passed with --config does not exist.
    #[error("Config file not found: {0}")]
    ConfigMissing(String),

    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    /// Config parsed but holds an invalid value.
    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    /// No template is registered under the requested key.
    #[error("Template '{0}' not found in config")]
    TemplateNotFound(String),

    /// Template failed to compile or render.
    #[error("Failed to render template '{name}': {details}")]
    TemplateRender { name: String, details: String },

    /// The user command could not be started.
    #[error("Failed to run '{command}': {source}")]
    CommandSpawn {
        command: String,
        #[source]
        source: io::Error,
    },

    /// GitHub rejected the comment.
    #[error("GitHub API error ({status}): {message}")]
    GitHubApi { status: u16, message: String },

    /// Transport-level HTTP failure.
    #[error("HTTP request failed: {0}")]
    Http(String),

    /// A --var argument without a `name:value` shape.
    #[error("Invalid variable '{0}': expected NAME:VALUE")]
    InvalidVar(String),
}

impl AppError {
    /// Provide an `io::ErrorKind`-like view for callers expecting legacy behavior.
    pub fn kind(&self) -> io::ErrorKind {
        match self {
            AppError::Io(err) => err.kind(),
            AppError::CommandSpawn { source, .. } => source.kind(),
            AppError::MissingField(_)
            | AppError::InvalidPrNumber { .. }
            | AppError::TomlParse(_)
            | AppError::InvalidConfig(_)
            | AppError::TemplateRender { .. }
            | AppError::InvalidVar(_) => io::ErrorKind::InvalidInput,
            AppError::ConfigMissing(_) | AppError::TemplateNotFound(_) => io::ErrorKind::NotFound,
            AppError::GitHubApi { .. } | AppError::Http(_) => io::ErrorKind::Other,
        }
    }
}
