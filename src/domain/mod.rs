pub mod ci_provider;
pub mod completion;
pub mod error;
pub mod exec_config;
pub mod exec_options;
pub mod validation;

pub use ci_provider::CiProvider;
pub use completion::{complement_exec, complement_token};
pub use error::AppError;
pub use exec_config::{ExecConfig, GitHubConfig, TemplateEntry, When, parse_config_content};
pub use exec_options::{CommentTarget, DEFAULT_TEMPLATE_KEY, ExecOptions};
pub use validation::validate_exec;
