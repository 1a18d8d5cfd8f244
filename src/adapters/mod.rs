pub mod config_filesystem;
pub mod github_comment_http;
pub mod process_command_runner;
pub mod process_env;
pub mod template_engine;

pub use config_filesystem::load_config;
pub use github_comment_http::HttpCommentPoster;
pub use process_command_runner::ProcessCommandRunner;
pub use process_env::ProcessEnv;
pub use template_engine::render_template;
