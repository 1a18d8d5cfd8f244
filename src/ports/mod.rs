mod command_runner;
mod comment_poster;
mod env_lookup;

pub use command_runner::{CommandOutput, CommandRunner};
pub use comment_poster::{CommentPoster, CommentRequest};
pub use env_lookup::EnvLookup;
