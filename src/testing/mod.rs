mod fake_command_runner;
mod fake_env;
mod recording_comment_poster;

pub use fake_command_runner::FakeCommandRunner;
pub use fake_env::FakeEnv;
pub use recording_comment_poster::RecordingCommentPoster;
