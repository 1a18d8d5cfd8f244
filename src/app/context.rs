use crate::ports::{CommandRunner, CommentPoster, EnvLookup};

/// Application context holding dependencies for command execution.
pub struct AppContext<E: EnvLookup, R: CommandRunner, P: CommentPoster> {
    env: E,
    runner: R,
    poster: P,
}

impl<E: EnvLookup, R: CommandRunner, P: CommentPoster> AppContext<E, R, P> {
    /// Create a new application context.
    pub fn new(env: E, runner: R, poster: P) -> Self {
        Self { env, runner, poster }
    }

    /// Get a reference to the environment lookup.
    pub fn env(&self) -> &E {
        &self.env
    }

    /// Get a reference to the command runner.
    pub fn runner(&self) -> &R {
        &self.runner
    }

    /// Get a reference to the comment poster.
    pub fn poster(&self) -> &P {
        &self.poster
    }
}
