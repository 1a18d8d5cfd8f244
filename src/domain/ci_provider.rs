//! CI providers that can supply repository and pull request context.

use std::fmt;

use crate::ports::EnvLookup;

/// Supported CI providers.
///
/// Each variant knows the environment variables it exports and how to turn
/// its pull request variable into a number.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CiProvider {
    CircleCi,
    Drone,
}

impl CiProvider {
    /// Detection order. The first provider whose marker variable is set wins.
    pub const ALL: [CiProvider; 2] = [CiProvider::CircleCi, CiProvider::Drone];

    /// Detect the active provider, if any.
    pub fn detect(env: &(impl EnvLookup + ?Sized)) -> Option<Self> {
        Self::ALL.into_iter().find(|provider| provider.is_active(env))
    }

    /// Whether this provider's marker variable is present.
    pub fn is_active(&self, env: &(impl EnvLookup + ?Sized)) -> bool {
        !env.var(self.marker_var()).is_empty()
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            CiProvider::CircleCi => "circleci",
            CiProvider::Drone => "drone",
        }
    }

    pub fn marker_var(&self) -> &'static str {
        match self {
            CiProvider::CircleCi => "CIRCLECI",
            CiProvider::Drone => "DRONE",
        }
    }

    pub fn owner_var(&self) -> &'static str {
        match self {
            CiProvider::CircleCi => "CIRCLE_PROJECT_USERNAME",
            CiProvider::Drone => "DRONE_REPO_OWNER",
        }
    }

    pub fn repo_var(&self) -> &'static str {
        match self {
            CiProvider::CircleCi => "CIRCLE_PROJECT_REPONAME",
            CiProvider::Drone => "DRONE_REPO_NAME",
        }
    }

    pub fn pull_request_var(&self) -> &'static str {
        match self {
            CiProvider::CircleCi => "CIRCLE_PULL_REQUEST",
            CiProvider::Drone => "DRONE_PULL_REQUEST",
        }
    }

    pub fn sha_var(&self) -> &'static str {
        match self {
            CiProvider::CircleCi => "CIRCLE_SHA1",
            CiProvider::Drone => "DRONE_COMMIT_SHA1",
        }
    }

    /// The part of the pull request variable that holds the number.
    ///
    /// CircleCI exports the PR URL (`https://github.com/owner/repo/pull/42`),
    /// so the number is whatever follows the last `/`; a value without any
    /// `/` yields `None`. Drone exports the number itself.
    pub fn pull_request_digits<'a>(&self, raw: &'a str) -> Option<&'a str> {
        match self {
            CiProvider::CircleCi => raw.rsplit_once('/').map(|(_, tail)| tail),
            CiProvider::Drone => Some(raw),
        }
    }
}

impl fmt::Display for CiProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
