//! Environment lookup backed by the process environment.

use crate::ports::EnvLookup;

/// Reads variables from `std::env`. Non-UTF-8 values read as unset.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl EnvLookup for ProcessEnv {
    fn var(&self, name: &str) -> String {
        std::env::var(name).unwrap_or_default()
    }
}
