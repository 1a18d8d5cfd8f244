use std::collections::HashMap;

use crate::ports::EnvLookup;

/// In-memory environment for completion tests.
#[derive(Debug, Clone, Default)]
pub struct FakeEnv {
    vars: HashMap<String, String>,
}

impl FakeEnv {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, name: &str, value: &str) -> Self {
        self.vars.insert(name.to_string(), value.to_string());
        self
    }
}

impl EnvLookup for FakeEnv {
    fn var(&self, name: &str) -> String {
        self.vars.get(name).cloned().unwrap_or_default()
    }
}
