//! Exec configuration loaded from `.prexec.toml`.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use url::Url;

use crate::domain::{AppError, DEFAULT_TEMPLATE_KEY};

/// Template used for the `default` key when the config does not define one.
pub const BUILTIN_DEFAULT_TEMPLATE: &str = r#"{% if ok %}## :white_check_mark: Command succeeded{% else %}## :x: Command failed{% endif %}

```
$ {{ command }}
```

Exit code: {{ exit_code }}

<details>
<summary>Output</summary>

```
{{ combined_output }}
```

</details>
"#;

/// Top-level configuration file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ExecConfig {
    /// GitHub API configuration.
    #[serde(default)]
    pub github: GitHubConfig,
    /// Variables available to every template. `--var` values take precedence.
    #[serde(default)]
    pub vars: HashMap<String, String>,
    /// Templates grouped by template key.
    #[serde(default)]
    pub exec: HashMap<String, Vec<TemplateEntry>>,
}

impl ExecConfig {
    pub fn validate(&self) -> Result<(), AppError> {
        self.github.validate()?;
        for (key, entries) in &self.exec {
            if entries.is_empty() {
                return Err(AppError::InvalidConfig(format!(
                    "exec.{} must define at least one template",
                    key
                )));
            }
        }
        Ok(())
    }

    /// Whether `key` resolves to a template group, built-in or configured.
    pub fn has_template(&self, key: &str) -> bool {
        key == DEFAULT_TEMPLATE_KEY || self.exec.contains_key(key)
    }

    /// Pick the template for `key` given the command's exit code.
    ///
    /// Returns `Ok(None)` when the key exists but no entry's `when` matches.
    pub fn select_template(&self, key: &str, exit_code: i32) -> Result<Option<&str>, AppError> {
        match self.exec.get(key) {
            Some(entries) => Ok(entries
                .iter()
                .find(|entry| entry.when.matches(exit_code))
                .map(|entry| entry.template.as_str())),
            None if key == DEFAULT_TEMPLATE_KEY => Ok(Some(BUILTIN_DEFAULT_TEMPLATE)),
            None => Err(AppError::TemplateNotFound(key.to_string())),
        }
    }
}

/// GitHub API configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GitHubConfig {
    /// API base URL.
    #[serde(default = "default_api_url")]
    pub api_url: Url,
    /// Request timeout in seconds.
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

impl Default for GitHubConfig {
    fn default() -> Self {
        Self { api_url: default_api_url(), timeout_secs: default_timeout() }
    }
}

impl GitHubConfig {
    pub fn validate(&self) -> Result<(), AppError> {
        if self.timeout_secs == 0 {
            return Err(AppError::InvalidConfig(
                "github.timeout_secs must be greater than 0".to_string(),
            ));
        }
        if self.api_url.cannot_be_a_base() {
            return Err(AppError::InvalidConfig(format!(
                "github.api_url is not a base URL: {}",
                self.api_url
            )));
        }
        Ok(())
    }
}

fn default_api_url() -> Url {
    Url::parse("https://api.github.com").expect("Default API URL must be valid")
}

fn default_timeout() -> u64 {
    30
}

/// One candidate template for a key.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TemplateEntry {
    #[serde(default)]
    pub when: When,
    pub template: String,
}

/// Exit status condition under which a template applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum When {
    #[default]
    Always,
    Success,
    Failure,
}

impl When {
    pub fn matches(&self, exit_code: i32) -> bool {
        match self {
            When::Always => true,
            When::Success => exit_code == 0,
            When::Failure => exit_code != 0,
        }
    }
}

/// Parse and validate exec configuration from TOML content.
pub fn parse_config_content(content: &str) -> Result<ExecConfig, AppError> {
    let config: ExecConfig = toml::from_str(content)?;
    config.validate()?;
    Ok(config)
}
