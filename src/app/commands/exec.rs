//! Exec command: run a command and comment its result.

use std::collections::HashMap;

use serde::{Serialize, Serializer};
use tracing::info;

use crate::adapters::render_template;
use crate::app::AppContext;
use crate::domain::{
    AppError, ExecConfig, ExecOptions, complement_exec, complement_token, validate_exec,
};
use crate::ports::{CommandOutput, CommandRunner, CommentPoster, CommentRequest, EnvLookup};

/// Result of an exec run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExecOutcome {
    /// Exit code of the user command.
    pub exit_code: i32,
    /// Rendered comment, if a template applied and rendered non-blank.
    pub comment: Option<String>,
    /// Whether the comment was sent to GitHub.
    pub posted: bool,
}

/// Values exposed to comment templates.
#[derive(Debug, Serialize)]
struct CommentContext<'a> {
    exit_code: i32,
    ok: bool,
    stdout: &'a str,
    stderr: &'a str,
    combined_output: &'a str,
    command: String,
    args: &'a [String],
    vars: HashMap<String, String>,
    org: &'a str,
    repo: &'a str,
    sha1: &'a str,
    #[serde(serialize_with = "serialize_pr_number")]
    pr_number: Option<u64>,
}

/// An unset pull request renders as an empty string, like an unset `sha1`.
fn serialize_pr_number<S: Serializer>(value: &Option<u64>, serializer: S) -> Result<S::Ok, S::Error> {
    match value {
        Some(number) => serializer.serialize_u64(*number),
        None => serializer.serialize_str(""),
    }
}

impl<'a> CommentContext<'a> {
    fn new(options: &'a ExecOptions, output: &'a CommandOutput, config: &ExecConfig) -> Self {
        let mut vars = config.vars.clone();
        vars.extend(options.vars.iter().map(|(k, v)| (k.clone(), v.clone())));

        Self {
            exit_code: output.exit_code,
            ok: output.success(),
            stdout: &output.stdout,
            stderr: &output.stderr,
            combined_output: &output.combined_output,
            command: options.joined_command(),
            args: &options.args,
            vars,
            org: &options.org,
            repo: &options.repo,
            sha1: &options.sha1,
            pr_number: options.pr_number,
        }
    }
}

/// Complete, validate, run, render, and post.
///
/// With `dry_run` the rendered comment is returned but never posted.
pub fn execute<E, R, P>(
    ctx: &AppContext<E, R, P>,
    config: &ExecConfig,
    mut options: ExecOptions,
    dry_run: bool,
) -> Result<ExecOutcome, AppError>
where
    E: EnvLookup,
    R: CommandRunner,
    P: CommentPoster,
{
    complement_exec(&mut options, ctx.env())?;
    complement_token(&mut options, ctx.env());
    validate_exec(&options)?;

    let target = options.target().ok_or(AppError::MissingField("sha1-or-pr"))?;
    if options.template.is_empty() && !config.has_template(&options.template_key) {
        return Err(AppError::TemplateNotFound(options.template_key.clone()));
    }

    let output = ctx.runner().run(&options.args)?;
    info!(exit_code = output.exit_code, command = %options.joined_command(), "command finished");

    let source = if options.template.is_empty() {
        config.select_template(&options.template_key, output.exit_code)?
    } else {
        Some(options.template.as_str())
    };
    let Some(source) = source else {
        info!(template_key = %options.template_key, "no template matches the exit code, skipping comment");
        return Ok(ExecOutcome { exit_code: output.exit_code, comment: None, posted: false });
    };

    let context = CommentContext::new(&options, &output, config);
    let body = render_template(&options.template_key, source, &context)?;
    if body.trim().is_empty() {
        info!("template rendered an empty comment, skipping");
        return Ok(ExecOutcome { exit_code: output.exit_code, comment: None, posted: false });
    }

    if dry_run {
        return Ok(ExecOutcome { exit_code: output.exit_code, comment: Some(body), posted: false });
    }

    ctx.poster().post(&CommentRequest {
        org: options.org.clone(),
        repo: options.repo.clone(),
        token: options.token.clone(),
        target,
        body: body.clone(),
    })?;

    Ok(ExecOutcome { exit_code: output.exit_code, comment: Some(body), posted: true })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{CommentTarget, parse_config_content};
    use crate::testing::{FakeCommandRunner, FakeEnv, RecordingCommentPoster};

    type TestContext = AppContext<FakeEnv, FakeCommandRunner, RecordingCommentPoster>;

    fn context(env: FakeEnv, runner: FakeCommandRunner) -> TestContext {
        AppContext::new(env, runner, RecordingCommentPoster::new())
    }

    fn options() -> ExecOptions {
        ExecOptions {
            org: "acme".to_string(),
            repo: "widgets".to_string(),
            token: "secret".to_string(),
            sha1: "abc123".to_string(),
            template_key: "default".to_string(),
            args: vec!["make".to_string(), "test".to_string()],
            ..Default::default()
        }
    }

    #[test]
    fn posts_rendered_comment_to_commit() {
        let ctx = context(FakeEnv::new(), FakeCommandRunner::new(0, "all good\n", ""));
        let opts = ExecOptions { template: "{{ command }} -> {{ exit_code }}".to_string(), ..options() };

        let outcome = execute(&ctx, &ExecConfig::default(), opts, false).unwrap();

        assert_eq!(outcome.exit_code, 0);
        assert!(outcome.posted);
        let posted = ctx.poster().posted();
        assert_eq!(posted.len(), 1);
        assert_eq!(posted[0].target, CommentTarget::Commit("abc123".to_string()));
        assert_eq!(posted[0].body, "make test -> 0");
        assert_eq!(ctx.runner().invocations(), vec![vec!["make".to_string(), "test".to_string()]]);
    }

    #[test]
    fn commit_target_renders_empty_pr_number() {
        let ctx = context(FakeEnv::new(), FakeCommandRunner::new(0, "", ""));
        let opts = ExecOptions {
            template: "pr={{ pr_number }} sha={{ sha1 }}{% if not pr_number %} commit{% endif %}"
                .to_string(),
            ..options()
        };

        let outcome = execute(&ctx, &ExecConfig::default(), opts, true).unwrap();

        assert_eq!(outcome.comment.as_deref(), Some("pr= sha=abc123 commit"));
    }

    #[test]
    fn pull_request_target_renders_pr_number() {
        let ctx = context(FakeEnv::new(), FakeCommandRunner::new(0, "", ""));
        let opts = ExecOptions {
            template: "pr={{ pr_number }} sha={{ sha1 }}".to_string(),
            sha1: String::new(),
            pr_number: Some(42),
            ..options()
        };

        let outcome = execute(&ctx, &ExecConfig::default(), opts, true).unwrap();

        assert_eq!(outcome.comment.as_deref(), Some("pr=42 sha="));
    }

    #[test]
    fn infers_pull_request_from_drone() {
        let env = FakeEnv::new()
            .with("DRONE", "true")
            .with("DRONE_REPO_OWNER", "acme")
            .with("DRONE_REPO_NAME", "gadgets")
            .with("DRONE_PULL_REQUEST", "17")
            .with("GITHUB_TOKEN", "from-env");
        let ctx = context(env, FakeCommandRunner::new(1, "", "boom\n"));
        let opts = ExecOptions {
            template_key: "default".to_string(),
            args: vec!["false".to_string()],
            ..Default::default()
        };

        let outcome = execute(&ctx, &ExecConfig::default(), opts, false).unwrap();

        assert_eq!(outcome.exit_code, 1);
        let posted = ctx.poster().posted();
        assert_eq!(posted[0].org, "acme");
        assert_eq!(posted[0].repo, "gadgets");
        assert_eq!(posted[0].token, "from-env");
        assert_eq!(posted[0].target, CommentTarget::PullRequest(17));
        assert!(posted[0].body.contains("Command failed"));
        assert!(posted[0].body.contains("boom"));
    }

    #[test]
    fn validation_failure_skips_the_command() {
        let ctx = context(FakeEnv::new(), FakeCommandRunner::new(0, "", ""));
        let opts = ExecOptions { token: String::new(), ..options() };

        let err = execute(&ctx, &ExecConfig::default(), opts, false).unwrap_err();

        assert!(matches!(err, AppError::MissingField("token")));
        assert!(ctx.runner().invocations().is_empty());
    }

    #[test]
    fn invalid_provider_pull_request_aborts_before_validation() {
        let env = FakeEnv::new()
            .with("CIRCLECI", "true")
            .with("CIRCLE_PULL_REQUEST", "https://github.com/acme/widgets/pull/abc");
        let ctx = context(env, FakeCommandRunner::new(0, "", ""));
        let opts = ExecOptions { sha1: String::new(), ..options() };

        let err = execute(&ctx, &ExecConfig::default(), opts, false).unwrap_err();

        assert!(matches!(err, AppError::InvalidPrNumber { .. }));
        assert!(ctx.runner().invocations().is_empty());
    }

    #[test]
    fn unknown_template_key_fails_before_running() {
        let ctx = context(FakeEnv::new(), FakeCommandRunner::new(0, "", ""));
        let opts = ExecOptions { template_key: "deploy".to_string(), ..options() };

        let err = execute(&ctx, &ExecConfig::default(), opts, false).unwrap_err();

        assert!(matches!(err, AppError::TemplateNotFound(ref key) if key == "deploy"));
        assert!(ctx.runner().invocations().is_empty());
    }

    #[test]
    fn dry_run_returns_comment_without_posting() {
        let ctx = context(FakeEnv::new(), FakeCommandRunner::new(0, "ok\n", ""));

        let outcome = execute(&ctx, &ExecConfig::default(), options(), true).unwrap();

        assert!(!outcome.posted);
        let comment = outcome.comment.unwrap();
        assert!(comment.contains("Command succeeded"));
        assert!(comment.contains("$ make test"));
        assert!(ctx.poster().posted().is_empty());
    }

    #[test]
    fn configured_template_sees_merged_vars() {
        let config = parse_config_content(
            r#"
[vars]
team = "platform"
env = "staging"

[[exec.test]]
template = "{{ vars.team }}/{{ vars.env }}"
"#,
        )
        .unwrap();
        let ctx = context(FakeEnv::new(), FakeCommandRunner::new(0, "", ""));
        let mut opts = ExecOptions { template_key: "test".to_string(), ..options() };
        opts.vars.insert("env".to_string(), "prod".to_string());

        let outcome = execute(&ctx, &config, opts, true).unwrap();

        assert_eq!(outcome.comment.as_deref(), Some("platform/prod"));
    }

    #[test]
    fn unmatched_when_skips_comment() {
        let config = parse_config_content(
            r#"
[[exec.test]]
when = "failure"
template = "failed"
"#,
        )
        .unwrap();
        let ctx = context(FakeEnv::new(), FakeCommandRunner::new(0, "", ""));
        let opts = ExecOptions { template_key: "test".to_string(), ..options() };

        let outcome = execute(&ctx, &config, opts, false).unwrap();

        assert_eq!(outcome, ExecOutcome { exit_code: 0, comment: None, posted: false });
        assert!(ctx.poster().posted().is_empty());
    }

    #[test]
    fn blank_comment_is_not_posted() {
        let ctx = context(FakeEnv::new(), FakeCommandRunner::new(0, "", ""));
        let opts = ExecOptions { template: "{% if not ok %}failed{% endif %}".to_string(), ..options() };

        let outcome = execute(&ctx, &ExecConfig::default(), opts, false).unwrap();

        assert!(!outcome.posted);
        assert!(ctx.poster().posted().is_empty());
    }

    #[test]
    fn post_failure_is_returned() {
        let ctx = AppContext::new(
            FakeEnv::new(),
            FakeCommandRunner::new(0, "", ""),
            RecordingCommentPoster::failing(403),
        );

        let err = execute(&ctx, &ExecConfig::default(), options(), false).unwrap_err();

        assert!(matches!(err, AppError::GitHubApi { status: 403, .. }));
    }
}
