use minijinja::Environment;
use serde::Serialize;

use crate::domain::AppError;

/// Render `source` as a minijinja template named `name`.
pub fn render_template<S: Serialize>(name: &str, source: &str, ctx: &S) -> Result<String, AppError> {
    let mut env = Environment::new();
    env.set_keep_trailing_newline(true);

    env.add_template(name, source).map_err(|e| AppError::TemplateRender {
        name: name.to_string(),
        details: e.to_string(),
    })?;

    let template = env.get_template(name).map_err(|e| AppError::TemplateRender {
        name: name.to_string(),
        details: e.to_string(),
    })?;

    template
        .render(ctx)
        .map_err(|e| AppError::TemplateRender { name: name.to_string(), details: e.to_string() })
}
