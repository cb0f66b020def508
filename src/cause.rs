use std::error::Error;

/// Render an error and its `source()` chain, one entry per line.
pub fn render_cause(cause: &(dyn Error + 'static)) -> String {
    let mut rendered = cause.to_string();
    let mut source = cause.source();

    while let Some(inner) = source {
        rendered.push_str("\nCaused by: ");
        rendered.push_str(&inner.to_string());
        source = inner.source();
    }

    rendered
}
