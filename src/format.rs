use crate::locale::ListJoin;
use crate::options::FormatFn;

/// Renders the abbreviated name list to the final `author` string.
///
/// Uses the caller's `format` closure when supplied, otherwise the
/// locale-aware joiner. An empty result means there is nothing to write.
pub fn render_authors(
    names: &[String],
    format: Option<&FormatFn>,
    joiner: &dyn ListJoin,
) -> Option<String> {
    let rendered = match format {
        Some(format) => format(names),
        None => joiner.join(names),
    };
    if rendered.is_empty() {
        None
    } else {
        Some(rendered)
    }
}
