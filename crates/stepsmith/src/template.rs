//! Stub text assembly.
//!
//! Rendering is a total function of its inputs. The keyword position is
//! left as a `{keyword}` placeholder for the presenter, so brace characters
//! in the pattern text are doubled to survive the presenter's later
//! substitution pass; quotes and backslashes are escaped for
//! string-literal safety.

use crate::arguments::Parameter;

/// Placeholder substituted with the step keyword by the presenter.
pub const KEYWORD_PLACEHOLDER: &str = "{keyword}";

/// Render a step-definition stub for a pattern, name, and parameter list.
pub(crate) fn render_stub(pattern_text: &str, name: &str, parameters: &[Parameter]) -> String {
    let arguments = parameters
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ");
    let pattern = escape_pattern_text(pattern_text);
    format!(
        "#[{KEYWORD_PLACEHOLDER}(\"{pattern}\")]\nfn {name}({arguments}) {{\n    todo!(\"write this step\");\n}}\n"
    )
}

fn escape_pattern_text(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '\\' => escaped.push_str("\\\\"),
            '"' => escaped.push_str("\\\""),
            '{' => escaped.push_str("{{"),
            '}' => escaped.push_str("}}"),
            _ => escaped.push(c),
        }
    }
    escaped
}
