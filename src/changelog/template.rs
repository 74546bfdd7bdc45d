use regex::{Captures, Regex};
use std::sync::LazyLock;

static PLACEHOLDER_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{(\w+)\}").expect("placeholder regex is valid"));

/// Substitute `{name}` placeholders in `template`.
///
/// Placeholders without a value render as the empty string.
pub fn render(template: &str, values: &[(&str, &str)]) -> String {
    PLACEHOLDER_REGEX
        .replace_all(template, |caps: &Captures| {
            values
                .iter()
                .find(|(key, _)| *key == &caps[1])
                .map(|(_, value)| value.to_string())
                .unwrap_or_default()
        })
        .into_owned()
}
