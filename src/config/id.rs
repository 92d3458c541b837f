use std::sync::LazyLock;

use regex::Regex;

static INVALID_ID_CHARS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^a-zA-Z0-9_]").unwrap());

/// Derive the component id used in the generated document from an output
/// name.
pub fn format_component_id(name: &str) -> String {
    INVALID_ID_CHARS.replace_all(name, "_").to_lowercase()
}
