//! `{{variable}}` extraction from text-node templates.

use std::collections::HashSet;

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::instrument;

/// `{{ name }}` with optional inner whitespace; `name` is `[A-Za-z_$][A-Za-z0-9_$]*`.
static VARIABLE_PATTERN: Lazy<Regex> = Lazy::new(|| {
  Regex::new(r"\{\{\s*([A-Za-z_$][A-Za-z0-9_$]*)\s*\}\}").expect("variable pattern is valid")
});

/// Returns the distinct variable names referenced in `text`, in order of first appearance.
///
/// Occurrences whose braces are unbalanced or whose content is not an
/// identifier are skipped. Never fails.
#[instrument(level = "trace", skip(text), fields(len = text.len()))]
pub fn extract_variables(text: &str) -> Vec<String> {
  let mut seen = HashSet::new();
  VARIABLE_PATTERN
    .captures_iter(text)
    .filter_map(|caps| caps.get(1))
    .map(|m| m.as_str())
    .filter(|name| seen.insert(*name))
    .map(String::from)
    .collect()
}
