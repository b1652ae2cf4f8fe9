//! Template variables
//!
//! Placeholders look like `{{name}}`. Names are everything between the braces,
//! matched exactly; no trimming is applied.

use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use std::collections::HashMap;

static VARIABLE_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\{\{([^}]+)\}\}").expect("placeholder pattern is valid"));

/// Distinct placeholder names in order of first appearance
pub fn extract_variables(template: &str) -> Vec<String> {
    let mut names: Vec<String> = Vec::new();
    for caps in VARIABLE_PATTERN.captures_iter(template) {
        let name = &caps[1];
        if !names.iter().any(|n| n == name) {
            names.push(name.to_string());
        }
    }
    names
}

/// Replace every placeholder that has a value
///
/// Placeholders without a value stay as they are. Substituted values are
/// inserted literally and never scanned for further placeholders.
pub fn fill_template(template: &str, variables: &HashMap<String, String>) -> String {
    VARIABLE_PATTERN
        .replace_all(template, |caps: &Captures| match variables.get(&caps[1]) {
            Some(value) => value.clone(),
            None => caps[0].to_string(),
        })
        .into_owned()
}

/// Variables of `template` with no value or a blank one
pub fn unfilled_variables(template: &str, variables: &HashMap<String, String>) -> Vec<String> {
    extract_variables(template)
        .into_iter()
        .filter(|name| variables.get(name).map_or(true, |v| v.trim().is_empty()))
        .collect()
}

/// Parse `key=value` pairs; the value may itself contain `=`
pub fn parse_assignment(raw: &str) -> Option<(String, String)> {
    let (key, value) = raw.split_once('=')?;
    let key = key.trim();
    if key.is_empty() {
        return None;
    }
    Some((key.to_string(), value.to_string()))
}
