use std::sync::OnceLock;

use regex::Regex;

fn definition_prefix() -> &'static Regex {
    static PREFIX: OnceLock<Regex> = OnceLock::new();
    PREFIX.get_or_init(|| Regex::new(r"^([0-9A-Za-z_]+)[:.]").unwrap())
}

// Drops the `?` inline markers and indentation in front of a definition
pub fn trim_markers(line: &str) -> &str {
    line.trim_start_matches(|c: char| c == '?' || c.is_whitespace())
}

// Returns the defined name if the line opens a rule or token definition
pub fn definition_name(line: &str) -> Option<&str> {
    let trimmed = trim_markers(line);
    definition_prefix()
        .captures(trimmed)
        .and_then(|captures| captures.get(1))
        .map(|name| name.as_str())
        .filter(|name| !name.is_empty())
}
