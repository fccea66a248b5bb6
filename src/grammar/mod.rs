/*
    This module holds the definitions scanned out of a grammar
*/

// Whether a definition is a grammar production or a lexical terminal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Kind {
    Rule,
    Token,
}

#[derive(Debug, Clone, PartialEq)]
pub struct GrammarEntry {
    pub name: String,
    // The definition line exactly as it appears in the grammar
    pub raw_line: String,
    pub line: usize,
}

impl GrammarEntry {
    pub fn new(name: impl Into<String>, raw_line: impl Into<String>, line: usize) -> Self {
        GrammarEntry {
            name: name.into(),
            raw_line: raw_line.into(),
            line
        }
    }

    // Only an uppercase first letter makes a token, so `_NEWLINE` lands in the rule list
    pub fn kind(&self) -> Kind {
        match self.name.chars().next() {
            Some(c) if c.is_uppercase() => Kind::Token,
            _ => Kind::Rule,
        }
    }

    pub fn is_token(&self) -> bool {
        self.kind() == Kind::Token
    }

    // The raw line with a leading `type: ` marker turned into `@type: `
    pub fn comment(&self) -> String {
        match self.raw_line.strip_prefix("type: ") {
            Some(rest) => format!("@type: {}", rest),
            None => self.raw_line.clone(),
        }
    }

    // Only tokens whose body is a single quoted literal have one
    pub fn literal_value(&self) -> Option<&str> {
        if !self.is_token() {
            return None;
        }
        literal_value(&self.raw_line)
    }
}

pub fn literal_value(line: &str) -> Option<&str> {
    let body = match line.find(':') {
        Some(idx) => &line[idx + 1..],
        None => line,
    }.trim();

    if !body.starts_with('"') {
        return None;
    }

    let value = body.trim_matches(|c| c == '"' || c == '\'');
    if value.is_empty() {
        None
    } else {
        Some(value)
    }
}

#[cfg(test)]
mod tests {
    use std::iter::zip;

    use super::*;

    #[test]
    fn kind_follows_first_letter() {
        let names = vec!["start", "FALSE", "testlist_expr", "IMAG_NUMBER", "_NEWLINE", "Mixed"];
        let answers = vec![Kind::Rule, Kind::Token, Kind::Rule, Kind::Token, Kind::Rule, Kind::Token];

        for (name, answer) in zip(names, answers) {
            assert_eq!(GrammarEntry::new(name, format!("{}: x", name), 1).kind(), answer);
        }
    }

    #[test]
    fn literal_values() {
        let lines = vec![
            "FALSE: \"False\"",
            "LEFT_PARENTHESES: \"(\"",
            "  COMMA: \",\"  ",
            "IMAG_NUMBER.2: /\\d+j/i | FLOAT_NUMBER \"j\"i",
            "NAME: /[a-zA-Z_]\\w*/",
            "SINGLE_QUOTE: \"'\"",
            "EMPTY: \"\"",
            "\"bare\""
        ];
        let answers = vec![
            Some("False"),
            Some("("),
            Some(","),
            None,
            None,
            None,
            None,
            Some("bare")
        ];

        for (line, answer) in zip(lines, answers) {
            assert_eq!(literal_value(line), answer, "line: {}", line);
        }
    }

    #[test]
    fn rules_have_no_literal_value() {
        let rule = GrammarEntry::new("true_kw", "true_kw: \"True\"", 1);
        assert_eq!(rule.literal_value(), None);

        let token = GrammarEntry::new("TRUE", "TRUE: \"True\"", 2);
        assert_eq!(token.literal_value(), Some("True"));
    }

    #[test]
    fn type_comment_is_marked() {
        let marked = GrammarEntry::new("type", "type: basic_type | list_type", 1);
        assert_eq!(marked.comment(), "@type: basic_type | list_type");

        let plain = GrammarEntry::new("schema_stmt", "schema_stmt: \"schema\" NAME", 2);
        assert_eq!(plain.comment(), "schema_stmt: \"schema\" NAME");

        let typed = GrammarEntry::new("typed", "typed: type: x", 3);
        assert_eq!(typed.comment(), "typed: type: x");
    }
}
