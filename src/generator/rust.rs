use itertools::Itertools;

use super::{indent, Binding, Block, Syntax, Value};

pub struct Rust;

// `LarkToken` -> `lark_token`
fn module_name(name: &str) -> String {
    name.chars()
        .enumerate()
        .map(|(i, c)| match (i, c.is_uppercase()) {
            (0, _) | (_, false) => c.to_lowercase().to_string(),
            (_, true) => format!("_{}", c.to_lowercase()),
        })
        .join("")
}

// Rewrites `\uXXXX` and `\UXXXXXXXX` into the `\u{...}` form, other escapes are kept
fn string_literal(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    let mut chars = value.chars().peekable();

    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some(marker @ ('u' | 'U')) => {
                let width = if marker == 'u' { 4 } else { 8 };
                let digits: String = chars.peeking_take_while(|d| d.is_ascii_hexdigit()).take(width).collect();
                if digits.len() == width {
                    let trimmed = digits.trim_start_matches('0');
                    out.push_str(&format!("\\u{{{}}}", if trimmed.is_empty() { "0" } else { trimmed }));
                } else {
                    out.push('\\');
                    out.push(marker);
                    out.push_str(&digits);
                }
            }
            Some(escaped) => {
                out.push('\\');
                out.push(escaped);
            }
            None => out.push('\\'),
        }
    }

    out
}

impl Syntax for Rust {
    fn comment(&self, out: &mut String, level: usize, text: &str) {
        out.push_str(&format!("{}// {}\n", indent(level), text));
    }

    fn binding(&self, out: &mut String, level: usize, binding: &Binding) {
        let pad = indent(level);
        let item_pad = indent(level + 1);
        let annotation = match &binding.annotation {
            Some(text) => format!(" // {}", text),
            None => String::new(),
        };

        match &binding.value {
            Value::Str(s) => {
                out.push_str(&format!("{}pub const {}: &str = \"{}\";{}\n", pad, binding.name, string_literal(s), annotation));
            }
            Value::List(items) => {
                out.push_str(&format!("{}pub const {}: &[&str] = &[{}\n", pad, binding.name, annotation));
                for item in items {
                    out.push_str(&format!("{}{},\n", item_pad, item));
                }
                out.push_str(&format!("{}];\n", pad));
            }
            Value::Map(pairs) => {
                out.push_str(&format!("{}pub const {}: &[(&str, &str)] = &[{}\n", pad, binding.name, annotation));
                for (key, value) in pairs {
                    out.push_str(&format!("{}({}, \"{}\"),\n", item_pad, key, string_literal(value)));
                }
                out.push_str(&format!("{}];\n", pad));
            }
        }
    }

    fn open_block(&self, out: &mut String, name: &str) {
        out.push_str("#[allow(non_upper_case_globals, dead_code)]\n");
        out.push_str(&format!("pub mod {} {{\n", module_name(name)));
    }

    fn close_block(&self, out: &mut String, _block: &Block) {
        out.push_str("}\n");
    }

    fn block_separator(&self) -> &'static str {
        "\n"
    }
}
