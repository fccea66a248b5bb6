/*
    This module turns scanned grammar entries into the generated constants file
*/

mod python;
mod rust;

use itertools::Itertools;

use crate::cli::Lang;
use crate::config::Config;
use crate::grammar::*;

pub use python::Python;
pub use rust::Rust;

// The right-hand side of a binding
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    // A string literal, written between double quotes
    Str(String),
    // A list of references to other bindings
    List(Vec<String>),
    // Pairs of (reference, string literal)
    Map(Vec<(String, String)>),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Binding {
    pub name: String,
    pub value: Value,
    pub annotation: Option<String>,
}

impl Binding {
    pub fn new(name: impl Into<String>, value: Value) -> Self {
        Binding { name: name.into(), value, annotation: None }
    }

    pub fn annotated(mut self, annotation: impl Into<String>) -> Self {
        self.annotation = Some(annotation.into());
        self
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Section {
    pub comment: Option<String>,
    pub bindings: Vec<Binding>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Block {
    pub name: String,
    pub sections: Vec<Section>,
}

impl Block {
    pub fn is_empty(&self) -> bool {
        self.sections.iter().all(|s| s.comment.is_none() && s.bindings.is_empty())
    }
}

// A generated file, independent of the language it gets written in
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    pub header: Vec<String>,
    pub blocks: Vec<Block>,
}

pub const INDENT: &str = "    ";

// Implementors only say how a binding, a comment and block framing look
pub trait Syntax {
    fn comment(&self, out: &mut String, indent: usize, text: &str);

    fn binding(&self, out: &mut String, indent: usize, binding: &Binding);

    fn open_block(&self, out: &mut String, name: &str);

    fn close_block(&self, out: &mut String, block: &Block);

    // Blank lines in front of every block
    fn block_separator(&self) -> &'static str {
        "\n\n"
    }

    fn render(&self, document: &Document) -> String {
        let mut out = String::new();

        for (i, line) in document.header.iter().enumerate() {
            if i > 0 {
                out.push('\n');
            }
            self.comment(&mut out, 0, line);
        }

        for block in &document.blocks {
            out.push_str(self.block_separator());
            self.open_block(&mut out, &block.name);
            for (i, section) in block.sections.iter().enumerate() {
                if section.comment.is_some() || i > 0 {
                    out.push('\n');
                }
                if let Some(comment) = &section.comment {
                    self.comment(&mut out, 1, comment);
                }
                for binding in &section.bindings {
                    self.binding(&mut out, 1, binding);
                }
            }
            self.close_block(&mut out, block);
        }

        out
    }
}

pub fn indent(level: usize) -> String {
    INDENT.repeat(level)
}

fn constant(entry: &GrammarEntry) -> String {
    format!("L_{}", entry.name)
}

pub fn emit(entries: &[GrammarEntry], config: &Config) -> Document {
    let grammar = config.grammar_name();
    let (tokens, rules): (Vec<&GrammarEntry>, Vec<&GrammarEntry>) = entries.iter().partition(|e| e.is_token());
    let literals = entries.iter()
        .filter_map(|e| e.literal_value().map(|value| (e, value)))
        .collect_vec();

    let constants = entries.iter()
        .map(|e| Binding::new(constant(e), Value::Str(e.name.clone())).annotated(format!("{} ...", e.comment())))
        .collect_vec();

    let lark_token = Block {
        name: "LarkToken".to_string(),
        sections: vec![
            Section {
                comment: Some(format!("{} rules and tokens (len={})", grammar, entries.len())),
                bindings: constants
            },
            Section {
                comment: Some(format!("{} tokens list (len={})", grammar, tokens.len())),
                bindings: vec![Binding::new("LL_token_list", Value::List(tokens.iter().map(|e| constant(e)).collect()))]
            },
            Section {
                comment: Some(format!("{} rules list (len={})", grammar, rules.len())),
                bindings: vec![Binding::new("LL_rule_list", Value::List(rules.iter().map(|e| constant(e)).collect()))]
            },
            Section {
                comment: Some(format!("{} tokens string value map", grammar)),
                bindings: vec![Binding::new("LL_token_str_value_map", Value::Map(
                    literals.iter().map(|(e, value)| (constant(e), value.to_string())).collect()
                ))]
            },
        ]
    };

    let token_value = Block {
        name: "TokenValue".to_string(),
        sections: vec![Section {
            comment: None,
            bindings: literals.iter()
                .map(|(e, value)| Binding::new(e.name.clone(), Value::Str(value.to_string())))
                .collect()
        }]
    };

    Document {
        header: vec![
            config.copyright.clone(),
            format!("Auto generated by {{larktok & {}}}; DO NOT EDIT!!!", grammar),
        ],
        blocks: vec![lark_token, token_value],
    }
}

pub fn render(document: &Document, lang: Lang) -> String {
    match lang {
        Lang::Python => Python.render(document),
        Lang::Rust => Rust.render(document),
    }
}

pub fn generate(entries: &[GrammarEntry], config: &Config) -> String {
    render(&emit(entries, config), config.lang)
}
