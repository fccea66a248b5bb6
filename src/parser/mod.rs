/*
    This module scans Lark grammar files for rule and token definitions
*/

mod lexer;

use std::path::Path;

use log::{debug, trace};

use crate::grammar::*;
use crate::error_handling::*;

// Scans every line on its own, there is no state carried between lines
pub fn scan(text: &str) -> Vec<GrammarEntry> {
    text.lines()
        .enumerate()
        .map(|(num, line)| (num + 1, line))
        .filter_map(|(num, line)| match lexer::definition_name(line) {
            Some(name) => Some(GrammarEntry::new(name, line, num)),
            None => {
                trace!("line {} is not a definition", num);
                None
            }
        })
        .collect()
}

pub fn scan_file(path: &Path) -> GenResult<Vec<GrammarEntry>> {
    // Stray non-UTF-8 bytes only ever spoil the lines they sit on
    let bytes = std::fs::read(path).map_err(|e| input_error(e, path))?;
    let entries = scan(&String::from_utf8_lossy(&bytes));

    for entry in &entries {
        debug!("{} {:?} `{}`", Location::at(path, entry.line), entry.kind(), entry.name);
    }

    Ok(entries)
}
