/*
    Run configuration, resolved once from the command line
*/

use std::path::PathBuf;

use crate::cli::{Cli, Lang};

pub const DEFAULT_COPYRIGHT: &str = "Copyright 2020 The KCL Authors. All rights reserved.";

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub grammar: PathBuf,
    pub output: PathBuf,
    pub lang: Lang,
    pub copyright: String,
}

impl Config {
    // The grammar's file name, as it is quoted in generated comments
    pub fn grammar_name(&self) -> String {
        match self.grammar.file_name() {
            Some(name) => name.to_string_lossy().into_owned(),
            None => self.grammar.display().to_string(),
        }
    }
}

impl From<Cli> for Config {
    fn from(cli: Cli) -> Self {
        Config {
            grammar: cli.file,
            output: cli.output,
            lang: cli.lang,
            copyright: cli.copyright.unwrap_or_else(|| DEFAULT_COPYRIGHT.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::*;

    #[test]
    fn config_from_defaults() {
        let config = Config::from(Cli::try_parse_from(["larktok"]).unwrap());
        assert_eq!(config, Config {
            grammar: PathBuf::from("../grammar/kcl.lark"),
            output: PathBuf::from("lark_token.py"),
            lang: Lang::Python,
            copyright: DEFAULT_COPYRIGHT.to_string()
        });
    }

    #[test]
    fn grammar_name_is_file_name() {
        let mut config = Config::from(Cli::try_parse_from(["larktok"]).unwrap());
        assert_eq!(config.grammar_name(), "kcl.lark");

        config.grammar = PathBuf::from("python.lark");
        assert_eq!(config.grammar_name(), "python.lark");

        config.grammar = PathBuf::from("..");
        assert_eq!(config.grammar_name(), "..");
    }
}
