use std::path::PathBuf;

use clap::{Parser, ValueEnum};

#[derive(Parser)]
#[command(version, about)]
pub struct Cli {
    /// Lark grammar to read rules and tokens from
    #[arg(long, value_name = "PATH", default_value = "../grammar/kcl.lark")]
    pub file: PathBuf,

    /// Where to write the generated constants
    #[arg(long, value_name = "PATH", default_value = "lark_token.py")]
    pub output: PathBuf,

    /// Language of the generated file
    #[arg(long, value_enum, default_value_t = Lang::Python)]
    pub lang: Lang,

    /// Copyright line placed at the top of the generated file
    #[arg(long, value_name = "TEXT")]
    pub copyright: Option<String>
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum Lang {
    Python,
    Rust,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let cli = Cli::try_parse_from(["larktok"]).unwrap();
        assert_eq!(cli.file, PathBuf::from("../grammar/kcl.lark"));
        assert_eq!(cli.output, PathBuf::from("lark_token.py"));
        assert_eq!(cli.lang, Lang::Python);
        assert_eq!(cli.copyright, None);
    }

    #[test]
    fn explicit_flags() {
        let cli = Cli::try_parse_from([
            "larktok",
            "--file", "grammar/kcl.lark",
            "--output", "out/tokens.rs",
            "--lang", "rust",
            "--copyright", "Copyright 2024 Someone"
        ]).unwrap();
        assert_eq!(cli.file, PathBuf::from("grammar/kcl.lark"));
        assert_eq!(cli.output, PathBuf::from("out/tokens.rs"));
        assert_eq!(cli.lang, Lang::Rust);
        assert_eq!(cli.copyright.as_deref(), Some("Copyright 2024 Someone"));
    }

    #[test]
    fn unknown_lang_is_rejected() {
        assert!(Cli::try_parse_from(["larktok", "--lang", "go"]).is_err());
    }
}
