use std::path::PathBuf;
use std::fmt::Display;

pub trait ErrorType: Display + PartialEq {}

#[derive(Debug, PartialEq, Clone)]
pub struct Location {
    pub file: PathBuf,
    pub line: usize
}

impl Location {
    // A location that points at a whole file rather than one of its lines
    pub fn file(file: impl Into<PathBuf>) -> Self {
        Location { file: file.into(), line: 0 }
    }

    pub fn at(file: impl Into<PathBuf>, line: usize) -> Self {
        Location { file: file.into(), line }
    }
}

impl Display for Location {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.line == 0 {
            write!(f, "{}", self.file.display())
        } else {
            write!(f, "{}:{}", self.file.display(), self.line)
        }
    }
}

#[derive(Debug, PartialEq)]
pub struct Error<T: ErrorType> {
    pub location: Location,
    pub error: T
}

impl<T: ErrorType> Display for Error<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "\x1b[31;49;1m[{}]\x1b[39;49;1m  {}\x1b[0m", self.location, self.error)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum GenErrorType {
    // The grammar file is missing or unreadable
    #[error("could not read grammar: {0}")]
    InputRead(std::io::Error),
    // The generated file could not be written
    #[error("could not write output: {0}")]
    OutputWrite(std::io::Error),
}

impl GenErrorType {
    pub fn exit_code(&self) -> exitcode::ExitCode {
        match self {
            GenErrorType::InputRead(_) => exitcode::NOINPUT,
            GenErrorType::OutputWrite(_) => exitcode::CANTCREAT,
        }
    }
}

impl ErrorType for GenErrorType {}

impl PartialEq for GenErrorType {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (GenErrorType::InputRead(a), GenErrorType::InputRead(b)) => a.kind() == b.kind(),
            (GenErrorType::OutputWrite(a), GenErrorType::OutputWrite(b)) => a.kind() == b.kind(),
            _ => false,
        }
    }
}

pub type GenError = Error<GenErrorType>;
pub type GenResult<T> = Result<T, GenError>;

pub fn input_error(error: std::io::Error, file: impl Into<PathBuf>) -> GenError {
    GenError {
        location: Location::file(file),
        error: GenErrorType::InputRead(error)
    }
}

pub fn output_error(error: std::io::Error, file: impl Into<PathBuf>) -> GenError {
    GenError {
        location: Location::file(file),
        error: GenErrorType::OutputWrite(error)
    }
}

#[cfg(test)]
mod tests {
    use std::io::ErrorKind;

    use super::*;

    #[test]
    fn location_display() {
        assert_eq!(Location::file("kcl.lark").to_string(), "kcl.lark");
        assert_eq!(Location::at("kcl.lark", 12).to_string(), "kcl.lark:12");
    }

    #[test]
    fn error_kinds_compare_by_io_kind() {
        let a = input_error(ErrorKind::NotFound.into(), "a.lark");
        let b = input_error(ErrorKind::NotFound.into(), "a.lark");
        let c = input_error(ErrorKind::PermissionDenied.into(), "a.lark");
        let d = output_error(ErrorKind::NotFound.into(), "a.lark");

        assert_eq!(a, b);
        assert_ne!(a, c);
        assert_ne!(a, d);
    }

    #[test]
    fn exit_codes() {
        assert_eq!(GenErrorType::InputRead(ErrorKind::NotFound.into()).exit_code(), exitcode::NOINPUT);
        assert_eq!(GenErrorType::OutputWrite(ErrorKind::NotFound.into()).exit_code(), exitcode::CANTCREAT);
        assert_ne!(exitcode::NOINPUT, exitcode::OK);
    }

    #[test]
    fn error_display_names_the_file() {
        let error = output_error(ErrorKind::PermissionDenied.into(), "out/lark_token.py");
        let shown = error.to_string();
        assert!(shown.contains("[out/lark_token.py]"));
        assert!(shown.contains("could not write output"));
    }
}
