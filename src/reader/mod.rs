//! Support for reading tlpin source into tokens.

use std::io::{ErrorKind, Read};
use std::path::Path;

pub use dump::{dump_tokens, TokenLine};
pub use token::{tokenize, tokenize_collect, Lexed, Token, TokenOffset};

mod dump;
mod number;
mod string;
mod token;

/// A location in the source: 1-indexed line, 0-indexed column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Position {
    pub line: usize,
    pub column: usize,
}

/// Why the lexer gave up on (or complained about) its input.
#[derive(Debug, Clone, PartialEq)]
pub enum LexErrorKind {
    /// The input is not UTF-8; this is the first offending byte.
    InvalidUtf8(u8),
    UnknownEscape(char),
    UnterminatedString,
    UnterminatedCharacter,
    /// The pending token already held `max` bytes when another arrived.
    TokenTooLarge { max: usize, fragment: String },
    /// `numeric` is "Integer" or "Float".
    Overflow { numeric: &'static str, text: String },
    Underflow { numeric: &'static str, text: String },
}

/// Error from the lexer, with the position it applies to.
///
/// Unterminated literals report the position of their opening quote,
/// numeric errors the start of the number,
/// and everything else the position where the lexer noticed.
#[derive(Debug, Clone, PartialEq)]
pub struct LexError {
    pub line: usize,
    pub column: usize,
    pub kind: LexErrorKind,
}

impl LexError {
    pub(crate) fn new(at: Position, kind: LexErrorKind) -> Self {
        LexError {
            line: at.line,
            column: at.column,
            kind,
        }
    }

    pub fn position(&self) -> Position {
        Position {
            line: self.line,
            column: self.column,
        }
    }

    /// Whether the lexer can keep going after this error when collecting.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self.kind,
            LexErrorKind::UnknownEscape(_)
                | LexErrorKind::Overflow { .. }
                | LexErrorKind::Underflow { .. }
        )
    }

    /// Render as a diagnostic line, `name(line:column): Error: message`.
    pub fn annotate(&self, source_name: impl AsRef<str>) -> String {
        format!(
            "{}({}:{}): Error: {}",
            source_name.as_ref(),
            self.line,
            self.column,
            self
        )
    }
}

impl std::fmt::Display for LexError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.kind {
            LexErrorKind::InvalidUtf8(b) => write!(f, "Invalid UTF-8 byte 0x{b:02X}"),
            LexErrorKind::UnknownEscape(c) => write!(f, "Unknown escape sequence '\\{c}'"),
            LexErrorKind::UnterminatedString => write!(f, "Unterminated string"),
            LexErrorKind::UnterminatedCharacter => write!(f, "Unterminated character literal"),
            LexErrorKind::TokenTooLarge { max, fragment } => write!(
                f,
                "Encountered token larger than the maximum allowed size {max}: {fragment}"
            ),
            LexErrorKind::Overflow { numeric, text } => {
                write!(f, "{numeric} conversion of '{text}' results in overflow")
            }
            LexErrorKind::Underflow { numeric, text } => {
                write!(f, "{numeric} conversion of '{text}' results in underflow")
            }
        }
    }
}

impl std::error::Error for LexError {}

/// The main result type for this module.
pub type LexResult<T> = Result<T, LexError>;

impl From<LexError> for std::io::Error {
    fn from(value: LexError) -> Self {
        std::io::Error::new(ErrorKind::InvalidInput, value.to_string())
    }
}

/// Read a whole source file into memory.
/// A path of `-` reads standard input instead.
pub fn read_source(path: impl AsRef<Path>) -> std::io::Result<Vec<u8>> {
    let path = path.as_ref();
    let mut bytes = Vec::new();
    if path == Path::new("-") {
        std::io::stdin().lock().read_to_end(&mut bytes)?;
    } else {
        std::fs::File::open(path)?.read_to_end(&mut bytes)?;
    }
    tracing::debug!(path = %path.display(), bytes = bytes.len(), "read source");
    Ok(bytes)
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn read_source_file() -> std::io::Result<()> {
        let mut file = tempfile::NamedTempFile::new()?;
        file.write_all(b"30 10 pona\n")?;
        let bytes = read_source(file.path())?;
        assert_eq!(bytes, b"30 10 pona\n");
        Ok(())
    }

    #[test]
    fn read_source_missing() {
        let dir = tempfile::tempdir().unwrap();
        let err = read_source(dir.path().join("nope.tlpin")).expect_err("file should not exist");
        assert_eq!(err.kind(), ErrorKind::NotFound);
    }

    #[test]
    fn annotate_error() {
        let err = LexError::new(
            Position { line: 3, column: 7 },
            LexErrorKind::UnterminatedString,
        );
        assert_eq!(
            err.annotate("test.tlpin"),
            "test.tlpin(3:7): Error: Unterminated string"
        );
    }

    #[test]
    fn lex_error_to_io() {
        let err = LexError::new(
            Position { line: 1, column: 0 },
            LexErrorKind::UnknownEscape('q'),
        );
        let io: std::io::Error = err.into();
        assert_eq!(io.kind(), ErrorKind::InvalidInput);
        assert_eq!(io.to_string(), "Unknown escape sequence '\\q'");
    }
}
