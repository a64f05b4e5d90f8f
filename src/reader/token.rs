//! Module for extracting tlpin tokens from source text.

use crate::config::{ErrorPolicy, LexerConfig};
use crate::reader::{number, LexError, LexErrorKind, LexResult, Position};

/// A tlpin token.
///
/// Spaces and tabs only separate tokens; newlines are tokens of their own.
#[derive(Debug, Clone, PartialEq, PartialOrd)]
pub enum Token {
    /// String literal, with escapes resolved.
    String(String),
    Integer(i64),
    Float(f64),
    /// Anything that is not a number, string or punctuation.
    Atom(String),
    Newline,
    /// `(` or `)`.
    Parenthesis(char),
    Character(u8),
    /// `{` or `}`.
    Bracket(char),
}

impl Token {
    /// Name of the token kind, as shown in diagnostics.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Token::String(_) => "TOKEN_STRING",
            Token::Integer(_) => "TOKEN_INTEGER",
            Token::Float(_) => "TOKEN_FLOAT",
            Token::Atom(_) => "TOKEN_ATOM",
            Token::Newline => "TOKEN_NEWLINE",
            Token::Parenthesis(_) => "TOKEN_PARENTHESIS",
            Token::Character(_) => "TOKEN_CHARACTER",
            Token::Bracket(_) => "TOKEN_BRACKET",
        }
    }
}

/// A token along with its starting position in the input.
/// Lines count from 1, columns from 0.
#[derive(Debug, Clone, PartialEq, PartialOrd)]
pub struct TokenOffset {
    pub token: Token,
    pub line: usize,
    pub column: usize,
}

impl TokenOffset {
    fn new(at: Position, token: Token) -> Self {
        TokenOffset {
            token,
            line: at.line,
            column: at.column,
        }
    }

    pub fn position(&self) -> Position {
        Position {
            line: self.line,
            column: self.column,
        }
    }
}

impl From<TokenOffset> for Token {
    fn from(value: TokenOffset) -> Self {
        value.token
    }
}

/// Output of a lexing pass that may have recorded errors.
///
/// If the pass stopped early, `tokens` holds what was read up to that point.
#[derive(Debug, Default)]
pub struct Lexed {
    pub tokens: Vec<TokenOffset>,
    pub errors: Vec<LexError>,
}

impl Lexed {
    pub fn failed(&self) -> bool {
        !self.errors.is_empty()
    }

    /// The tokens, or the first error encountered.
    pub fn into_result(self) -> LexResult<Vec<TokenOffset>> {
        match self.errors.into_iter().next() {
            Some(err) => Err(err),
            None => Ok(self.tokens),
        }
    }
}

/// Split the input into its constituent tokens, stopping at the first error.
pub fn tokenize(input: &[u8], config: &LexerConfig) -> LexResult<Vec<TokenOffset>> {
    tokenize_collect(input, config).into_result()
}

/// Split the input into tokens, following the config's error policy.
///
/// Under [`ErrorPolicy::Collect`] every recoverable error is recorded and
/// lexing continues, so `errors` can hold several entries.
pub fn tokenize_collect(input: &[u8], config: &LexerConfig) -> Lexed {
    let mut lexer = Lexer::new(input, config);
    if let Err(err) = lexer.run() {
        lexer.errors.push(err);
    }
    tracing::debug!(
        tokens = lexer.tokens.len(),
        errors = lexer.errors.len(),
        "tokenized input"
    );
    Lexed {
        tokens: lexer.tokens,
        errors: lexer.errors,
    }
}

/// Lexer state over a borrowed input.
pub(super) struct Lexer<'a> {
    pub(super) input: &'a [u8],
    pub(super) index: usize,
    pub(super) line: usize,
    pub(super) column: usize,

    // Bytes of the atom or number being accumulated, and where it began.
    // `pending` is non-empty exactly when `pending_start` is set.
    pending: Vec<u8>,
    pending_start: Option<Position>,

    tokens: Vec<TokenOffset>,
    errors: Vec<LexError>,
    pub(super) config: LexerConfig,
}

impl<'a> Lexer<'a> {
    pub(super) fn new(input: &'a [u8], config: &LexerConfig) -> Self {
        Lexer {
            input,
            index: 0,
            line: 1,
            column: 0,
            // Tokens are bounded in size, so the buffer never needs to grow.
            pending: Vec::with_capacity(config.max_token_size),
            pending_start: None,
            tokens: Vec::new(),
            errors: Vec::new(),
            config: *config,
        }
    }

    pub(super) fn position(&self) -> Position {
        Position {
            line: self.line,
            column: self.column,
        }
    }

    pub(super) fn peek(&self) -> Option<u8> {
        self.input.get(self.index).copied()
    }

    /// Move past `bytes` input bytes on the current line.
    pub(super) fn advance(&mut self, bytes: usize) {
        self.index += bytes;
        self.column += bytes;
    }

    /// Move past a newline.
    pub(super) fn advance_line(&mut self) {
        self.index += 1;
        self.line += 1;
        self.column = 0;
    }

    pub(super) fn push(&mut self, at: Position, token: Token) {
        tracing::trace!(line = at.line, column = at.column, ?token, "token");
        self.tokens.push(TokenOffset::new(at, token));
    }

    /// Handle an error according to the error policy:
    /// keep it and carry on, or hand it back to stop lexing.
    pub(super) fn report(&mut self, err: LexError) -> LexResult<()> {
        if self.config.policy == ErrorPolicy::Collect && err.is_recoverable() {
            tracing::warn!(line = err.line, column = err.column, "{}", err);
            self.errors.push(err);
            Ok(())
        } else {
            Err(err)
        }
    }

    fn run(&mut self) -> LexResult<()> {
        self.check_utf8()?;
        while let Some(byte) = self.peek() {
            match byte {
                b'\n' => {
                    self.flush()?;
                    self.push(self.position(), Token::Newline);
                    self.advance_line();
                }
                b'(' | b')' => {
                    self.flush()?;
                    self.push(self.position(), Token::Parenthesis(byte as char));
                    self.advance(1);
                }
                b'{' | b'}' if self.config.syntax.brackets => {
                    self.flush()?;
                    self.push(self.position(), Token::Bracket(byte as char));
                    self.advance(1);
                }
                b'"' => {
                    self.flush()?;
                    self.lex_string()?;
                }
                b'\'' if self.config.syntax.character_literals => {
                    self.flush()?;
                    self.lex_character()?;
                }
                b' ' | b'\t' => {
                    self.flush()?;
                    self.advance(1);
                }
                _ => self.accumulate(byte)?,
            }
        }
        self.flush()
    }

    /// Reject input that is not UTF-8, at the position of the first bad byte.
    fn check_utf8(&self) -> LexResult<()> {
        let Err(e) = std::str::from_utf8(self.input) else {
            return Ok(());
        };
        let valid = &self.input[..e.valid_up_to()];
        let line_start = valid
            .iter()
            .rposition(|&b| b == b'\n')
            .map_or(0, |i| i + 1);
        let at = Position {
            line: 1 + valid.iter().filter(|&&b| b == b'\n').count(),
            column: valid.len() - line_start,
        };
        Err(LexError::new(
            at,
            LexErrorKind::InvalidUtf8(self.input[e.valid_up_to()]),
        ))
    }

    /// Add a byte to the pending multi-byte token.
    fn accumulate(&mut self, byte: u8) -> LexResult<()> {
        if self.pending.len() >= self.config.max_token_size {
            // The limit can fall inside a multi-byte character; show whole ones.
            let fragment = match std::str::from_utf8(&self.pending) {
                Ok(s) => s,
                Err(e) => {
                    std::str::from_utf8(&self.pending[..e.valid_up_to()]).unwrap_or_default()
                }
            }
            .to_owned();
            return Err(LexError::new(
                self.position(),
                LexErrorKind::TokenTooLarge {
                    max: self.config.max_token_size,
                    fragment,
                },
            ));
        }
        if self.pending_start.is_none() {
            self.pending_start = Some(self.position());
        }
        self.pending.push(byte);
        self.advance(1);
        Ok(())
    }

    /// Classify and emit the pending token, if there is one.
    pub(super) fn flush(&mut self) -> LexResult<()> {
        let Some(start) = self.pending_start.take() else {
            return Ok(());
        };
        let text = utf8(std::mem::take(&mut self.pending), start)?;

        let token = match number::classify(&text, self.config.integers) {
            Some(Ok(token)) => token,
            Some(Err(kind)) => {
                self.report(LexError::new(start, kind))?;
                Token::Atom(text)
            }
            None => Token::Atom(text),
        };
        self.push(start, token);
        Ok(())
    }
}

/// Payload text of a token starting at `at`.
///
/// Input is checked to be UTF-8 before lexing and tokens split only at ASCII
/// bytes, so this fails only if that check is bypassed.
pub(super) fn utf8(bytes: Vec<u8>, at: Position) -> LexResult<String> {
    String::from_utf8(bytes).map_err(|e| {
        let bad = e.as_bytes()[e.utf8_error().valid_up_to()];
        LexError::new(at, LexErrorKind::InvalidUtf8(bad))
    })
}
