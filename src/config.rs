//! Knobs for the reader.
//!
//! There is no configuration file; callers build a [`LexerConfig`] in code,
//! starting from `LexerConfig::default()`.

/// Largest multi-byte token (atom or number) the lexer accepts by default.
pub const MAX_TOKEN_SIZE: usize = 256;

/// What the lexer does when it finds malformed input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ErrorPolicy {
    /// Stop at the first error.
    #[default]
    Abort,
    /// Record recoverable errors and keep going, so that one pass reports
    /// everything wrong with the input.
    /// Unterminated literals and oversize tokens still stop the lexer.
    Collect,
}

/// Optional token kinds, off by default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Syntax {
    /// `'c'` literals, producing `Token::Character`.
    pub character_literals: bool,
    /// `{` and `}`, producing `Token::Bracket`.
    pub brackets: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LexerConfig {
    pub max_token_size: usize,
    /// Try an i64 parse before falling back to f64.
    pub integers: bool,
    pub policy: ErrorPolicy,
    pub syntax: Syntax,
}

impl Default for LexerConfig {
    fn default() -> Self {
        LexerConfig {
            max_token_size: MAX_TOKEN_SIZE,
            integers: true,
            policy: ErrorPolicy::Abort,
            syntax: Syntax::default(),
        }
    }
}

impl LexerConfig {
    pub fn with_max_token_size(mut self, max_token_size: usize) -> Self {
        self.max_token_size = max_token_size;
        self
    }

    pub fn with_integers(mut self, integers: bool) -> Self {
        self.integers = integers;
        self
    }

    pub fn with_policy(mut self, policy: ErrorPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn with_syntax(mut self, syntax: Syntax) -> Self {
        self.syntax = syntax;
        self
    }
}
