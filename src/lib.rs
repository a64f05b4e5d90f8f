//! Lexer and stack evaluator for tlpin, a small stack-based language.
//!
//! The two halves are independent: [`reader`] turns source text into
//! positioned tokens, and [`eval`] runs a hand-built tree of functions
//! against a value stack.

pub mod config;
pub mod data;
pub mod eval;
pub mod reader;

#[cfg(feature = "tracing-subscriber")]
pub mod logging;

pub use config::{ErrorPolicy, LexerConfig, Syntax};
pub use data::{dump_stack, Value};
pub use eval::{execute, Function, Native};
pub use reader::{read_source, tokenize, tokenize_collect, Token, TokenOffset};
