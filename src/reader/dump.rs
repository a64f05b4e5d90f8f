//! Human-readable token listings.

use std::io::Write;

use crate::data::fixed;
use crate::reader::{Token, TokenOffset};

/// A token together with the name of its source, written as one diagnostic line.
pub struct TokenLine<'a> {
    pub source_name: &'a str,
    pub token: &'a TokenOffset,
}

impl TokenLine<'_> {
    /// Write the line, including its trailing newline.
    /// Character payloads are written as their raw byte.
    pub fn write_to(&self, out: &mut impl Write) -> std::io::Result<()> {
        let TokenOffset {
            token,
            line,
            column,
        } = self.token;
        write!(
            out,
            "{}({}:{}): {}",
            self.source_name,
            line,
            column,
            token.kind_name()
        )?;
        match token {
            Token::String(s) => write!(out, ": \"{}\"", escaped(s, '"'))?,
            Token::Atom(s) => write!(out, ": {}", escaped(s, '"'))?,
            Token::Integer(v) => write!(out, ": {v}")?,
            Token::Float(v) => write!(out, ": {}", fixed(*v))?,
            Token::Character(c) => {
                out.write_all(b": '")?;
                match *c {
                    b'\\' | b'\'' => out.write_all(&[b'\\', *c])?,
                    b'\n' => out.write_all(b"\\n")?,
                    b'\t' => out.write_all(b"\\t")?,
                    _ => out.write_all(&[*c])?,
                }
                out.write_all(b"'")?;
            }
            Token::Parenthesis(c) | Token::Bracket(c) => write!(out, ": {c}")?,
            Token::Newline => (),
        }
        out.write_all(b"\n")
    }
}

/// Re-escape the characters the lexer resolves inside a literal.
fn escaped(s: &str, quote: char) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\t' => out.push_str("\\t"),
            c if c == quote => {
                out.push('\\');
                out.push(c);
            }
            c => out.push(c),
        }
    }
    out
}

/// Write one line per token.
pub fn dump_tokens(
    out: &mut impl Write,
    tokens: &[TokenOffset],
    source_name: &str,
) -> std::io::Result<()> {
    for token in tokens {
        TokenLine { source_name, token }.write_to(out)?;
    }
    Ok(())
}
