//! Quoted literals: strings and (optionally) characters.

use crate::reader::token::{self, Lexer};
use crate::reader::{LexError, LexErrorKind, LexResult, Token};

impl Lexer<'_> {
    /// Lex a string literal; the cursor is on the opening quote.
    ///
    /// Strings may span lines. Running out of input is reported at the
    /// opening quote, since that is where the user has to look.
    pub(super) fn lex_string(&mut self) -> LexResult<()> {
        let start = self.position();
        self.advance(1);

        let mut content = Vec::new();
        loop {
            let Some(byte) = self.peek() else {
                return Err(LexError::new(start, LexErrorKind::UnterminatedString));
            };
            match byte {
                b'"' => {
                    self.advance(1);
                    break;
                }
                b'\n' => {
                    content.push(byte);
                    self.advance_line();
                }
                b'\\' => {
                    let at = self.position();
                    let Some(escaped) = self.input.get(self.index + 1).copied() else {
                        return Err(LexError::new(start, LexErrorKind::UnterminatedString));
                    };
                    match unescape(escaped, b'"') {
                        Some(c) => content.push(c),
                        None => self.report(LexError::new(
                            at,
                            LexErrorKind::UnknownEscape(escaped as char),
                        ))?,
                    }
                    self.advance(2);
                }
                _ => {
                    content.push(byte);
                    self.advance(1);
                }
            }
        }

        let content = token::utf8(content, start)?;
        self.push(start, Token::String(content));
        Ok(())
    }

    /// Lex a character literal, `'c'` or `'\n'`; the cursor is on the opening quote.
    pub(super) fn lex_character(&mut self) -> LexResult<()> {
        let start = self.position();
        let unterminated = || LexError::new(start, LexErrorKind::UnterminatedCharacter);
        self.advance(1);

        let mut character = self.peek().ok_or_else(unterminated)?;
        if character == b'\\' {
            let at = self.position();
            self.advance(1);
            let escaped = self.peek().ok_or_else(unterminated)?;
            character = match unescape(escaped, b'\'') {
                Some(c) => c,
                None => {
                    self.report(LexError::new(
                        at,
                        LexErrorKind::UnknownEscape(escaped as char),
                    ))?;
                    escaped
                }
            };
        }
        self.advance(1);

        if self.peek() != Some(b'\'') {
            return Err(unterminated());
        }
        self.advance(1);

        self.push(start, Token::Character(character));
        Ok(())
    }
}

/// Resolve the byte after a backslash, inside a literal delimited by `quote`.
fn unescape(escaped: u8, quote: u8) -> Option<u8> {
    match escaped {
        b'\\' => Some(b'\\'),
        b'n' => Some(b'\n'),
        b't' => Some(b'\t'),
        c if c == quote => Some(quote),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use crate::config::{ErrorPolicy, LexerConfig, Syntax};
    use crate::reader::{tokenize, LexErrorKind, LexResult, Position, Token, TokenOffset};

    fn lex(input: &[u8]) -> LexResult<Vec<TokenOffset>> {
        tokenize(input, &LexerConfig::default())
    }

    fn with_characters() -> LexerConfig {
        LexerConfig::default().with_syntax(Syntax {
            character_literals: true,
            ..Syntax::default()
        })
    }

    #[test]
    fn string_escapes() -> LexResult<()> {
        let tokens = lex(br#"  "\"hello\\\" a\tb\nc""#)?;
        assert_eq!(tokens.len(), 1);
        assert_eq!(
            tokens[0].token,
            Token::String("\"hello\\\" a\tb\nc".to_owned())
        );
        assert_eq!(tokens[0].position(), Position { line: 1, column: 2 });
        Ok(())
    }

    #[test]
    fn escaped_newline() -> LexResult<()> {
        let tokens = lex(br#""abc\ndef""#)?;
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].token, Token::String("abc\ndef".to_owned()));
        assert_eq!(tokens[0].position(), Position { line: 1, column: 0 });
        Ok(())
    }

    #[test]
    fn columns_after_string() -> LexResult<()> {
        // Escapes take two columns; the closing quote takes one.
        let tokens = lex(br#""a\tb" x"#)?;
        assert_eq!(tokens[1].token, Token::Atom("x".to_owned()));
        assert_eq!(tokens[1].position(), Position { line: 1, column: 7 });
        Ok(())
    }

    #[test]
    fn string_ends_token() -> LexResult<()> {
        let tokens = lex(br#"ab"cd"ef"#)?;
        let got: Vec<Token> = tokens.into_iter().map(Token::from).collect();
        assert_eq!(
            got,
            vec![
                Token::Atom("ab".to_owned()),
                Token::String("cd".to_owned()),
                Token::Atom("ef".to_owned()),
            ]
        );
        Ok(())
    }

    #[test]
    fn multi_line_string() -> LexResult<()> {
        let tokens = lex(b"(\n \"and \nkeep\" going)")?;
        let got: Vec<(Token, usize, usize)> = tokens
            .into_iter()
            .map(|t| (t.token, t.line, t.column))
            .collect();
        assert_eq!(
            got,
            vec![
                (Token::Parenthesis('('), 1, 0),
                (Token::Newline, 1, 1),
                (Token::String("and \nkeep".to_owned()), 2, 1),
                (Token::Atom("going".to_owned()), 3, 6),
                (Token::Parenthesis(')'), 3, 11),
            ]
        );
        Ok(())
    }

    #[test]
    fn error_on_unexpected_stringend() {
        let input = b"(\n\"hello1\"\n \"hello\n\n)";
        // The unterminated string starts at line 3, column 1.
        let err = lex(input).expect_err("expected error for input");
        assert_eq!(err.kind, LexErrorKind::UnterminatedString);
        assert_eq!(err.position(), Position { line: 3, column: 1 });
    }

    #[test]
    fn error_on_escaped_stringend() {
        let err = lex(br#"x "\"hello\\\""#).expect_err("expected error for input");
        assert_eq!(err.kind, LexErrorKind::UnterminatedString);
        assert_eq!(err.position(), Position { line: 1, column: 2 });

        let err = lex(b"\"abc\\").expect_err("expected error for input");
        assert_eq!(err.kind, LexErrorKind::UnterminatedString);
        assert_eq!(err.position(), Position { line: 1, column: 0 });
    }

    #[test]
    fn unknown_escape() {
        let err = lex(br#"  "ab\xcd""#).expect_err("expected error for input");
        assert_eq!(err.kind, LexErrorKind::UnknownEscape('x'));
        assert_eq!(err.position(), Position { line: 1, column: 5 });
        assert_eq!(err.to_string(), "Unknown escape sequence '\\x'");
    }

    #[test]
    fn character_literals() -> LexResult<()> {
        let tokens = tokenize(br"'a' '\'' '\n'", &with_characters())?;
        let got: Vec<(Token, usize)> = tokens.into_iter().map(|t| (t.token, t.column)).collect();
        assert_eq!(
            got,
            vec![
                (Token::Character(b'a'), 0),
                (Token::Character(b'\''), 4),
                (Token::Character(b'\n'), 9),
            ]
        );
        Ok(())
    }

    #[test]
    fn quote_is_an_atom_without_character_literals() -> LexResult<()> {
        let tokens = lex(b"don't")?;
        assert_eq!(tokens[0].token, Token::Atom("don't".to_owned()));
        Ok(())
    }

    #[test]
    fn unterminated_character() {
        for input in [&b"  'a"[..], &b"  '"[..], &b"  'ab'"[..], &b"  '\\"[..]] {
            let err = tokenize(input, &with_characters()).expect_err("expected error for input");
            assert_eq!(err.kind, LexErrorKind::UnterminatedCharacter);
            assert_eq!(err.position(), Position { line: 1, column: 2 });
        }
    }

    #[test]
    fn character_unknown_escape_collected() {
        let config = with_characters().with_policy(ErrorPolicy::Collect);
        let lexed = crate::reader::tokenize_collect(br"'\z'", &config);
        assert_eq!(lexed.errors.len(), 1);
        assert_eq!(lexed.errors[0].kind, LexErrorKind::UnknownEscape('z'));
        assert_eq!(lexed.tokens[0].token, Token::Character(b'z'));
    }
}
