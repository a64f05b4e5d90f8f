//! Deciding whether a multi-byte token is a number.

use std::num::IntErrorKind;

use crate::reader::{LexErrorKind, Token};

mod regex {
    use regex::Regex;
    use std::sync::OnceLock;

    /// Spellings of infinity that `f64::from_str` accepts.
    pub(super) fn infinity() -> &'static Regex {
        static INFINITY: OnceLock<Regex> = OnceLock::new();
        INFINITY.get_or_init(|| {
            Regex::new(r"\A(?i)[+-]?inf(inity)?\z").expect("could not compile regex for infinity")
        })
    }

    /// A float literal whose mantissa is all zeroes, e.g. `-0.00e7`.
    pub(super) fn zero() -> &'static Regex {
        static ZERO: OnceLock<Regex> = OnceLock::new();
        ZERO.get_or_init(|| {
            Regex::new(r"\A[+-]?0*\.?0*([eE]|\z)").expect("could not compile regex for zero")
        })
    }
}

/// Classify the text of a pending token.
///
/// `None` if the text is not numeric (so it is an atom),
/// `Some(Err(..))` if it is numeric but out of range.
/// The whole text has to parse; there is no trailing-garbage tolerance.
pub(super) fn classify(text: &str, integers: bool) -> Option<Result<Token, LexErrorKind>> {
    if integers {
        match text.parse::<i64>() {
            Ok(v) => return Some(Ok(Token::Integer(v))),
            Err(e) => match e.kind() {
                IntErrorKind::PosOverflow => {
                    return Some(Err(LexErrorKind::Overflow {
                        numeric: "Integer",
                        text: text.to_owned(),
                    }))
                }
                IntErrorKind::NegOverflow => {
                    return Some(Err(LexErrorKind::Underflow {
                        numeric: "Integer",
                        text: text.to_owned(),
                    }))
                }
                _ => (),
            },
        }
    }

    let v: f64 = text.parse().ok()?;
    if v.is_infinite() && !regex::infinity().is_match(text) {
        return Some(Err(LexErrorKind::Overflow {
            numeric: "Float",
            text: text.to_owned(),
        }));
    }
    // Subnormal results count as underflow too, as with strtod's ERANGE.
    let subnormal = v != 0.0 && v.abs() < f64::MIN_POSITIVE;
    if subnormal || (v == 0.0 && !regex::zero().is_match(text)) {
        return Some(Err(LexErrorKind::Underflow {
            numeric: "Float",
            text: text.to_owned(),
        }));
    }
    Some(Ok(Token::Float(v)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recognize_zeroes() {
        for zero in ["0", "-0", "+0.0", ".0", "0.", "000.000e99", "0E-5"] {
            assert!(regex::zero().is_match(zero), "did not recognize zero {}", zero);
        }
        for nonzero in ["1e-400", "0.001e-400", "-.5e-999"] {
            assert!(!regex::zero().is_match(nonzero), "{} is not zero", nonzero);
        }
    }

    #[test]
    fn recognize_infinity() {
        for inf in ["inf", "INF", "-Infinity", "+inf"] {
            assert!(regex::infinity().is_match(inf), "did not recognize {}", inf);
        }
        assert!(!regex::infinity().is_match("1e999"));
        assert!(!regex::infinity().is_match("infinit"));
    }

    #[test]
    fn classify_numbers() {
        assert_eq!(classify("12", true), Some(Ok(Token::Integer(12))));
        assert_eq!(classify("12", false), Some(Ok(Token::Float(12.0))));
        assert_eq!(classify("-0.0", true), Some(Ok(Token::Float(-0.0))));
        assert_eq!(classify("1e-999", true).map(|r| r.is_err()), Some(true));
        assert_eq!(
            classify("2.2250738585072014e-308", true),
            Some(Ok(Token::Float(f64::MIN_POSITIVE)))
        );
        assert_eq!(classify("99999999999999999999", false), Some(Ok(Token::Float(1e20))));
        assert_eq!(classify("pona", true), None);
        assert_eq!(classify("", true), None);
    }

    #[test]
    fn subnormals_underflow() {
        for text in ["1e-310", "4.94e-324", "-2e-320"] {
            assert_eq!(
                classify(text, true),
                Some(Err(LexErrorKind::Underflow {
                    numeric: "Float",
                    text: text.to_owned()
                })),
                "for {text}"
            );
        }
    }

    #[test]
    fn nan_is_a_float() {
        match classify("nan", true) {
            Some(Ok(Token::Float(v))) => assert!(v.is_nan()),
            v => panic!("unexpected classification: {:?}", v),
        }
    }
}
