//! Boolean encoding between UI flags and backend literals.
//!
//! Each direction has its own polarity.  A flag can be inverted on decode and
//! direct on encode (or the other way round), and the two must never be
//! assumed symmetric.

use crate::domain::value::{bool_literal, FALSE_LITERAL, TRUE_LITERAL};

/// How one direction maps a backend literal to a UI boolean.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Polarity {
    /// `"True"` ↔ `true`.
    Direct,
    /// `"False"` ↔ `true`.
    Inverted,
}

impl Polarity {
    /// Decodes a raw backend value.
    ///
    /// Only an exact literal match counts; any other string (including
    /// `"true"`, `"1"` or garbage) decodes as if the match failed.
    pub fn decode(self, raw: &str) -> bool {
        match self {
            Polarity::Direct => raw == TRUE_LITERAL,
            Polarity::Inverted => raw == FALSE_LITERAL,
        }
    }

    /// Encodes a UI boolean to its backend literal.
    pub fn encode(self, value: bool) -> &'static str {
        match self {
            Polarity::Direct => bool_literal(value),
            Polarity::Inverted => bool_literal(!value),
        }
    }
}

/// Independent decode and encode polarities for one boolean preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FlagCodec {
    pub decode: Polarity,
    pub encode: Polarity,
}

impl FlagCodec {
    pub const DIRECT: FlagCodec = FlagCodec {
        decode: Polarity::Direct,
        encode: Polarity::Direct,
    };

    pub const fn new(decode: Polarity, encode: Polarity) -> Self {
        Self { decode, encode }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direct_decode_requires_exact_true_literal() {
        assert!(Polarity::Direct.decode("True"));
        assert!(!Polarity::Direct.decode("False"));
        assert!(!Polarity::Direct.decode("true"));
        assert!(!Polarity::Direct.decode("1"));
        assert!(!Polarity::Direct.decode(""));
    }

    #[test]
    fn test_inverted_decode_requires_exact_false_literal() {
        assert!(Polarity::Inverted.decode("False"));
        assert!(!Polarity::Inverted.decode("True"));
        assert!(!Polarity::Inverted.decode("false"));
        assert!(!Polarity::Inverted.decode("garbage"));
    }

    #[test]
    fn test_encode_writes_negation_when_inverted() {
        assert_eq!(Polarity::Direct.encode(true), "True");
        assert_eq!(Polarity::Direct.encode(false), "False");
        assert_eq!(Polarity::Inverted.encode(true), "False");
        assert_eq!(Polarity::Inverted.encode(false), "True");
    }
}
