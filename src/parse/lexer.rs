use logos::{Logos, SpannedIter};

pub(crate) type Lexer<'a> = SpannedIter<'a, TokenKind>;

pub(crate) fn lexer(s: &str) -> Lexer<'_> {
    TokenKind::lexer(s).spanned()
}

/// A sign may be separated from its digits by blanks (`2d6 - 1`); the parser strips them.
#[derive(Logos, Debug, Copy, Clone, Eq, PartialEq)]
pub(crate) enum TokenKind {
    #[regex(r"([+-][ \t]*)?[0-9]*d[0-9]+")]
    Dice,
    #[regex(r"([+-][ \t]*)?[0-9]+")]
    Integer,

    // Anything else is skipped by the parser, the same way an unmatched span is ignored.
    #[regex(r"[ \t\r\n]+", logos::skip)]
    #[error]
    Error,
}

impl TokenKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Dice => "<dice>",
            Self::Integer => "<integer>",
            Self::Error => "<error>",
        }
    }
}
