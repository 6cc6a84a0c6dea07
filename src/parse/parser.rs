use super::ast::DiceTerm;
use super::lexer::{lexer, Lexer, TokenKind};
use crate::common::*;
use std::fmt;
use std::ops::Range;

type PResult<T> = Result<T, ParseErrorKind>;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("error at position {} ({slice:?}): {kind}", .span.start)]
pub struct ParseError {
    pub kind: ParseErrorKind,
    pub span: Range<usize>,
    pub slice: String,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ParseErrorKind {
    InvalidDieExpression,
    InvalidDieCount,
    InvalidDieSides,
    InvalidModifier(ModifierError),
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ModifierError {
    NotAnInteger,
    NoPrecedingDice,
}

impl fmt::Display for ParseErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidDieExpression => f.write_str("invalid die expression"),
            Self::InvalidDieCount => f.write_str("invalid die count; expected a positive integer"),
            Self::InvalidDieSides => f.write_str("invalid die sides; expected a positive integer"),
            Self::InvalidModifier(ModifierError::NotAnInteger) => {
                f.write_str("invalid modifier; not a valid integer")
            }
            Self::InvalidModifier(ModifierError::NoPrecedingDice) => {
                f.write_str("invalid modifier; a modifier must follow a dice group")
            }
        }
    }
}

pub struct Parser<'a> {
    source: &'a str,
    lexer: Lexer<'a>,
    terms: Vec<DiceTerm>,
    // Index of the term that a bare integer modifies.
    current: Option<usize>,
    flat_total: Total,
}

impl<'a> Parser<'a> {
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            lexer: lexer(source),
            terms: Vec::new(),
            current: None,
            flat_total: 0,
        }
    }

    pub fn parse(mut self) -> Result<Vec<DiceTerm>, ParseError> {
        let source = self.source;
        while let Some((kind, span)) = self.lexer.next() {
            let slice = &source[span.clone()];
            tracing::trace!(token = kind.as_str(), slice, "lexed token");

            let res = match kind {
                TokenKind::Dice => self.push_dice(slice),
                TokenKind::Integer => self.apply_modifier(slice),
                TokenKind::Error => {
                    tracing::trace!(slice, "skipping unrecognized input");
                    Ok(())
                }
            };
            res.map_err(|kind| ParseError {
                kind,
                span,
                slice: slice.to_owned(),
            })?;
        }

        tracing::debug!(
            terms = self.terms.len(),
            flat_total = self.flat_total,
            "parsed dice expression"
        );
        Ok(self.terms)
    }

    fn push_dice(&mut self, slice: &str) -> PResult<()> {
        let term = parse_dice(&compact(slice))?;
        self.current = Some(self.terms.len());
        self.terms.push(term);
        Ok(())
    }

    fn apply_modifier(&mut self, slice: &str) -> PResult<()> {
        let value: Int = compact(slice)
            .parse()
            .map_err(|_| ParseErrorKind::InvalidModifier(ModifierError::NotAnInteger))?;
        let term = self
            .current
            .and_then(|i| self.terms.get_mut(i))
            .ok_or(ParseErrorKind::InvalidModifier(ModifierError::NoPrecedingDice))?;
        term.set_modifier(value);
        self.flat_total = self.flat_total.saturating_add(Total::from(value));
        Ok(())
    }
}

fn compact(slice: &str) -> String {
    slice.chars().filter(|c| !c.is_whitespace()).collect()
}

fn parse_dice(s: &str) -> PResult<DiceTerm> {
    let parts: Vec<&str> = s.split('d').collect();
    let [count, sides] = parts[..] else {
        return Err(ParseErrorKind::InvalidDieExpression);
    };

    // A leading '+' is the term separator; a leading '-' would mean a negative count.
    let count = match count.strip_prefix('+').unwrap_or(count) {
        "" => NonZeroUInt::MIN,
        n => n.parse().map_err(|_| ParseErrorKind::InvalidDieCount)?,
    };
    let sides = sides
        .parse()
        .map_err(|_| ParseErrorKind::InvalidDieSides)?;
    Ok(DiceTerm::new(count, sides))
}
