//! Parses and rolls flat dice expressions such as `2d6+1d4+2`.
//!
//! ```
//! use rand::{rngs::StdRng, SeedableRng};
//!
//! let mut rng = StdRng::seed_from_u64(42);
//! let result = dice_roll::roll(&mut rng, "2d6+1d4+2").unwrap();
//! assert_eq!(result.outcomes().len(), 2);
//! assert!(result.grand_total() <= result.max_possible());
//! ```

mod common;
mod error;
pub mod parse;
pub mod roll;

pub use common::{Int, NonZeroUInt, Total, UInt};
pub use error::Error;
pub use parse::{parse, DiceTerm, ParseError};
pub use roll::{RollError, RollOutcome, RollResult, Roller, DEFAULT_MAX_ROLLS};

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Parses `expression` and rolls every dice term with `roller`.
///
/// At most [`DEFAULT_MAX_ROLLS`] dice are rolled; use [`roll_bounded`] for another cap, or
/// [`roll::RollContext::new_unbounded`] to lift it.
pub fn roll<R: Roller + ?Sized>(roller: &mut R, expression: &str) -> Result<RollResult> {
    eval(roller, expression, Some(DEFAULT_MAX_ROLLS))
}

/// Like [`roll`], but fails with [`RollError::TooManyRolls`] if the expression would roll more
/// than `max_rolls` dice.
pub fn roll_bounded<R: Roller + ?Sized>(
    roller: &mut R,
    expression: &str,
    max_rolls: usize,
) -> Result<RollResult> {
    eval(roller, expression, Some(max_rolls))
}

fn eval<R: Roller + ?Sized>(
    roller: &mut R,
    expression: &str,
    max_rolls: Option<usize>,
) -> Result<RollResult> {
    let terms = parse(expression)?;
    Ok(roll::eval(&terms, roller, max_rolls)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse::ParseErrorKind;
    use rand::{rngs::StdRng, SeedableRng};

    struct Always(UInt);

    impl Roller for Always {
        fn int_in_range(&mut self, _n: NonZeroUInt) -> UInt {
            self.0
        }
    }

    #[test]
    fn test_roll() {
        assert_eq!(roll(&mut Always(3), "1d6").unwrap().grand_total(), 4);
        assert_eq!(roll(&mut Always(3), "1d6+2").unwrap().grand_total(), 6);
        assert_eq!(roll(&mut Always(3), "1d6-2").unwrap().grand_total(), 2);
        assert_eq!(roll(&mut Always(3), "d6").unwrap().grand_total(), 4);
    }

    #[test]
    fn test_roll_propagates_parse_error() {
        let err = roll(&mut Always(0), "1d6+2d0").unwrap_err();
        match err {
            Error::Parse(e) => assert_eq!(e.kind, ParseErrorKind::InvalidDieSides),
            e => panic!("unexpected error: {}", e),
        }
    }

    #[test]
    fn test_roll_errors() {
        assert_eq!(
            roll(&mut Always(0), "+5").unwrap_err().to_string(),
            "error at position 0 (\"+5\"): invalid modifier; a modifier must follow a dice group"
        );
        assert_eq!(
            roll(&mut Always(0), "").unwrap_err(),
            Error::Roll(RollError::NoDiceTerms)
        );
        assert_eq!(
            roll_bounded(&mut Always(0), "20d6", 10).unwrap_err(),
            Error::Roll(RollError::TooManyRolls)
        );
    }

    #[test]
    fn test_roll_caps_huge_counts() {
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(
            roll(&mut rng, "4294967295d6").unwrap_err(),
            Error::Roll(RollError::TooManyRolls)
        );
        let limit = format!("{}d1", DEFAULT_MAX_ROLLS);
        assert_eq!(
            roll(&mut rng, &limit).unwrap().grand_total(),
            DEFAULT_MAX_ROLLS as Total
        );
        let over = format!("{}d1+1d1", DEFAULT_MAX_ROLLS);
        assert_eq!(
            roll(&mut rng, &over).unwrap_err(),
            Error::Roll(RollError::TooManyRolls)
        );
    }

    #[test]
    fn test_dyn_roller() {
        let mut always = Always(1);
        let roller: &mut dyn Roller = &mut always;
        assert_eq!(roll(roller, "3d4").unwrap().grand_total(), 6);
    }
}
