mod ctx;
mod error;
mod outcome;
mod roller;
mod stringify;

use crate::parse::DiceTerm;

type RResult<T> = Result<T, RollError>;

/// Dice cap used by [`crate::roll`]. Every rolled face is kept, so an uncapped `4294967295d6`
/// would need gigabytes of memory.
pub const DEFAULT_MAX_ROLLS: usize = 10_000;

pub use ctx::RollContext;
pub use error::RollError;
pub use outcome::{RollOutcome, RollResult};
pub use roller::Roller;
pub use stringify::{AnyStringifier, BreakdownStringifier, PlainStringifier, Stringify};

/// Rolls already-parsed terms, failing with [`RollError::TooManyRolls`] once more than
/// `max_rolls` dice have been drawn.
pub fn eval<R: Roller + ?Sized>(
    terms: &[DiceTerm],
    roller: &mut R,
    max_rolls: Option<usize>,
) -> RResult<RollResult> {
    RollContext::new(max_rolls, roller).eval(terms)
}
