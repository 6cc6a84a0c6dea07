use super::{
    error::RollError,
    outcome::{RollOutcome, RollResult},
    roller::Roller,
    RResult,
};
use crate::common::*;
use crate::parse::DiceTerm;

/// Evaluates dice terms against an injected [`Roller`], optionally capping how many dice may be
/// rolled in total.
pub struct RollContext<'r, R: ?Sized> {
    max_rolls: Option<usize>,
    rolls: usize,
    roller: &'r mut R,
}

impl<'r, R: Roller + ?Sized> RollContext<'r, R> {
    pub fn new(max_rolls: Option<usize>, roller: &'r mut R) -> Self {
        Self {
            max_rolls,
            rolls: 0,
            roller,
        }
    }

    pub fn new_bounded(max_rolls: usize, roller: &'r mut R) -> Self {
        Self::new(Some(max_rolls), roller)
    }

    /// No cap at all: memory grows with the number of dice, one face per die.
    pub fn new_unbounded(roller: &'r mut R) -> Self {
        Self::new(None, roller)
    }

    fn count_rolls(&mut self, n: NonZeroUInt) -> RResult<()> {
        let n = usize::try_from(n.get()).unwrap_or(usize::MAX);
        self.rolls = self.rolls.saturating_add(n);
        if self.max_rolls.map_or(false, |max| self.rolls > max) {
            Err(RollError::TooManyRolls)
        } else {
            Ok(())
        }
    }

    pub fn roll_term(&mut self, term: &DiceTerm) -> RResult<RollOutcome> {
        self.count_rolls(term.count())?;
        let sides = term.sides();
        let faces = (0..term.count().get())
            .map(|_| self.roller.roll_face(sides))
            .collect();
        Ok(RollOutcome::new(*term, faces))
    }

    pub fn eval(&mut self, terms: &[DiceTerm]) -> RResult<RollResult> {
        let mut outcomes = Vec::with_capacity(terms.len());
        let mut grand_total: Total = 0;
        let mut max_possible: Total = 0;

        for term in terms {
            let outcome = self.roll_term(term)?;
            tracing::trace!(
                term = %term,
                faces = ?outcome.faces(),
                total = outcome.total(),
                "rolled term"
            );
            grand_total = grand_total.saturating_add(outcome.total());
            max_possible = max_possible.saturating_add(term.max_total());
            outcomes.push(outcome);
        }

        let outcomes = NonEmpty::try_from_vec(outcomes).map_err(|_| RollError::NoDiceTerms)?;

        if grand_total > max_possible {
            tracing::warn!(grand_total, max_possible, "roll exceeded its theoretical maximum");
            return Err(RollError::RollExceededBound {
                total: grand_total,
                max: max_possible,
            });
        }

        tracing::debug!(grand_total, max_possible, rolls = self.rolls, "evaluated roll");
        Ok(RollResult::new(outcomes, grand_total, max_possible))
    }
}
