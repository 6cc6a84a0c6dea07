use crate::common::*;
use crate::parse::DiceTerm;

/// The rolled faces and total of a single [`DiceTerm`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RollOutcome {
    term: DiceTerm,
    faces: Vec<UInt>,
    total: Total,
}

impl RollOutcome {
    pub(crate) fn new(term: DiceTerm, faces: Vec<UInt>) -> Self {
        let modifier = Total::from(term.modifier());
        let total = faces
            .iter()
            .fold(0, |acc: Total, &face| {
                acc.saturating_add(Total::from(face) + modifier)
            });
        Self { term, faces, total }
    }

    pub fn term(&self) -> &DiceTerm {
        &self.term
    }

    /// Raw die faces in draw order, before the modifier is applied.
    pub fn faces(&self) -> &[UInt] {
        &self.faces
    }

    /// Sum over every die of `face + modifier`.
    pub fn total(&self) -> Total {
        self.total
    }

    pub fn label(&self) -> String {
        self.term.to_string()
    }
}

/// Result of evaluating a whole expression. Outcomes keep the order of the input terms.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RollResult {
    outcomes: NonEmpty<RollOutcome>,
    grand_total: Total,
    max_possible: Total,
}

impl RollResult {
    pub(crate) fn new(
        outcomes: NonEmpty<RollOutcome>,
        grand_total: Total,
        max_possible: Total,
    ) -> Self {
        Self {
            outcomes,
            grand_total,
            max_possible,
        }
    }

    pub fn outcomes(&self) -> &NonEmpty<RollOutcome> {
        &self.outcomes
    }

    pub fn grand_total(&self) -> Total {
        self.grand_total
    }

    /// The theoretical maximum the grand total was checked against.
    pub fn max_possible(&self) -> Total {
        self.max_possible
    }
}
