use crate::common::*;
use std::fmt;

/// One `<count>d<sides>` group together with the flat modifier applied to each of its dice.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct DiceTerm {
    count: NonZeroUInt,
    sides: NonZeroUInt,
    modifier: Int,
}

impl DiceTerm {
    pub const fn new(count: NonZeroUInt, sides: NonZeroUInt) -> Self {
        Self::with_modifier(count, sides, 0)
    }

    pub const fn with_modifier(count: NonZeroUInt, sides: NonZeroUInt, modifier: Int) -> Self {
        Self {
            count,
            sides,
            modifier,
        }
    }

    pub const fn count(&self) -> NonZeroUInt {
        self.count
    }

    pub const fn sides(&self) -> NonZeroUInt {
        self.sides
    }

    pub const fn modifier(&self) -> Int {
        self.modifier
    }

    pub(crate) fn set_modifier(&mut self, modifier: Int) {
        self.modifier = modifier;
    }

    /// Highest total this term can produce: every die shows `sides`.
    pub fn max_total(&self) -> Total {
        Total::from(self.count.get())
            .saturating_mul(Total::from(self.sides.get()) + Total::from(self.modifier))
    }

    /// Lowest total this term can produce: every die shows 1.
    pub fn min_total(&self) -> Total {
        Total::from(self.count.get()).saturating_mul(1 + Total::from(self.modifier))
    }
}

/// Renders the canonical label, e.g. `2d6`, `2d6+1` or `1d6-2`.
impl fmt::Display for DiceTerm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}d{}", self.count, self.sides)?;
        if self.modifier != 0 {
            write!(f, "{:+}", self.modifier)?;
        }
        Ok(())
    }
}
