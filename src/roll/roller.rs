use crate::common::{NonZeroUInt, UInt};
use rand::Rng;

/// A source of uniformly distributed integers.
///
/// Every [`rand::Rng`] is a `Roller`; tests substitute deterministic stubs.
pub trait Roller {
    /// Returns a value in `0..n`.
    fn int_in_range(&mut self, n: NonZeroUInt) -> UInt;

    /// Rolls one die, returning a face in `1..=sides`.
    ///
    /// The full range of `sides` values is requested so that the highest face can come up.
    /// A source that returns `n` or more is out of contract; the overshoot is passed through
    /// unchanged so the evaluator's bound check can catch it.
    fn roll_face(&mut self, sides: NonZeroUInt) -> UInt {
        self.int_in_range(sides).saturating_add(1)
    }
}

impl<R: Rng> Roller for R {
    fn int_in_range(&mut self, n: NonZeroUInt) -> UInt {
        self.gen_range(0..n.get())
    }
}

#[cfg(test)]
pub(crate) use stub::{FixedRoller, MaxRoller, StepRoller};

#[cfg(test)]
mod stub {
    use super::*;

    /// Always answers `value`, whatever range was asked for.
    pub(crate) struct FixedRoller(pub UInt);

    impl Roller for FixedRoller {
        fn int_in_range(&mut self, _n: NonZeroUInt) -> UInt {
            self.0
        }
    }

    /// Always answers the highest in-range value, `n - 1`.
    pub(crate) struct MaxRoller;

    impl Roller for MaxRoller {
        fn int_in_range(&mut self, n: NonZeroUInt) -> UInt {
            n.get() - 1
        }
    }

    /// Counts upward from `initial` by `step`, wrapping into the requested range.
    pub(crate) struct StepRoller {
        current: UInt,
        step: UInt,
    }

    impl StepRoller {
        pub fn new(initial: UInt, step: UInt) -> Self {
            Self {
                current: initial,
                step,
            }
        }
    }

    impl Roller for StepRoller {
        fn int_in_range(&mut self, n: NonZeroUInt) -> UInt {
            let ret = self.current % n.get();
            self.current += self.step;
            ret
        }
    }
}
