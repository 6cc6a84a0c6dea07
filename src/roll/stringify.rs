use super::outcome::{RollOutcome, RollResult};
use enum_dispatch::enum_dispatch;

#[enum_dispatch]
pub trait Stringify {
    fn str_result(&mut self, result: &RollResult) -> String;
}

/// Renders only the grand total.
#[derive(Debug, Default, Copy, Clone)]
pub struct PlainStringifier;

impl PlainStringifier {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Stringify for PlainStringifier {
    fn str_result(&mut self, result: &RollResult) -> String {
        result.grand_total().to_string()
    }
}

/// Renders one right-aligned line per term, a dashed separator and the grand total:
///
/// ```text
///  7      2d6
///  6    1d4+2
/// ------------
/// 13
/// ```
#[derive(Debug, Default, Copy, Clone)]
pub struct BreakdownStringifier;

impl BreakdownStringifier {
    const LABEL_WIDTH: usize = 8;

    pub fn new() -> Self {
        Self::default()
    }

    fn width(result: &RollResult) -> usize {
        result
            .outcomes()
            .iter()
            .map(RollOutcome::total)
            .chain(std::iter::once(result.grand_total()))
            .map(|n| n.to_string().len())
            .max()
            .unwrap_or(1)
    }
}

impl Stringify for BreakdownStringifier {
    fn str_result(&mut self, result: &RollResult) -> String {
        let width = Self::width(result);
        let mut ret = String::new();
        for outcome in result.outcomes() {
            ret.push_str(&format!(
                "{:>width$} {:>label$}\n",
                outcome.total(),
                outcome.label(),
                width = width,
                label = Self::LABEL_WIDTH,
            ));
        }
        ret.push_str(&"-".repeat(width + Self::LABEL_WIDTH + 2));
        ret.push('\n');
        ret.push_str(&format!("{:>width$}", result.grand_total(), width = width));
        ret
    }
}

#[enum_dispatch(Stringify)]
#[derive(Debug, Copy, Clone)]
pub enum AnyStringifier {
    PlainStringifier,
    BreakdownStringifier,
}

impl AnyStringifier {
    pub fn plain(plain: bool) -> Self {
        if plain {
            PlainStringifier::new().into()
        } else {
            BreakdownStringifier::new().into()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::roll::roller::{FixedRoller, StepRoller};
    use crate::roll::{RollContext, Roller};

    macro_rules! check {
        ($cls:ident, $roller:expr, $input:expr, $expected:expr) => {
            let mut roller = $roller;
            let terms = crate::parse($input).unwrap();
            let result = RollContext::new_bounded(1000, &mut roller)
                .eval(&terms)
                .unwrap();
            let actual = $cls::new().str_result(&result);
            assert_eq!(&actual, $expected);
        };
    }

    fn step() -> impl Roller {
        StepRoller::new(0, 1)
    }

    #[test]
    fn test_plain_stringify() {
        check!(PlainStringifier, step(), "2d6+1d4+2", "8");
        check!(PlainStringifier, FixedRoller(0), "1d6-3", "-2");
    }

    #[test]
    fn test_breakdown_stringify() {
        check!(
            BreakdownStringifier,
            step(),
            "2d6+1d4+2",
            "3      2d6\n5    1d4+2\n-----------\n8"
        );
        check!(
            BreakdownStringifier,
            FixedRoller(5),
            "2d6+1d20",
            "12      2d6\n 6     1d20\n------------\n18"
        );
    }

    #[test]
    fn test_breakdown_negative_total() {
        check!(
            BreakdownStringifier,
            FixedRoller(0),
            "2d4-3",
            "-4    2d4-3\n------------\n-4"
        );
    }

    #[test]
    fn test_any_stringifier_dispatch() {
        let mut roller = FixedRoller(3);
        let terms = crate::parse("1d6+2").unwrap();
        let result = RollContext::new_unbounded(&mut roller).eval(&terms).unwrap();
        assert_eq!(AnyStringifier::plain(true).str_result(&result), "6");
        assert_eq!(
            AnyStringifier::plain(false).str_result(&result),
            "6    1d6+2\n-----------\n6"
        );
    }
}
