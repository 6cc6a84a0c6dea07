use crate::common::Total;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RollError {
    #[error("expression contains no dice to roll")]
    NoDiceTerms,
    #[error("roll total {total} exceeds the theoretical maximum {max}")]
    RollExceededBound { total: Total, max: Total },
    #[error("too many dice rolled")]
    TooManyRolls,
}
