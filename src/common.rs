use std::num::NonZeroU32;

/// Signed per-die modifier.
pub type Int = i32;
/// Raw face or range value produced by a [`Roller`](crate::Roller).
pub type UInt = u32;
pub type NonZeroUInt = NonZeroU32;

/// Accumulated totals. Sums saturate rather than wrap.
pub type Total = i64;

pub type NonEmpty<T> = vec1::Vec1<T>;
