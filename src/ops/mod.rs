//! # Element-wise Comparison Predicates
//!
//! This module implements the element-wise predicates over `ndarray`
//! arrays: range membership, set membership, and regex matching, together
//! with their negations.
//!
//! Each predicate maps every element independently to a boolean and
//! returns a fresh `Array<bool, D>` of the input's shape; inputs are never
//! mutated. Each `isnot*` function forwards to its positive counterpart
//! and negates the result, so a pair can never disagree.
//!
//! ## Structure:
//! - [`between`]: `isbetween` / `isnotbetween` (interval tests).
//! - [`membership`]: `isin` / `isnotin` (candidate-set tests).
//! - [`matching`]: `ismatch` / `isnotmatch` (regex tests).

pub mod between;
pub mod matching;
pub mod membership;

// Re-export the predicate functions.
pub use between::{isbetween, isnotbetween};
pub use matching::{ismatch, isnotmatch};
pub use membership::{isin, isnotin};
