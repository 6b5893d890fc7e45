//! Element-wise comparison predicates for [`ndarray`] arrays.
//!
//! Six predicates — [`isbetween`], [`isin`], [`ismatch`] and their
//! negations — map each element of an array independently to a boolean
//! and return a fresh `Array<bool, D>` of the input's shape. Broadcasting,
//! iteration and shape handling are entirely `ndarray`'s; this crate only
//! composes its comparison operators.
//!
//! The four range/regex predicates are also available as methods through
//! the [`CompareExt`] extension trait:
//!
//! ```
//! use ndarray::array;
//! use ndarray_compare::CompareExt;
//!
//! let data = array![1, 2, 3];
//! assert_eq!(data.isbetween(Some(1), Some(2), "[]").unwrap(), array![true, true, false]);
//! ```

pub mod bound;
pub mod error;
pub mod ext;
pub mod interval;
pub mod ops;
pub mod pattern;

// Re-export the public surface at the crate root.
pub use bound::IntoBound;
pub use error::CompareError;
pub use ext::CompareExt;
pub use interval::Interval;
pub use ops::{isbetween, isin, ismatch, isnotbetween, isnotin, isnotmatch};
pub use pattern::IntoPattern;
