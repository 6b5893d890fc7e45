use ndarray::{Array, ArrayBase, Data, Dimension, Zip};

use crate::error::CompareError;
use crate::pattern::IntoPattern;

/// Tests element-wise whether string values contain a match for `pattern`.
///
/// Search semantics: an element is true if the pattern matches anywhere in
/// its string, not only when it matches the whole string. The element type
/// must be string-like (`A: AsRef<str>`); calling this on a non-string
/// array is rejected at compile time.
///
/// The result buffer starts all-false and is filled per element, so every
/// element ends up exactly true or false.
///
/// # Arguments
/// * `array` - The input array of string-like elements.
/// * `pattern` - A pattern source string or a pre-compiled [`regex::Regex`].
///
/// # Returns
/// A `bool` array of the same shape as the input.
///
/// # Errors
/// - `InvalidPattern` if a pattern source string fails to compile.
///
/// # Example
/// ```
/// use ndarray::array;
/// use ndarray_compare::ismatch;
///
/// let data = array!["a", "aa", "ab"];
/// let mask = ismatch(&data, r"^aa*$").unwrap();
/// assert_eq!(mask, array![true, true, false]);
/// ```
pub fn ismatch<A, S, D, P>(
    array: &ArrayBase<S, D>,
    pattern: P,
) -> Result<Array<bool, D>, CompareError>
where
    A: AsRef<str>,
    S: Data<Elem = A>,
    D: Dimension,
    P: IntoPattern,
{
    let pattern = pattern.into_pattern()?;

    log::trace!(
        "ismatch: pattern={:?}, shape={:?}",
        pattern.as_str(),
        array.shape()
    );

    let mut index = Array::from_elem(array.raw_dim(), false);
    Zip::from(&mut index).and(array).for_each(|out, value| {
        *out = pattern.is_match(value.as_ref());
    });

    Ok(index)
}

/// Element-wise negation of [`ismatch`] with the identical argument
/// contract, including the string-like element bound. Forwards to
/// `ismatch` rather than re-deriving the match.
///
/// # Example
/// ```
/// use ndarray::array;
/// use ndarray_compare::isnotmatch;
///
/// let data = array!["a", "aa", "ab"];
/// let mask = isnotmatch(&data, r"^aa*$").unwrap();
/// assert_eq!(mask, array![false, false, true]);
/// ```
pub fn isnotmatch<A, S, D, P>(
    array: &ArrayBase<S, D>,
    pattern: P,
) -> Result<Array<bool, D>, CompareError>
where
    A: AsRef<str>,
    S: Data<Elem = A>,
    D: Dimension,
    P: IntoPattern,
{
    Ok(!ismatch(array, pattern)?)
}
