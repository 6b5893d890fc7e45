use std::str::FromStr;

use ndarray::{Array, ArrayBase, Data, Dimension};

use crate::bound::IntoBound;
use crate::error::CompareError;
use crate::interval::Interval;

/// Tests element-wise whether values fall between `lower` and `upper`.
///
/// Endpoint inclusion is selected by the interval token: one of `"()"`,
/// `"[)"`, `"(]"`, `"[]"`. An unset bound is unconstrained on that side,
/// realized as an all-true mask of the input's shape so the result is
/// uniform regardless of which bounds are set.
///
/// Bounds pass through [`IntoBound`], so a date-like bound in a different
/// representation (e.g. a date string against a `NaiveDateTime` array) is
/// coerced before any comparison.
///
/// # Arguments
/// * `array` - The input array.
/// * `lower` - Optional lower bound.
/// * `upper` - Optional upper bound.
/// * `interval` - Interval token selecting endpoint inclusion.
///
/// # Returns
/// A `bool` array of the same shape as the input.
///
/// # Errors
/// - `InvalidInterval` if the token is not one of the four accepted values.
/// - `InvalidBound` if a bound fails to coerce into the element type.
///
/// # Example
/// ```
/// use ndarray::array;
/// use ndarray_compare::isbetween;
///
/// let data = array![1, 2, 3];
/// let mask = isbetween(&data, Some(1), Some(2), "[]").unwrap();
/// assert_eq!(mask, array![true, true, false]);
///
/// // An unset bound leaves that side unconstrained.
/// let mask = isbetween(&data, None::<i32>, Some(2), "[]").unwrap();
/// assert_eq!(mask, array![true, true, false]);
/// ```
pub fn isbetween<A, S, D, L, U>(
    array: &ArrayBase<S, D>,
    lower: Option<L>,
    upper: Option<U>,
    interval: &str,
) -> Result<Array<bool, D>, CompareError>
where
    A: PartialOrd,
    S: Data<Elem = A>,
    D: Dimension,
    L: IntoBound<A>,
    U: IntoBound<A>,
{
    let interval = Interval::from_str(interval)?;
    let (lower_op, upper_op) = interval.operators::<A>();

    let lower = lower.map(IntoBound::into_bound).transpose()?;
    let upper = upper.map(IntoBound::into_bound).transpose()?;

    log::trace!(
        "isbetween: interval={:?}, shape={:?}",
        interval,
        array.shape()
    );

    let lower_index = match &lower {
        Some(bound) => array.map(|value| lower_op(value, bound)),
        None => Array::from_elem(array.raw_dim(), true),
    };
    let upper_index = match &upper {
        Some(bound) => array.map(|value| upper_op(value, bound)),
        None => Array::from_elem(array.raw_dim(), true),
    };

    Ok(lower_index & upper_index)
}

/// Element-wise negation of [`isbetween`] with the identical argument
/// contract. Forwards to `isbetween` rather than re-deriving the
/// comparison, so the two can never disagree.
///
/// # Example
/// ```
/// use ndarray::array;
/// use ndarray_compare::isnotbetween;
///
/// let data = array![1, 2, 3];
/// let mask = isnotbetween(&data, Some(1), Some(2), "[]").unwrap();
/// assert_eq!(mask, array![false, false, true]);
/// ```
pub fn isnotbetween<A, S, D, L, U>(
    array: &ArrayBase<S, D>,
    lower: Option<L>,
    upper: Option<U>,
    interval: &str,
) -> Result<Array<bool, D>, CompareError>
where
    A: PartialOrd,
    S: Data<Elem = A>,
    D: Dimension,
    L: IntoBound<A>,
    U: IntoBound<A>,
{
    Ok(!isbetween(array, lower, upper, interval)?)
}
