use ndarray::{Array, ArrayBase, Data, Dimension};

use crate::bound::IntoBound;
use crate::error::CompareError;
use crate::pattern::IntoPattern;

/// Method-style surface for the comparison predicates.
///
/// Bringing this trait into scope attaches the predicates as methods on
/// every `ndarray` array, so `array.isbetween(…)` and
/// `isbetween(&array, …)` are interchangeable. Each method is a one-line
/// forward to the free function with `self` prepended, which makes the two
/// invocation styles equivalent by construction.
///
/// `isin`/`isnotin` are deliberately not part of this trait; their only
/// surface is the free-function form.
///
/// # Example
/// ```
/// use ndarray::array;
/// use ndarray_compare::{isbetween, CompareExt};
///
/// let data = array![1, 2, 3];
/// assert_eq!(
///     data.isbetween(Some(1), Some(2), "[]").unwrap(),
///     isbetween(&data, Some(1), Some(2), "[]").unwrap(),
/// );
/// ```
pub trait CompareExt<A, D: Dimension> {
    /// Method form of [`crate::ops::isbetween`].
    fn isbetween<L, U>(
        &self,
        lower: Option<L>,
        upper: Option<U>,
        interval: &str,
    ) -> Result<Array<bool, D>, CompareError>
    where
        A: PartialOrd,
        L: IntoBound<A>,
        U: IntoBound<A>;

    /// Method form of [`crate::ops::isnotbetween`].
    fn isnotbetween<L, U>(
        &self,
        lower: Option<L>,
        upper: Option<U>,
        interval: &str,
    ) -> Result<Array<bool, D>, CompareError>
    where
        A: PartialOrd,
        L: IntoBound<A>,
        U: IntoBound<A>;

    /// Method form of [`crate::ops::ismatch`].
    fn ismatch<P>(&self, pattern: P) -> Result<Array<bool, D>, CompareError>
    where
        A: AsRef<str>,
        P: IntoPattern;

    /// Method form of [`crate::ops::isnotmatch`].
    fn isnotmatch<P>(&self, pattern: P) -> Result<Array<bool, D>, CompareError>
    where
        A: AsRef<str>,
        P: IntoPattern;
}

impl<A, S, D> CompareExt<A, D> for ArrayBase<S, D>
where
    S: Data<Elem = A>,
    D: Dimension,
{
    fn isbetween<L, U>(
        &self,
        lower: Option<L>,
        upper: Option<U>,
        interval: &str,
    ) -> Result<Array<bool, D>, CompareError>
    where
        A: PartialOrd,
        L: IntoBound<A>,
        U: IntoBound<A>,
    {
        crate::ops::isbetween(self, lower, upper, interval)
    }

    fn isnotbetween<L, U>(
        &self,
        lower: Option<L>,
        upper: Option<U>,
        interval: &str,
    ) -> Result<Array<bool, D>, CompareError>
    where
        A: PartialOrd,
        L: IntoBound<A>,
        U: IntoBound<A>,
    {
        crate::ops::isnotbetween(self, lower, upper, interval)
    }

    fn ismatch<P>(&self, pattern: P) -> Result<Array<bool, D>, CompareError>
    where
        A: AsRef<str>,
        P: IntoPattern,
    {
        crate::ops::ismatch(self, pattern)
    }

    fn isnotmatch<P>(&self, pattern: P) -> Result<Array<bool, D>, CompareError>
    where
        A: AsRef<str>,
        P: IntoPattern,
    {
        crate::ops::isnotmatch(self, pattern)
    }
}
