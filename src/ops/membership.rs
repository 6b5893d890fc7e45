use ndarray::{Array, ArrayBase, Data, Dimension};

/// Tests element-wise whether values equal one of the candidates.
///
/// The membership test itself is delegated to [`slice::contains`]; a scalar
/// candidate is the one-element slice (`std::slice::from_ref`).
///
/// # Example
/// ```
/// use ndarray::array;
/// use ndarray_compare::isin;
///
/// let data = array![1, 2, 3];
/// assert_eq!(isin(&data, &[1, 2]), array![true, true, false]);
/// ```
pub fn isin<A, S, D>(array: &ArrayBase<S, D>, values: &[A]) -> Array<bool, D>
where
    A: PartialEq,
    S: Data<Elem = A>,
    D: Dimension,
{
    array.map(|value| values.contains(value))
}

/// Element-wise negation of [`isin`]. Forwards to `isin` rather than
/// re-deriving the membership test.
pub fn isnotin<A, S, D>(array: &ArrayBase<S, D>, values: &[A]) -> Array<bool, D>
where
    A: PartialEq,
    S: Data<Elem = A>,
    D: Dimension,
{
    !isin(array, values)
}
