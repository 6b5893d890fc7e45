use std::str::FromStr;

use crate::error::CompareError;

/// Endpoint semantics for a range test.
///
/// Each variant corresponds to one of the four accepted interval tokens and
/// carries the pair of comparison operators applied against the lower and
/// upper bounds. The set is closed: no other token is accepted.
///
/// # Example
/// ```
/// use ndarray_compare::Interval;
///
/// let interval: Interval = "[)".parse().unwrap();
/// assert_eq!(interval, Interval::ClosedOpen);
/// assert!("<>".parse::<Interval>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Interval {
    /// `"()"`: `lower < x && x < upper`
    OpenOpen,
    /// `"[)"`: `lower <= x && x < upper`
    ClosedOpen,
    /// `"(]"`: `lower < x && x <= upper`
    OpenClosed,
    /// `"[]"`: `lower <= x && x <= upper`
    ClosedClosed,
}

impl Interval {
    /// The token this interval parses from.
    pub const fn token(self) -> &'static str {
        match self {
            Interval::OpenOpen => "()",
            Interval::ClosedOpen => "[)",
            Interval::OpenClosed => "(]",
            Interval::ClosedClosed => "[]",
        }
    }

    /// Comparison operators for this interval, applied as
    /// `(lower_op(x, lower), upper_op(x, upper))`.
    pub(crate) fn operators<A: PartialOrd>(self) -> (fn(&A, &A) -> bool, fn(&A, &A) -> bool) {
        match self {
            Interval::OpenOpen => (A::gt, A::lt),
            Interval::ClosedOpen => (A::ge, A::lt),
            Interval::OpenClosed => (A::gt, A::le),
            Interval::ClosedClosed => (A::ge, A::le),
        }
    }
}

impl FromStr for Interval {
    type Err = CompareError;

    fn from_str(token: &str) -> Result<Self, Self::Err> {
        match token {
            "()" => Ok(Interval::OpenOpen),
            "[)" => Ok(Interval::ClosedOpen),
            "(]" => Ok(Interval::OpenClosed),
            "[]" => Ok(Interval::ClosedClosed),
            _ => Err(CompareError::InvalidInterval {
                token: token.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_all_tokens() {
        assert_eq!("()".parse::<Interval>().unwrap(), Interval::OpenOpen);
        assert_eq!("[)".parse::<Interval>().unwrap(), Interval::ClosedOpen);
        assert_eq!("(]".parse::<Interval>().unwrap(), Interval::OpenClosed);
        assert_eq!("[]".parse::<Interval>().unwrap(), Interval::ClosedClosed);
    }

    #[test]
    fn test_parse_round_trips_through_token() {
        for interval in [
            Interval::OpenOpen,
            Interval::ClosedOpen,
            Interval::OpenClosed,
            Interval::ClosedClosed,
        ] {
            assert_eq!(interval.token().parse::<Interval>().unwrap(), interval);
        }
    }

    #[test]
    fn test_parse_unknown_token() {
        let result = "<>".parse::<Interval>();
        assert_eq!(
            result,
            Err(CompareError::InvalidInterval {
                token: "<>".to_string()
            })
        );
    }

    #[test]
    fn test_parse_empty_token() {
        assert!("".parse::<Interval>().is_err());
    }

    #[test]
    fn test_operators_boundary_inclusion() {
        let (lower_op, upper_op) = Interval::ClosedOpen.operators::<i32>();
        assert!(lower_op(&1, &1));
        assert!(!upper_op(&2, &2));

        let (lower_op, upper_op) = Interval::OpenClosed.operators::<i32>();
        assert!(!lower_op(&1, &1));
        assert!(upper_op(&2, &2));
    }
}
