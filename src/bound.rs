use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

use crate::error::CompareError;

/// Conversion of a bound argument into the array's element type.
///
/// The blanket identity impl lets bounds be passed directly in the element
/// type. The chrono impls cover the date/time case where a bound arrives in
/// a different date-like representation (a date string, a date without a
/// time) and must be coerced before it can be compared against the array's
/// elements.
pub trait IntoBound<A> {
    fn into_bound(self) -> Result<A, CompareError>;
}

impl<A> IntoBound<A> for A {
    fn into_bound(self) -> Result<A, CompareError> {
        Ok(self)
    }
}

/// Accepts `%Y-%m-%dT%H:%M:%S`, `%Y-%m-%d %H:%M:%S`, or a bare `%Y-%m-%d`
/// date, which widens to midnight.
impl IntoBound<NaiveDateTime> for &str {
    fn into_bound(self) -> Result<NaiveDateTime, CompareError> {
        if let Ok(date) = NaiveDate::parse_from_str(self, "%Y-%m-%d") {
            return Ok(date.and_time(NaiveTime::MIN));
        }
        NaiveDateTime::parse_from_str(self, "%Y-%m-%dT%H:%M:%S")
            .or_else(|_| NaiveDateTime::parse_from_str(self, "%Y-%m-%d %H:%M:%S"))
            .map_err(|err| CompareError::InvalidBound {
                value: self.to_string(),
                message: err.to_string(),
            })
    }
}

impl IntoBound<NaiveDate> for &str {
    fn into_bound(self) -> Result<NaiveDate, CompareError> {
        NaiveDate::parse_from_str(self, "%Y-%m-%d").map_err(|err| CompareError::InvalidBound {
            value: self.to_string(),
            message: err.to_string(),
        })
    }
}

impl IntoBound<NaiveDateTime> for NaiveDate {
    fn into_bound(self) -> Result<NaiveDateTime, CompareError> {
        Ok(self.and_time(NaiveTime::MIN))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity_bound() {
        assert_eq!(3.5f64.into_bound(), Ok(3.5));
        assert_eq!(7i64.into_bound(), Ok(7));
    }

    #[test]
    fn test_date_string_to_datetime() {
        let bound: NaiveDateTime = "2020-01-02".into_bound().unwrap();
        let expected = NaiveDate::from_ymd_opt(2020, 1, 2)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap();
        assert_eq!(bound, expected);
    }

    #[test]
    fn test_datetime_string_to_datetime() {
        let bound: NaiveDateTime = "2020-01-02T03:04:05".into_bound().unwrap();
        let expected = NaiveDate::from_ymd_opt(2020, 1, 2)
            .unwrap()
            .and_hms_opt(3, 4, 5)
            .unwrap();
        assert_eq!(bound, expected);

        let spaced: NaiveDateTime = "2020-01-02 03:04:05".into_bound().unwrap();
        assert_eq!(spaced, expected);
    }

    #[test]
    fn test_date_to_datetime_widens_to_midnight() {
        let date = NaiveDate::from_ymd_opt(1999, 12, 31).unwrap();
        let bound: NaiveDateTime = date.into_bound().unwrap();
        assert_eq!(bound, date.and_hms_opt(0, 0, 0).unwrap());
    }

    #[test]
    fn test_unparseable_bound() {
        let result: Result<NaiveDateTime, _> = "yesterday".into_bound();
        assert!(matches!(result, Err(CompareError::InvalidBound { .. })));
    }
}
