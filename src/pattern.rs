use regex::Regex;

use crate::error::CompareError;

/// A regex argument: either a pattern source string, compiled once per
/// call, or an already-compiled [`Regex`], for which compilation is a
/// no-op.
pub trait IntoPattern {
    fn into_pattern(self) -> Result<Regex, CompareError>;
}

impl IntoPattern for Regex {
    fn into_pattern(self) -> Result<Regex, CompareError> {
        Ok(self)
    }
}

impl IntoPattern for &Regex {
    fn into_pattern(self) -> Result<Regex, CompareError> {
        Ok(self.clone())
    }
}

impl IntoPattern for &str {
    fn into_pattern(self) -> Result<Regex, CompareError> {
        Ok(Regex::new(self)?)
    }
}

impl IntoPattern for String {
    fn into_pattern(self) -> Result<Regex, CompareError> {
        Ok(Regex::new(&self)?)
    }
}
