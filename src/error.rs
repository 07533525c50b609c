//! Module containing error types

use std::error::Error;
use std::fmt;
use std::fmt::{Display, Formatter};

/// Error denoting a forced conversion to a kind the stored value does not conform to
///
/// Returned by [`OneOf::into_a`](crate::OneOf::into_a) and [`OneOf::into_b`](crate::OneOf::into_b), and raised as a panic by the `unwrap_*` conversions
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KindMismatchError {
    /// Kind name of the stored value, or "absent" if the union holds no value
    pub from: &'static str,
    /// Kind the value could not be read as
    pub to: &'static str,
}

impl Error for KindMismatchError {}

impl Display for KindMismatchError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "cannot read '{}' as '{}'", self.from, self.to)
    }
}
