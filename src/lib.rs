//! Two-kind union type
//!
//! [`OneOf<A, B>`](OneOf) holds a value of either kind A or kind B without the two sharing a common type,
//! reading the value back through a runtime conformance test against the requested kind.
//!
//! ```
//! use one_of::OneOf;
//!
//! let union = OneOf::<i32, String>::from_a(100);
//! assert_eq!(union.try_get_a(), (100, true));
//! assert_eq!(union.try_get_b(), (String::new(), false));
//! assert!(union.equals(&100));
//! ```

#[macro_use]
mod macros;

pub mod types;
pub mod error;

pub use crate::error::KindMismatchError;
pub use crate::types::Kind;
pub use crate::types::object::Object;
pub use crate::types::one_of::OneOf;
