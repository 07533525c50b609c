//! Top level module for the kinds a [`OneOf`](one_of::OneOf) can be specialized over
//!
//! See [`one_of`] for the union type itself and [`object`] for the "any value" kind

use std::any::Any;
use std::fmt::{Debug, Display};
use std::hash::{Hash, Hasher};

pub mod object;
pub mod one_of;

/// Trait for value kinds, giving every kind the runtime type test, equality, hashing and text representation a union needs
///
/// Implement with [`impl_kind!`](crate::impl_kind) for plain data types
pub trait Kind: Any + Clone + Debug + Display + PartialEq + Send + Sync {
    /// Static kind name
    ///
    /// Should be specific and unique if possible, as this value is used in errors
    const KIND_NAME: &'static str;

    /// Dynamic kind name of this value
    ///
    /// This differs from [`Self::KIND_NAME`] for kinds that wrap other kinds; E.g. an [`Object`](object::Object) holding a `String` has a kind name of "String"
    fn kind_name(&self) -> &'static str {
        Self::KIND_NAME
    }

    /// Hashes this value, must agree with [`PartialEq`]
    fn hash_kind<H: Hasher>(&self, state: &mut H);

    /// The live value runtime type tests are performed against
    fn as_any(&self) -> &dyn Any {
        self
    }

    /// Attempts to read `value` as Self, yielding None if it does not conform to this kind
    ///
    /// Defaults to an exact runtime type match against [`Kind::as_any`] of the value
    ///
    /// # Arguments
    ///
    /// * `value`: Value to test
    ///
    /// returns: Option<Self>
    fn conform<V: Kind>(value: &V) -> Option<Self> {
        value.as_any().downcast_ref::<Self>().cloned()
    }
}

impl_kind!(bool);
impl_kind!(char);
impl_kind!(i8);
impl_kind!(i16);
impl_kind!(i32);
impl_kind!(i64);
impl_kind!(i128);
impl_kind!(isize);
impl_kind!(u8);
impl_kind!(u16);
impl_kind!(u32);
impl_kind!(u64);
impl_kind!(u128);
impl_kind!(usize);
impl_kind!(String);
impl_kind!(&'static str, "str");

macro_rules! impl_float_kind {
    ($float:ty) => {
        impl Kind for $float {
            const KIND_NAME: &'static str = stringify!($float);

            /// Zeroes hash alike, as `0.0 == -0.0`
            fn hash_kind<H: Hasher>(&self, state: &mut H) {
                let normalized: $float = if *self == 0.0 { 0.0 } else { *self };
                normalized.to_bits().hash(state)
            }
        }
    };
}

impl_float_kind!(f32);
impl_float_kind!(f64);
