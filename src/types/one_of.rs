//! Module for [`OneOf`], a union of two kinds

use std::fmt;
use std::fmt::{Display, Formatter};
use std::hash::{Hash, Hasher};
use crate::error::KindMismatchError;
use crate::types::Kind;
use crate::types::object::Object;

/// Kind name reported for a union that holds no value
pub const ABSENT_KIND_NAME: &str = "absent";

#[derive(Clone, Debug)]
enum Slot<A, B> {
    Empty,
    A(A),
    B(B),
}

/// Immutable union holding a value of kind A or kind B, or no value at all
///
/// Extraction tests the stored value against the requested kind rather than recalling which constructor stored it.
/// When the kinds overlap (A and B are the same type, or one of them is [`Object`]) both extractions may succeed.
///
/// The absent union is only produced by [`OneOf::from_a_opt`], [`OneOf::from_b_opt`] or [`Default`], and does not record which kind it was built from.
///
/// ```
/// use one_of::OneOf;
///
/// fn divide(a: i32, b: i32) -> OneOf<i32, String> {
///     if b == 0 {
///         return OneOf::from_b(String::from("Cannot divide by zero"));
///     }
///     OneOf::from_a(a / b)
/// }
///
/// assert_eq!(divide(10, 2).try_get_a(), (5, true));
/// assert_eq!(divide(10, 0).to_string(), "Cannot divide by zero");
/// ```
#[derive(Clone, Debug)]
pub struct OneOf<A, B> {
    slot: Slot<A, B>,
}

impl<A, B> Default for OneOf<A, B> {
    /// The absent union
    fn default() -> Self {
        OneOf { slot: Slot::Empty }
    }
}

impl<A, B> OneOf<A, B> {
    /// Creates a union holding an A
    pub fn from_a(value: A) -> Self {
        OneOf { slot: Slot::A(value) }
    }

    /// Creates a union holding a B
    pub fn from_b(value: B) -> Self {
        OneOf { slot: Slot::B(value) }
    }

    /// Creates a union from an optional A, `None` yields the absent union
    pub fn from_a_opt(value: Option<A>) -> Self {
        value.map_or_else(Self::default, Self::from_a)
    }

    /// Creates a union from an optional B, `None` yields the absent union
    pub fn from_b_opt(value: Option<B>) -> Self {
        value.map_or_else(Self::default, Self::from_b)
    }

    /// Returns true if this union holds a value, regardless of its kind
    pub fn has_value(&self) -> bool {
        !matches!(self.slot, Slot::Empty)
    }
}

impl<A: Kind, B: Kind> OneOf<A, B> {
    /// Dynamic kind name of the stored value, [`ABSENT_KIND_NAME`] if this union holds no value
    pub fn kind_name(&self) -> &'static str {
        match &self.slot {
            Slot::Empty => ABSENT_KIND_NAME,
            Slot::A(a) => a.kind_name(),
            Slot::B(b) => b.kind_name(),
        }
    }

    /// Returns the stored value as an [`Object`], or None if this union holds no value
    pub fn value(&self) -> Option<Object> {
        match &self.slot {
            Slot::Empty => None,
            Slot::A(a) => Some(Object::new(a.clone())),
            Slot::B(b) => Some(Object::new(b.clone())),
        }
    }

    /// Reads the stored value as kind A, yielding None if it does not conform or this union holds no value
    pub fn get_a(&self) -> Option<A> {
        self.get::<A>()
    }

    /// Reads the stored value as kind B, yielding None if it does not conform or this union holds no value
    pub fn get_b(&self) -> Option<B> {
        self.get::<B>()
    }

    /// Reads the stored value as kind A
    ///
    /// returns: `(value, true)` on success, `(A::default(), false)` otherwise
    pub fn try_get_a(&self) -> (A, bool) where A: Default {
        match self.get_a() {
            Some(a) => (a, true),
            None => (A::default(), false),
        }
    }

    /// Reads the stored value as kind B
    ///
    /// returns: `(value, true)` on success, `(B::default(), false)` otherwise
    pub fn try_get_b(&self) -> (B, bool) where B: Default {
        match self.get_b() {
            Some(b) => (b, true),
            None => (B::default(), false),
        }
    }

    /// Compares the stored value to a bare value of any kind
    ///
    /// An absent union equals no bare value
    pub fn equals<V: Kind>(&self, value: &V) -> bool {
        match &self.slot {
            Slot::Empty => false,
            Slot::A(a) => conforming_eq(a, value),
            Slot::B(b) => conforming_eq(b, value),
        }
    }

    /// Converts this union to kind A
    ///
    /// If the error is not handled, [`OneOf::unwrap_a`] states the intent more clearly
    pub fn into_a(self) -> Result<A, KindMismatchError> {
        self.get_a().ok_or_else(|| self.mismatch(A::KIND_NAME))
    }

    /// Converts this union to kind B
    ///
    /// If the error is not handled, [`OneOf::unwrap_b`] states the intent more clearly
    pub fn into_b(self) -> Result<B, KindMismatchError> {
        self.get_b().ok_or_else(|| self.mismatch(B::KIND_NAME))
    }

    /// Converts this union to kind A
    ///
    /// # Panics
    ///
    /// Panics with a [`KindMismatchError`] message if the stored value does not conform to A, or this union holds no value
    #[track_caller]
    pub fn unwrap_a(self) -> A {
        match self.into_a() {
            Ok(a) => a,
            Err(error) => {
                log::error!("forced conversion failed: {}", error);
                panic!("{}", error)
            }
        }
    }

    /// Converts this union to kind B
    ///
    /// # Panics
    ///
    /// Panics with a [`KindMismatchError`] message if the stored value does not conform to B, or this union holds no value
    #[track_caller]
    pub fn unwrap_b(self) -> B {
        match self.into_b() {
            Ok(b) => b,
            Err(error) => {
                log::error!("forced conversion failed: {}", error);
                panic!("{}", error)
            }
        }
    }

    fn get<K: Kind>(&self) -> Option<K> {
        match &self.slot {
            Slot::Empty => None,
            Slot::A(a) => K::conform(a),
            Slot::B(b) => K::conform(b),
        }
    }

    fn mismatch(&self, to: &'static str) -> KindMismatchError {
        let error = KindMismatchError { from: self.kind_name(), to };
        log::debug!("{}", error);
        error
    }
}

/// Values of two kinds are equal if either one conforms to the other's kind and compares equal there
fn conforming_eq<X: Kind, Y: Kind>(x: &X, y: &Y) -> bool {
    X::conform(y).map_or(false, |y| *x == y) || Y::conform(x).map_or(false, |x| x == *y)
}

impl<A: Kind, B: Kind> PartialEq for OneOf<A, B> {
    fn eq(&self, other: &Self) -> bool {
        match (&self.slot, &other.slot) {
            (Slot::Empty, Slot::Empty) => true,
            (Slot::Empty, _) | (_, Slot::Empty) => false,
            (Slot::A(x), Slot::A(y)) => x == y,
            (Slot::B(x), Slot::B(y)) => x == y,
            (Slot::A(a), Slot::B(b)) | (Slot::B(b), Slot::A(a)) => conforming_eq(a, b),
        }
    }
}

impl<A: Kind + Eq, B: Kind + Eq> Eq for OneOf<A, B> {}

impl<A: Kind, B: Kind> Hash for OneOf<A, B> {
    /// Hashes the stored value only, so unions holding equal values through different slots hash alike
    fn hash<H: Hasher>(&self, state: &mut H) {
        match &self.slot {
            Slot::Empty => 0usize.hash(state),
            Slot::A(a) => a.hash_kind(state),
            Slot::B(b) => b.hash_kind(state),
        }
    }
}

impl<A: Display, B: Display> Display for OneOf<A, B> {
    /// Writes the stored value, or nothing if this union holds no value
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match &self.slot {
            Slot::Empty => Ok(()),
            Slot::A(a) => Display::fmt(a, f),
            Slot::B(b) => Display::fmt(b, f),
        }
    }
}
