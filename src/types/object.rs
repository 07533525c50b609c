//! Module for the "any value" kind [`Object`]

use std::any::Any;
use std::fmt;
use std::fmt::{Debug, Display, Formatter};
use std::hash::{Hash, Hasher};
use std::sync::Arc;
use crate::types::Kind;

/// Object-safe view of a [`Kind`], used to store values of any kind behind one pointer
pub(crate) trait Value: Debug + Display + Send + Sync {
    fn as_any(&self) -> &dyn Any;

    fn kind_name(&self) -> &'static str;

    fn eq_value(&self, other: &dyn Value) -> bool;

    fn hash_value(&self, state: &mut dyn Hasher);
}

impl<T: Kind> Value for T {
    fn as_any(&self) -> &dyn Any {
        Kind::as_any(self)
    }

    fn kind_name(&self) -> &'static str {
        Kind::kind_name(self)
    }

    fn eq_value(&self, other: &dyn Value) -> bool {
        other.as_any()
            .downcast_ref::<T>()
            .map_or(false, |other| self == other)
    }

    fn hash_value(&self, mut state: &mut dyn Hasher) {
        self.hash_kind(&mut state)
    }
}

/// Kind every other kind conforms to
///
/// Shares the held value by reference count; Cloning an Object does not clone the value.
/// Equality, hashing and display are those of the held value, so an Object holding `"hello"` equals a `OneOf` holding the bare `String` `"hello"`
#[derive(Clone)]
pub struct Object(Arc<dyn Value>);

impl Object {
    /// Wraps a value, objects passed in are returned as-is rather than nested
    pub fn new<T: Kind>(value: T) -> Self {
        match (&value as &dyn Any).downcast_ref::<Object>() {
            Some(object) => object.clone(),
            None => Object(Arc::new(value)),
        }
    }

    /// Returns a reference to the held value if it is of type T
    pub fn downcast_ref<T: Kind>(&self) -> Option<&T> {
        self.0.as_any().downcast_ref::<T>()
    }

    /// Returns true if the held value is of type T
    pub fn is<T: Kind>(&self) -> bool {
        self.0.as_any().is::<T>()
    }

    /// Returns true if both objects share the same held value
    pub fn ptr_eq(&self, other: &Object) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl Kind for Object {
    const KIND_NAME: &'static str = "object";

    fn kind_name(&self) -> &'static str {
        self.0.kind_name()
    }

    fn hash_kind<H: Hasher>(&self, state: &mut H) {
        self.0.hash_value(state)
    }

    fn as_any(&self) -> &dyn Any {
        self.0.as_any()
    }

    fn conform<V: Kind>(value: &V) -> Option<Self> {
        Some(Object::new(value.clone()))
    }
}

impl PartialEq for Object {
    fn eq(&self, other: &Self) -> bool {
        self.0.eq_value(&*other.0)
    }
}

impl Hash for Object {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.hash_kind(state)
    }
}

impl Debug for Object {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Object").field(&self.0).finish()
    }
}

impl Display for Object {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        Display::fmt(&*self.0, f)
    }
}
