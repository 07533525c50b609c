//! Module for various macros

/// Boilerplate reduction macro.
/// Implements [`Kind`](crate::types::Kind) for a type that is `Clone + Debug + Display + PartialEq + Hash + Send + Sync + 'static`
///
/// The kind name defaults to the stringified type; a second argument overrides it.
///
/// Example
/// ```
/// use one_of::{impl_kind, OneOf};
/// use std::fmt;
///
/// #[derive(Clone, Debug, PartialEq, Hash)]
/// struct User {
///     id: u32,
///     name: String,
/// }
///
/// impl fmt::Display for User {
///     fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
///         write!(f, "{}#{}", self.name, self.id)
///     }
/// }
///
/// impl_kind!(User);
///
/// let union = OneOf::<String, User>::from_b(User { id: 7, name: String::from("ferris") });
/// assert_eq!(union.get_a(), None);
/// assert_eq!(union.kind_name(), "User");
/// assert_eq!(union.to_string(), "ferris#7");
/// ```
#[macro_export]
macro_rules! impl_kind {
    ($kind:ty) => {
        $crate::impl_kind!($kind, stringify!($kind));
    };
    ($kind:ty, $name:expr) => {
        impl $crate::types::Kind for $kind {
            const KIND_NAME: &'static str = $name;

            fn hash_kind<H: ::std::hash::Hasher>(&self, state: &mut H) {
                ::std::hash::Hash::hash(self, state)
            }
        }
    };
}
