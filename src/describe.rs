//! The `Describe` trait and its implementations for std types
//!
//! A type opts into field validation by describing itself as a [`Value`].
//! Records are usually described with the [`describe_record!`](crate::describe_record)
//! macro; scalars, strings and collections from `std` are covered here.
//!
//! | Rust type                                   | Kind              |
//! |---------------------------------------------|-------------------|
//! | `String`, `str`, `Cow<str>`                 | String            |
//! | `i8`..`i128`, `isize`                       | SignedInteger     |
//! | `u8`..`u128`, `usize`                       | UnsignedInteger   |
//! | `f32`, `f64`                                | Float             |
//! | `bool`                                      | Boolean           |
//! | `Vec<T>`, `VecDeque<T>`, `[T; N]`, `[T]`    | Sequence          |
//! | `&T`, `Box<T>`, `Rc<T>`, `Arc<T>`           | same as `T`       |
//! | `Option<T>`, maps, sets, `char`, `()`       | Unsupported       |
//!
//! # Examples
//!
//! ```
//! use fieldcheck::{describe_record, validate, ErrorKind};
//!
//! struct Server {
//!     host: String,
//!     port: u16,
//!     tls: bool,
//! }
//!
//! describe_record!(Server {
//!     #[tag = "env:HOST"]
//!     host,
//!     port,
//!     tls,
//! });
//!
//! let server = Server { host: "localhost".into(), port: 0, tls: false };
//! let err = validate(&server, false).unwrap_err();
//! assert_eq!(err.kind(), ErrorKind::NumberZero);
//! assert_eq!(err.field(), "port");
//! ```

use std::borrow::Cow;
use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet, VecDeque};
use std::rc::Rc;
use std::sync::Arc;

use crate::value::Value;

/// A type that can describe itself for field validation.
///
/// Implementations should be cheap: they borrow from `self` and must not
/// describe their fields eagerly. Records hand out field handles through
/// [`Record::field`](crate::Record::field) and the validator describes each
/// one only when it gets there.
pub trait Describe {
    /// Describe this value.
    fn describe(&self) -> Value<'_>;
}

impl<T: Describe + ?Sized> Describe for &T {
    #[inline]
    fn describe(&self) -> Value<'_> {
        (**self).describe()
    }
}

impl<T: Describe + ?Sized> Describe for &mut T {
    #[inline]
    fn describe(&self) -> Value<'_> {
        (**self).describe()
    }
}

impl<T: Describe + ?Sized> Describe for Box<T> {
    #[inline]
    fn describe(&self) -> Value<'_> {
        (**self).describe()
    }
}

impl<T: Describe + ?Sized> Describe for Rc<T> {
    #[inline]
    fn describe(&self) -> Value<'_> {
        (**self).describe()
    }
}

impl<T: Describe + ?Sized> Describe for Arc<T> {
    #[inline]
    fn describe(&self) -> Value<'_> {
        (**self).describe()
    }
}

impl Describe for str {
    #[inline]
    fn describe(&self) -> Value<'_> {
        Value::String(self)
    }
}

impl Describe for String {
    #[inline]
    fn describe(&self) -> Value<'_> {
        Value::String(self.as_str())
    }
}

impl Describe for Cow<'_, str> {
    #[inline]
    fn describe(&self) -> Value<'_> {
        Value::String(self.as_ref())
    }
}

macro_rules! describe_signed {
    ($($t:ty),*) => {
        $(
            impl Describe for $t {
                #[inline]
                fn describe(&self) -> Value<'_> {
                    Value::SignedInteger(i128::from(*self))
                }
            }
        )*
    };
}

macro_rules! describe_unsigned {
    ($($t:ty),*) => {
        $(
            impl Describe for $t {
                #[inline]
                fn describe(&self) -> Value<'_> {
                    Value::UnsignedInteger(u128::from(*self))
                }
            }
        )*
    };
}

describe_signed!(i8, i16, i32, i64, i128);
describe_unsigned!(u8, u16, u32, u64, u128);

impl Describe for isize {
    #[inline]
    fn describe(&self) -> Value<'_> {
        // isize is at most 64 bits wide on every supported target
        Value::SignedInteger(*self as i128)
    }
}

impl Describe for usize {
    #[inline]
    fn describe(&self) -> Value<'_> {
        Value::UnsignedInteger(*self as u128)
    }
}

impl Describe for f32 {
    #[inline]
    fn describe(&self) -> Value<'_> {
        Value::Float(f64::from(*self))
    }
}

impl Describe for f64 {
    #[inline]
    fn describe(&self) -> Value<'_> {
        Value::Float(*self)
    }
}

impl Describe for bool {
    #[inline]
    fn describe(&self) -> Value<'_> {
        Value::Boolean(*self)
    }
}

impl<T: Describe> Describe for Vec<T> {
    fn describe(&self) -> Value<'_> {
        Value::sequence(self.iter())
    }
}

impl<T: Describe> Describe for VecDeque<T> {
    fn describe(&self) -> Value<'_> {
        Value::sequence(self.iter())
    }
}

impl<T: Describe, const N: usize> Describe for [T; N] {
    fn describe(&self) -> Value<'_> {
        Value::sequence(self.iter())
    }
}

impl<T: Describe> Describe for [T] {
    fn describe(&self) -> Value<'_> {
        Value::sequence(self.iter())
    }
}

// Types with no validation rule. `Option` plays the part of a nullable
// pointer, and maps/sets are not sequences.
macro_rules! describe_unsupported {
    ($(impl<$($g:ident),*> for $t:ty;)*) => {
        $(
            impl<$($g),*> Describe for $t {
                #[inline]
                fn describe(&self) -> Value<'_> {
                    Value::unsupported::<Self>()
                }
            }
        )*
    };
}

describe_unsupported! {
    impl<> for char;
    impl<> for ();
    impl<T> for Option<T>;
    impl<K, V, S> for HashMap<K, V, S>;
    impl<K, V> for BTreeMap<K, V>;
    impl<T, S> for HashSet<T, S>;
    impl<T> for BTreeSet<T>;
}

/// Implement [`Describe`] for a struct as a record of its named fields.
///
/// Fields are validated in the order they are listed. A field may carry a
/// tag with `#[tag = "..."]`; the tag only shows up in error messages. Every
/// listed field's type must itself implement `Describe`.
///
/// Structs with lifetime parameters are accepted (`Borrowed<'a> { host }`).
/// Structs generic over types need a hand-written impl built with
/// [`Record::new`](crate::Record::new) and [`Record::field`](crate::Record::field),
/// since the macro cannot add the `Describe` bounds they require.
///
/// # Examples
///
/// ```
/// use fieldcheck::{describe_record, validate, ErrorKind};
///
/// struct Credentials {
///     user: String,
///     token: String,
/// }
///
/// describe_record!(Credentials {
///     #[tag = "json:\"user\""]
///     user,
///     #[tag = "json:\"token\""]
///     token,
/// });
///
/// let creds = Credentials { user: "svc".into(), token: String::new() };
/// let err = validate(&creds, false).unwrap_err();
/// assert_eq!(err.kind(), ErrorKind::StringEmpty);
/// assert_eq!(err.field(), "token");
/// assert_eq!(err.tag(), "json:\"token\"");
/// ```
#[macro_export]
macro_rules! describe_record {
    (@tag) => {
        ""
    };
    (@tag $tag:literal) => {
        $tag
    };
    (
        $ty:ident $(<$($lt:lifetime),+ $(,)?>)?
        { $( $(#[tag = $tag:literal])? $field:ident ),* $(,)? }
    ) => {
        impl $(<$($lt),+>)? $crate::Describe for $ty $(<$($lt),+>)? {
            fn describe(&self) -> $crate::Value<'_> {
                $crate::Value::Record(
                    $crate::Record::new(::core::stringify!($ty))
                        $(
                            .field(
                                ::core::stringify!($field),
                                $crate::describe_record!(@tag $($tag)?),
                                &self.$field,
                            )
                        )*
                )
            }
        }
    };
}
