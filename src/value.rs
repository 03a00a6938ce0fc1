//! Dynamic view of a value for field validation
//!
//! [`Value`] is the union the validator dispatches on. Every type that can be
//! validated produces one through [`Describe`](crate::Describe). Records hold
//! their fields as borrowed `&dyn Describe` handles, so a field is only
//! described once the traversal actually reaches it.
//!
//! # Examples
//!
//! ```
//! use fieldcheck::{Describe, Kind, Record, Value};
//!
//! let name = String::from("Ann");
//! let age = 42u8;
//!
//! let record = Record::new("Person")
//!     .field("name", "json:\"name\"", &name)
//!     .field("age", "", &age);
//!
//! assert_eq!(record.len(), 2);
//! assert_eq!(record.fields()[1].value().describe().kind(), Kind::UnsignedInteger);
//! assert_eq!(Value::Record(record).kind(), Kind::Record);
//! ```

use std::fmt;

use crate::describe::Describe;

/// The kind of a value, used to select its validation rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    /// A nested record with named fields
    Record,
    /// A string
    String,
    /// A signed integer of any width
    SignedInteger,
    /// An unsigned integer of any width
    UnsignedInteger,
    /// A floating point number of any precision
    Float,
    /// A list or fixed-size array
    Sequence,
    /// A boolean
    Boolean,
    /// Anything the validator has no rule for
    Unsupported,
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Kind::Record => "record",
            Kind::String => "string",
            Kind::SignedInteger => "signed integer",
            Kind::UnsignedInteger => "unsigned integer",
            Kind::Float => "float",
            Kind::Sequence => "sequence",
            Kind::Boolean => "boolean",
            Kind::Unsupported => "unsupported",
        };
        f.write_str(name)
    }
}

/// A described value, borrowed from the data being validated.
pub enum Value<'a> {
    /// A nested record
    Record(Record<'a>),
    /// A string slice
    String(&'a str),
    /// A signed integer, widened to `i128`
    SignedInteger(i128),
    /// An unsigned integer, widened to `u128`
    UnsignedInteger(u128),
    /// A float, widened to `f64`
    Float(f64),
    /// The elements of a list or array
    Sequence(Vec<&'a dyn Describe>),
    /// A boolean
    Boolean(bool),
    /// A value with no validation rule, carrying its type name
    Unsupported(&'static str),
}

impl<'a> Value<'a> {
    /// Create an unsupported value naming the type `T`.
    ///
    /// # Examples
    ///
    /// ```
    /// use fieldcheck::{Kind, Value};
    ///
    /// let v = Value::unsupported::<std::time::Duration>();
    /// assert_eq!(v.kind(), Kind::Unsupported);
    /// ```
    pub fn unsupported<T: ?Sized>() -> Self {
        Value::Unsupported(std::any::type_name::<T>())
    }

    /// Collect borrowed elements into a sequence value.
    pub fn sequence<I, T>(items: I) -> Self
    where
        I: IntoIterator<Item = &'a T>,
        T: Describe + 'a,
    {
        Value::Sequence(
            items
                .into_iter()
                .map(|item| -> &'a dyn Describe { item })
                .collect(),
        )
    }

    /// The kind of this value.
    pub fn kind(&self) -> Kind {
        match self {
            Value::Record(_) => Kind::Record,
            Value::String(_) => Kind::String,
            Value::SignedInteger(_) => Kind::SignedInteger,
            Value::UnsignedInteger(_) => Kind::UnsignedInteger,
            Value::Float(_) => Kind::Float,
            Value::Sequence(_) => Kind::Sequence,
            Value::Boolean(_) => Kind::Boolean,
            Value::Unsupported(_) => Kind::Unsupported,
        }
    }
}

impl fmt::Debug for Value<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Record(record) => f.debug_tuple("Record").field(record).finish(),
            Value::String(s) => f.debug_tuple("String").field(s).finish(),
            Value::SignedInteger(n) => f.debug_tuple("SignedInteger").field(n).finish(),
            Value::UnsignedInteger(n) => f.debug_tuple("UnsignedInteger").field(n).finish(),
            Value::Float(x) => f.debug_tuple("Float").field(x).finish(),
            // Elements are not described here; a self-referential element would never end.
            Value::Sequence(items) => write!(f, "Sequence(len = {})", items.len()),
            Value::Boolean(b) => f.debug_tuple("Boolean").field(b).finish(),
            Value::Unsupported(ty) => f.debug_tuple("Unsupported").field(ty).finish(),
        }
    }
}

/// A record: a type name and its fields in declaration order.
#[derive(Debug, Clone)]
pub struct Record<'a> {
    name: &'a str,
    fields: Vec<Field<'a>>,
}

impl<'a> Record<'a> {
    /// Create an empty record with the given type name.
    pub fn new(name: &'a str) -> Self {
        Record {
            name,
            fields: Vec::new(),
        }
    }

    /// Append a field.
    ///
    /// Fields are validated in the order they are added. Pass `""` as the tag
    /// when the field has none.
    pub fn field<T: Describe>(mut self, name: &'a str, tag: &'a str, value: &'a T) -> Self {
        self.fields.push(Field { name, tag, value });
        self
    }

    /// The record's type name.
    pub fn name(&self) -> &'a str {
        self.name
    }

    /// The record's fields in declaration order.
    pub fn fields(&self) -> &[Field<'a>] {
        &self.fields
    }

    /// Number of fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Whether the record has no fields.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl Describe for Record<'_> {
    fn describe(&self) -> Value<'_> {
        Value::Record(self.clone())
    }
}

/// One named slot of a [`Record`].
#[derive(Clone, Copy)]
pub struct Field<'a> {
    name: &'a str,
    tag: &'a str,
    value: &'a dyn Describe,
}

impl<'a> Field<'a> {
    /// The declared field name.
    pub fn name(&self) -> &'a str {
        self.name
    }

    /// The field's tag, or `""` when it has none.
    pub fn tag(&self) -> &'a str {
        self.tag
    }

    /// The field's value, not yet described.
    pub fn value(&self) -> &'a dyn Describe {
        self.value
    }
}

impl fmt::Debug for Field<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Field")
            .field("name", &self.name)
            .field("tag", &self.tag)
            .finish_non_exhaustive()
    }
}
