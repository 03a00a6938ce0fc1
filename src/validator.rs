//! Recursive field validation
//!
//! The validator walks a record's fields in declaration order and stops at
//! the first field that does not hold a meaningful value:
//!
//! - strings must be non-empty
//! - integers and floats must be non-zero
//! - booleans are always valid
//! - nested records are validated recursively
//! - sequences must be non-empty, and their elements non-empty/non-zero
//! - anything else fails with [`ErrorKind::UnsupportedType`], unless
//!   unsupported types are ignored
//!
//! # Examples
//!
//! ```
//! use fieldcheck::{describe_record, ErrorKind, Validator};
//!
//! struct Inner {
//!     score: u32,
//! }
//!
//! struct Outer {
//!     name: String,
//!     inner: Inner,
//! }
//!
//! describe_record!(Inner { score });
//! describe_record!(Outer { name, inner });
//!
//! let value = Outer { name: "x".into(), inner: Inner { score: 0 } };
//! let err = Validator::new().validate(&value).unwrap_err();
//!
//! assert_eq!(err.kind(), ErrorKind::NumberZero);
//! assert_eq!(err.field(), "score");
//! assert_eq!(err.dotted_path(), "inner.score");
//! ```

use crate::describe::Describe;
use crate::error::{ErrorKind, ValidationError};
use crate::options::{ElementCheck, Options};
use crate::value::{Record, Value};

/// Validate that every field of `record` holds a non-default value.
///
/// `record` must describe itself as a record; any other value fails with
/// [`ErrorKind::NotARecord`]. When `ignore_unsupported_types` is true, fields
/// of unsupported kinds are skipped instead of rejected.
///
/// This is shorthand for a [`Validator`] with default options apart from the
/// unsupported-type policy.
///
/// # Examples
///
/// ```
/// use fieldcheck::{describe_record, validate, ErrorKind};
/// use std::collections::HashMap;
///
/// struct Settings {
///     name: String,
///     extra: HashMap<String, String>,
/// }
///
/// describe_record!(Settings { name, extra });
///
/// let settings = Settings { name: "svc".into(), extra: HashMap::new() };
///
/// let err = validate(&settings, false).unwrap_err();
/// assert_eq!(err.kind(), ErrorKind::UnsupportedType);
///
/// assert!(validate(&settings, true).is_ok());
/// ```
pub fn validate<T>(record: &T, ignore_unsupported_types: bool) -> Result<(), ValidationError>
where
    T: Describe + ?Sized,
{
    Validator::new()
        .ignore_unsupported_types(ignore_unsupported_types)
        .validate(record)
}

/// A configured field validator.
///
/// The validator holds no state between calls and can be shared freely.
///
/// # Examples
///
/// ```
/// use fieldcheck::{describe_record, ElementCheck, ErrorKind, Validator};
///
/// struct Weights {
///     values: Vec<f64>,
/// }
///
/// describe_record!(Weights { values });
///
/// let weights = Weights { values: vec![0.5, 0.0] };
///
/// // Float elements are not inspected by the shallow element check
/// assert!(Validator::new().validate(&weights).is_ok());
///
/// let strict = Validator::new().element_check(ElementCheck::Recursive);
/// let err = strict.validate(&weights).unwrap_err();
/// assert_eq!(err.kind(), ErrorKind::NumberZero);
/// assert_eq!(err.index(), Some(1));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Validator {
    options: Options,
}

impl Validator {
    /// Create a validator with strict default options.
    pub fn new() -> Self {
        Validator {
            options: Options::new(),
        }
    }

    /// Create a validator from explicit options.
    pub fn with_options(options: Options) -> Self {
        Validator { options }
    }

    /// Skip fields of unsupported kinds instead of failing.
    pub fn ignore_unsupported_types(mut self, ignore: bool) -> Self {
        self.options.ignore_unsupported_types = ignore;
        self
    }

    /// Limit how deep records (and recursive sequences) may nest.
    pub fn max_depth(mut self, max_depth: usize) -> Self {
        self.options.max_depth = max_depth;
        self
    }

    /// Choose how sequence elements are checked.
    pub fn element_check(mut self, element_check: ElementCheck) -> Self {
        self.options.element_check = element_check;
        self
    }

    /// The options this validator runs with.
    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Validate every field of `record`, stopping at the first invalid one.
    ///
    /// Fails with [`ErrorKind::NotARecord`] when `record` does not describe
    /// itself as a record.
    pub fn validate<T>(&self, record: &T) -> Result<(), ValidationError>
    where
        T: Describe + ?Sized,
    {
        match record.describe() {
            Value::Record(record) => {
                #[cfg(feature = "tracing")]
                let _span = tracing::debug_span!("validate", record = record.name()).entered();

                self.traverse(&record, 0)
            }
            _other => {
                #[cfg(feature = "tracing")]
                tracing::debug!(kind = %_other.kind(), "refusing to validate a non-record value");

                Err(ValidationError::unattached(ErrorKind::NotARecord))
            }
        }
    }

    fn traverse(&self, record: &Record<'_>, depth: usize) -> Result<(), ValidationError> {
        for field in record.fields() {
            self.check_field(field.name(), field.tag(), field.value().describe(), depth)?;
        }
        Ok(())
    }

    fn check_field(
        &self,
        name: &str,
        tag: &str,
        value: Value<'_>,
        depth: usize,
    ) -> Result<(), ValidationError> {
        #[cfg(feature = "tracing")]
        tracing::trace!(field = name, kind = %value.kind(), depth, "checking field");

        match value {
            Value::Record(inner) => {
                self.descend(name, tag, depth)?;
                self.traverse(&inner, depth + 1)
                    .map_err(|err| err.within(name))
            }
            Value::String(s) if s.is_empty() => Err(reject(ErrorKind::StringEmpty, name, tag)),
            Value::SignedInteger(0) | Value::UnsignedInteger(0) => {
                Err(reject(ErrorKind::NumberZero, name, tag))
            }
            Value::Float(x) if x == 0.0 => Err(reject(ErrorKind::NumberZero, name, tag)),
            Value::Sequence(items) => self.check_sequence(name, tag, &items, depth),
            Value::Unsupported(_type_name) => {
                if self.options.ignore_unsupported_types {
                    #[cfg(feature = "tracing")]
                    tracing::debug!(
                        field = name,
                        type_name = _type_name,
                        "skipping unsupported field"
                    );

                    Ok(())
                } else {
                    Err(reject(ErrorKind::UnsupportedType, name, tag))
                }
            }
            Value::String(_)
            | Value::SignedInteger(_)
            | Value::UnsignedInteger(_)
            | Value::Float(_)
            | Value::Boolean(_) => Ok(()),
        }
    }

    fn check_sequence(
        &self,
        name: &str,
        tag: &str,
        items: &[&dyn Describe],
        depth: usize,
    ) -> Result<(), ValidationError> {
        if items.is_empty() {
            return Err(reject(ErrorKind::ListEmpty, name, tag));
        }

        match self.options.element_check {
            ElementCheck::Shallow => check_elements_shallow(name, tag, items),
            ElementCheck::Recursive => self.check_elements_recursive(name, tag, items, depth),
        }
    }

    fn check_elements_recursive(
        &self,
        name: &str,
        tag: &str,
        items: &[&dyn Describe],
        depth: usize,
    ) -> Result<(), ValidationError> {
        for (index, item) in items.iter().enumerate() {
            match item.describe() {
                Value::Record(inner) => {
                    self.descend(name, tag, depth)
                        .map_err(|err| err.at_index(index))?;
                    self.traverse(&inner, depth + 1)
                        .map_err(|err| err.within(element_label(name, index)))?;
                }
                Value::Sequence(inner) => {
                    self.descend(name, tag, depth)
                        .map_err(|err| err.at_index(index))?;
                    self.check_sequence(name, tag, &inner, depth + 1)
                        .map_err(|err| err.within(element_label(name, index)))?;
                }
                scalar => {
                    self.check_field(name, tag, scalar, depth)
                        .map_err(|err| err.at_index(index))?;
                }
            }
        }
        Ok(())
    }

    fn descend(&self, name: &str, tag: &str, depth: usize) -> Result<(), ValidationError> {
        if depth >= self.options.max_depth {
            return Err(reject(ErrorKind::DepthExceeded, name, tag));
        }
        Ok(())
    }
}

// Compares elements against "" and integer zero only.
fn check_elements_shallow(
    name: &str,
    tag: &str,
    items: &[&dyn Describe],
) -> Result<(), ValidationError> {
    for (index, item) in items.iter().enumerate() {
        let kind = match item.describe() {
            Value::String("") => ErrorKind::StringEmpty,
            Value::SignedInteger(0) | Value::UnsignedInteger(0) => ErrorKind::NumberZero,
            _ => continue,
        };
        return Err(reject(kind, name, tag).at_index(index));
    }
    Ok(())
}

fn element_label(name: &str, index: usize) -> String {
    format!("{}[{}]", name, index)
}

fn reject(kind: ErrorKind, name: &str, tag: &str) -> ValidationError {
    #[cfg(feature = "tracing")]
    tracing::debug!(field = name, tag, kind = %kind, "field failed validation");

    ValidationError::new(kind, name, tag)
}
