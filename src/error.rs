//! Validation errors
//!
//! A failed validation produces one [`ValidationError`]: the sentinel
//! [`ErrorKind`], the name and tag of the deepest failing field, the element
//! index when the failure came from inside a sequence, and the trail of
//! enclosing fields the error passed through on its way out.
//!
//! # Examples
//!
//! ```
//! use fieldcheck::{ErrorKind, ValidationError};
//!
//! let err = ValidationError::new(ErrorKind::NumberZero, "score", "json:\"score\"")
//!     .within("inner")
//!     .within("outer");
//!
//! assert!(err.is(ErrorKind::NumberZero));
//! assert_eq!(err.path(), &["inner", "outer"]);
//! assert_eq!(err.dotted_path(), "outer.inner.score");
//! ```

use std::error::Error as StdError;
use std::fmt;

/// The category of a validation failure.
///
/// Compare kinds directly, or use [`ValidationError::is`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The field's kind has no validation rule and unsupported types are not ignored
    UnsupportedType,
    /// A sequence field has no elements
    ListEmpty,
    /// A string field, or a string element of a sequence, is empty
    StringEmpty,
    /// A numeric field, or a numeric element of a sequence, is zero
    NumberZero,
    /// The value handed to the validator is not a record
    NotARecord,
    /// Records or sequences are nested deeper than the configured limit
    DepthExceeded,
}

impl ErrorKind {
    /// A short, lowercase description of this kind.
    pub fn message(&self) -> &'static str {
        match self {
            ErrorKind::UnsupportedType => "this type is not handled",
            ErrorKind::ListEmpty => "list is empty",
            ErrorKind::StringEmpty => "string is empty",
            ErrorKind::NumberZero => "number is zero",
            ErrorKind::NotARecord => "value is not a record",
            ErrorKind::DepthExceeded => "nesting depth limit exceeded",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// The first invalid field found by the validator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    kind: ErrorKind,
    field: String,
    tag: String,
    index: Option<usize>,
    path: Vec<String>,
}

impl ValidationError {
    /// Create an error for the named field.
    pub fn new(kind: ErrorKind, field: impl Into<String>, tag: impl Into<String>) -> Self {
        ValidationError {
            kind,
            field: field.into(),
            tag: tag.into(),
            index: None,
            path: Vec::new(),
        }
    }

    /// Create an error that is not tied to any field.
    ///
    /// Used when the value as a whole is rejected, e.g. [`ErrorKind::NotARecord`].
    pub fn unattached(kind: ErrorKind) -> Self {
        ValidationError::new(kind, String::new(), String::new())
    }

    /// Record the index of the sequence element that failed.
    pub fn at_index(mut self, index: usize) -> Self {
        self.index = Some(index);
        self
    }

    /// Record an enclosing field the error propagated out of.
    ///
    /// Call from the innermost field outwards.
    pub fn within(mut self, field: impl Into<String>) -> Self {
        self.path.push(field.into());
        self
    }

    /// The failure category.
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Whether this error is of the given kind.
    pub fn is(&self, kind: ErrorKind) -> bool {
        self.kind == kind
    }

    /// Name of the failing field, or `""` for errors not tied to a field.
    pub fn field(&self) -> &str {
        &self.field
    }

    /// Tag of the failing field, or `""` when it has none.
    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// Index of the failing element when the field is a sequence.
    pub fn index(&self) -> Option<usize> {
        self.index
    }

    /// Enclosing field names, innermost first.
    pub fn path(&self) -> &[String] {
        &self.path
    }

    /// Full location of the failing field, outermost first, joined by `.`.
    ///
    /// Element failures end in `[index]`. When the innermost enclosing entry
    /// is an element of the failing field itself (a list inside a list), the
    /// field name is not repeated: `rows[0][1]`, not `rows[0].rows`.
    pub fn dotted_path(&self) -> String {
        let mut parts: Vec<String> = self.path.iter().rev().cloned().collect();
        if self.field.is_empty() {
            return parts.join(".");
        }

        let nested = parts
            .last()
            .is_some_and(|last| self.is_element_of_field(last));
        let mut leaf = if nested {
            parts.pop().unwrap_or_default()
        } else {
            self.field.clone()
        };
        if let Some(index) = self.index {
            leaf.push_str(&format!("[{}]", index));
        }
        parts.push(leaf);
        parts.join(".")
    }

    fn is_element_of_field(&self, entry: &str) -> bool {
        entry
            .strip_prefix(self.field.as_str())
            .is_some_and(|rest| rest.starts_with('['))
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.field.is_empty() {
            write!(f, "{}", self.kind)?;
        } else {
            write!(f, "field: {} {{{}}}", self.field, self.tag)?;
            if let Some(index) = self.index {
                write!(f, "[{}]", index)?;
            }
            write!(f, ": {}", self.kind)?;
        }

        for parent in &self.path {
            write!(f, "\n  -> in {}", parent)?;
        }

        Ok(())
    }
}

impl StdError for ValidationError {}
