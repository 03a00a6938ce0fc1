//! Validator configuration
//!
//! [`Options`] collects the knobs that change how strict the validator is.
//! With the `serde` feature enabled, options can be loaded from an
//! application's own configuration file; missing keys fall back to the
//! defaults.
//!
//! # Examples
//!
//! ```
//! use fieldcheck::{ElementCheck, Options};
//!
//! let options = Options::default();
//! assert!(!options.ignore_unsupported_types);
//! assert_eq!(options.max_depth, 64);
//! assert_eq!(options.element_check, ElementCheck::Shallow);
//! ```

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Default limit on record and sequence nesting.
pub const DEFAULT_MAX_DEPTH: usize = 64;

/// How the elements of a sequence field are checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum ElementCheck {
    /// Only string and integer elements are compared against `""` and `0`.
    ///
    /// Float, boolean, record, nested sequence and unsupported elements pass
    /// without inspection.
    #[default]
    Shallow,
    /// Every element is validated by kind, like a field of its own.
    Recursive,
}

/// Validator settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Options {
    /// Skip fields of unsupported kinds instead of failing on them.
    pub ignore_unsupported_types: bool,
    /// Maximum nesting of records (and, in recursive mode, sequences).
    pub max_depth: usize,
    /// How sequence elements are checked.
    pub element_check: ElementCheck,
}

impl Options {
    /// Strict defaults.
    pub fn new() -> Self {
        Options {
            ignore_unsupported_types: false,
            max_depth: DEFAULT_MAX_DEPTH,
            element_check: ElementCheck::Shallow,
        }
    }

    /// Defaults that skip unsupported fields.
    pub fn lenient() -> Self {
        Options {
            ignore_unsupported_types: true,
            ..Options::new()
        }
    }
}

impl Default for Options {
    fn default() -> Self {
        Options::new()
    }
}
