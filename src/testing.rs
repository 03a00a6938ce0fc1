//! Assertion macros for tests
//!
//! These macros make validation results readable in downstream test suites.
//!
//! ```rust
//! use fieldcheck::{assert_invalid, assert_valid, describe_record, validate, ErrorKind};
//!
//! struct Limits {
//!     max_conns: u32,
//! }
//!
//! describe_record!(Limits { max_conns });
//!
//! assert_valid!(validate(&Limits { max_conns: 16 }, false));
//! assert_invalid!(validate(&Limits { max_conns: 0 }, false), ErrorKind::NumberZero, "max_conns");
//! ```

/// Assert that a validation result is `Ok`.
///
/// Panics with the rendered error otherwise.
///
/// # Example
///
/// ```rust
/// use fieldcheck::{assert_valid, Record, Validator};
///
/// assert_valid!(Validator::new().validate(&Record::new("Empty")));
/// ```
#[macro_export]
macro_rules! assert_valid {
    ($result:expr) => {
        match $result {
            ::core::result::Result::Ok(_) => {}
            ::core::result::Result::Err(e) => {
                panic!("Expected valid record, got error: {}", e);
            }
        }
    };
}

/// Assert that a validation result is an error.
///
/// Optionally checks the [`ErrorKind`](crate::ErrorKind), and the name of the
/// failing field.
///
/// # Example
///
/// ```rust
/// use fieldcheck::{assert_invalid, validate, ErrorKind};
///
/// assert_invalid!(validate(&7u8, false));
/// assert_invalid!(validate(&7u8, false), ErrorKind::NotARecord);
/// ```
#[macro_export]
macro_rules! assert_invalid {
    ($result:expr) => {
        match $result {
            ::core::result::Result::Err(_) => {}
            ::core::result::Result::Ok(_) => {
                panic!("Expected validation error, got Ok");
            }
        }
    };
    ($result:expr, $kind:expr) => {
        match $result {
            ::core::result::Result::Err(e) => {
                assert_eq!(e.kind(), $kind, "unexpected error kind: {}", e);
            }
            ::core::result::Result::Ok(_) => {
                panic!("Expected validation error {:?}, got Ok", $kind);
            }
        }
    };
    ($result:expr, $kind:expr, $field:expr) => {
        match $result {
            ::core::result::Result::Err(e) => {
                assert_eq!(e.kind(), $kind, "unexpected error kind: {}", e);
                assert_eq!(e.field(), $field, "unexpected failing field: {}", e);
            }
            ::core::result::Result::Ok(_) => {
                panic!("Expected validation error {:?} on {:?}, got Ok", $kind, $field);
            }
        }
    };
}
