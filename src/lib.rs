//! # fieldcheck
//!
//! Recursive validation that every field of a record holds a meaningful,
//! non-default value.
//!
//! Configuration and data-transfer objects are easy to leave half-populated:
//! a missing environment variable becomes an empty string, a forgotten port
//! becomes `0`. `fieldcheck` walks a record and rejects the first field that
//! still looks unset:
//!
//! - strings must be non-empty
//! - integers and floats must be non-zero
//! - booleans are unconstrained
//! - nested records are validated recursively
//! - lists and arrays must be non-empty, with non-empty/non-zero elements
//!
//! ## Quick Example
//!
//! ```rust
//! use fieldcheck::{describe_record, validate, ErrorKind};
//!
//! struct Database {
//!     url: String,
//!     pool_size: u32,
//! }
//!
//! struct Config {
//!     service: String,
//!     debug: bool,
//!     database: Database,
//!     replicas: Vec<String>,
//! }
//!
//! describe_record!(Database {
//!     #[tag = "env:DATABASE_URL"]
//!     url,
//!     pool_size,
//! });
//!
//! describe_record!(Config { service, debug, database, replicas });
//!
//! let config = Config {
//!     service: "billing".into(),
//!     debug: false,
//!     database: Database { url: String::new(), pool_size: 8 },
//!     replicas: vec!["db-1".into()],
//! };
//!
//! let err = validate(&config, false).unwrap_err();
//! assert_eq!(err.kind(), ErrorKind::StringEmpty);
//! assert_eq!(err.field(), "url");
//! assert_eq!(err.tag(), "env:DATABASE_URL");
//! assert_eq!(err.dotted_path(), "database.url");
//! ```
//!
//! Validation is fail-fast: only the first invalid field is reported.
//!
//! ## Features
//!
//! - `tracing`: emit `tracing` events for visited, failing and skipped fields
//! - `serde`: `Serialize`/`Deserialize` for [`Options`]

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

pub mod describe;
pub mod error;
pub mod options;
pub mod testing;
pub mod validator;
pub mod value;

// Re-exports
pub use describe::Describe;
pub use error::{ErrorKind, ValidationError};
pub use options::{ElementCheck, Options};
pub use validator::{validate, Validator};
pub use value::{Field, Kind, Record, Value};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::describe::Describe;
    pub use crate::describe_record;
    pub use crate::error::{ErrorKind, ValidationError};
    pub use crate::options::{ElementCheck, Options};
    pub use crate::validator::{validate, Validator};
    pub use crate::value::{Kind, Record, Value};
}
