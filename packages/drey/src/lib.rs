//! drey: read, check, invoke and update values at nested paths.
//!
//! A subject is a [`Map`] of [`Value`]s, where values may themselves be maps
//! or functions. A path names a location inside it, either as a sequence of
//! keys or as a single `.`-delimited string:
//! - [`get_in`] / [`get_in_or`]: read a value, falling back to a default
//! - [`is_in`]: check that a path exists
//! - [`invoke_in`]: call a stored function with the subject as receiver
//! - [`update_in`]: replace a value that must already exist
//! - [`set_in`]: assign a value, creating intermediate maps
//!
//! All operations work in place on the caller's subject. The mutating ones
//! hand the same subject back so calls can be chained.
//!
//! # Example
//!
//! ```rust
//! use drey::{get_in, invoke_in, is_in, set_in, update_in, Map, Value};
//!
//! let mut subject = Map::new();
//! set_in(&mut subject, "foo.bar.baz", Value::from("test"));
//! set_in(
//!     &mut subject,
//!     "foo.touch",
//!     Value::function(|receiver, _args| {
//!         drey::set_in(receiver, "foo.touched", Value::from(true));
//!         Value::Absent
//!     }),
//! );
//!
//! assert!(is_in(&subject, ["foo", "bar", "baz"]));
//! invoke_in(&mut subject, "foo.touch", &[]).unwrap();
//! assert_eq!(get_in(&subject, "foo.touched"), &Value::from(true));
//!
//! let err = update_in(&mut subject, "foo.invalid", Value::from(1)).unwrap_err();
//! assert_eq!(err.to_string(), "Could not find path in object to update: foo,invalid");
//! ```

mod callable;
mod engine;
mod error;
mod path;
mod value;

pub use callable::Callable;
pub use engine::{get_in, get_in_or, invoke_in, is_in, set_in, update_in, Subject};
pub use error::Error;
pub use path::{normalize_path, IntoPath, Path, PathError, DELIMITER};
pub use value::{Map, Value};
