//! JSON integration for drey subjects.
//!
//! Load a subject from a JSON object, work on it with the drey operations,
//! and write it back out:
//!
//! ```rust
//! use drey::{get_in, is_in, set_in, Value};
//! use drey_serde::{subject_from_json, subject_to_json};
//! use serde_json::json;
//!
//! let mut subject = subject_from_json(json!({"foo": {"bar": {"baz": "test"}, "gone": null}})).unwrap();
//! assert_eq!(get_in(&subject, "foo.bar.baz"), &Value::from("test"));
//! assert!(is_in(&subject, "foo.gone"));
//!
//! set_in(&mut subject, "foo.bar.baz", Value::from("changed"));
//! assert_eq!(
//!     subject_to_json(subject),
//!     json!({"foo": {"bar": {"baz": "changed"}, "gone": null}})
//! );
//! ```

mod error;
mod json;

pub use error::Error;
pub use json::{json_to_value, subject_from_json, subject_to_json, value_to_json};
