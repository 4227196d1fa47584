//! The Value type stored in a subject.
//!
//! Paths only descend through [`Value::Map`]. Every other variant is a leaf,
//! including arrays.

use std::collections::BTreeMap;

use crate::Callable;

/// A keyed container of values. The subject of every engine operation is one
/// of these.
pub type Map = BTreeMap<String, Value>;

/// A value reachable from a subject.
///
/// # Design Notes
///
/// - `Absent` doubles as the sentinel returned for unresolved paths, so a
///   stored `Absent` reads the same as a missing key through
///   [`get_in`](crate::get_in). Use [`is_in`](crate::is_in) to tell them apart.
/// - Uses `BTreeMap` for deterministic key order.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum Value {
    /// No value.
    #[default]
    Absent,
    Bool(bool),
    Integer(i64),
    Float(f64),
    String(String),
    /// Ordered sequence. Never traversed by paths.
    Array(Vec<Value>),
    /// Nested mapping; the only variant paths descend into.
    Map(Map),
    /// A function invocable through [`invoke_in`](crate::invoke_in).
    Function(Callable),
}

impl Value {
    /// Create an empty map.
    pub fn map() -> Self {
        Value::Map(Map::new())
    }

    /// Wrap a closure as a [`Value::Function`].
    pub fn function<F>(func: F) -> Self
    where
        F: Fn(&mut Map, &[Value]) -> Value + Send + Sync + 'static,
    {
        Value::Function(Callable::new(func))
    }

    pub fn is_absent(&self) -> bool {
        matches!(self, Value::Absent)
    }

    pub fn is_map(&self) -> bool {
        matches!(self, Value::Map(_))
    }

    pub fn is_callable(&self) -> bool {
        matches!(self, Value::Function(_))
    }

    pub fn as_map(&self) -> Option<&Map> {
        match self {
            Value::Map(map) => Some(map),
            _ => None,
        }
    }

    pub fn as_map_mut(&mut self) -> Option<&mut Map> {
        match self {
            Value::Map(map) => Some(map),
            _ => None,
        }
    }

    pub fn as_callable(&self) -> Option<&Callable> {
        match self {
            Value::Function(callable) => Some(callable),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Value::Integer(i) => Some(*i),
            _ => None,
        }
    }
}

// Conversion from common types

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Bool(v)
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Integer(v)
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Value::Integer(v as i64)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Float(v)
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::String(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::String(v.to_string())
    }
}

impl From<Map> for Value {
    fn from(v: Map) -> Self {
        Value::Map(v)
    }
}

impl From<Callable> for Value {
    fn from(v: Callable) -> Self {
        Value::Function(v)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(v: Vec<T>) -> Self {
        Value::Array(v.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        v.map_or(Value::Absent, Into::into)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_absent() {
        assert!(Value::default().is_absent());
    }

    #[test]
    fn kind_checks() {
        assert!(Value::map().is_map());
        assert!(!Value::from("x").is_map());
        assert!(Value::function(|_, _| Value::Absent).is_callable());
        assert!(!Value::map().is_callable());
    }

    #[test]
    fn accessors() {
        assert_eq!(Value::from("hi").as_str(), Some("hi"));
        assert_eq!(Value::from(7i64).as_i64(), Some(7));
        assert_eq!(Value::from(true).as_i64(), None);
        assert!(Value::map().as_map().is_some());
        assert!(Value::from(1).as_map().is_none());
        assert!(Value::function(|_, _| Value::Absent).as_callable().is_some());

        let mut v = Value::map();
        v.as_map_mut()
            .unwrap()
            .insert("k".to_string(), Value::from(1));
        assert_eq!(v.as_map().unwrap().get("k"), Some(&Value::Integer(1)));
    }

    #[test]
    fn conversions() {
        assert_eq!(Value::from(3i32), Value::Integer(3));
        assert_eq!(Value::from(1.5), Value::Float(1.5));
        assert_eq!(Value::from(String::from("s")), Value::String("s".into()));
        assert_eq!(
            Value::from(vec![1i64, 2]),
            Value::Array(vec![Value::Integer(1), Value::Integer(2)])
        );
        assert_eq!(Value::from(None::<i64>), Value::Absent);
        assert_eq!(Value::from(Some("x")), Value::from("x"));
    }

    #[test]
    fn functions_compare_by_identity() {
        let f = Callable::new(|_, _| Value::Absent);
        assert_eq!(Value::from(f.clone()), Value::Function(f));
        assert_ne!(
            Value::function(|_, _| Value::Absent),
            Value::function(|_, _| Value::Absent)
        );
    }
}
