//! Read, check, invoke and write values at paths inside a subject.
//!
//! Every operation accepts any [`IntoPath`], so `"foo.bar"` and
//! `["foo", "bar"]` behave identically. A path that normalizes to no keys
//! never resolves.

use tracing::{debug, trace};

use crate::{Error, IntoPath, Map, Path, Value};

static ABSENT: Value = Value::Absent;

/// Walk `keys` through nested maps, stopping at the first missing key or
/// non-map intermediate.
fn lookup<'a>(subject: &'a Map, keys: &[String]) -> Option<&'a Value> {
    let (first, rest) = keys.split_first()?;
    let mut current = subject.get(first)?;
    for key in rest {
        current = match current {
            Value::Map(map) => map.get(key)?,
            _ => return None,
        };
    }
    Some(current)
}

/// Mutable walk to the map holding the final key of a path.
fn parent_mut<'a>(subject: &'a mut Map, parents: &[String]) -> Option<&'a mut Map> {
    let mut current = subject;
    for key in parents {
        current = match current.get_mut(key) {
            Some(Value::Map(map)) => map,
            _ => return None,
        };
    }
    Some(current)
}

/// Normalize a path, logging instead of failing.
fn resolve_path(path: impl IntoPath) -> Option<Path> {
    match path.into_path() {
        Ok(path) => Some(path),
        Err(e) => {
            trace!(error = %e, "path does not resolve");
            None
        }
    }
}

/// Read the value at `path`, or [`Value::Absent`] when it does not resolve.
///
/// # Example
///
/// ```rust
/// use drey::{get_in, set_in, Map, Value};
///
/// let mut subject = Map::new();
/// set_in(&mut subject, "foo.bar.baz", Value::from("test"));
///
/// assert_eq!(get_in(&subject, ["foo", "bar", "baz"]), &Value::from("test"));
/// assert!(get_in(&subject, "bar").is_absent());
/// ```
pub fn get_in<'a>(subject: &'a Map, path: impl IntoPath) -> &'a Value {
    get_in_or(subject, path, &ABSENT)
}

/// Read the value at `path`, or `default` when it does not resolve.
///
/// A stored [`Value::Absent`] is returned as is, not replaced by `default`.
pub fn get_in_or<'a>(subject: &'a Map, path: impl IntoPath, default: &'a Value) -> &'a Value {
    let Some(path) = resolve_path(path) else {
        return default;
    };
    match lookup(subject, path.keys()) {
        Some(value) => value,
        None => {
            trace!(path = %path, "path not found, using default");
            default
        }
    }
}

/// Check whether every key of `path` exists.
///
/// Unlike [`get_in`], this reports a stored [`Value::Absent`] as present.
pub fn is_in(subject: &Map, path: impl IntoPath) -> bool {
    resolve_path(path).is_some_and(|path| lookup(subject, path.keys()).is_some())
}

/// Call the function at `path` with `subject` as its receiver.
///
/// The function's own return value is discarded; the subject is returned so
/// calls can be chained.
///
/// # Errors
///
/// [`Error::InvocationTarget`] if `path` does not resolve to a
/// [`Value::Function`].
pub fn invoke_in<'a>(
    subject: &'a mut Map,
    path: impl IntoPath,
    args: &[Value],
) -> Result<&'a mut Map, Error> {
    let path = resolve_path(path);
    let keys = path.as_ref().map(Path::keys).unwrap_or_default();

    // Cloned out so the subject can be lent to the call.
    let callable = match lookup(subject, keys) {
        Some(Value::Function(callable)) => callable.clone(),
        found => {
            debug!(
                keys = ?keys,
                found = ?found.map(kind),
                "no function to invoke"
            );
            return Err(Error::InvocationTarget {
                keys: keys.to_vec(),
            });
        }
    };

    trace!(keys = ?keys, args = args.len(), "invoking");
    callable.call(subject, args);
    Ok(subject)
}

/// Replace the value at an existing `path`.
///
/// # Errors
///
/// [`Error::UpdatePath`] if any key of `path` is missing, including the last.
pub fn update_in<'a>(
    subject: &'a mut Map,
    path: impl IntoPath,
    value: Value,
) -> Result<&'a mut Map, Error> {
    let Some(path) = resolve_path(path) else {
        return Err(Error::UpdatePath { keys: Vec::new() });
    };
    let (last, parents) = path.split_last();

    match parent_mut(subject, parents).and_then(|parent| parent.get_mut(last)) {
        Some(slot) => *slot = value,
        None => {
            debug!(path = %path, "cannot update missing path");
            return Err(Error::UpdatePath {
                keys: path.into_keys(),
            });
        }
    }
    Ok(subject)
}

/// Assign `value` at `path`, creating maps for missing or non-map
/// intermediates.
pub fn set_in(subject: &mut Map, path: impl IntoPath, value: Value) -> &mut Map {
    let Some(path) = resolve_path(path) else {
        return subject;
    };
    let (last, parents) = path.split_last();
    assign(subject, parents, last, value);
    subject
}

/// Descend through `parents`, building fresh maps where a key is missing or
/// holds a non-map, then insert `value` under `last`.
fn assign(map: &mut Map, parents: &[String], last: &str, value: Value) {
    let Some((key, rest)) = parents.split_first() else {
        map.insert(last.to_string(), value);
        return;
    };

    let slot = map.entry(key.clone()).or_default();
    if let Value::Map(child) = &mut *slot {
        return assign(child, rest, last, value);
    }

    debug!(key = %key, replaced = kind(slot), "creating intermediate map");
    let mut child = Map::new();
    assign(&mut child, rest, last, value);
    *slot = Value::Map(child);
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Absent => "absent",
        Value::Bool(_) => "bool",
        Value::Integer(_) => "integer",
        Value::Float(_) => "float",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Map(_) => "map",
        Value::Function(_) => "function",
    }
}

/// The engine operations as methods on a subject.
///
/// ```rust
/// use drey::{Map, Subject, Value};
///
/// let mut subject = Map::new();
/// subject
///     .set_in("a.b", Value::from(1))
///     .set_in(["a", "c"], Value::from(2));
///
/// assert!(subject.is_in("a.b") && subject.is_in("a.c"));
/// ```
pub trait Subject {
    fn get_in(&self, path: impl IntoPath) -> &Value;
    fn get_in_or<'a>(&'a self, path: impl IntoPath, default: &'a Value) -> &'a Value;
    fn is_in(&self, path: impl IntoPath) -> bool;
    fn invoke_in(&mut self, path: impl IntoPath, args: &[Value]) -> Result<&mut Self, Error>;
    fn update_in(&mut self, path: impl IntoPath, value: Value) -> Result<&mut Self, Error>;
    fn set_in(&mut self, path: impl IntoPath, value: Value) -> &mut Self;
}

impl Subject for Map {
    fn get_in(&self, path: impl IntoPath) -> &Value {
        get_in(self, path)
    }

    fn get_in_or<'a>(&'a self, path: impl IntoPath, default: &'a Value) -> &'a Value {
        get_in_or(self, path, default)
    }

    fn is_in(&self, path: impl IntoPath) -> bool {
        is_in(self, path)
    }

    fn invoke_in(&mut self, path: impl IntoPath, args: &[Value]) -> Result<&mut Self, Error> {
        invoke_in(self, path, args)
    }

    fn update_in(&mut self, path: impl IntoPath, value: Value) -> Result<&mut Self, Error> {
        update_in(self, path, value)
    }

    fn set_in(&mut self, path: impl IntoPath, value: Value) -> &mut Self {
        set_in(self, path, value)
    }
}
