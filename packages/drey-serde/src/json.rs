//! Mapping between JSON documents and drey values.
//!
//! The rules:
//! - `null` is [`Value::Absent`]. An object member holding `null` is still a
//!   member, so [`is_in`](drey::is_in) sees it while
//!   [`get_in`](drey::get_in) reads it as absent.
//! - Numbers that fit `i64` become [`Value::Integer`], all others
//!   [`Value::Float`].
//! - Functions have no JSON form. Object members holding one are left out of
//!   the output; inside arrays they become `null` so positions are kept.
//! - Non-finite floats become `null`.

use drey::{Map, Value};
use serde_json::{Map as JsonMap, Number, Value as Json};
use tracing::trace;

use crate::Error;

/// Read a JSON document into a value.
pub fn json_to_value(json: Json) -> Value {
    match json {
        Json::Null => Value::Absent,
        Json::Bool(b) => Value::Bool(b),
        Json::Number(n) => number_to_value(&n),
        Json::String(s) => Value::String(s),
        Json::Array(items) => Value::Array(items.into_iter().map(json_to_value).collect()),
        Json::Object(members) => Value::Map(object_to_map(members)),
    }
}

fn number_to_value(n: &Number) -> Value {
    match n.as_i64() {
        Some(i) => Value::Integer(i),
        None => n.as_f64().map_or(Value::Absent, Value::Float),
    }
}

fn object_to_map(members: JsonMap<String, Json>) -> Map {
    members
        .into_iter()
        .map(|(key, json)| (key, json_to_value(json)))
        .collect()
}

/// Write a value out as JSON.
///
/// A bare function becomes `null`.
pub fn value_to_json(value: Value) -> Json {
    match value {
        Value::Absent | Value::Function(_) => Json::Null,
        Value::Bool(b) => Json::Bool(b),
        Value::Integer(i) => Json::from(i),
        Value::Float(f) => Number::from_f64(f).map_or(Json::Null, Json::Number),
        Value::String(s) => Json::String(s),
        Value::Array(items) => Json::Array(items.into_iter().map(value_to_json).collect()),
        Value::Map(map) => Json::Object(map_to_object(map)),
    }
}

fn map_to_object(map: Map) -> JsonMap<String, Json> {
    let mut members = JsonMap::new();
    for (key, value) in map {
        if let Value::Function(callable) = &value {
            trace!(key = %key, callable = ?callable, "leaving function out of JSON");
            continue;
        }
        members.insert(key, value_to_json(value));
    }
    members
}

/// Build a subject from a JSON document, which must be an object.
///
/// # Errors
///
/// [`Error::NotAnObject`] naming the JSON type found instead.
pub fn subject_from_json(json: Json) -> Result<Map, Error> {
    let found = match json {
        Json::Object(members) => return Ok(object_to_map(members)),
        Json::Null => "null",
        Json::Bool(_) => "bool",
        Json::Number(_) => "number",
        Json::String(_) => "string",
        Json::Array(_) => "array",
    };
    Err(Error::NotAnObject { found })
}

/// Write a whole subject out as a JSON object.
pub fn subject_to_json(subject: Map) -> Json {
    Json::Object(map_to_object(subject))
}

#[cfg(test)]
mod tests {
    use super::*;
    use drey::{get_in, invoke_in, is_in, set_in, update_in};
    use serde_json::json;

    #[test]
    fn null_member_is_present_but_absent() {
        let subject = subject_from_json(json!({"a": null, "b": {"c": null}})).unwrap();

        assert!(is_in(&subject, "a"));
        assert!(get_in(&subject, "a").is_absent());
        assert!(is_in(&subject, "b.c"));
        assert!(!is_in(&subject, "b.d"));
    }

    #[test]
    fn null_member_survives_round_trip() {
        let doc = json!({"a": null, "b": {"c": null}});
        let subject = subject_from_json(doc.clone()).unwrap();
        assert_eq!(subject_to_json(subject), doc);
    }

    #[test]
    fn null_member_can_be_updated() {
        let mut subject = subject_from_json(json!({"pending": null})).unwrap();
        update_in(&mut subject, "pending", Value::from(false)).unwrap();
        assert_eq!(subject_to_json(subject), json!({"pending": false}));
    }

    #[test]
    fn numbers_split_into_integers_and_floats() {
        let subject = subject_from_json(json!({
            "small": -100,
            "half": 0.5,
            "huge": u64::MAX
        }))
        .unwrap();

        assert_eq!(get_in(&subject, "small"), &Value::Integer(-100));
        assert_eq!(get_in(&subject, "half"), &Value::Float(0.5));
        assert!(matches!(get_in(&subject, "huge"), Value::Float(_)));
    }

    #[test]
    fn arrays_are_leaves() {
        let subject = subject_from_json(json!({"list": [{"x": 1}]})).unwrap();
        assert!(is_in(&subject, "list"));
        assert!(!is_in(&subject, "list.0"));
        assert!(!is_in(&subject, "list.0.x"));
    }

    #[test]
    fn functions_left_out_of_objects() {
        let mut subject = subject_from_json(json!({"count": 0})).unwrap();
        set_in(
            &mut subject,
            "bump",
            Value::function(|this, _| {
                let n = get_in(this, "count").as_i64().unwrap_or_default();
                set_in(this, "count", Value::from(n + 1));
                Value::Absent
            }),
        );
        invoke_in(&mut subject, "bump", &[]).unwrap();

        assert_eq!(subject_to_json(subject), json!({"count": 1}));
    }

    #[test]
    fn functions_in_arrays_keep_their_slot() {
        let value = Value::Array(vec![
            Value::from(1),
            Value::function(|_, _| Value::Absent),
        ]);
        assert_eq!(value_to_json(value), json!([1, null]));
    }

    #[test]
    fn non_finite_floats_become_null() {
        assert_eq!(value_to_json(Value::Float(f64::NAN)), Json::Null);
        assert_eq!(value_to_json(Value::Float(f64::INFINITY)), Json::Null);
    }

    #[test]
    fn subject_must_be_an_object() {
        for (doc, kind) in [
            (json!(null), "null"),
            (json!(true), "bool"),
            (json!(7), "number"),
            (json!("s"), "string"),
            (json!([1, 2]), "array"),
        ] {
            let err = subject_from_json(doc).unwrap_err();
            assert!(matches!(err, Error::NotAnObject { found } if found == kind));
        }
    }

    #[test]
    fn set_in_then_dump() {
        let mut subject = subject_from_json(json!({"foo": {"bar": 1}})).unwrap();
        set_in(&mut subject, "foo.newprop.another", Value::from("v"));

        assert_eq!(
            subject_to_json(subject),
            json!({"foo": {"bar": 1, "newprop": {"another": "v"}}})
        );
    }
}
