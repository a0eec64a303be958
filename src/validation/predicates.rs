//! Value-shape predicates shared by the field validators.
//!
//! All predicates take a [`FieldValue`], so absence is always an explicit case.
//! `null` is a present value and satisfies none of the shape tests.

use serde_json::Value;

use crate::manifest::FieldValue;

pub fn is_absent(value: FieldValue<'_>) -> bool {
    value.is_absent()
}

pub fn is_string(value: FieldValue<'_>) -> bool {
    matches!(value.value(), Some(Value::String(_)))
}

/// A JSON object; arrays and `null` do not count.
pub fn is_object(value: FieldValue<'_>) -> bool {
    matches!(value.value(), Some(Value::Object(_)))
}

pub fn is_absent_or_string(value: FieldValue<'_>) -> bool {
    is_absent(value) || is_string(value)
}

/// An array whose elements are all strings (the empty array qualifies).
pub fn is_array_of_strings(value: FieldValue<'_>) -> bool {
    match value.value() {
        Some(Value::Array(items)) => items.iter().all(Value::is_string),
        _ => false,
    }
}

/// An object whose values are all strings (the empty object qualifies).
pub fn is_object_of_strings(value: FieldValue<'_>) -> bool {
    match value.value() {
        Some(Value::Object(map)) => map.values().all(Value::is_string),
        _ => false,
    }
}

/// Look up `key` inside an object value; anything else has no members.
pub fn member<'a>(value: FieldValue<'a>, key: &str) -> FieldValue<'a> {
    match value.value() {
        Some(Value::Object(map)) => map.get(key).into(),
        _ => FieldValue::Absent,
    }
}

/// A person: either a `"Name <email> (url)"` string, or an object with string
/// `name` and `email` and an optional string `url`.
pub fn is_person(value: FieldValue<'_>) -> bool {
    if is_string(value) {
        return true;
    }
    is_object(value)
        && is_string(member(value, "name"))
        && is_string(member(value, "email"))
        && is_absent_or_string(member(value, "url"))
}
