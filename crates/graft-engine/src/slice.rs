//! Result slicing and functional splicing at relation paths.
//!
//! Slicing never mutates its input; splicing rebuilds a fresh value instead
//! of writing in place, so concurrent sibling branches can never alias each
//! other's slices.

use graft_core::{PathSegment, RelationPath};
use serde_json::Value;

/// Extract the slice of `raw` addressed by `path`.
///
/// `None` signals absence: the field is missing or null, or the index is out
/// of range, meaning the relation was not included in the real call's
/// response.
pub(crate) fn slice(raw: &Value, path: &RelationPath) -> Option<Value> {
    let mut current = raw;
    for segment in path.segments() {
        current = match segment {
            PathSegment::Field(name) => current.as_object()?.get(name)?,
            PathSegment::Index(index) => current.as_array()?.get(*index)?,
        };
        if current.is_null() {
            return None;
        }
    }
    Some(current.clone())
}

/// Rebuild `raw` with the location at `path` replaced by `value`.
///
/// `None` substitutes the middleware's "returned nothing" verbatim: an
/// object field is removed and a list element becomes null. Locations that
/// do not exist in `raw` are left untouched.
pub(crate) fn splice(raw: Value, path: &RelationPath, value: Option<Value>) -> Value {
    splice_at(raw, path.segments(), value)
}

fn splice_at(raw: Value, segments: &[PathSegment], value: Option<Value>) -> Value {
    let Some((segment, rest)) = segments.split_first() else {
        return raw;
    };

    match (segment, raw) {
        (PathSegment::Field(name), Value::Object(mut object)) => {
            if rest.is_empty() {
                match value {
                    Some(replacement) => {
                        if let Some(slot) = object.get_mut(name) {
                            *slot = replacement;
                        }
                    }
                    None => {
                        object.remove(name);
                    }
                }
            } else if let Some(inner) = object.remove(name) {
                object.insert(name.clone(), splice_at(inner, rest, value));
            }
            Value::Object(object)
        }
        (PathSegment::Index(index), Value::Array(mut elements)) => {
            if *index < elements.len() {
                if rest.is_empty() {
                    elements[*index] = value.unwrap_or(Value::Null);
                } else {
                    let inner = std::mem::replace(&mut elements[*index], Value::Null);
                    elements[*index] = splice_at(inner, rest, value);
                }
            }
            Value::Array(elements)
        }
        (_, raw) => raw,
    }
}
