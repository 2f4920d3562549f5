//! Conversion from foreign value trees into the document model.

use std::collections::BTreeMap;

use confdiff_core::{Scalar, Value};

/// Convert a parsed JSON tree. Cannot fail: every JSON value has a
/// document-tree representation.
pub fn from_json(value: serde_json::Value) -> Value {
    match value {
        serde_json::Value::Null => Value::Null,
        serde_json::Value::Bool(b) => Value::Scalar(Scalar::Bool(b)),
        serde_json::Value::Number(n) => number_scalar(n.as_i64(), n.as_f64()),
        serde_json::Value::String(s) => Value::Scalar(Scalar::Str(s)),
        serde_json::Value::Array(items) => {
            Value::Sequence(items.into_iter().map(from_json).collect())
        }
        serde_json::Value::Object(map) => Value::Mapping(
            map.into_iter()
                .map(|(k, v)| (k, from_json(v)))
                .collect(),
        ),
    }
}

/// Convert a parsed YAML tree.
///
/// Fails on constructs the document model cannot express: YAML tags and
/// container-typed mapping keys. Scalar non-string keys (numbers, booleans,
/// null) are rendered to their string form.
pub fn from_yaml(value: serde_yaml::Value) -> Result<Value, String> {
    match value {
        serde_yaml::Value::Null => Ok(Value::Null),
        serde_yaml::Value::Bool(b) => Ok(Value::Scalar(Scalar::Bool(b))),
        serde_yaml::Value::Number(n) => Ok(number_scalar(n.as_i64(), n.as_f64())),
        serde_yaml::Value::String(s) => Ok(Value::Scalar(Scalar::Str(s))),
        serde_yaml::Value::Sequence(items) => Ok(Value::Sequence(
            items
                .into_iter()
                .map(from_yaml)
                .collect::<Result<_, _>>()?,
        )),
        serde_yaml::Value::Mapping(mapping) => {
            let mut map = BTreeMap::new();
            for (key, val) in mapping {
                map.insert(yaml_key(key)?, from_yaml(val)?);
            }
            Ok(Value::Mapping(map))
        }
        serde_yaml::Value::Tagged(tagged) => {
            Err(format!("YAML tag {} is not supported", tagged.tag))
        }
    }
}

fn yaml_key(key: serde_yaml::Value) -> Result<String, String> {
    match key {
        serde_yaml::Value::String(s) => Ok(s),
        serde_yaml::Value::Bool(b) => Ok(b.to_string()),
        serde_yaml::Value::Number(n) => Ok(n.to_string()),
        serde_yaml::Value::Null => Ok("null".to_string()),
        other => Err(format!(
            "mapping keys must be scalars, got a {}",
            match other {
                serde_yaml::Value::Sequence(_) => "sequence",
                serde_yaml::Value::Mapping(_) => "mapping",
                _ => "tagged value",
            }
        )),
    }
}

/// Convert a parsed TOML tree. Cannot fail: datetimes are carried as their
/// string form.
pub fn from_toml(value: toml::Value) -> Value {
    match value {
        toml::Value::String(s) => Value::Scalar(Scalar::Str(s)),
        toml::Value::Integer(n) => Value::Scalar(Scalar::Int(n)),
        toml::Value::Float(n) => Value::Scalar(Scalar::Float(n)),
        toml::Value::Boolean(b) => Value::Scalar(Scalar::Bool(b)),
        toml::Value::Datetime(dt) => Value::Scalar(Scalar::Str(dt.to_string())),
        toml::Value::Array(items) => {
            Value::Sequence(items.into_iter().map(from_toml).collect())
        }
        toml::Value::Table(table) => Value::Mapping(
            table
                .into_iter()
                .map(|(k, v)| (k, from_toml(v)))
                .collect(),
        ),
    }
}

/// Integers that fit in `i64` stay integers; everything else (large unsigned,
/// floats) becomes a float.
fn number_scalar(as_int: Option<i64>, as_float: Option<f64>) -> Value {
    match (as_int, as_float) {
        (Some(n), _) => Value::Scalar(Scalar::Int(n)),
        (None, Some(f)) => Value::Scalar(Scalar::Float(f)),
        (None, None) => Value::Null,
    }
}
