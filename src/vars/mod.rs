use std::collections::BTreeMap;
use std::path::Path;

use tera::Value;

use crate::error::{JigError, Result};

/// Parse repeated `KEY=VALUE` assignments into a variable mapping.
///
/// Values that parse as JSON keep their type (numbers, booleans, quoted
/// strings, arrays); anything else is a plain string.
pub fn parse_assignments(entries: &[String]) -> Result<BTreeMap<String, Value>> {
    let mut variables = BTreeMap::new();
    for entry in entries {
        let Some((key, value)) = entry.split_once('=') else {
            return Err(JigError::InvalidAssignment {
                entry: entry.clone(),
                reason: "missing '='".into(),
            });
        };
        let key = key.trim();
        if !is_identifier(key) {
            return Err(JigError::InvalidAssignment {
                entry: entry.clone(),
                reason: format!("'{key}' is not a valid variable name"),
            });
        }
        variables.insert(key.to_string(), coerce_value(value));
    }
    Ok(variables)
}

/// Load a TOML document whose top-level keys become variable bindings.
pub fn load_vars_file(path: &Path) -> Result<BTreeMap<String, Value>> {
    let content = std::fs::read_to_string(path).map_err(|e| JigError::Io {
        context: format!("reading vars file {}", path.display()),
        source: e,
    })?;
    let table: toml::Table = toml::from_str(&content).map_err(|e| JigError::VarsFileParse {
        path: path.to_path_buf(),
        source: e,
    })?;
    Ok(table
        .iter()
        .map(|(key, value)| (key.clone(), toml_to_tera_value(value)))
        .collect())
}

fn is_identifier(key: &str) -> bool {
    let mut chars = key.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

fn coerce_value(raw: &str) -> Value {
    serde_json::from_str(raw).unwrap_or_else(|_| Value::String(raw.to_string()))
}

fn toml_to_tera_value(val: &toml::Value) -> Value {
    match val {
        toml::Value::String(s) => Value::String(s.clone()),
        toml::Value::Integer(n) => Value::Number(serde_json::Number::from(*n)),
        toml::Value::Float(f) => serde_json::to_value(f).unwrap_or(Value::Null),
        toml::Value::Boolean(b) => Value::Bool(*b),
        toml::Value::Array(arr) => Value::Array(arr.iter().map(toml_to_tera_value).collect()),
        toml::Value::Table(t) => {
            let map: serde_json::Map<String, Value> = t
                .iter()
                .map(|(k, v)| (k.clone(), toml_to_tera_value(v)))
                .collect();
            Value::Object(map)
        }
        toml::Value::Datetime(d) => Value::String(d.to_string()),
    }
}
