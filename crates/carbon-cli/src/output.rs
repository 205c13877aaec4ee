//! JSON rendering for command results.

use serde::Serialize;
use serde_json::Value;

use crate::CliError;

pub fn to_value<T: Serialize>(value: &T) -> Result<Value, CliError> {
    Ok(serde_json::to_value(value)?)
}

pub fn to_pretty_json(value: &Value) -> Result<String, CliError> {
    Ok(serde_json::to_string_pretty(value)?)
}
