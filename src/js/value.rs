// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Owned JavaScript value, detached from the engine
//!
//! Used for evaluation results handed back to the host and as the untyped
//! payload stub operations accept without looking at.

use std::collections::BTreeMap;

use boa_engine::{Context, JsResult, JsValue as BoaJsValue};
use serde::{Deserialize, Serialize};

use super::globals::json_stringify;
use crate::error::Result;

/// JavaScript value type
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum JsValue {
    /// Undefined value
    Undefined,
    /// Null value
    Null,
    /// Boolean value
    Boolean(bool),
    /// Number value (JavaScript only has f64)
    Number(f64),
    /// String value
    String(String),
    /// Array value
    Array(Vec<JsValue>),
    /// Plain object, by its JSON-visible properties
    Object(BTreeMap<String, JsValue>),
    /// Function reference
    Function,
    /// Symbol, by its description
    Symbol(String),
}

impl JsValue {
    /// Get an object property
    pub fn get(&self, key: &str) -> Option<&JsValue> {
        match self {
            JsValue::Object(map) => map.get(key),
            _ => None,
        }
    }

    /// Create from JSON value
    pub fn from_json(json: &serde_json::Value) -> Self {
        match json {
            serde_json::Value::Null => JsValue::Null,
            serde_json::Value::Bool(b) => JsValue::Boolean(*b),
            serde_json::Value::Number(n) => JsValue::Number(n.as_f64().unwrap_or(f64::NAN)),
            serde_json::Value::String(s) => JsValue::String(s.clone()),
            serde_json::Value::Array(a) => {
                JsValue::Array(a.iter().map(JsValue::from_json).collect())
            }
            serde_json::Value::Object(map) => JsValue::Object(
                map.iter()
                    .map(|(k, v)| (k.clone(), JsValue::from_json(v)))
                    .collect(),
            ),
        }
    }

    /// Convert to JSON value
    pub fn to_json(&self) -> serde_json::Value {
        match self {
            JsValue::Undefined | JsValue::Null => serde_json::Value::Null,
            JsValue::Boolean(b) => serde_json::Value::Bool(*b),
            JsValue::Number(n) => serde_json::Number::from_f64(*n)
                .map(serde_json::Value::Number)
                .unwrap_or(serde_json::Value::Null),
            JsValue::String(s) => serde_json::Value::String(s.clone()),
            JsValue::Array(a) => serde_json::Value::Array(a.iter().map(|v| v.to_json()).collect()),
            JsValue::Object(map) => serde_json::Value::Object(
                map.iter()
                    .filter(|(_, v)| !matches!(v, JsValue::Undefined | JsValue::Function))
                    .map(|(k, v)| (k.clone(), v.to_json()))
                    .collect(),
            ),
            JsValue::Function | JsValue::Symbol(_) => serde_json::Value::Null,
        }
    }

    /// Snapshot an engine value.
    ///
    /// Objects are captured through `JSON.stringify`, so only their
    /// JSON-visible properties survive. An object it rejects (a cycle,
    /// `globalThis` with itself as a property, a BigInt inside) becomes an
    /// empty object.
    pub fn from_boa(value: &BoaJsValue, context: &mut Context) -> Self {
        if value.is_undefined() {
            JsValue::Undefined
        } else if value.is_null() {
            JsValue::Null
        } else if let Some(b) = value.as_boolean() {
            JsValue::Boolean(b)
        } else if let Some(n) = value.as_number() {
            JsValue::Number(n)
        } else if let Some(s) = value.as_string() {
            JsValue::String(s.to_std_string_escaped())
        } else if value.is_symbol() {
            JsValue::Symbol(value.display().to_string())
        } else if value.is_callable() {
            JsValue::Function
        } else if value.is_object() {
            match snapshot_object(value, context) {
                Ok(Some(snapshot)) => snapshot,
                Ok(None) => JsValue::Object(BTreeMap::new()),
                Err(e) => {
                    tracing::debug!(error = %e, "Unreadable object snapshot");
                    JsValue::Object(BTreeMap::new())
                }
            }
        } else {
            JsValue::String(value.display().to_string())
        }
    }

    /// Build an engine value. Functions and symbols have no owned form and
    /// come back as `undefined`.
    pub fn to_boa(&self, context: &mut Context) -> JsResult<BoaJsValue> {
        match self {
            JsValue::Undefined | JsValue::Function | JsValue::Symbol(_) => {
                Ok(BoaJsValue::undefined())
            }
            JsValue::Null => Ok(BoaJsValue::null()),
            JsValue::Boolean(b) => Ok(BoaJsValue::from(*b)),
            JsValue::Number(n) => Ok(BoaJsValue::from(*n)),
            JsValue::String(s) => Ok(BoaJsValue::from(boa_engine::JsString::from(s.as_str()))),
            JsValue::Array(_) | JsValue::Object(_) => {
                BoaJsValue::from_json(&self.to_json(), context)
            }
        }
    }
}

/// `JSON.stringify(value)` parsed back into an owned value. `None` when
/// stringify is unavailable, throws or yields no text.
fn snapshot_object(value: &BoaJsValue, context: &mut Context) -> Result<Option<JsValue>> {
    let Some(stringify) = json_stringify(context) else {
        return Ok(None);
    };
    let Ok(text) = stringify.call(&BoaJsValue::undefined(), &[value.clone()], context) else {
        return Ok(None);
    };
    let Some(text) = text.as_string() else {
        return Ok(None);
    };

    let json: serde_json::Value = serde_json::from_str(&text.to_std_string_escaped())?;
    Ok(Some(JsValue::from_json(&json)))
}

impl Default for JsValue {
    fn default() -> Self {
        JsValue::Undefined
    }
}

impl From<bool> for JsValue {
    fn from(b: bool) -> Self {
        JsValue::Boolean(b)
    }
}

impl From<f64> for JsValue {
    fn from(n: f64) -> Self {
        JsValue::Number(n)
    }
}

impl From<String> for JsValue {
    fn from(s: String) -> Self {
        JsValue::String(s)
    }
}

impl From<&str> for JsValue {
    fn from(s: &str) -> Self {
        JsValue::String(s.to_string())
    }
}

impl<T: Into<JsValue>> From<Option<T>> for JsValue {
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or(JsValue::Null)
    }
}
