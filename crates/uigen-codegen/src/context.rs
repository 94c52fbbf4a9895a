//! Template rendering contexts.
//!
//! A template sees the keys of its per-call context layered over the
//! generator's base context: a per-call key shadows a base key of the same
//! name, and base keys the call does not mention stay visible.
//!
//! # Examples
//!
//! ```
//! use uigen_codegen::RenderContext;
//! use serde_json::json;
//!
//! let base = RenderContext::new().with("app_name", "outbox").with("api_base", "/api");
//! let call = RenderContext::new().with("api_base", "/api/v2");
//!
//! let merged = RenderContext::layered(Some(&call), &base);
//! assert_eq!(merged.get("app_name"), Some(&json!("outbox")));
//! assert_eq!(merged.get("api_base"), Some(&json!("/api/v2")));
//! ```

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use uigen_core::{Error, Result};

/// Key/value context handed to a template.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RenderContext {
    values: Map<String, Value>,
}

impl RenderContext {
    /// Creates an empty context.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a context from any value that serializes to a JSON object.
    ///
    /// # Errors
    ///
    /// Returns [`Error::SerializationError`] if `value` cannot be
    /// serialized or is not an object.
    pub fn from_serialize<T: Serialize>(value: &T) -> Result<Self> {
        match serde_json::to_value(value)? {
            Value::Object(values) => Ok(Self { values }),
            other => Err(Error::SerializationError {
                message: format!("render context must be an object, got {other}"),
                source: None,
            }),
        }
    }

    /// Merges `call` over `base`.
    #[must_use]
    pub fn layered(call: Option<&Self>, base: &Self) -> Self {
        let mut values = base.values.clone();
        if let Some(call) = call {
            values.extend(call.values.iter().map(|(k, v)| (k.clone(), v.clone())));
        }
        Self { values }
    }

    /// Sets `key`, replacing any previous value.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.values.insert(key.into(), value.into());
    }

    /// Sets `key`, builder style.
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(key, value);
        self
    }

    /// Serializes `value` and sets it as `key`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::SerializationError`] if `value` cannot be
    /// serialized.
    pub fn insert_serialize<T: Serialize>(&mut self, key: impl Into<String>, value: &T) -> Result<()> {
        self.values.insert(key.into(), serde_json::to_value(value)?);
        Ok(())
    }

    /// Looks up a value.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.values.get(key)
    }

    /// Returns the underlying map.
    #[must_use]
    pub const fn as_map(&self) -> &Map<String, Value> {
        &self.values
    }
}

impl From<Map<String, Value>> for RenderContext {
    fn from(values: Map<String, Value>) -> Self {
        Self { values }
    }
}
