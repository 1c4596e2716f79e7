use crate::config::{self, DatabaseType};
use crate::error::Result;
use crate::transformers::{decode_json_text, ValueTransformer};
use crate::value::Value;

/// Mimics the JSON-as-object columns of Postgres and MySQL on SQLite.
///
/// On SQLite, `to` serialises the value to JSON text. Engines with native JSON
/// columns receive the value unchanged. `NULL` is never encoded.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonColumn {
    engine: Option<DatabaseType>,
}

impl JsonColumn {
    /// A shim bound to a fixed engine.
    pub fn new(engine: DatabaseType) -> Self {
        Self {
            engine: Some(engine),
        }
    }

    /// A shim that reads the process-wide configuration on every write.
    pub fn from_config() -> Self {
        Self { engine: None }
    }

    pub fn engine(&self) -> DatabaseType {
        self.engine.unwrap_or_else(config::database_type)
    }
}

impl ValueTransformer for JsonColumn {
    fn to(&self, value: Value) -> Result<Value> {
        if value.is_null() {
            return Ok(value);
        }
        let engine = self.engine();
        if engine.has_native_json() {
            tracing::trace!(%engine, "passing structured value to native json column");
            return Ok(value);
        }
        let encoded = serde_json::to_string(&value.to_json())?;
        tracing::trace!(%engine, len = encoded.len(), "encoded json column");
        Ok(Value::Text(encoded))
    }

    fn from(&self, value: Value) -> Result<Value> {
        decode_json_text(value)
    }
}

/// The JSON column shim driven by the configured engine.
pub fn json_column() -> JsonColumn {
    JsonColumn::from_config()
}
