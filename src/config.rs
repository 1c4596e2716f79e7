//! Database engine configuration.
//!
//! The JSON column shim needs to know which engine the process talks to. The
//! configuration is installed once with [`init`] before any transformer runs;
//! when nothing was installed, the first read falls back to the `DB_TYPE`
//! environment variable.

use std::env;
use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

use serde::{Deserialize, Serialize};

use crate::error::{Result, TransformError};

/// Environment variable naming the database engine.
pub const DB_TYPE_ENV: &str = "DB_TYPE";

static CONFIG: OnceLock<DatabaseConfig> = OnceLock::new();

/// Supported storage engines.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DatabaseType {
    /// Embedded, file-based engine without native JSON columns.
    #[default]
    Sqlite,
    #[serde(alias = "postgres")]
    Postgresdb,
    #[serde(alias = "mysql")]
    Mysqldb,
    Mariadb,
}

impl DatabaseType {
    pub fn as_str(&self) -> &'static str {
        match self {
            DatabaseType::Sqlite => "sqlite",
            DatabaseType::Postgresdb => "postgresdb",
            DatabaseType::Mysqldb => "mysqldb",
            DatabaseType::Mariadb => "mariadb",
        }
    }

    /// Whether the engine stores structured values in native JSON columns.
    pub fn has_native_json(&self) -> bool {
        !matches!(self, DatabaseType::Sqlite)
    }
}

impl fmt::Display for DatabaseType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DatabaseType {
    type Err = TransformError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "sqlite" => Ok(DatabaseType::Sqlite),
            "postgresdb" | "postgres" => Ok(DatabaseType::Postgresdb),
            "mysqldb" | "mysql" => Ok(DatabaseType::Mysqldb),
            "mariadb" => Ok(DatabaseType::Mariadb),
            other => Err(TransformError::Config {
                message: format!("unsupported database type: {other:?}"),
            }),
        }
    }
}

/// Database configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatabaseConfig {
    #[serde(rename = "type", default)]
    pub db_type: DatabaseType,
}

impl DatabaseConfig {
    pub fn new(db_type: DatabaseType) -> Self {
        Self { db_type }
    }

    /// Reads `DB_TYPE`; an unset variable selects the default engine.
    pub fn from_env() -> Result<Self> {
        match env::var(DB_TYPE_ENV) {
            Ok(raw) => Ok(Self::new(raw.parse()?)),
            Err(env::VarError::NotPresent) => Ok(Self::default()),
            Err(env::VarError::NotUnicode(_)) => Err(TransformError::Config {
                message: format!("{DB_TYPE_ENV} is not valid unicode"),
            }),
        }
    }
}

/// Installs the process-wide configuration. Fails if one is already in place.
pub fn init(config: DatabaseConfig) -> Result<()> {
    let db_type = config.db_type;
    CONFIG.set(config).map_err(|_| TransformError::Config {
        message: "database configuration is already initialized".to_string(),
    })?;
    tracing::debug!(%db_type, "database configuration initialized");
    Ok(())
}

/// Returns the process-wide configuration, loading it from the environment
/// on first use when [`init`] was never called.
pub fn get() -> &'static DatabaseConfig {
    CONFIG.get_or_init(|| {
        DatabaseConfig::from_env().unwrap_or_else(|err| {
            tracing::warn!(error = %err, "falling back to default database type");
            DatabaseConfig::default()
        })
    })
}

/// The configured database engine.
pub fn database_type() -> DatabaseType {
    get().db_type
}
