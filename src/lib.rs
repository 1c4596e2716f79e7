//! Column value transformers for SQL backends.
//!
//! # Intention
//!
//! - Convert column values between their application form and the form a
//!   database stores: stringified IDs, lowercased text, JSON-as-object.
//! - Paper over SQLite's lack of native JSON columns so the same entity works
//!   on SQLite, Postgres and MySQL.
//!
//! # Architectural Boundaries
//!
//! - Transformers are pure; the only shared state is the configured engine.
//! - No query building, migrations or business logic.

pub mod config;
pub mod error;
pub mod sqlite;
pub mod transformers;
pub mod value;

pub use config::{DatabaseConfig, DatabaseType};
pub use error::{Result, TransformError};
pub use transformers::{IdStringifier, LowerCaser, ObjectRetriever, ValueTransformer};
pub use value::Value;
