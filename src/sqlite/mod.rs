//! SQLite-specific transformers and helpers.
//!
//! - [`JsonColumn`]: JSON-as-object columns for an engine without them
//! - [`TableDefinition`], [`ColumnDefinition`]: table schemas carrying a
//!   transformer per column
//! - [`SqliteStore`]: inserts and reads rows through those transformers

mod json_column;
mod schema;
mod store;

pub use self::{
    json_column::{json_column, JsonColumn},
    schema::{ColumnConstraint, ColumnDefinition, DataType, Row, TableDefinition},
    store::SqliteStore,
};
