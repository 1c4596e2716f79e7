use std::path::Path;

use rusqlite::{params_from_iter, Connection};

use super::schema::{quote_identifier, Row, TableDefinition};
use crate::error::Result;
use crate::value::Value;

/// A SQLite connection that runs rows through their table's transformers.
#[derive(Debug)]
pub struct SqliteStore {
    connection: Connection,
}

impl SqliteStore {
    pub fn new(connection: Connection) -> Self {
        Self { connection }
    }

    pub fn open_in_memory() -> Result<Self> {
        Ok(Self::new(Connection::open_in_memory()?))
    }

    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        tracing::debug!(path = %path.display(), "opening sqlite database");
        Ok(Self::new(Connection::open(path)?))
    }

    pub fn connection(&self) -> &Connection {
        &self.connection
    }

    pub fn create_table(&self, table: &TableDefinition) -> Result<()> {
        self.connection.execute_batch(&table.create_sql())?;
        Ok(())
    }

    /// Encodes `row` and inserts it, returning the new rowid.
    pub fn insert(&self, table: &TableDefinition, row: Row) -> Result<i64> {
        let row = table.encode_row(row)?;
        let sql = if row.is_empty() {
            format!("INSERT INTO {} DEFAULT VALUES", quote_identifier(&table.name))
        } else {
            let names: Vec<String> = row.keys().map(|name| quote_identifier(name)).collect();
            let placeholders: Vec<String> = (1..=names.len()).map(|i| format!("?{i}")).collect();
            format!(
                "INSERT INTO {} ({}) VALUES ({})",
                quote_identifier(&table.name),
                names.join(", "),
                placeholders.join(", ")
            )
        };
        self.connection.execute(&sql, params_from_iter(row.values()))?;
        Ok(self.connection.last_insert_rowid())
    }

    /// Reads every row of `table` in rowid order and decodes it.
    pub fn select_all(&self, table: &TableDefinition) -> Result<Vec<Row>> {
        let names: Vec<&str> = table.columns.iter().map(|c| c.name.as_str()).collect();
        let quoted: Vec<String> = names.iter().map(|name| quote_identifier(name)).collect();
        let sql = format!(
            "SELECT {} FROM {} ORDER BY rowid",
            quoted.join(", "),
            quote_identifier(&table.name)
        );
        let mut stmt = self.connection.prepare(&sql)?;
        let rows = stmt.query_map([], |row| {
            let mut map = Row::new();
            for (i, name) in names.iter().enumerate() {
                map.insert(name.to_string(), row.get::<_, Value>(i)?);
            }
            Ok(map)
        })?;

        let mut result = Vec::new();
        for row in rows {
            result.push(table.decode_row(row?)?);
        }
        Ok(result)
    }
}
