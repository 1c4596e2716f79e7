use std::collections::BTreeMap;
use std::sync::Arc;

use crate::error::{Result, TransformError};
use crate::transformers::ValueTransformer;
use crate::value::Value;

/// A row keyed by column name.
pub type Row = BTreeMap<String, Value>;

/// Quotes a table or column name, doubling any embedded `"`.
pub(crate) fn quote_identifier(name: &str) -> String {
    format!("\"{}\"", name.replace('"', "\"\""))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataType {
    Integer,
    Text,
    Real,
    Blob,
}

impl DataType {
    fn as_sql(&self) -> &'static str {
        match self {
            DataType::Integer => "INTEGER",
            DataType::Text => "TEXT",
            DataType::Real => "REAL",
            DataType::Blob => "BLOB",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnConstraint {
    PrimaryKey,
    NotNull,
    Unique,
}

impl ColumnConstraint {
    fn as_sql(&self) -> &'static str {
        match self {
            ColumnConstraint::PrimaryKey => "PRIMARY KEY",
            ColumnConstraint::NotNull => "NOT NULL",
            ColumnConstraint::Unique => "UNIQUE",
        }
    }
}

#[derive(Debug, Clone)]
pub struct ColumnDefinition {
    pub name: String,
    pub data_type: DataType,
    pub constraints: Vec<ColumnConstraint>,
    pub transformer: Option<Arc<dyn ValueTransformer>>,
}

impl ColumnDefinition {
    pub fn new(name: &str, data_type: DataType) -> Self {
        Self {
            name: name.to_string(),
            data_type,
            constraints: Vec::new(),
            transformer: None,
        }
    }

    pub fn with_constraint(mut self, constraint: ColumnConstraint) -> Self {
        self.constraints.push(constraint);
        self
    }

    pub fn with_transformer(mut self, transformer: impl ValueTransformer + 'static) -> Self {
        self.transformer = Some(Arc::new(transformer));
        self
    }

    fn definition_sql(&self) -> String {
        let mut sql = format!(
            "{} {}",
            quote_identifier(&self.name),
            self.data_type.as_sql()
        );
        for constraint in &self.constraints {
            sql.push(' ');
            sql.push_str(constraint.as_sql());
        }
        sql
    }

    fn encode(&self, value: Value) -> Result<Value> {
        match &self.transformer {
            Some(transformer) => transformer.to(value),
            None => Ok(value),
        }
    }

    fn decode(&self, value: Value) -> Result<Value> {
        match &self.transformer {
            Some(transformer) => transformer.from(value),
            None => Ok(value),
        }
    }
}

#[derive(Debug, Clone)]
pub struct TableDefinition {
    pub name: String,
    pub columns: Vec<ColumnDefinition>,
}

impl TableDefinition {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            columns: Vec::new(),
        }
    }

    pub fn add_column(mut self, column: ColumnDefinition) -> Self {
        self.columns.push(column);
        self
    }

    pub fn column(&self, name: &str) -> Option<&ColumnDefinition> {
        self.columns.iter().find(|c| c.name == name)
    }

    pub fn create_sql(&self) -> String {
        let columns: Vec<String> = self.columns.iter().map(|c| c.definition_sql()).collect();
        format!(
            "CREATE TABLE IF NOT EXISTS {} ({});",
            quote_identifier(&self.name),
            columns.join(", ")
        )
    }

    /// Applies each column's write-path transformer.
    pub fn encode_row(&self, row: Row) -> Result<Row> {
        tracing::debug!(table = %self.name, columns = row.len(), "encoding row");
        row.into_iter()
            .map(|(name, value)| -> Result<(String, Value)> {
                let column = self.lookup(&name)?;
                Ok((name, column.encode(value)?))
            })
            .collect()
    }

    /// Applies each column's read-path transformer.
    pub fn decode_row(&self, row: Row) -> Result<Row> {
        tracing::debug!(table = %self.name, columns = row.len(), "decoding row");
        row.into_iter()
            .map(|(name, value)| -> Result<(String, Value)> {
                let column = self.lookup(&name)?;
                Ok((name, column.decode(value)?))
            })
            .collect()
    }

    fn lookup(&self, name: &str) -> Result<&ColumnDefinition> {
        self.column(name).ok_or_else(|| TransformError::UnknownColumn {
            table: self.name.clone(),
            column: name.to_string(),
        })
    }
}
