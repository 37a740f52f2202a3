//! Generic tabular view of the payload returned by `/fetch_data`.
//!
//! The backend wraps the publisher's records in a JSON string. Decoding
//! happens in two steps (outer envelope, then the inner string) and the
//! result is only turned into a table once every element is known to be a
//! record. A payload that fails any check produces no table at all.
//!
//! The header is fixed by the first record, in that record's key order.
//! Keys that only show up in later records are dropped and keys a later
//! record lacks render as empty cells.

use serde_json::{Map, Value};
use thiserror::Error;

use crate::responses::FetchDataResponse;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TableError {
    #[error("payload is not valid JSON: {0}")]
    InvalidJson(String),

    #[error("payload is not an array of records")]
    NotAnArray,

    #[error("payload element {0} is not a record")]
    NotARecord(usize),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DataTable {
    pub header: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl DataTable {
    pub fn from_envelope(envelope: &FetchDataResponse) -> Result<Self, TableError> {
        Self::decode(&envelope.data)
    }

    /// Decodes the inner `data` string of a fetch response.
    pub fn decode(raw: &str) -> Result<Self, TableError> {
        let value: Value =
            serde_json::from_str(raw).map_err(|e| TableError::InvalidJson(e.to_string()))?;
        let Value::Array(items) = value else {
            return Err(TableError::NotAnArray);
        };

        let records = items
            .into_iter()
            .enumerate()
            .map(|(index, item)| match item {
                Value::Object(record) => Ok(record),
                _ => Err(TableError::NotARecord(index)),
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self::from_records(&records))
    }

    pub fn from_records(records: &[Map<String, Value>]) -> Self {
        let header: Vec<String> = records
            .first()
            .map(|first| first.keys().cloned().collect())
            .unwrap_or_default();

        let rows = records
            .iter()
            .map(|record| {
                header
                    .iter()
                    .map(|key| cell_text(record.get(key)))
                    .collect()
            })
            .collect();

        Self { header, rows }
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

fn cell_text(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(text)) => text.clone(),
        Some(other) => other.to_string(),
    }
}
