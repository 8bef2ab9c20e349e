//! Dining Table Model

use serde::{Deserialize, Serialize};

/// Dining table entity
///
/// A table is occupied iff `reservation_id` is non-null.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Table {
    pub table_id: i64,
    pub table_name: String,
    pub capacity: i64,
    pub reservation_id: Option<i64>,
    pub created_at: i64,
    pub updated_at: i64,
}

impl Table {
    pub fn is_occupied(&self) -> bool {
        self.reservation_id.is_some()
    }
}

/// Raw create-table payload, before validation
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TableData {
    pub table_name: Option<String>,
    /// Raw JSON value so a non-numeric capacity gets its own message
    pub capacity: Option<serde_json::Value>,
}

/// A create-table payload that passed validation
#[derive(Debug, Clone)]
pub struct NewTable {
    pub table_name: String,
    pub capacity: i64,
}

/// Body of `PUT /tables/{id}/seat`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SeatData {
    pub reservation_id: Option<i64>,
}
