//! Reservation Model

use std::fmt;

use serde::{Deserialize, Serialize};

/// Reservation lifecycle status
///
/// Stored and serialized lowercase. `finished` is terminal: once a
/// reservation reaches it, no further status change is accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "db", derive(sqlx::Type))]
#[cfg_attr(feature = "db", sqlx(rename_all = "lowercase"))]
pub enum ReservationStatus {
    Booked,
    Seated,
    Finished,
    Cancelled,
}

impl ReservationStatus {
    /// Parse a lowercase status string, `None` for anything unknown
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "booked" => Some(Self::Booked),
            "seated" => Some(Self::Seated),
            "finished" => Some(Self::Finished),
            "cancelled" => Some(Self::Cancelled),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Booked => "booked",
            Self::Seated => "seated",
            Self::Finished => "finished",
            Self::Cancelled => "cancelled",
        }
    }

    /// Terminal states admit no further transition
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Finished)
    }
}

impl fmt::Display for ReservationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Reservation entity
///
/// `reservation_date` and `reservation_time` travel as the same
/// `YYYY-MM-DD` / `HH:MM` strings the API accepts; the validation layer
/// parses them before anything is persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Reservation {
    pub reservation_id: i64,
    pub first_name: String,
    pub last_name: String,
    pub mobile_number: String,
    pub reservation_date: String,
    pub reservation_time: String,
    pub people: i64,
    pub status: ReservationStatus,
    pub created_at: i64,
    pub updated_at: i64,
}

/// Raw create/update payload, before validation
///
/// Every field is optional and `people` stays a raw JSON value so each
/// check in the pipeline can reject with its own field-specific message
/// instead of a generic deserialization error.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReservationData {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub mobile_number: Option<String>,
    pub reservation_date: Option<String>,
    pub reservation_time: Option<String>,
    pub people: Option<serde_json::Value>,
    pub status: Option<String>,
}

/// Body of `PUT /reservations/{id}/status`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StatusData {
    pub status: Option<String>,
}

/// A payload that passed the full validation pipeline
#[derive(Debug, Clone)]
pub struct NewReservation {
    pub first_name: String,
    pub last_name: String,
    pub mobile_number: String,
    pub reservation_date: String,
    pub reservation_time: String,
    pub people: i64,
    pub status: ReservationStatus,
}
