//! Performance model (the join of an entry and an event)

use serde::Serialize;
use sqlx::FromRow;

/// Performance database model, stored in `events_entries`
#[derive(Debug, Clone, FromRow, Serialize, PartialEq, Eq)]
pub struct Performance {
    pub id: String,
    pub event_id: String,
    pub entry_id: String,
    pub points: Option<i32>,
    pub place: Option<i32>,
    pub qualified: Option<bool>,
    pub running_order: Option<i32>,
}

/// Mutable performance columns
#[derive(Debug, Clone, Default)]
pub struct PerformanceFields {
    pub event_id: String,
    pub entry_id: String,
    pub points: Option<i32>,
    pub place: Option<i32>,
    pub qualified: Option<bool>,
    pub running_order: Option<i32>,
}

/// Display names pulled from the entry, event, participant and country
#[derive(Debug, Clone, Default, PartialEq, Eq, FromRow)]
pub struct PerformanceLinks {
    pub entry: String,
    pub event: String,
    pub participant_id: String,
    pub participant: String,
    pub country_id: String,
    pub country: String,
}
