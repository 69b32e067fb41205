//! Performance response DTOs

use serde::Serialize;

use crate::handlers::envelope::Resource;

/// Performance with entry, event, participant and country names
#[derive(Debug, Clone, Serialize)]
pub struct PerformanceResponse {
    pub id: String,
    pub entry_id: String,
    pub entry: String,
    pub event_id: String,
    pub event: String,
    pub points: Option<i32>,
    pub place: Option<i32>,
    pub qualified: Option<bool>,
    pub running_order: Option<i32>,
    pub participant_id: String,
    pub participant: String,
    pub country_id: String,
    pub country: String,
}

impl Resource for PerformanceResponse {
    const SINGULAR: &'static str = "performance";
    const PLURAL: &'static str = "performances";
}
