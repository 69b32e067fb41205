//! Participant response DTOs

use serde::Serialize;

use crate::handlers::envelope::Resource;

/// Participant with the ids of everything it took part in
#[derive(Debug, Clone, Serialize)]
pub struct ParticipantResponse {
    pub id: String,
    pub name: String,
    pub image_url: Option<String>,
    pub description: Option<String>,
    pub entries: Vec<String>,
    pub countries_represented: Vec<String>,
    pub performances: Vec<String>,
    pub events: Vec<String>,
}

impl Resource for ParticipantResponse {
    const SINGULAR: &'static str = "participant";
    const PLURAL: &'static str = "participants";
}
