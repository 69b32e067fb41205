//! Country response DTOs

use serde::Serialize;

use crate::handlers::envelope::Resource;

/// Country with its entries, hosted events and related ids
#[derive(Debug, Clone, Serialize)]
pub struct CountryResponse {
    pub id: String,
    pub country: String,
    pub flag_image_url: Option<String>,
    pub entries: Vec<String>,
    pub events: Vec<String>,
    pub participants: Vec<String>,
    pub performances: Vec<String>,
}

impl Resource for CountryResponse {
    const SINGULAR: &'static str = "country";
    const PLURAL: &'static str = "countries";
}
