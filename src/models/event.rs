use serde::{Deserialize, Serialize};

/// One entry of the events service catalog. Only `name` is required.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CatalogEvent {
    #[serde(default)]
    pub id: Option<i64>,
    pub name: String,
}

pub fn event_names(events: &[CatalogEvent]) -> Vec<String> {
    events.iter().map(|e| e.name.clone()).collect()
}
