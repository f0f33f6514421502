use serde::{Deserialize, Serialize};

pub const UNKNOWN_EVENT: &str = "Unknown Event";

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Intent {
    ProposeBooking,
    ShowEvents,
    Other,
}

impl Intent {
    pub fn from_label(label: &str) -> Option<Self> {
        match label.trim() {
            "propose_booking" => Some(Intent::ProposeBooking),
            "show_events" => Some(Intent::ShowEvents),
            "other" => Some(Intent::Other),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ParsedIntent {
    pub intent: Intent,
    pub event: String,
    pub tickets: u32,
}

/// Clamps a raw ticket count to a positive integer, defaulting to 1.
pub fn sanitize_tickets(raw: Option<i64>) -> u32 {
    match raw {
        Some(n) if n > 0 => u32::try_from(n).unwrap_or(u32::MAX),
        _ => 1,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_tickets() {
        assert_eq!(sanitize_tickets(None), 1);
        assert_eq!(sanitize_tickets(Some(0)), 1);
        assert_eq!(sanitize_tickets(Some(-4)), 1);
        assert_eq!(sanitize_tickets(Some(1)), 1);
        assert_eq!(sanitize_tickets(Some(7)), 7);
    }

    #[test]
    fn test_intent_serializes_snake_case() {
        let parsed = ParsedIntent {
            intent: Intent::ProposeBooking,
            event: "Clemson Football Game".to_string(),
            tickets: 2,
        };
        let json = serde_json::to_value(&parsed).unwrap();
        assert_eq!(json["intent"], "propose_booking");
        assert_eq!(json["event"], "Clemson Football Game");
        assert_eq!(json["tickets"], 2);
    }

    #[test]
    fn test_intent_from_label_rejects_unknown() {
        assert_eq!(Intent::from_label("show_events"), Some(Intent::ShowEvents));
        assert_eq!(Intent::from_label("book"), None);
    }
}
