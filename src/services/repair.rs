use std::sync::LazyLock;

use regex::Regex;

use crate::models::intent::sanitize_tickets;
use crate::models::{Intent, ParsedIntent, UNKNOWN_EVENT};
use crate::services::matching::find_closest_event;

static BOOKING_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\b(buy|purchase|book|reserve)\b").unwrap());

static LISTING_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r"(?i)\b(show|list|see|view|display)\b.*\b(events?|shows?|options|schedule)\b",
        r"|\bwhat(?:'s|s| is| are)\s+(?:on|happening|available)\b",
        r"|\bwhat(?:'s|s| is| are)\b.*\bevents?\b",
        r"|\b(available|upcoming)\s+events?\b",
    ))
    .unwrap()
});

static TICKET_COUNT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\b(\d{1,2})(?:\s*(?:tickets?|tix|seats?)\b|\b)").unwrap());

/// Keyword signals found in the user's own message.
#[derive(Debug, Clone, PartialEq)]
pub struct TextSignals {
    pub booking: bool,
    pub listing: bool,
    pub tickets: Option<i64>,
}

pub fn scan_text(text: &str) -> TextSignals {
    TextSignals {
        booking: BOOKING_RE.is_match(text),
        listing: LISTING_RE.is_match(text),
        tickets: TICKET_COUNT_RE
            .captures(text)
            .and_then(|c| c.get(1))
            .and_then(|m| m.as_str().parse().ok()),
    }
}

/// Derives an intent from the raw user text when the model gave none or
/// answered `other`. `None` means the text carries no usable signal and the
/// model's classification stands.
pub fn repair_intent(text: &str, events: &[String]) -> Option<ParsedIntent> {
    let signals = scan_text(text);

    if signals.listing && !signals.booking {
        return Some(ParsedIntent {
            intent: Intent::ShowEvents,
            event: UNKNOWN_EVENT.to_string(),
            tickets: 1,
        });
    }

    if signals.booking {
        return Some(ParsedIntent {
            intent: Intent::ProposeBooking,
            event: find_closest_event(text, events),
            tickets: sanitize_tickets(signals.tickets),
        });
    }

    None
}
