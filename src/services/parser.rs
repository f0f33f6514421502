use crate::models::event::event_names;
use crate::models::intent::sanitize_tickets;
use crate::models::{Intent, ParsedIntent, UNKNOWN_EVENT};
use crate::services::ai::prompt::build_prompt;
use crate::services::ai::response::normalize_response;
use crate::services::ai::LlmProvider;
use crate::services::catalog::EventCatalog;
use crate::services::matching::find_closest_event;
use crate::services::repair::repair_intent;

/// Full parse pipeline for one message: catalog, prompt, model, then the
/// local post-processing in [`resolve_intent`].
pub async fn parse_booking_intent(
    llm: &dyn LlmProvider,
    catalog: &dyn EventCatalog,
    text: &str,
) -> anyhow::Result<ParsedIntent> {
    let events = catalog.list_events().await?;
    let names = event_names(&events);

    let prompt = build_prompt(&names, text);
    let raw = llm.generate(&prompt).await?;

    let parsed = resolve_intent(&raw, text, &names);
    tracing::info!(
        intent = ?parsed.intent,
        event = %parsed.event,
        tickets = parsed.tickets,
        "parsed booking intent"
    );
    Ok(parsed)
}

/// Turns raw model output into a [`ParsedIntent`] whose event is either a
/// literal member of `events` or [`UNKNOWN_EVENT`], with at least one ticket.
pub fn resolve_intent(raw: &str, text: &str, events: &[String]) -> ParsedIntent {
    let output = normalize_response(raw);

    let needs_repair = matches!(output.intent, None | Some(Intent::Other));
    if needs_repair {
        if let Some(repaired) = repair_intent(text, events) {
            // The heuristic already matched against the catalog.
            return repaired;
        }
    }

    // An explicit "Unknown Event" from the model stands; only a missing
    // event falls back to matching the user's text.
    let event = match output.event {
        Some(event) if event == UNKNOWN_EVENT || events.contains(&event) => event,
        Some(guess) => find_closest_event(&guess, events),
        None => find_closest_event(text, events),
    };

    ParsedIntent {
        intent: output.intent.unwrap_or(Intent::Other),
        event,
        tickets: sanitize_tickets(output.tickets),
    }
}
