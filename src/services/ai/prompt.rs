const PARSER_ROLE: &str =
    "You are a natural language parser for the Clemson University ticket booking chatbot.";

const EXTRACTION_RULES: &str = r#"Extract user intent ("propose_booking", "show_events", or "other"),
event name (if possible), and number of tickets (default 1).

Respond with **only JSON**, for example:
{
  "intent": "propose_booking",
  "event": "Clemson Football Hate Watch",
  "tickets": 2
}"#;

pub fn build_prompt(events: &[String], text: &str) -> String {
    let event_list = events
        .iter()
        .map(|e| format!("- {e}"))
        .collect::<Vec<_>>()
        .join("\n");

    format!("{PARSER_ROLE}\n\nAvailable events:\n{event_list}\n\n{EXTRACTION_RULES}\n\nUser: {text}\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_lists_events_and_user_text() {
        let events = vec!["Basketball Night".to_string(), "Opera".to_string()];
        let prompt = build_prompt(&events, "two seats for the opera");

        assert!(prompt.contains("Available events:\n- Basketball Night\n- Opera\n"));
        assert!(prompt.contains("\"show_events\""));
        assert!(prompt.trim_end().ends_with("User: two seats for the opera"));
    }

    #[test]
    fn test_prompt_with_empty_catalog() {
        let prompt = build_prompt(&[], "hi");
        assert!(prompt.contains("Available events:\n\n"));
    }
}
