use std::sync::LazyLock;

use regex::Regex;

use crate::models::UNKNOWN_EVENT;

/// Minimum token-overlap score for a catalog entry to count as a match.
pub const MATCH_THRESHOLD: f64 = 0.4;

static NON_WORD_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[^a-z0-9\s]").unwrap());
static WHITESPACE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());

/// Lowercases, strips everything outside `[a-z0-9\s]` and trims.
pub fn normalize(s: &str) -> String {
    let lowered = s.to_lowercase();
    NON_WORD_RE.replace_all(&lowered, "").trim().to_string()
}

fn tokenize(normalized: &str) -> Vec<&str> {
    WHITESPACE_RE.split(normalized).collect()
}

/// Fraction of `input` tokens present in `candidate`, over the longer token count.
pub fn overlap_score(input: &[&str], candidate: &[&str]) -> f64 {
    let matches = input.iter().filter(|w| candidate.contains(*w)).count();
    matches as f64 / input.len().max(candidate.len()) as f64
}

/// Returns the catalog entry closest to `user_event`, or [`UNKNOWN_EVENT`]
/// when nothing scores at least [`MATCH_THRESHOLD`].
///
/// Ties keep the earliest catalog entry.
pub fn find_closest_event(user_event: &str, events: &[String]) -> String {
    if user_event.is_empty() || events.is_empty() {
        return UNKNOWN_EVENT.to_string();
    }

    let user = normalize(user_event);
    let user_words = tokenize(&user);

    let mut best_match: Option<&String> = None;
    let mut highest_score = 0.0;

    for event in events {
        let candidate = normalize(event);
        let cand_words = tokenize(&candidate);

        let score = overlap_score(&user_words, &cand_words);
        if score > highest_score {
            highest_score = score;
            best_match = Some(event);
        }
    }

    match best_match {
        Some(event) if highest_score >= MATCH_THRESHOLD => event.clone(),
        _ => UNKNOWN_EVENT.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog(names: &[&str]) -> Vec<String> {
        names.iter().map(|n| n.to_string()).collect()
    }

    #[test]
    fn test_empty_input_or_catalog() {
        assert_eq!(find_closest_event("", &catalog(&["Opera"])), UNKNOWN_EVENT);
        assert_eq!(find_closest_event("x", &[]), UNKNOWN_EVENT);
    }

    #[test]
    fn test_partial_overlap_matches() {
        let events = catalog(&["Clemson Football Game", "Basketball Night"]);
        assert_eq!(find_closest_event("Football Game", &events), "Clemson Football Game");
    }

    #[test]
    fn test_no_overlap_is_unknown() {
        let events = catalog(&["Clemson Football Game"]);
        assert_eq!(find_closest_event("Opera", &events), UNKNOWN_EVENT);
    }

    #[test]
    fn test_below_threshold_is_unknown() {
        // 1 of 3 tokens
        let events = catalog(&["Spring Jazz Concert"]);
        assert_eq!(find_closest_event("jazz brunch party", &events), UNKNOWN_EVENT);
    }

    #[test]
    fn test_punctuation_and_case_ignored() {
        let events = catalog(&["Tiger Run (5K)", "Homecoming Parade"]);
        assert_eq!(find_closest_event("tiger run 5k!", &events), "Tiger Run (5K)");
    }

    #[test]
    fn test_first_entry_wins_ties() {
        let events = catalog(&["Football Game A", "Football Game B"]);
        assert_eq!(find_closest_event("football game", &events), "Football Game A");
    }

    #[test]
    fn test_returns_literal_catalog_member() {
        let events = catalog(&["  Clemson FOOTBALL game!! "]);
        let result = find_closest_event("clemson football game", &events);
        assert_eq!(result, "  Clemson FOOTBALL game!! ");
    }

    #[test]
    fn test_booking_sentence_matches() {
        let events = catalog(&["Basketball Night", "Clemson Football Game"]);
        let result = find_closest_event("book 3 tickets for Clemson Football Game", &events);
        assert_eq!(result, "Clemson Football Game");
    }

    #[test]
    fn test_overlap_score_membership_not_multiset() {
        let score = overlap_score(&["game", "game"], &["game", "night"]);
        assert!((score - 1.0).abs() < f64::EPSILON);
    }
}
