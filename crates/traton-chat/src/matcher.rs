//! Keyword topic matcher.
//!
//! Maps a normalized query to one [`Topic`] by walking an ordered table of
//! named predicates. The first predicate that holds wins.

use std::fmt;

use serde::{Deserialize, Serialize};

// =============================================================================
// Topic
// =============================================================================

/// Closed set of subjects the assistant has a canned answer for.
///
/// Declaration order is match priority.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Topic {
    SalinityEquatorMarch2023,
    TemperatureTrend,
    AtlanticCurrents,
    MarineEcosystem,
    Default,
}

impl Topic {
    /// Every topic, highest priority first.
    pub const ALL: [Topic; 5] = [
        Topic::SalinityEquatorMarch2023,
        Topic::TemperatureTrend,
        Topic::AtlanticCurrents,
        Topic::MarineEcosystem,
        Topic::Default,
    ];
}

impl fmt::Display for Topic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Topic::SalinityEquatorMarch2023 => write!(f, "salinity-equator-march-2023"),
            Topic::TemperatureTrend => write!(f, "temperature-trend"),
            Topic::AtlanticCurrents => write!(f, "atlantic-currents"),
            Topic::MarineEcosystem => write!(f, "marine-ecosystem"),
            Topic::Default => write!(f, "default"),
        }
    }
}

// =============================================================================
// Predicates
// =============================================================================

/// A test over an already-normalized (trimmed, lower-cased) query.
pub type Predicate = fn(&str) -> bool;

/// "salinity", "equator", "march" and "2023" all present.
pub fn is_equatorial_salinity_query(query: &str) -> bool {
    ["salinity", "equator", "march", "2023"]
        .iter()
        .all(|kw| query.contains(kw))
}

/// "temperature" plus either "pacific" or "bay of bengal".
pub fn is_temperature_trend_query(query: &str) -> bool {
    query.contains("temperature") && (query.contains("pacific") || query.contains("bay of bengal"))
}

/// "current" and "atlantic". "currents" matches too, being a substring test.
pub fn is_atlantic_currents_query(query: &str) -> bool {
    query.contains("current") && query.contains("atlantic")
}

/// "marine" and "ecosystem".
pub fn is_marine_ecosystem_query(query: &str) -> bool {
    query.contains("marine") && query.contains("ecosystem")
}

/// Priority table. `Topic::Default` has no entry; it is the fallback.
static PRIORITY: [(Predicate, Topic); 4] = [
    (is_equatorial_salinity_query, Topic::SalinityEquatorMarch2023),
    (is_temperature_trend_query, Topic::TemperatureTrend),
    (is_atlantic_currents_query, Topic::AtlanticCurrents),
    (is_marine_ecosystem_query, Topic::MarineEcosystem),
];

/// Trim surrounding whitespace and lower-case. Nothing else is stripped.
pub fn normalize(raw_query: &str) -> String {
    raw_query.trim().to_lowercase()
}

// =============================================================================
// TopicMatcher
// =============================================================================

/// First-match-wins topic matcher over a fixed priority table.
#[derive(Debug, Clone, Copy, Default)]
pub struct TopicMatcher;

impl TopicMatcher {
    pub fn new() -> Self {
        Self
    }

    /// Resolve a normalized query to a topic. Never fails.
    pub fn match_topic(&self, normalized: &str) -> Topic {
        PRIORITY
            .iter()
            .find(|(predicate, _)| predicate(normalized))
            .map(|(_, topic)| *topic)
            .unwrap_or(Topic::Default)
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn matcher() -> TopicMatcher {
        TopicMatcher::new()
    }

    fn match_raw(raw: &str) -> Topic {
        matcher().match_topic(&normalize(raw))
    }

    // ---- Normalization ----

    #[test]
    fn test_normalize_trims_and_lowercases() {
        assert_eq!(normalize("  Salinity AT the Equator \n"), "salinity at the equator");
    }

    #[test]
    fn test_normalize_keeps_punctuation() {
        assert_eq!(normalize("Atlantic, currents?"), "atlantic, currents?");
    }

    #[test]
    fn test_normalize_empty() {
        assert_eq!(normalize(""), "");
        assert_eq!(normalize("   \t "), "");
    }

    // ---- Individual predicates ----

    #[test]
    fn test_salinity_predicate_requires_all_keywords() {
        assert!(is_equatorial_salinity_query("salinity at the equator in march 2023"));
        assert!(!is_equatorial_salinity_query("salinity at the equator in march 2022"));
        assert!(!is_equatorial_salinity_query("salinity at the equator"));
        assert!(!is_equatorial_salinity_query("equator march 2023"));
    }

    #[test]
    fn test_temperature_predicate_either_region() {
        assert!(is_temperature_trend_query("pacific temperature trends"));
        assert!(is_temperature_trend_query("temperature in the bay of bengal"));
        assert!(!is_temperature_trend_query("temperature in the atlantic"));
        assert!(!is_temperature_trend_query("pacific salinity"));
    }

    #[test]
    fn test_temperature_predicate_needs_full_bay_phrase() {
        assert!(!is_temperature_trend_query("temperature in bengal"));
        assert!(!is_temperature_trend_query("temperature bay bengal"));
    }

    #[test]
    fn test_currents_predicate() {
        assert!(is_atlantic_currents_query("atlantic current patterns"));
        assert!(is_atlantic_currents_query("currents of the atlantic"));
        assert!(!is_atlantic_currents_query("atlantic salinity"));
        assert!(!is_atlantic_currents_query("pacific currents"));
    }

    #[test]
    fn test_ecosystem_predicate() {
        assert!(is_marine_ecosystem_query("marine ecosystem health"));
        assert!(is_marine_ecosystem_query("which ecosystems are marine?"));
        assert!(!is_marine_ecosystem_query("marine life"));
    }

    // ---- Topic resolution ----

    #[test]
    fn test_each_topic_reachable() {
        assert_eq!(
            match_raw("Show me salinity levels at the equator in March 2023"),
            Topic::SalinityEquatorMarch2023
        );
        assert_eq!(
            match_raw("Show me the current sea surface temperature in the Pacific Ocean"),
            Topic::TemperatureTrend
        );
        assert_eq!(
            match_raw("Show me the current patterns in the Atlantic Ocean"),
            Topic::AtlanticCurrents
        );
        assert_eq!(
            match_raw("What marine ecosystems are affected by temperature changes?"),
            Topic::MarineEcosystem
        );
        assert_eq!(match_raw("random unrelated text"), Topic::Default);
    }

    #[test]
    fn test_salinity_beats_temperature() {
        let q = "pacific temperature and salinity at the equator, march 2023";
        assert!(is_temperature_trend_query(&normalize(q)));
        assert_eq!(match_raw(q), Topic::SalinityEquatorMarch2023);
    }

    #[test]
    fn test_temperature_beats_currents() {
        // "current" appears in the temperature quick action, and so does "pacific".
        let q = "current temperature in the pacific and atlantic";
        assert!(is_atlantic_currents_query(&normalize(q)));
        assert_eq!(match_raw(q), Topic::TemperatureTrend);
    }

    #[test]
    fn test_currents_beats_ecosystem() {
        let q = "atlantic currents and the marine ecosystem";
        assert_eq!(match_raw(q), Topic::AtlanticCurrents);
    }

    #[test]
    fn test_case_insensitive() {
        assert_eq!(
            match_raw("SALINITY EQUATOR MARCH 2023"),
            match_raw("salinity equator march 2023")
        );
        assert_eq!(match_raw("ATLANTIC CURRENT"), Topic::AtlanticCurrents);
    }

    #[test]
    fn test_surrounding_whitespace_ignored() {
        assert_eq!(match_raw("   marine ecosystem   "), Topic::MarineEcosystem);
    }

    #[test]
    fn test_empty_query_is_default() {
        assert_eq!(match_raw(""), Topic::Default);
        assert_eq!(match_raw("    "), Topic::Default);
    }

    #[test]
    fn test_keywords_inside_longer_tokens_still_match() {
        assert_eq!(
            match_raw("salinitycurrentequatormarch2023"),
            Topic::SalinityEquatorMarch2023
        );
        assert_eq!(match_raw("undercurrents/atlantic"), Topic::AtlanticCurrents);
    }

    #[test]
    fn test_unicode_input_falls_back() {
        assert_eq!(match_raw("température de l'océan 🌊"), Topic::Default);
    }

    #[test]
    fn test_very_long_input() {
        let q = format!("{} marine ecosystem", "wave ".repeat(10_000));
        assert_eq!(match_raw(&q), Topic::MarineEcosystem);
    }

    #[test]
    fn test_priority_table_matches_declared_order() {
        let order: Vec<Topic> = PRIORITY.iter().map(|(_, t)| *t).collect();
        assert_eq!(order, Topic::ALL[..4].to_vec());
        assert_eq!(Topic::ALL[4], Topic::Default);
    }

    #[test]
    fn test_topic_display() {
        assert_eq!(Topic::SalinityEquatorMarch2023.to_string(), "salinity-equator-march-2023");
        assert_eq!(Topic::Default.to_string(), "default");
    }
}
