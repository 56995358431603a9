//! Search Highlighting
//!
//! Which cards and tags stand out for the current search.

use std::collections::HashSet;

/// Opacity of cards that do not match an active search
pub const DIMMED_OPACITY: f64 = 0.2;
pub const MATCH_BORDER: &str = "2px solid #ff0000";
pub const TAG_HIGHLIGHT: &str = "#ffe066";

/// Result of the latest search
#[derive(Clone, Debug, Default, PartialEq)]
pub enum SearchHighlight {
    /// No query: every card at full opacity, nothing highlighted
    #[default]
    Inactive,
    Active {
        /// Lower-cased query
        query: String,
        matches: HashSet<String>,
    },
}

impl SearchHighlight {
    pub fn active(query: &str, card_ids: Vec<String>) -> Self {
        SearchHighlight::Active {
            query: query.to_lowercase(),
            matches: card_ids.into_iter().collect(),
        }
    }

    pub fn is_match(&self, card_id: &str) -> bool {
        match self {
            SearchHighlight::Inactive => false,
            SearchHighlight::Active { matches, .. } => matches.contains(card_id),
        }
    }

    pub fn card_opacity(&self, card_id: &str) -> f64 {
        match self {
            SearchHighlight::Inactive => 1.0,
            SearchHighlight::Active { .. } if self.is_match(card_id) => 1.0,
            SearchHighlight::Active { .. } => DIMMED_OPACITY,
        }
    }

    pub fn card_border(&self, card_id: &str) -> Option<&'static str> {
        self.is_match(card_id).then_some(MATCH_BORDER)
    }

    /// Tags of matching cards that contain the query, case-insensitive
    pub fn tag_background(&self, card_id: &str, tag_name: &str) -> Option<&'static str> {
        match self {
            SearchHighlight::Active { query, .. } if self.is_match(card_id) && tag_name.to_lowercase().contains(query.as_str()) => {
                Some(TAG_HIGHLIGHT)
            }
            _ => None,
        }
    }
}

/// Hands out increasing ids so a slow reply cannot overwrite a newer one
#[derive(Clone, Copy, Debug, Default)]
pub struct SearchGeneration(u64);

impl SearchGeneration {
    pub fn next(&mut self) -> u64 {
        self.0 += 1;
        self.0
    }

    pub fn is_current(&self, generation: u64) -> bool {
        self.0 == generation
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_matches_dims_every_card() {
        let highlight = SearchHighlight::active("zzz", vec![]);
        for id in ["a", "b", "c"] {
            assert!(highlight.card_opacity(id) < 1.0);
            assert_eq!(highlight.card_border(id), None);
        }
    }

    #[test]
    fn test_inactive_restores_everything() {
        let highlight = SearchHighlight::Inactive;
        assert_eq!(highlight.card_opacity("a"), 1.0);
        assert_eq!(highlight.card_border("a"), None);
        assert_eq!(highlight.tag_background("a", "urgent"), None);
    }

    #[test]
    fn test_matches_bordered_and_tags_tinted() {
        let highlight = SearchHighlight::active("URG", vec!["a".into()]);
        assert_eq!(highlight.card_opacity("a"), 1.0);
        assert_eq!(highlight.card_border("a"), Some(MATCH_BORDER));
        assert_eq!(highlight.tag_background("a", "Urgent"), Some(TAG_HIGHLIGHT));
        assert_eq!(highlight.tag_background("a", "later"), None);
        // same tag on a non-matching card stays plain
        assert_eq!(highlight.tag_background("b", "urgent"), None);
        assert_eq!(highlight.card_opacity("b"), DIMMED_OPACITY);
    }

    #[test]
    fn test_generation_rejects_stale_replies() {
        let mut generation = SearchGeneration::default();
        let first = generation.next();
        let second = generation.next();
        assert!(!generation.is_current(first));
        assert!(generation.is_current(second));
    }
}
