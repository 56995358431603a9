//! Card Layout
//!
//! Position of every card for the current view mode. Recomputed in full on
//! every pass; the caller memoizes the result.

use std::collections::HashMap;

use leptos_dragdrop::Point;

use crate::config::{DEFAULT_CARD_HEIGHT, LAYOUT_GAP, LAYOUT_MARGIN, STACK_X};
use crate::models::{Card, ViewMode};

/// Measured card heights by card id
pub type CardHeights = HashMap<String, f64>;

/// Card positions by card id
pub type CardPositions = HashMap<String, Point>;

/// Stack cards top to bottom; in freeform mode a saved position wins
///
/// The running top advances for every card, so unsaved cards keep the same
/// slot they would have in the stacked layout.
pub fn compute_layout(mode: ViewMode, cards: &[Card], heights: &CardHeights) -> CardPositions {
    let mut positions = HashMap::with_capacity(cards.len());
    let mut top = LAYOUT_MARGIN;

    for card in cards {
        let saved = match mode {
            ViewMode::Freeform => card.saved_position(),
            ViewMode::Flowchart => None,
        };
        let position = match saved {
            Some((x, y)) => Point::new(x, y),
            None => Point::new(STACK_X, top),
        };
        positions.insert(card.id.clone(), position);

        let height = heights.get(&card.id).copied().unwrap_or(DEFAULT_CARD_HEIGHT);
        top += height + LAYOUT_GAP;
    }
    positions
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_card(id: &str, saved: Option<(f64, f64)>) -> Card {
        Card {
            id: id.to_string(),
            title: id.to_string(),
            pos_x: saved.map(|s| s.0),
            pos_y: saved.map(|s| s.1),
            tags: vec![],
            files: vec![],
            email: None,
        }
    }

    fn heights(pairs: &[(&str, f64)]) -> CardHeights {
        pairs.iter().map(|(id, h)| (id.to_string(), *h)).collect()
    }

    #[test]
    fn test_flowchart_stacks_by_height_plus_gap() {
        let cards = vec![
            make_card("a", Some((900.0, 900.0))),
            make_card("b", None),
            make_card("c", None),
            make_card("d", None),
        ];
        let h = heights(&[("a", 100.0), ("b", 250.0), ("c", 80.0), ("d", 60.0)]);
        let pos = compute_layout(ViewMode::Flowchart, &cards, &h);

        assert_eq!(pos["a"], Point::new(STACK_X, LAYOUT_MARGIN));
        for pair in cards.windows(2) {
            let (cur, next) = (&pair[0].id, &pair[1].id);
            assert_eq!(pos[next].y, pos[cur].y + h[cur] + LAYOUT_GAP);
            assert_eq!(pos[next].x, STACK_X);
        }
    }

    #[test]
    fn test_unmeasured_cards_use_default_height() {
        let cards = vec![make_card("a", None), make_card("b", None)];
        let pos = compute_layout(ViewMode::Flowchart, &cards, &CardHeights::new());
        assert_eq!(pos["b"].y, LAYOUT_MARGIN + DEFAULT_CARD_HEIGHT + LAYOUT_GAP);
    }

    #[test]
    fn test_freeform_honors_saved_positions() {
        let cards = vec![make_card("a", Some((150.0, 220.0))), make_card("b", None)];
        let h = heights(&[("a", 100.0), ("b", 100.0)]);
        let pos = compute_layout(ViewMode::Freeform, &cards, &h);
        assert_eq!(pos["a"], Point::new(150.0, 220.0));
        // the unsaved card keeps its stacked slot
        assert_eq!(pos["b"], Point::new(STACK_X, LAYOUT_MARGIN + 100.0 + LAYOUT_GAP));
    }

    #[test]
    fn test_toggle_mode_round_trip_is_deterministic() {
        let cards = vec![make_card("a", Some((10.0, 20.0))), make_card("b", None), make_card("c", Some((300.0, 5.0)))];
        let h = heights(&[("a", 90.0), ("b", 140.0), ("c", 70.0)]);

        let free = compute_layout(ViewMode::Freeform, &cards, &h);
        let flow = compute_layout(ViewMode::Flowchart, &cards, &h);
        let free_again = compute_layout(ViewMode::Freeform, &cards, &h);
        let flow_again = compute_layout(ViewMode::Flowchart, &cards, &h);

        assert_eq!(free, free_again);
        assert_eq!(flow, flow_again);
        assert_ne!(free, flow);
    }
}
