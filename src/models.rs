//! Frontend Models
//!
//! Data structures matching the board API payloads.

use serde::{Deserialize, Serialize};

/// Board view mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    /// User-positioned, draggable cards
    #[default]
    Freeform,
    /// Auto-stacked cards linked in sequence
    Flowchart,
}

impl ViewMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ViewMode::Freeform => "freeform",
            ViewMode::Flowchart => "flowchart",
        }
    }

    pub fn allows_drag(&self) -> bool {
        matches!(self, ViewMode::Freeform)
    }
}

/// Tag attached to a card
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tag {
    pub id: String,
    pub name: String,
}

/// File attached to a card
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CardFile {
    pub id: String,
    pub original_name: String,
    pub url: String,
    pub thumb_url: String,
    #[serde(default)]
    pub is_image: bool,
}

impl CardFile {
    /// Badge text for non-image files: upper-cased extension
    pub fn badge(&self) -> String {
        self.original_name
            .rsplit('.')
            .next()
            .unwrap_or_default()
            .to_uppercase()
    }
}

/// Summary of the email a card was created from
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmailSummary {
    pub id: String,
    pub from_addr: String,
    #[serde(default)]
    pub subject: Option<String>,
    #[serde(default)]
    pub body_text: Option<String>,
}

/// Characters of the email body shown on a card
const EMAIL_PREVIEW_CHARS: usize = 100;

impl EmailSummary {
    pub fn preview(&self) -> String {
        match self.body_text.as_deref() {
            Some(body) if !body.is_empty() => {
                let head: String = body.chars().take(EMAIL_PREVIEW_CHARS).collect();
                format!("{}...", head)
            }
            _ => String::new(),
        }
    }

    pub fn link(&self) -> String {
        format!("/emails/{}", self.id)
    }
}

/// Card data structure (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Card {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub pos_x: Option<f64>,
    #[serde(default)]
    pub pos_y: Option<f64>,
    #[serde(default)]
    pub tags: Vec<Tag>,
    #[serde(default)]
    pub files: Vec<CardFile>,
    #[serde(default)]
    pub email: Option<EmailSummary>,
}

impl Card {
    /// Saved position, only when both coordinates are present
    pub fn saved_position(&self) -> Option<(f64, f64)> {
        match (self.pos_x, self.pos_y) {
            (Some(x), Some(y)) => Some((x, y)),
            _ => None,
        }
    }
}

/// DOM id of the rendered card element
pub fn card_element_id(card_id: &str) -> String {
    format!("card-{}", card_id)
}

/// Directed connection between two cards
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Connection {
    pub id: String,
    pub from_card_id: String,
    pub to_card_id: String,
}

impl Connection {
    /// Whether either endpoint is `card_id`
    pub fn touches(&self, card_id: &str) -> bool {
        self.from_card_id == card_id || self.to_card_id == card_id
    }
}

/// Full board payload returned by the cards endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoardSnapshot {
    #[serde(default)]
    pub cards: Vec<Card>,
    #[serde(default)]
    pub connections: Vec<Connection>,
    #[serde(default)]
    pub view_mode: ViewMode,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snapshot_ignores_unknown_fields() {
        let json = r#"{
            "cards": [{
                "id": "c1", "board_id": "b1", "title": "Intro", "body": "",
                "pos_x": 150, "pos_y": 220, "sort_order": 0,
                "tags": [{"id": "t1", "name": "urgent"}],
                "files": []
            }],
            "connections": [{"id": "k1", "board_id": "b1", "from_card_id": "c1", "to_card_id": "c2"}],
            "view_mode": "flowchart"
        }"#;
        let snapshot: BoardSnapshot = serde_json::from_str(json).unwrap();
        assert_eq!(snapshot.view_mode, ViewMode::Flowchart);
        assert_eq!(snapshot.cards[0].saved_position(), Some((150.0, 220.0)));
        assert_eq!(snapshot.cards[0].tags[0].name, "urgent");
        assert!(snapshot.connections[0].touches("c2"));
    }

    #[test]
    fn test_saved_position_needs_both_coordinates() {
        let card: Card = serde_json::from_str(r#"{"id": "c1", "title": "x", "pos_x": 10, "pos_y": null}"#).unwrap();
        assert_eq!(card.saved_position(), None);
        assert!(card.tags.is_empty());
    }

    #[test]
    fn test_file_badge() {
        let file = CardFile {
            id: "f1".into(),
            original_name: "quote.final.pdf".into(),
            url: "/u/a".into(),
            thumb_url: "/u/t".into(),
            is_image: false,
        };
        assert_eq!(file.badge(), "PDF");
    }

    #[test]
    fn test_email_preview_truncates_on_chars() {
        let email = EmailSummary {
            id: "e1".into(),
            from_addr: "a@b.c".into(),
            subject: None,
            body_text: Some("é".repeat(150)),
        };
        let preview = email.preview();
        assert_eq!(preview.chars().count(), 103);
        assert!(preview.ends_with("..."));
        assert_eq!(email.link(), "/emails/e1");
    }
}
