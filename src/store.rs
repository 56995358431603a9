//! Board State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. Every mutation
//! goes through [`store_apply`], so handlers never touch the state directly.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::models::{BoardSnapshot, Card, CardFile, Connection, Tag, ViewMode};

/// Client-side cache of the board, rebuilt on every full reload
#[derive(Clone, Debug, Default, Store)]
pub struct BoardState {
    /// Cards in server order
    pub cards: Vec<Card>,
    /// Explicit user-created connections
    pub connections: Vec<Connection>,
    pub view_mode: ViewMode,
    /// Whether the first snapshot has arrived
    pub loaded: bool,
}

impl BoardState {
    pub fn from_snapshot(snapshot: BoardSnapshot) -> Self {
        Self {
            cards: snapshot.cards,
            connections: snapshot.connections,
            view_mode: snapshot.view_mode,
            loaded: true,
        }
    }

    pub fn card(&self, card_id: &str) -> Option<&Card> {
        self.cards.iter().find(|c| c.id == card_id)
    }

    fn card_mut(&mut self, card_id: &str) -> Option<&mut Card> {
        self.cards.iter_mut().find(|c| c.id == card_id)
    }

    /// Append a newly created card unless its id is already present
    pub fn push_card(&mut self, card: Card) -> bool {
        if self.card(&card.id).is_some() {
            return false;
        }
        self.cards.push(card);
        true
    }

    /// Remove a card and every connection referencing it
    ///
    /// Returns the number of connections dropped.
    pub fn remove_card(&mut self, card_id: &str) -> usize {
        self.cards.retain(|c| c.id != card_id);
        let before = self.connections.len();
        self.connections.retain(|conn| !conn.touches(card_id));
        before - self.connections.len()
    }

    /// Returns false when the title is unchanged or the card is gone
    pub fn set_title(&mut self, card_id: &str, title: &str) -> bool {
        match self.card_mut(card_id) {
            Some(card) if card.title != title => {
                card.title = title.to_string();
                true
            }
            _ => false,
        }
    }

    pub fn set_position(&mut self, card_id: &str, x: f64, y: f64) {
        if let Some(card) = self.card_mut(card_id) {
            card.pos_x = Some(x);
            card.pos_y = Some(y);
        }
    }

    /// Append a tag; a tag id already on the card is not added twice
    pub fn push_tag(&mut self, card_id: &str, tag: Tag) -> bool {
        match self.card_mut(card_id) {
            Some(card) if !card.tags.iter().any(|t| t.id == tag.id) => {
                card.tags.push(tag);
                true
            }
            _ => false,
        }
    }

    pub fn remove_tag(&mut self, card_id: &str, tag_id: &str) {
        if let Some(card) = self.card_mut(card_id) {
            card.tags.retain(|t| t.id != tag_id);
        }
    }

    pub fn append_files(&mut self, card_id: &str, files: Vec<CardFile>) {
        if let Some(card) = self.card_mut(card_id) {
            card.files.extend(files);
        }
    }

    pub fn remove_file(&mut self, file_id: &str) {
        for card in self.cards.iter_mut() {
            card.files.retain(|f| f.id != file_id);
        }
    }

    /// Append a connection whose endpoints are both on the board
    pub fn push_connection(&mut self, connection: Connection) -> bool {
        let endpoints_known = self.card(&connection.from_card_id).is_some() && self.card(&connection.to_card_id).is_some();
        if !endpoints_known || self.connections.iter().any(|c| c.id == connection.id) {
            return false;
        }
        self.connections.push(connection);
        true
    }

    pub fn remove_connection(&mut self, connection_id: &str) {
        self.connections.retain(|c| c.id != connection_id);
    }

    /// Ids of the explicit connections touching `card_id`
    pub fn connection_ids_of(&self, card_id: &str) -> Vec<String> {
        self.connections
            .iter()
            .filter(|c| c.touches(card_id))
            .map(|c| c.id.clone())
            .collect()
    }
}

/// Trimmed tag name to submit; blank input submits nothing
pub fn tag_name_to_submit(raw: &str) -> Option<String> {
    let name = raw.trim();
    (!name.is_empty()).then(|| name.to_string())
}

/// Outcome of finishing an inline title edit
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TitleCommit {
    /// Edited text was blank: put the current title back
    Restore,
    /// Same title: nothing to store or send
    Unchanged,
    Save(String),
}

pub fn title_commit(current: &str, edited: &str) -> TitleCommit {
    let edited = edited.trim();
    if edited.is_empty() {
        TitleCommit::Restore
    } else if edited == current {
        TitleCommit::Unchanged
    } else {
        TitleCommit::Save(edited.to_string())
    }
}

/// Type alias for the store
pub type BoardStore = Store<BoardState>;

/// Get the board store from context
pub fn use_board_store() -> BoardStore {
    expect_context::<BoardStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Single update entry point: mutate the state, dependants re-render
pub fn store_apply<R>(store: &BoardStore, f: impl FnOnce(&mut BoardState) -> R) -> R {
    let mut state = store.write();
    f(&mut *state)
}

/// Replace the whole state with a fresh snapshot
pub fn store_load(store: &BoardStore, snapshot: BoardSnapshot) {
    store.set(BoardState::from_snapshot(snapshot));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_card(id: &str) -> Card {
        Card {
            id: id.to_string(),
            title: format!("Card {}", id),
            pos_x: None,
            pos_y: None,
            tags: vec![],
            files: vec![],
            email: None,
        }
    }

    fn make_conn(id: &str, from: &str, to: &str) -> Connection {
        Connection {
            id: id.to_string(),
            from_card_id: from.to_string(),
            to_card_id: to.to_string(),
        }
    }

    fn make_state() -> BoardState {
        BoardState {
            cards: vec![make_card("a"), make_card("b"), make_card("c")],
            connections: vec![make_conn("k1", "a", "b"), make_conn("k2", "c", "a"), make_conn("k3", "b", "c")],
            view_mode: ViewMode::Freeform,
            loaded: true,
        }
    }

    #[test]
    fn test_remove_card_drops_its_connections() {
        let mut state = make_state();
        let dropped = state.remove_card("a");
        assert_eq!(dropped, 2);
        assert_eq!(state.cards.len(), 2);
        assert!(state.connections.iter().all(|c| !c.touches("a")));
        assert_eq!(state.connections.len(), 1);
        assert_eq!(state.connections[0].id, "k3");
    }

    #[test]
    fn test_push_tag_appends_exactly_once() {
        let mut state = make_state();
        let tag = Tag { id: "t1".into(), name: "urgent".into() };
        assert!(state.push_tag("b", tag.clone()));
        assert!(!state.push_tag("b", tag));
        let card = state.card("b").unwrap();
        assert_eq!(card.tags.len(), 1);
        assert_eq!(card.tags[0].id, "t1");
        assert!(state.card("a").unwrap().tags.is_empty());
    }

    #[test]
    fn test_tag_name_to_submit() {
        assert_eq!(tag_name_to_submit("  urgent \n"), Some("urgent".to_string()));
        assert_eq!(tag_name_to_submit(""), None);
        assert_eq!(tag_name_to_submit(" \t "), None);
    }

    #[test]
    fn test_submitted_tag_lands_once() {
        let mut state = make_state();
        let name = tag_name_to_submit(" client ").unwrap();
        assert!(state.push_tag("c", Tag { id: "t7".into(), name }));
        let tags = &state.card("c").unwrap().tags;
        assert_eq!(tags.len(), 1);
        assert_eq!(tags[0].name, "client");
    }

    #[test]
    fn test_title_commit_rules() {
        assert_eq!(title_commit("Plan", "   "), TitleCommit::Restore);
        assert_eq!(title_commit("Plan", " Plan "), TitleCommit::Unchanged);
        assert_eq!(title_commit("Plan", " Plan B\n"), TitleCommit::Save("Plan B".to_string()));
    }

    #[test]
    fn test_remove_tag() {
        let mut state = make_state();
        state.push_tag("a", Tag { id: "t1".into(), name: "x".into() });
        state.push_tag("a", Tag { id: "t2".into(), name: "y".into() });
        state.remove_tag("a", "t1");
        let tags = &state.card("a").unwrap().tags;
        assert_eq!(tags.len(), 1);
        assert_eq!(tags[0].id, "t2");
    }

    #[test]
    fn test_set_title_reports_change() {
        let mut state = make_state();
        assert!(!state.set_title("a", "Card a"));
        assert!(state.set_title("a", "Renamed"));
        assert_eq!(state.card("a").unwrap().title, "Renamed");
        assert!(!state.set_title("missing", "x"));
    }

    #[test]
    fn test_set_position_saves_both_coordinates() {
        let mut state = make_state();
        state.set_position("c", 150.0, 220.0);
        assert_eq!(state.card("c").unwrap().saved_position(), Some((150.0, 220.0)));
    }

    #[test]
    fn test_files_append_and_remove() {
        let mut state = make_state();
        let file = CardFile {
            id: "f1".into(),
            original_name: "a.png".into(),
            url: "/u/a.png".into(),
            thumb_url: "/u/thumb_a.png".into(),
            is_image: true,
        };
        state.append_files("a", vec![file]);
        assert_eq!(state.card("a").unwrap().files.len(), 1);
        state.remove_file("f1");
        assert!(state.card("a").unwrap().files.is_empty());
    }

    #[test]
    fn test_push_connection_requires_known_endpoints() {
        let mut state = make_state();
        assert!(!state.push_connection(make_conn("k9", "a", "zzz")));
        assert!(!state.push_connection(make_conn("k1", "a", "c")));
        assert!(state.push_connection(make_conn("k4", "a", "c")));
        assert_eq!(state.connection_ids_of("a"), vec!["k1", "k2", "k4"]);
    }

    #[test]
    fn test_push_card_ignores_duplicates() {
        let mut state = make_state();
        assert!(!state.push_card(make_card("a")));
        assert!(state.push_card(make_card("d")));
        assert_eq!(state.cards.last().unwrap().id, "d");
    }
}
