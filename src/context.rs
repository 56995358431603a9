//! Board Context
//!
//! UI state shared through the Leptos Context API. Board data itself lives
//! in the [`BoardStore`](crate::store::BoardStore).

use leptos::html;
use leptos::prelude::*;
use leptos_dragdrop::{create_drag_signals, DragSignals};

use crate::config::BoardConfig;
use crate::connect::ConnectMode;
use crate::layout::CardHeights;
use crate::search::{SearchGeneration, SearchHighlight};

/// Where the card context menu is open
#[derive(Clone, Debug, PartialEq)]
pub struct MenuAnchor {
    pub card_id: String,
    pub x: i32,
    pub y: i32,
}

/// Board-wide UI signals provided via context
#[derive(Clone, Copy)]
pub struct BoardContext {
    config: StoredValue<BoardConfig>,
    /// Two-click connect gesture
    pub connect_mode: RwSignal<ConnectMode>,
    /// Open context menu, if any
    pub context_menu: RwSignal<Option<MenuAnchor>>,
    /// Card whose title is being edited
    pub editing_title: RwSignal<Option<String>>,
    /// Card the hidden file picker uploads into
    pub upload_target: RwSignal<Option<String>>,
    pub search: RwSignal<SearchHighlight>,
    search_generation: StoredValue<SearchGeneration>,
    /// Rendered card heights, fed back into layout
    pub heights: RwSignal<CardHeights>,
    pub drag: DragSignals<String>,
    /// Bumped whenever connector lines must follow their cards
    pub lines_tick: RwSignal<u32>,
    /// Scrollable canvas container
    pub container: NodeRef<html::Div>,
    /// Hidden file input used by the "upload file" menu action
    pub file_input: NodeRef<html::Input>,
}

impl BoardContext {
    pub fn new(config: BoardConfig) -> Self {
        Self {
            config: StoredValue::new(config),
            connect_mode: RwSignal::new(ConnectMode::Idle),
            context_menu: RwSignal::new(None),
            editing_title: RwSignal::new(None),
            upload_target: RwSignal::new(None),
            search: RwSignal::new(SearchHighlight::Inactive),
            search_generation: StoredValue::new(SearchGeneration::default()),
            heights: RwSignal::new(CardHeights::new()),
            drag: create_drag_signals(),
            lines_tick: RwSignal::new(0),
            container: NodeRef::new(),
            file_input: NodeRef::new(),
        }
    }

    pub fn config(&self) -> BoardConfig {
        self.config.get_value()
    }

    pub fn open_menu(&self, card_id: String, x: i32, y: i32) {
        self.context_menu.set(Some(MenuAnchor { card_id, x, y }));
    }

    pub fn close_menu(&self) {
        if self.context_menu.get_untracked().is_some() {
            self.context_menu.set(None);
        }
    }

    /// Ask every connector line to re-read its endpoints
    pub fn reposition_lines(&self) {
        self.lines_tick.update(|v| *v = v.wrapping_add(1));
    }

    /// Store a measured height; unchanged heights do not trigger layout
    pub fn record_height(&self, card_id: &str, height: f64) {
        let changed = self.heights.with_untracked(|h| h.get(card_id).copied() != Some(height));
        if changed {
            self.heights.update(|h| {
                h.insert(card_id.to_string(), height);
            });
        }
    }

    /// Drop the measured height of a deleted card
    pub fn forget_height(&self, card_id: &str) {
        if self.heights.with_untracked(|h| h.contains_key(card_id)) {
            self.heights.update(|h| {
                h.remove(card_id);
            });
        }
    }

    /// Start a new search; replies carrying an older generation are dropped
    pub fn next_search_generation(&self) -> u64 {
        let mut generation = 0;
        self.search_generation.update_value(|g| generation = g.next());
        generation
    }

    pub fn is_current_search(&self, generation: u64) -> bool {
        self.search_generation.with_value(|g| g.is_current(generation))
    }
}

/// Get the board context
pub fn use_board_context() -> BoardContext {
    use_context::<BoardContext>().expect("BoardContext should be provided")
}
