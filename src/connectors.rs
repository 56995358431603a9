//! Connector Lines
//!
//! Plans the directed links between cards and keeps the drawn lines in step
//! with the plan. Drawing itself goes through a [`ConnectorBackend`], so
//! nothing here depends on a particular line library.

use std::collections::{HashMap, HashSet};

use crate::models::{Card, Connection, ViewMode};

/// Identity of a drawn line
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum LinkKey {
    /// Implicit link between consecutive cards in flowchart mode
    Sequence { from: String, to: String },
    /// User-created connection, by connection id
    Explicit(String),
}

/// A line that should be on screen
#[derive(Clone, Debug, PartialEq)]
pub struct PlannedLink {
    pub key: LinkKey,
    pub from_card_id: String,
    pub to_card_id: String,
}

impl PlannedLink {
    pub fn is_sequence(&self) -> bool {
        matches!(self.key, LinkKey::Sequence { .. })
    }
}

/// Every line the board should show, sequence links first
pub fn plan_links(mode: ViewMode, cards: &[Card], connections: &[Connection]) -> Vec<PlannedLink> {
    let mut links = Vec::new();

    if mode == ViewMode::Flowchart {
        for pair in cards.windows(2) {
            let (from, to) = (&pair[0].id, &pair[1].id);
            links.push(PlannedLink {
                key: LinkKey::Sequence { from: from.clone(), to: to.clone() },
                from_card_id: from.clone(),
                to_card_id: to.clone(),
            });
        }
    }

    let present: HashSet<&str> = cards.iter().map(|c| c.id.as_str()).collect();
    for conn in connections {
        if present.contains(conn.from_card_id.as_str()) && present.contains(conn.to_card_id.as_str()) {
            links.push(PlannedLink {
                key: LinkKey::Explicit(conn.id.clone()),
                from_card_id: conn.from_card_id.clone(),
                to_card_id: conn.to_card_id.clone(),
            });
        }
    }
    links
}

/// A stateful line-drawing widget
pub trait ConnectorBackend {
    type Handle;

    /// Draw a line for `link`
    fn attach(&mut self, link: &PlannedLink) -> Result<Self::Handle, String>;
    /// Re-read endpoint geometry and move the line
    fn reposition(&self, handle: &Self::Handle);
    /// Remove the line
    fn release(&mut self, handle: Self::Handle);
}

/// Outcome of one [`LinkRegistry::sync`]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SyncReport {
    pub attached: usize,
    pub released: usize,
    pub kept: usize,
    pub failed: usize,
}

/// Lines currently drawn, keyed by link identity
pub struct LinkRegistry<B: ConnectorBackend> {
    backend: B,
    drawn: HashMap<LinkKey, (PlannedLink, B::Handle)>,
}

impl<B: ConnectorBackend> LinkRegistry<B> {
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            drawn: HashMap::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.drawn.len()
    }

    pub fn is_empty(&self) -> bool {
        self.drawn.is_empty()
    }

    /// Release lines no longer planned, attach new ones, keep the rest
    ///
    /// A failed attach is logged and retried on the next sync.
    pub fn sync(&mut self, plan: &[PlannedLink]) -> SyncReport {
        let mut report = SyncReport::default();
        let wanted: HashMap<&LinkKey, &PlannedLink> = plan.iter().map(|l| (&l.key, l)).collect();

        let stale: Vec<LinkKey> = self
            .drawn
            .iter()
            .filter(|(key, (link, _))| wanted.get(key).map_or(true, |w| *w != link))
            .map(|(key, _)| key.clone())
            .collect();
        for key in stale {
            if let Some((_, handle)) = self.drawn.remove(&key) {
                self.backend.release(handle);
                report.released += 1;
            }
        }

        for link in plan {
            if self.drawn.contains_key(&link.key) {
                report.kept += 1;
                continue;
            }
            match self.backend.attach(link) {
                Ok(handle) => {
                    self.drawn.insert(link.key.clone(), (link.clone(), handle));
                    report.attached += 1;
                }
                Err(e) => {
                    log::warn!("[LINES] could not draw {} -> {}: {}", link.from_card_id, link.to_card_id, e);
                    report.failed += 1;
                }
            }
        }
        report
    }

    pub fn reposition_all(&self) {
        for (_, handle) in self.drawn.values() {
            self.backend.reposition(handle);
        }
    }

    /// Release every drawn line
    pub fn clear(&mut self) {
        for (_, (_, handle)) in self.drawn.drain() {
            self.backend.release(handle);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    fn make_card(id: &str) -> Card {
        Card {
            id: id.to_string(),
            title: id.to_string(),
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

    /// Records calls; refuses links touching `broken`
    #[derive(Default)]
    struct RecordingBackend {
        next: u32,
        live: HashSet<u32>,
        repositions: Cell<u32>,
        broken: Option<String>,
    }

    impl ConnectorBackend for RecordingBackend {
        type Handle = u32;

        fn attach(&mut self, link: &PlannedLink) -> Result<u32, String> {
            if self.broken.as_deref() == Some(link.to_card_id.as_str()) {
                return Err("no element".into());
            }
            self.next += 1;
            self.live.insert(self.next);
            Ok(self.next)
        }

        fn reposition(&self, _handle: &u32) {
            self.repositions.set(self.repositions.get() + 1);
        }

        fn release(&mut self, handle: u32) {
            assert!(self.live.remove(&handle), "double release");
        }
    }

    #[test]
    fn test_plan_sequence_only_in_flowchart() {
        let cards = vec![make_card("a"), make_card("b"), make_card("c")];
        let conns = vec![make_conn("k1", "c", "a")];

        let flow = plan_links(ViewMode::Flowchart, &cards, &conns);
        assert_eq!(flow.len(), 3);
        assert_eq!(flow[0].key, LinkKey::Sequence { from: "a".into(), to: "b".into() });
        assert_eq!(flow[1].key, LinkKey::Sequence { from: "b".into(), to: "c".into() });
        assert_eq!(flow[2].key, LinkKey::Explicit("k1".into()));

        let free = plan_links(ViewMode::Freeform, &cards, &conns);
        assert_eq!(free.len(), 1);
        assert!(!free[0].is_sequence());
    }

    #[test]
    fn test_plan_skips_dangling_connections() {
        let cards = vec![make_card("a")];
        let conns = vec![make_conn("k1", "a", "gone")];
        assert!(plan_links(ViewMode::Freeform, &cards, &conns).is_empty());
    }

    #[test]
    fn test_sync_diffs_instead_of_rebuilding() {
        let mut cards = vec![make_card("a"), make_card("b"), make_card("c")];
        let conns = vec![make_conn("k1", "a", "c")];
        let mut registry = LinkRegistry::new(RecordingBackend::default());

        let first = registry.sync(&plan_links(ViewMode::Flowchart, &cards, &conns));
        assert_eq!(first, SyncReport { attached: 3, released: 0, kept: 0, failed: 0 });

        // same plan again touches nothing
        let again = registry.sync(&plan_links(ViewMode::Flowchart, &cards, &conns));
        assert_eq!(again, SyncReport { attached: 0, released: 0, kept: 3, failed: 0 });

        // dropping the middle card replaces a->b, b->c with a->c
        cards.remove(1);
        let after = registry.sync(&plan_links(ViewMode::Flowchart, &cards, &conns));
        assert_eq!(after, SyncReport { attached: 1, released: 2, kept: 1, failed: 0 });
        assert_eq!(registry.len(), 2);

        registry.clear();
        assert!(registry.is_empty());
        assert!(registry.backend.live.is_empty());
    }

    #[test]
    fn test_failed_attach_is_retried() {
        let cards = vec![make_card("a"), make_card("b")];
        let backend = RecordingBackend {
            broken: Some("b".into()),
            ..Default::default()
        };
        let mut registry = LinkRegistry::new(backend);
        let plan = plan_links(ViewMode::Flowchart, &cards, &[]);

        assert_eq!(registry.sync(&plan).failed, 1);
        assert!(registry.is_empty());

        registry.backend.broken = None;
        assert_eq!(registry.sync(&plan).attached, 1);
    }

    #[test]
    fn test_reposition_all_visits_every_line() {
        let cards = vec![make_card("a"), make_card("b"), make_card("c")];
        let mut registry = LinkRegistry::new(RecordingBackend::default());
        registry.sync(&plan_links(ViewMode::Flowchart, &cards, &[]));
        registry.reposition_all();
        assert_eq!(registry.backend.repositions.get(), 2);
    }
}
