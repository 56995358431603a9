//! Connect Mode
//!
//! Two-click gesture that creates a connection between cards.

/// Connect gesture state
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum ConnectMode {
    #[default]
    Idle,
    /// Waiting for the first card
    Arming,
    /// First card chosen, waiting for the second
    Armed(String),
}

impl ConnectMode {
    pub fn is_active(&self) -> bool {
        !matches!(self, ConnectMode::Idle)
    }

    /// Toolbar button: start the gesture, or cancel it when already active
    pub fn toggle(&self) -> Self {
        match self {
            ConnectMode::Idle => ConnectMode::Arming,
            _ => ConnectMode::Idle,
        }
    }

    /// Card click; yields the `(from, to)` pair once a distinct second card is hit
    pub fn on_card_click(&self, card_id: &str) -> (Self, Option<(String, String)>) {
        match self {
            ConnectMode::Idle => (ConnectMode::Idle, None),
            ConnectMode::Arming => (ConnectMode::Armed(card_id.to_string()), None),
            ConnectMode::Armed(from) if from == card_id => (self.clone(), None),
            ConnectMode::Armed(from) => (ConnectMode::Idle, Some((from.clone(), card_id.to_string()))),
        }
    }

    /// Whether `card_id` is the chosen first card
    pub fn is_source(&self, card_id: &str) -> bool {
        matches!(self, ConnectMode::Armed(from) if from == card_id)
    }

    /// Hint shown in the toolbar
    pub fn hint(&self) -> &'static str {
        match self {
            ConnectMode::Idle => "",
            ConnectMode::Arming => "Click the first card",
            ConnectMode::Armed(_) => "Click the card to connect to",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_gesture() {
        let mode = ConnectMode::Idle.toggle();
        assert_eq!(mode, ConnectMode::Arming);

        let (mode, created) = mode.on_card_click("a");
        assert_eq!(mode, ConnectMode::Armed("a".into()));
        assert!(created.is_none());
        assert!(mode.is_source("a"));

        let (mode, created) = mode.on_card_click("b");
        assert_eq!(mode, ConnectMode::Idle);
        assert_eq!(created, Some(("a".to_string(), "b".to_string())));
    }

    #[test]
    fn test_same_card_keeps_armed() {
        let armed = ConnectMode::Armed("a".into());
        let (mode, created) = armed.on_card_click("a");
        assert_eq!(mode, armed);
        assert!(created.is_none());
    }

    #[test]
    fn test_idle_ignores_clicks_and_toggle_cancels() {
        let (mode, created) = ConnectMode::Idle.on_card_click("a");
        assert_eq!(mode, ConnectMode::Idle);
        assert!(created.is_none());
        assert_eq!(ConnectMode::Armed("a".into()).toggle(), ConnectMode::Idle);
    }
}
