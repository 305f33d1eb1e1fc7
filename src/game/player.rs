use super::grid::Marker;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlayerKind {
    Human,
    Ai,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    name: String,
    kind: PlayerKind,
    marker: Marker,
}

impl Player {
    pub fn new(name: impl Into<String>, kind: PlayerKind, marker: Marker) -> Self {
        Player {
            name: name.into(),
            kind,
            marker,
        }
    }

    pub fn human(name: impl Into<String>, marker: Marker) -> Self {
        Self::new(name, PlayerKind::Human, marker)
    }

    pub fn ai(name: impl Into<String>, marker: Marker) -> Self {
        Self::new(name, PlayerKind::Ai, marker)
    }

    /// Get player name for display
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> PlayerKind {
        self.kind
    }

    pub fn marker(&self) -> Marker {
        self.marker
    }

    pub fn is_human(&self) -> bool {
        self.kind == PlayerKind::Human
    }
}
