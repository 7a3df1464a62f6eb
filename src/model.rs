//! Reference data model: boards, sections, and spaces.
//!
//! These types describe the static organization graph the navigation layer
//! reads from: spaces holding ordered sections of boards, plus team-level
//! boards that belong to no space. They are built once at startup (from the
//! demo dataset or a JSON document) and never mutated afterwards; everything
//! that changes at runtime lives in `NavigationState`.

#[cfg(test)]
#[path = "model_test.rs"]
mod model_test;

use serde::{Deserialize, Serialize};

/// Unique identifier for a space, e.g. `"spaces-basics"`.
pub type SpaceId = String;

/// Unique identifier for a board, e.g. `"board-growth-core-3"`.
pub type BoardId = String;

/// A single canvas/document entity with its display metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    /// Unique identifier for this board.
    pub id: BoardId,
    /// Display name.
    pub name: String,
    /// Icon glyph shown next to the name.
    pub icon: String,
    /// Display name of the board owner.
    pub owner: String,
    /// Informal last-opened label ("Today", "Yesterday", a date string).
    /// Opaque; never parsed or ordered as a date.
    pub last_opened: String,
    /// Number of users currently on the board.
    pub online_users: u32,
    /// Owning space, or `None` for a team-level board.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub space_id: Option<SpaceId>,
    /// Free-text classification label, e.g. "Internal" or "Confidential".
    pub classification: String,
}

/// An ordered, named grouping of boards within a space.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    /// Display name of the section.
    pub name: String,
    /// Boards in display order.
    pub boards: Vec<Board>,
}

/// A named container grouping boards into sections.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Space {
    /// Unique identifier for this space.
    pub id: SpaceId,
    /// Display name.
    pub name: String,
    /// Number of members with access.
    pub members: u32,
    /// Whether the space offers an overview page.
    pub has_overview: bool,
    /// Whether the space is shown in the pinned group of the dashboard sidebar.
    pub pinned: bool,
    /// Icon glyph shown next to the name.
    pub icon: String,
    /// Sections in display order.
    pub sections: Vec<Section>,
}

impl Space {
    /// All boards of this space, in section order.
    #[must_use]
    pub fn boards(&self) -> Vec<&Board> {
        self.sections.iter().flat_map(|s| s.boards.iter()).collect()
    }

    /// Look up one of this space's boards by id.
    #[must_use]
    pub fn board(&self, id: &str) -> Option<&Board> {
        self.sections
            .iter()
            .flat_map(|s| s.boards.iter())
            .find(|b| b.id == id)
    }

    /// Total number of boards across all sections.
    #[must_use]
    pub fn board_count(&self) -> usize {
        self.sections.iter().map(|s| s.boards.len()).sum()
    }
}
