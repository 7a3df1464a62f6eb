//! Reference-data provider: the immutable space/board graph.
//!
//! `Catalog` is what the navigation controller resolves ids against. It owns
//! the spaces in display order plus the team-level boards, and answers the
//! listing queries the dashboard renders from. Built once, read forever;
//! nothing here mutates after construction.

#[cfg(test)]
#[path = "catalog_test.rs"]
mod catalog_test;

use serde::{Deserialize, Serialize};

use crate::model::{Board, Space};

/// The static organization graph: spaces plus team-level boards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    spaces: Vec<Space>,
    team_boards: Vec<Board>,
}

impl Catalog {
    /// Build a catalog from already-constructed parts.
    #[must_use]
    pub fn from_parts(spaces: Vec<Space>, team_boards: Vec<Board>) -> Self {
        Self { spaces, team_boards }
    }

    /// Parse a catalog from a JSON document with `spaces` and `team_boards`
    /// keys, so embedders can ship their own dataset.
    ///
    /// # Errors
    ///
    /// Returns the underlying parse error for malformed or mistyped JSON.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Spaces in display order.
    #[must_use]
    pub fn spaces(&self) -> &[Space] {
        &self.spaces
    }

    /// Team-level boards in display order.
    #[must_use]
    pub fn team_boards(&self) -> &[Board] {
        &self.team_boards
    }

    /// Look up a space by id.
    #[must_use]
    pub fn space(&self, id: &str) -> Option<&Space> {
        self.spaces.iter().find(|s| s.id == id)
    }

    /// Look up a board by id across team boards and every space's sections.
    /// Ids are unique in well-formed data; on a collision the team board wins.
    #[must_use]
    pub fn board(&self, id: &str) -> Option<&Board> {
        self.team_boards
            .iter()
            .find(|b| b.id == id)
            .or_else(|| self.spaces.iter().find_map(|s| s.board(id)))
    }

    /// Spaces shown in the pinned group of the dashboard sidebar.
    #[must_use]
    pub fn pinned_spaces(&self) -> Vec<&Space> {
        self.spaces.iter().filter(|s| s.pinned).collect()
    }

    /// Spaces shown in the all-spaces group of the dashboard sidebar.
    #[must_use]
    pub fn unpinned_spaces(&self) -> Vec<&Space> {
        self.spaces.iter().filter(|s| !s.pinned).collect()
    }

    /// Every board for the dashboard table: team boards first, then each
    /// space's boards in catalog order.
    #[must_use]
    pub fn dashboard_boards(&self) -> Vec<&Board> {
        let space_boards = self
            .spaces
            .iter()
            .flat_map(|s| s.sections.iter())
            .flat_map(|sec| sec.boards.iter());
        self.team_boards.iter().chain(space_boards).collect()
    }
}
