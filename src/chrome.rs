//! Window chrome for the dashboard shell.
//!
//! DESIGN
//! ======
//! Presentation concerns the shell tracks alongside navigation without any
//! navigation semantics: how wide the dashboard sidebar is dragged, which
//! sidebar groups are folded, whether the space sidebar is collapsed to a
//! rail, and which space sections are folded. Kept apart from
//! [`crate::state::NavigationState`] so navigation operations never touch
//! it, and vice versa.

#[cfg(test)]
#[path = "chrome_test.rs"]
mod chrome_test;

use std::collections::{HashMap, HashSet};

use crate::model::SpaceId;

/// Narrowest the dashboard sidebar can be dragged, in pixels.
pub const SIDEBAR_MIN_WIDTH: f64 = 220.0;

/// Widest the dashboard sidebar can be dragged, in pixels.
pub const SIDEBAR_MAX_WIDTH: f64 = 400.0;

/// Dashboard sidebar width on first load, in pixels.
pub const SIDEBAR_DEFAULT_WIDTH: f64 = 256.0;

/// Sizing and collapse state for both sidebars.
#[derive(Clone, Debug)]
pub struct ChromeState {
    /// Pinned-spaces group of the dashboard sidebar is unfolded.
    pub pinned_spaces_open: bool,
    /// All-spaces group of the dashboard sidebar is unfolded.
    pub all_spaces_open: bool,
    /// Space sidebar is expanded; collapsed it shows only a thin rail.
    pub space_sidebar_expanded: bool,
    /// The space-switch menu in the space sidebar header is open.
    pub switcher_open: bool,
    sidebar_width: f64,
    collapsed_sections: HashMap<SpaceId, HashSet<String>>,
}

impl Default for ChromeState {
    fn default() -> Self {
        Self {
            pinned_spaces_open: true,
            all_spaces_open: true,
            space_sidebar_expanded: true,
            switcher_open: false,
            sidebar_width: SIDEBAR_DEFAULT_WIDTH,
            collapsed_sections: HashMap::new(),
        }
    }
}

impl ChromeState {
    /// Dashboard sidebar width in pixels.
    #[must_use]
    pub fn sidebar_width(&self) -> f64 {
        self.sidebar_width
    }

    /// Drags the dashboard sidebar to `px`, clamped to
    /// [`SIDEBAR_MIN_WIDTH`]..=[`SIDEBAR_MAX_WIDTH`].
    pub fn set_sidebar_width(&mut self, px: f64) {
        self.sidebar_width = px.clamp(SIDEBAR_MIN_WIDTH, SIDEBAR_MAX_WIDTH);
    }

    /// Folds or unfolds one section of a space's sidebar. Each space keeps
    /// its own fold state, so returning to a space restores it.
    pub fn toggle_section(&mut self, space_id: &str, section: &str) {
        let collapsed = self.collapsed_sections.entry(space_id.to_owned()).or_default();
        if !collapsed.remove(section) {
            collapsed.insert(section.to_owned());
        }
    }

    /// Whether a section of a space's sidebar is unfolded. Sections start
    /// unfolded.
    #[must_use]
    pub fn is_section_open(&self, space_id: &str, section: &str) -> bool {
        !self
            .collapsed_sections
            .get(space_id)
            .is_some_and(|sections| sections.contains(section))
    }
}
