//! The navigation controller.
//!
//! DESIGN
//! ======
//! [`Navigator`] is the single authority over [`NavigationState`]: every user
//! navigation intent is one method call, validated against the reference
//! catalog before any field is written. A failed call returns [`NavError`]
//! and leaves the state exactly as it was. Presentation layers never mutate
//! the state; they read it back through [`Navigator::state`] or the derived
//! views in [`crate::views`].

use std::fmt;

use log::debug;
use thiserror::Error;

use crate::catalog::Catalog;
use crate::state::{
    ActiveContent, DashboardTab, NavigationState, SidebarContext, SidebarSelection, ViewMode,
};
use crate::views::{self, ContentView, SidebarView};

#[cfg(test)]
#[path = "nav_test.rs"]
mod nav_test;

// =============================================================================
// ERRORS
// =============================================================================

/// What kind of entity an id failed to resolve against.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EntityKind {
    Space,
    Board,
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Space => write!(f, "space"),
            Self::Board => write!(f, "board"),
        }
    }
}

/// The one way a navigation operation can fail.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum NavError {
    /// An id did not resolve against the reference data. Ids normally come
    /// from rendered rows, so this points at a caller or data bug rather
    /// than a recoverable runtime condition.
    #[error("{kind} not found: {id}")]
    NotFound { kind: EntityKind, id: String },
}

impl NavError {
    fn not_found(kind: EntityKind, id: impl Into<String>) -> Self {
        Self::NotFound { kind, id: id.into() }
    }
}

// =============================================================================
// NAVIGATOR
// =============================================================================

/// Single authority over the shell's [`NavigationState`].
#[derive(Clone, Debug)]
pub struct Navigator {
    catalog: Catalog,
    state: NavigationState,
}

impl Navigator {
    /// Starts a session on the dashboard Home tab with nothing opened.
    #[must_use]
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog,
            state: NavigationState::default(),
        }
    }

    /// Read-only snapshot of the current navigation state.
    #[must_use]
    pub fn state(&self) -> &NavigationState {
        &self.state
    }

    /// The reference data this navigator resolves ids against.
    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Back to the dashboard landing page. Clears everything space-related.
    pub fn go_home(&mut self) {
        debug!("nav: home");
        self.state.view = ViewMode::Dashboard;
        self.state.dashboard_tab = DashboardTab::Home;
        self.state.sidebar = SidebarContext::None;
        self.state.content = ActiveContent::None;
        self.state.selection = None;
    }

    /// Switches the dashboard to `tab`. Idempotent.
    pub fn set_dashboard_tab(&mut self, tab: DashboardTab) {
        debug!("nav: dashboard tab {tab:?}");
        self.state.view = ViewMode::Dashboard;
        self.state.dashboard_tab = tab;
        self.state.content = ActiveContent::None;
        self.state.selection = None;
    }

    /// Enters a space. Spaces with an overview page land on it; the rest
    /// land on their board list with nothing selected.
    ///
    /// # Errors
    /// [`NavError::NotFound`] when `space_id` is unknown; state is unchanged.
    pub fn enter_space(&mut self, space_id: &str) -> Result<(), NavError> {
        let Some(space) = self.catalog.space(space_id) else {
            return Err(NavError::not_found(EntityKind::Space, space_id));
        };
        let id = space.id.clone();
        let has_overview = space.has_overview;
        debug!("nav: enter space {id}");
        self.state.view = ViewMode::SpaceDetail;
        self.state.sidebar = SidebarContext::Space(id.clone());
        if has_overview {
            self.state.content = ActiveContent::Overview(id);
            self.state.selection = Some(SidebarSelection::Overview);
        } else {
            self.state.content = ActiveContent::Space(id);
            self.state.selection = None;
        }
        Ok(())
    }

    /// Opens a board by id from any listing.
    ///
    /// The sidebar follows the board: a board owned by a space re-points the
    /// sidebar at that space, a team board falls back to the recent sidebar.
    /// The opened board is pushed onto the recency list.
    ///
    /// # Errors
    /// [`NavError::NotFound`] when `board_id` is unknown; state is unchanged.
    pub fn open_board(&mut self, board_id: &str) -> Result<(), NavError> {
        let Some(board) = self.catalog.board(board_id) else {
            return Err(NavError::not_found(EntityKind::Board, board_id));
        };
        let board = board.clone();
        debug!("nav: open board {board_id}");
        self.state.view = ViewMode::SpaceDetail;
        self.state.sidebar = match &board.space_id {
            Some(space_id) => SidebarContext::Space(space_id.clone()),
            None => SidebarContext::Recent,
        };
        self.state.content = ActiveContent::Board {
            space_id: board.space_id.clone(),
            board_id: board.id.clone(),
        };
        self.state.selection = Some(SidebarSelection::Board(board.id.clone()));
        self.state.recents.push(board);
        Ok(())
    }

    /// Re-points the sidebar at another space without touching the content
    /// pane. The pane keeps showing whatever was last opened until a row in
    /// the new sidebar is chosen.
    ///
    /// # Errors
    /// [`NavError::NotFound`] when `space_id` is unknown; state is unchanged.
    pub fn switch_sidebar_to_space(&mut self, space_id: &str) -> Result<(), NavError> {
        if self.catalog.space(space_id).is_none() {
            return Err(NavError::not_found(EntityKind::Space, space_id));
        }
        debug!("nav: sidebar to space {space_id}");
        self.state.sidebar = SidebarContext::Space(space_id.to_owned());
        self.state.selection = None;
        Ok(())
    }

    /// Shows the recently opened boards in the sidebar. Content is left
    /// untouched.
    pub fn show_recent_in_sidebar(&mut self) {
        debug!("nav: sidebar to recent");
        self.state.sidebar = SidebarContext::Recent;
        self.state.selection = None;
    }

    /// Activates a row of the current sidebar.
    ///
    /// Selecting the overview requires the sidebar to be showing a space;
    /// selecting a board behaves exactly like [`Navigator::open_board`],
    /// wherever the row came from.
    ///
    /// # Errors
    /// [`NavError::NotFound`] when the overview is selected without a space
    /// sidebar, or when a board id does not resolve; state is unchanged.
    pub fn select_in_current_space(
        &mut self,
        selection: SidebarSelection,
    ) -> Result<(), NavError> {
        match selection {
            SidebarSelection::Overview => {
                let SidebarContext::Space(space_id) = &self.state.sidebar else {
                    return Err(NavError::not_found(
                        EntityKind::Space,
                        self.state.sidebar.label(),
                    ));
                };
                let space_id = space_id.clone();
                debug!("nav: select overview in {space_id}");
                self.state.content = ActiveContent::Overview(space_id);
                self.state.selection = Some(SidebarSelection::Overview);
                Ok(())
            }
            SidebarSelection::Board(board_id) => self.open_board(&board_id),
        }
    }

    // =========================================================================
    // DERIVED VIEWS
    // =========================================================================

    /// Which sidebar the presentation layer should render right now.
    #[must_use]
    pub fn sidebar_view(&self) -> SidebarView<'_> {
        views::sidebar_view(&self.catalog, &self.state)
    }

    /// What the content pane should render right now.
    #[must_use]
    pub fn content_view(&self) -> ContentView<'_> {
        views::content_view(&self.catalog, &self.state)
    }
}
