//! View state for the dashboard shell.
//!
//! DESIGN
//! ======
//! Navigation is not a route string. The shell is described by a handful of
//! independent fields: the top-level view mode, the active dashboard tab,
//! what the sidebar is listing, what the content pane is showing, and which
//! sidebar row is highlighted. The recency list rides along in the same
//! struct because opening a board updates it together with the rest.
//!
//! This module is plain data. All transitions live in [`crate::nav`], and
//! keeping the fields public lets tests build or inspect any state directly.

use crate::model::{BoardId, SpaceId};
use crate::recents::RecentBoards;

#[cfg(test)]
#[path = "state_test.rs"]
mod state_test;

/// Which top-level surface fills the window.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ViewMode {
    /// The dashboard with its tabbed landing pages.
    #[default]
    Dashboard,
    /// A space sidebar next to a content pane.
    SpaceDetail,
}

/// Landing pages reachable from the dashboard nav rail, in display order.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DashboardTab {
    Explore,
    #[default]
    Home,
    Recent,
    Starred,
    Insights,
}

/// What the space sidebar is listing.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum SidebarContext {
    /// No sidebar at all.
    #[default]
    None,
    /// The sections and boards of one space.
    Space(SpaceId),
    /// Recently opened boards, grouped by day.
    Recent,
}

impl SidebarContext {
    /// Short name for log lines and error context.
    #[must_use]
    pub fn label(&self) -> &str {
        match self {
            Self::None => "none",
            Self::Space(id) => id,
            Self::Recent => "recent",
        }
    }
}

/// What the main content pane is showing.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum ActiveContent {
    /// Nothing yet; the pane renders a pick-a-board prompt.
    #[default]
    None,
    /// The board list of a space.
    Space(SpaceId),
    /// The overview page of a space.
    Overview(SpaceId),
    /// An open board. `space_id` is `None` for team boards.
    Board {
        space_id: Option<SpaceId>,
        board_id: BoardId,
    },
}

/// The highlighted row in the space sidebar.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SidebarSelection {
    Overview,
    Board(BoardId),
}

/// Full navigation state of the shell.
///
/// The default value is the state on first load: dashboard view, Home tab,
/// no sidebar, empty content pane, nothing opened yet.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NavigationState {
    pub view: ViewMode,
    pub dashboard_tab: DashboardTab,
    pub sidebar: SidebarContext,
    pub content: ActiveContent,
    pub selection: Option<SidebarSelection>,
    /// Boards opened this session, most recent first.
    pub recents: RecentBoards,
}
