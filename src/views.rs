//! Derived render views.
//!
//! DESIGN
//! ======
//! The presentation layer never interprets [`NavigationState`] directly; it
//! asks these functions what to draw. Both resolve ids against the catalog
//! at read time and fall back the way the shell does: a context that no
//! longer resolves degrades to the next-best pane instead of failing.

use crate::catalog::Catalog;
use crate::model::{Board, Space};
use crate::recents::RecentBoards;
use crate::state::{ActiveContent, NavigationState, SidebarContext};

#[cfg(test)]
#[path = "views_test.rs"]
mod views_test;

/// Which secondary navigation panel to render.
#[derive(Debug, PartialEq, Eq)]
pub enum SidebarView<'a> {
    /// No panel; the dashboard surfaces draw their own rail.
    None,
    /// The sections and boards of one space.
    Space(&'a Space),
    /// The recency list, grouped by date for display.
    Recent(&'a RecentBoards),
}

/// What the main content pane should render.
#[derive(Debug, PartialEq, Eq)]
pub enum ContentView<'a> {
    /// Nothing active, draw the pick-a-board prompt.
    EmptyPrompt,
    /// A space's overview page.
    SpaceOverview(&'a Space),
    /// An open board canvas.
    BoardCanvas(&'a Board),
    /// A space's board list, grouped by section.
    SpaceBoardList(&'a Space),
}

/// Sidebar panel for the current state.
#[must_use]
pub fn sidebar_view<'a>(catalog: &'a Catalog, state: &'a NavigationState) -> SidebarView<'a> {
    match &state.sidebar {
        SidebarContext::None => SidebarView::None,
        SidebarContext::Recent => SidebarView::Recent(&state.recents),
        SidebarContext::Space(id) => match catalog.space(id) {
            Some(space) => SidebarView::Space(space),
            None => SidebarView::None,
        },
    }
}

/// Content pane for the current state.
///
/// Falls back rather than failing: a board id that no longer resolves
/// degrades to the owning space's board list, and a dangling space id to
/// the empty prompt.
#[must_use]
pub fn content_view<'a>(catalog: &'a Catalog, state: &'a NavigationState) -> ContentView<'a> {
    match &state.content {
        ActiveContent::None => ContentView::EmptyPrompt,
        ActiveContent::Space(id) => space_board_list(catalog, id),
        ActiveContent::Overview(id) => match catalog.space(id) {
            Some(space) => ContentView::SpaceOverview(space),
            None => ContentView::EmptyPrompt,
        },
        ActiveContent::Board { space_id, board_id } => {
            if let Some(board) = catalog.board(board_id) {
                return ContentView::BoardCanvas(board);
            }
            match space_id {
                Some(id) => space_board_list(catalog, id),
                None => ContentView::EmptyPrompt,
            }
        }
    }
}

fn space_board_list<'a>(catalog: &'a Catalog, id: &str) -> ContentView<'a> {
    match catalog.space(id) {
        Some(space) => ContentView::SpaceBoardList(space),
        None => ContentView::EmptyPrompt,
    }
}
