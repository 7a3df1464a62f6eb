use super::*;
use crate::model::Section;

// =============================================================
// Helpers
// =============================================================

fn make_board(id: &str, space_id: Option<&str>) -> Board {
    Board {
        id: id.to_owned(),
        name: format!("Board {id}"),
        icon: "💡".to_owned(),
        owner: "Paolo Trimarchi".to_owned(),
        last_opened: "Yesterday".to_owned(),
        online_users: 1,
        space_id: space_id.map(str::to_owned),
        classification: "Internal".to_owned(),
    }
}

fn make_space(id: &str, board_ids: &[&str]) -> Space {
    Space {
        id: id.to_owned(),
        name: format!("Space {id}"),
        members: 5,
        has_overview: true,
        pinned: false,
        icon: "🌟".to_owned(),
        sections: vec![Section {
            name: "General".to_owned(),
            boards: board_ids.iter().map(|b| make_board(b, Some(id))).collect(),
        }],
    }
}

fn make_catalog() -> Catalog {
    Catalog::from_parts(
        vec![make_space("alpha", &["a-0", "a-1"]), make_space("beta", &["b-0"])],
        vec![make_board("team-0", None)],
    )
}

fn state_with_sidebar(sidebar: SidebarContext) -> NavigationState {
    NavigationState {
        sidebar,
        ..NavigationState::default()
    }
}

fn state_with_content(content: ActiveContent) -> NavigationState {
    NavigationState {
        content,
        ..NavigationState::default()
    }
}

// =============================================================
// Sidebar
// =============================================================

#[test]
fn no_sidebar_context_renders_no_panel() {
    let catalog = make_catalog();
    let state = NavigationState::default();
    assert_eq!(sidebar_view(&catalog, &state), SidebarView::None);
}

#[test]
fn space_context_resolves_to_the_space() {
    let catalog = make_catalog();
    let state = state_with_sidebar(SidebarContext::Space("alpha".to_owned()));
    let expected = catalog.space("alpha").unwrap();
    assert_eq!(sidebar_view(&catalog, &state), SidebarView::Space(expected));
}

#[test]
fn recent_context_carries_the_recency_list() {
    let catalog = make_catalog();
    let mut state = state_with_sidebar(SidebarContext::Recent);
    state.recents.push(make_board("a-0", Some("alpha")));

    match sidebar_view(&catalog, &state) {
        SidebarView::Recent(recents) => assert_eq!(recents.len(), 1),
        other => panic!("expected recent sidebar, got {other:?}"),
    }
}

#[test]
fn dangling_space_context_degrades_to_no_panel() {
    let catalog = make_catalog();
    let state = state_with_sidebar(SidebarContext::Space("deleted".to_owned()));
    assert_eq!(sidebar_view(&catalog, &state), SidebarView::None);
}

// =============================================================
// Content
// =============================================================

#[test]
fn no_content_renders_the_empty_prompt() {
    let catalog = make_catalog();
    let state = NavigationState::default();
    assert_eq!(content_view(&catalog, &state), ContentView::EmptyPrompt);
}

#[test]
fn space_content_renders_its_board_list() {
    let catalog = make_catalog();
    let state = state_with_content(ActiveContent::Space("beta".to_owned()));
    let expected = catalog.space("beta").unwrap();
    assert_eq!(content_view(&catalog, &state), ContentView::SpaceBoardList(expected));
}

#[test]
fn dangling_space_content_degrades_to_the_prompt() {
    let catalog = make_catalog();
    let state = state_with_content(ActiveContent::Space("deleted".to_owned()));
    assert_eq!(content_view(&catalog, &state), ContentView::EmptyPrompt);
}

#[test]
fn overview_content_renders_the_overview() {
    let catalog = make_catalog();
    let state = state_with_content(ActiveContent::Overview("alpha".to_owned()));
    let expected = catalog.space("alpha").unwrap();
    assert_eq!(content_view(&catalog, &state), ContentView::SpaceOverview(expected));
}

#[test]
fn dangling_overview_degrades_to_the_prompt() {
    let catalog = make_catalog();
    let state = state_with_content(ActiveContent::Overview("deleted".to_owned()));
    assert_eq!(content_view(&catalog, &state), ContentView::EmptyPrompt);
}

#[test]
fn board_content_renders_the_canvas() {
    let catalog = make_catalog();
    let state = state_with_content(ActiveContent::Board {
        space_id: Some("alpha".to_owned()),
        board_id: "a-1".to_owned(),
    });
    let expected = catalog.board("a-1").unwrap();
    assert_eq!(content_view(&catalog, &state), ContentView::BoardCanvas(expected));
}

#[test]
fn team_board_content_renders_the_canvas() {
    let catalog = make_catalog();
    let state = state_with_content(ActiveContent::Board {
        space_id: None,
        board_id: "team-0".to_owned(),
    });
    let expected = catalog.board("team-0").unwrap();
    assert_eq!(content_view(&catalog, &state), ContentView::BoardCanvas(expected));
}

#[test]
fn dangling_board_falls_back_to_the_owning_space_list() {
    let catalog = make_catalog();
    let state = state_with_content(ActiveContent::Board {
        space_id: Some("alpha".to_owned()),
        board_id: "a-99".to_owned(),
    });
    let expected = catalog.space("alpha").unwrap();
    assert_eq!(content_view(&catalog, &state), ContentView::SpaceBoardList(expected));
}

#[test]
fn dangling_team_board_degrades_to_the_prompt() {
    let catalog = make_catalog();
    let state = state_with_content(ActiveContent::Board {
        space_id: None,
        board_id: "team-99".to_owned(),
    });
    assert_eq!(content_view(&catalog, &state), ContentView::EmptyPrompt);
}

#[test]
fn dangling_board_in_a_dangling_space_degrades_to_the_prompt() {
    let catalog = make_catalog();
    let state = state_with_content(ActiveContent::Board {
        space_id: Some("deleted".to_owned()),
        board_id: "a-99".to_owned(),
    });
    assert_eq!(content_view(&catalog, &state), ContentView::EmptyPrompt);
}
