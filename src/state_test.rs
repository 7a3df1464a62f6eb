use super::*;

#[test]
fn default_state_is_dashboard_home() {
    let state = NavigationState::default();
    assert_eq!(state.view, ViewMode::Dashboard);
    assert_eq!(state.dashboard_tab, DashboardTab::Home);
    assert_eq!(state.sidebar, SidebarContext::None);
    assert_eq!(state.content, ActiveContent::None);
    assert_eq!(state.selection, None);
    assert!(state.recents.is_empty());
}

#[test]
fn sidebar_label_names_the_context() {
    assert_eq!(SidebarContext::None.label(), "none");
    assert_eq!(SidebarContext::Recent.label(), "recent");
    assert_eq!(SidebarContext::Space("growth-core".to_owned()).label(), "growth-core");
}
