//! Integration tests for session-flag tracking.

use localcart_integration_tests::RecordingView;
use localcart_widget::config::WidgetConfig;
use localcart_widget::session::{SessionManager, UserProfile};
use localcart_widget::storage::{KeyValueStore, MemoryStore, keys};

fn manager() -> SessionManager<MemoryStore> {
    SessionManager::new(MemoryStore::new(), &WidgetConfig::default())
}

// =============================================================================
// Login
// =============================================================================

#[test]
fn test_login_shows_first_name_and_hides_login_link() {
    let mut manager = manager();
    let mut view = RecordingView::new();

    manager
        .login(
            &UserProfile {
                first_name: Some("Ana".to_string()),
                ..UserProfile::default()
            },
            &mut view,
        )
        .expect("login");

    let session = view.last_session().expect("session rendered");
    assert!(session.logged_in);
    assert_eq!(session.display_name.as_deref(), Some("Ana"));
}

#[test]
fn test_login_writes_exact_flag_literal() {
    let mut manager = manager();
    let mut view = RecordingView::new();

    manager
        .login(&UserProfile::default(), &mut view)
        .expect("login");

    assert_eq!(
        manager
            .store()
            .get(keys::IS_LOGGED_IN)
            .expect("read flag")
            .as_deref(),
        Some("true")
    );
}

#[test]
fn test_display_name_falls_back_to_name_then_literal() {
    let mut manager = manager();
    let mut view = RecordingView::new();

    manager
        .login(
            &UserProfile {
                name: Some("Ana Torres".to_string()),
                ..UserProfile::default()
            },
            &mut view,
        )
        .expect("login");
    assert_eq!(
        view.last_session().expect("rendered").display_name.as_deref(),
        Some("Ana Torres")
    );

    manager
        .login(&UserProfile::default(), &mut view)
        .expect("login");
    assert_eq!(
        view.last_session().expect("rendered").display_name.as_deref(),
        Some("User")
    );
}

// =============================================================================
// Logout
// =============================================================================

#[test]
fn test_logout_clears_entries_and_reverts_view() {
    let mut manager = manager();
    let mut view = RecordingView::new();

    manager
        .login(
            &UserProfile {
                first_name: Some("Ana".to_string()),
                ..UserProfile::default()
            },
            &mut view,
        )
        .expect("login");
    manager.logout(&mut view).expect("logout");

    assert!(
        manager
            .store()
            .get(keys::IS_LOGGED_IN)
            .expect("read flag")
            .is_none()
    );
    assert!(
        manager
            .store()
            .get(keys::CURRENT_USER)
            .expect("read profile")
            .is_none()
    );

    let session = view.last_session().expect("session rendered");
    assert!(!session.logged_in);
    assert!(session.display_name.is_none());
}

#[test]
fn test_logout_navigates_to_login_page() {
    let mut manager = manager();
    let mut view = RecordingView::new();

    manager.logout(&mut view).expect("logout");
    assert_eq!(view.navigations, vec!["login.html".to_string()]);
}

#[test]
fn test_logout_navigation_target_is_configurable() {
    let config = WidgetConfig {
        login_url: "/signin".to_string(),
        ..WidgetConfig::default()
    };
    let mut manager = SessionManager::new(MemoryStore::new(), &config);
    let mut view = RecordingView::new();

    manager.logout(&mut view).expect("logout");
    assert_eq!(view.navigations, vec!["/signin".to_string()]);
}

// =============================================================================
// Refresh From Stored State
// =============================================================================

#[test]
fn test_refresh_reads_session_written_by_previous_page() {
    let mut store = MemoryStore::new();
    store.set(keys::IS_LOGGED_IN, "true").expect("seed flag");
    store
        .set(keys::CURRENT_USER, r#"{"firstName":"Ana"}"#)
        .expect("seed profile");

    let manager = SessionManager::new(store, &WidgetConfig::default());
    let mut view = RecordingView::new();
    manager.refresh(&mut view);

    let session = view.last_session().expect("session rendered");
    assert!(session.logged_in);
    assert_eq!(session.display_name.as_deref(), Some("Ana"));
}

#[test]
fn test_malformed_profile_renders_logged_out() {
    let mut store = MemoryStore::new();
    store.set(keys::IS_LOGGED_IN, "true").expect("seed flag");
    store
        .set(keys::CURRENT_USER, "not json")
        .expect("seed profile");

    let manager = SessionManager::new(store, &WidgetConfig::default());
    let mut view = RecordingView::new();
    manager.refresh(&mut view);

    assert!(!view.last_session().expect("session rendered").logged_in);
}
