use probie::domain::theme::Theme;
use probie::errors::ConsoleError;
use probie::store::{keys, FileStore};
use probie::Console;

use crate::helpers::{open_console, spawn_test_app, test_environments};

#[tokio::test]
async fn defaults_to_the_first_catalog_entry() {
    let app = spawn_test_app().await;
    assert_eq!(app.console.selected_environment().name, "Test");
    assert_eq!(app.console.environments().len(), 2);
}

#[tokio::test]
async fn selection_is_restored_by_name_after_a_reopen() {
    let mut app = spawn_test_app().await;
    app.console.select_environment("Unreachable").unwrap();

    let reopened = app.reopen();
    assert_eq!(reopened.selected_environment().name, "Unreachable");
}

#[tokio::test]
async fn unknown_selection_is_an_error_and_leaves_state_alone() {
    let mut app = spawn_test_app().await;

    let result = app.console.select_environment("Ghost");

    assert!(matches!(result, Err(ConsoleError::UnknownEnvironment(name)) if name == "Ghost"));
    assert_eq!(app.console.selected_environment().name, "Test");
}

#[tokio::test]
async fn unrecognized_persisted_name_falls_back_to_the_default() {
    let app = spawn_test_app().await;
    let store = app.store();
    store
        .set(keys::SELECTED_ENVIRONMENT, &String::from("Ghost"))
        .unwrap();

    let reopened = open_console(&app.store_dir, &app.server);
    assert_eq!(reopened.selected_environment().name, "Test");
}

#[tokio::test]
async fn theme_preference_is_persisted() {
    let mut app = spawn_test_app().await;
    assert_eq!(app.console.theme(), Theme::Light);

    app.console.set_theme(Theme::Dark).unwrap();

    assert_eq!(app.reopen().theme(), Theme::Dark);
}

#[tokio::test]
async fn default_catalog_console_opens_with_stage_selected() {
    let dir = tempfile::tempdir().unwrap();
    let store = FileStore::open(dir.path()).unwrap();

    let console = Console::open(store).unwrap();

    assert_eq!(console.selected_environment().name, "Stage");
    assert_eq!(console.endpoints().len(), 9);
}

#[tokio::test]
async fn environment_list_order_drives_the_default() {
    let app = spawn_test_app().await;
    let environments = test_environments(&app.server);
    assert_eq!(app.console.selected_environment(), &environments[0]);
}
