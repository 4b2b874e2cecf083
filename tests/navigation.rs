use drilllog_pro::app::{PageOutput, PageState, Route, COMPLETED_TITLE, SAVED_TITLE};
use drilllog_pro::config::AppConfig;
use drilllog_pro::upload::SelectedFile;
use drilllog_pro::DrillLogApp;
use pretty_assertions::assert_eq;
use std::time::Instant;

fn app() -> DrillLogApp {
    DrillLogApp::with_config(AppConfig::default())
}

#[test]
fn starts_on_the_configured_route() {
    assert_eq!(app().route(), Route::Dashboard);

    let config = AppConfig {
        start_route: "errors/".to_string(),
        ..AppConfig::default()
    };
    let app = DrillLogApp::with_config(config);
    assert_eq!(app.current_path(), "/errors");
    assert!(matches!(app.page(), PageState::ErrorLogs(_)));
}

#[test]
fn unknown_path_opens_not_found_page() {
    let mut app = app();
    app.navigate("/rigs/7");
    assert_eq!(app.route(), Route::NotFound);
    match app.page() {
        PageState::NotFound(page) => assert_eq!(page.path(), "/rigs/7"),
        other => panic!("expected not found page, got {:?}", other.route()),
    }
}

#[test]
fn leaving_upload_discards_its_run() {
    let mut app = app();
    app.navigate("/upload");
    match app.page_mut() {
        PageState::Upload(page) => {
            page.add_files(vec![SelectedFile::new("/field/permian.xlsx", 1024)]);
            assert!(page.start_batch());
        }
        _ => panic!("expected upload page"),
    }

    app.navigate("/logs");
    app.navigate("/upload");
    match app.page() {
        PageState::Upload(page) => {
            assert!(page.batch().is_empty());
            assert!(!page.is_processing());
        }
        _ => panic!("expected upload page"),
    }
}

#[test]
fn navigating_to_the_current_path_keeps_page_state() {
    let mut app = app();
    app.navigate("/users");
    if let PageState::Users(page) = app.page_mut() {
        page.search = "lisa".to_string();
    }

    app.navigate("/users/");
    match app.page() {
        PageState::Users(page) => assert_eq!(page.search, "lisa"),
        _ => panic!("expected users page"),
    }
}

#[test]
fn page_output_is_applied_to_the_shell() {
    let mut app = app();
    let now = Instant::now();

    let mut out = PageOutput::default();
    out.toast(SAVED_TITLE, "");
    out.navigate("/analytics");
    app.apply(out, now);

    assert_eq!(app.route(), Route::Analytics);
    let titles: Vec<_> = app.toasts().iter().map(|t| t.title.clone()).collect();
    assert_eq!(titles, vec![SAVED_TITLE.to_string()]);

    let mut out = PageOutput::default();
    out.toast(COMPLETED_TITLE, "");
    app.apply(out, now);
    assert_eq!(app.toasts().len(), 2);
    assert_eq!(app.route(), Route::Analytics);
}
