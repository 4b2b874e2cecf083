use super::pages::{
    AnalyticsPage, DashboardPage, DownloadPage, ErrorLogsPage, JobLogsPage, NotFoundPage,
    SettingsPage, UploadPage, UsersPage,
};
use super::route::Route;
use super::PageOutput;
use crate::config::AppConfig;
use eframe::egui;

/// State of the page on screen. Created when the page opens, dropped on navigation.
#[derive(Debug)]
pub enum PageState {
    Dashboard(DashboardPage),
    JobLogs(JobLogsPage),
    Upload(UploadPage),
    Download(DownloadPage),
    Users(UsersPage),
    Analytics(AnalyticsPage),
    ErrorLogs(ErrorLogsPage),
    Settings(SettingsPage),
    NotFound(NotFoundPage),
}

impl PageState {
    pub fn open(path: &str, config: &AppConfig) -> Self {
        match Route::resolve(path) {
            Route::Dashboard => PageState::Dashboard(DashboardPage),
            Route::JobLogs => PageState::JobLogs(JobLogsPage::default()),
            Route::Upload => PageState::Upload(UploadPage::new(&config.upload)),
            Route::Download => PageState::Download(DownloadPage::default()),
            Route::Users => PageState::Users(UsersPage::default()),
            Route::Analytics => PageState::Analytics(AnalyticsPage::default()),
            Route::ErrorLogs => PageState::ErrorLogs(ErrorLogsPage::default()),
            Route::Settings => PageState::Settings(SettingsPage::default()),
            Route::NotFound => PageState::NotFound(NotFoundPage::new(path)),
        }
    }

    pub fn route(&self) -> Route {
        match self {
            PageState::Dashboard(_) => Route::Dashboard,
            PageState::JobLogs(_) => Route::JobLogs,
            PageState::Upload(_) => Route::Upload,
            PageState::Download(_) => Route::Download,
            PageState::Users(_) => Route::Users,
            PageState::Analytics(_) => Route::Analytics,
            PageState::ErrorLogs(_) => Route::ErrorLogs,
            PageState::Settings(_) => Route::Settings,
            PageState::NotFound(_) => Route::NotFound,
        }
    }

    pub fn show(&mut self, ui: &mut egui::Ui, out: &mut PageOutput) {
        match self {
            PageState::Dashboard(page) => page.show(ui, out),
            PageState::JobLogs(page) => page.show(ui),
            PageState::Upload(page) => page.show(ui, out),
            PageState::Download(page) => page.show(ui),
            PageState::Users(page) => page.show(ui),
            PageState::Analytics(page) => page.show(ui),
            PageState::ErrorLogs(page) => page.show(ui),
            PageState::Settings(page) => page.show(ui, out),
            PageState::NotFound(page) => page.show(ui, out),
        }
    }
}
