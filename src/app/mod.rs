mod pages;
mod route;
mod state;
mod toast;
mod ui;
mod widgets;

use crate::config::AppConfig;
use eframe::{egui, App};
use std::time::Instant;

pub use pages::{
    AnalyticsPage, DashboardPage, DataRetention, DownloadPage, ErrorLogsPage, JobLogsPage,
    NewUserDraft, NotFoundPage, SessionTimeout, SettingsForm, SettingsPage, SmtpForm, Timezone,
    UploadPage, UsersPage, COMPLETED_DESCRIPTION, COMPLETED_TITLE, SAVED_DESCRIPTION, SAVED_TITLE,
};
pub use route::{is_active, normalize, NavItem, Route, NAV_ITEMS};
pub use state::PageState;
pub use toast::{Toast, Toasts};

/// Requests a page makes of the shell while it is drawn.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct PageOutput {
    pub navigate: Option<String>,
    pub toasts: Vec<(String, String)>,
}

impl PageOutput {
    pub fn navigate(&mut self, path: &str) {
        self.navigate = Some(path.to_string());
    }

    pub fn toast(&mut self, title: impl Into<String>, description: impl Into<String>) {
        self.toasts.push((title.into(), description.into()));
    }
}

pub struct DrillLogApp {
    config: AppConfig,
    current_path: String,
    page: PageState,
    toasts: Toasts,
}

impl DrillLogApp {
    pub fn new(_cc: &eframe::CreationContext<'_>, config: AppConfig) -> Self {
        log::info!("Initializing DrillLog Pro");
        Self::with_config(config)
    }

    pub fn with_config(config: AppConfig) -> Self {
        let current_path = normalize(&config.start_route);
        let page = PageState::open(&current_path, &config);
        let toasts = Toasts::new(config.toast_lifetime());
        Self {
            config,
            current_path,
            page,
            toasts,
        }
    }

    pub fn current_path(&self) -> &str {
        &self.current_path
    }

    pub fn route(&self) -> Route {
        Route::resolve(&self.current_path)
    }

    pub fn page(&self) -> &PageState {
        &self.page
    }

    pub fn page_mut(&mut self) -> &mut PageState {
        &mut self.page
    }

    pub fn toasts(&self) -> &Toasts {
        &self.toasts
    }

    /// Replaces the current page. The previous page, and any upload run it
    /// owned, is dropped.
    pub fn navigate(&mut self, path: &str) {
        let path = normalize(path);
        if path == self.current_path {
            return;
        }
        log::info!("Navigating from {} to {}", self.current_path, path);
        self.page = PageState::open(&path, &self.config);
        self.current_path = path;
    }

    pub fn apply(&mut self, output: PageOutput, now: Instant) {
        for (title, description) in output.toasts {
            self.toasts.push(title, description, now);
        }
        if let Some(path) = output.navigate {
            self.navigate(&path);
        }
    }

    pub fn update_state(&mut self, ctx: &egui::Context) {
        let mut output = PageOutput::default();
        if let PageState::Upload(page) = &mut self.page {
            page.poll(&mut output);
            if page.is_processing() {
                ctx.request_repaint_after(page.step_delay());
            }
        }
        self.apply(output, Instant::now());

        if let Some(next_expiry) = self.toasts.prune(Instant::now()) {
            ctx.request_repaint_after(next_expiry);
        }
    }
}

impl App for DrillLogApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.update_state(ctx);
        self.render(ctx);
    }
}
