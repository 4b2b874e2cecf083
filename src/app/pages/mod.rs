mod analytics;
mod dashboard;
mod download;
mod error_logs;
mod job_logs;
mod not_found;
mod settings;
mod upload;
mod users;

pub use analytics::AnalyticsPage;
pub use dashboard::DashboardPage;
pub use download::DownloadPage;
pub use error_logs::ErrorLogsPage;
pub use job_logs::JobLogsPage;
pub use not_found::NotFoundPage;
pub use settings::{
    DataRetention, SessionTimeout, SettingsForm, SettingsPage, SmtpForm, Timezone, SAVED_DESCRIPTION,
    SAVED_TITLE,
};
pub use upload::{UploadPage, COMPLETED_DESCRIPTION, COMPLETED_TITLE};
pub use users::{NewUserDraft, UsersPage};
