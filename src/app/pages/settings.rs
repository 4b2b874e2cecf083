use crate::app::widgets::{card, combo, page_header};
use crate::app::PageOutput;
use eframe::egui::{self, RichText};

pub const SAVED_TITLE: &str = "Settings saved";
pub const SAVED_DESCRIPTION: &str = "Your system settings have been updated successfully.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DataRetention {
    OneYear,
    #[default]
    TwoYears,
    FiveYears,
    Indefinite,
}

impl DataRetention {
    pub const CHOICES: [DataRetention; 4] = [
        DataRetention::OneYear,
        DataRetention::TwoYears,
        DataRetention::FiveYears,
        DataRetention::Indefinite,
    ];

    pub fn label(self) -> &'static str {
        match self {
            DataRetention::OneYear => "1 Year",
            DataRetention::TwoYears => "2 Years",
            DataRetention::FiveYears => "5 Years",
            DataRetention::Indefinite => "Indefinite",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Timezone {
    Eastern,
    #[default]
    Central,
    Mountain,
    Pacific,
}

impl Timezone {
    pub const CHOICES: [Timezone; 4] = [
        Timezone::Eastern,
        Timezone::Central,
        Timezone::Mountain,
        Timezone::Pacific,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Timezone::Eastern => "Eastern Time",
            Timezone::Central => "Central Time",
            Timezone::Mountain => "Mountain Time",
            Timezone::Pacific => "Pacific Time",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SessionTimeout {
    OneHour,
    #[default]
    FourHours,
    EightHours,
    OneDay,
}

impl SessionTimeout {
    pub const CHOICES: [SessionTimeout; 4] = [
        SessionTimeout::OneHour,
        SessionTimeout::FourHours,
        SessionTimeout::EightHours,
        SessionTimeout::OneDay,
    ];

    pub fn label(self) -> &'static str {
        match self {
            SessionTimeout::OneHour => "1 Hour",
            SessionTimeout::FourHours => "4 Hours",
            SessionTimeout::EightHours => "8 Hours",
            SessionTimeout::OneDay => "24 Hours",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SmtpForm {
    pub server: String,
    pub port: String,
    pub username: String,
    pub password: String,
    pub from_name: String,
    pub from_email: String,
}

/// Settings form values. Saving only raises a notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SettingsForm {
    pub email_notifications: bool,
    pub error_alerts: bool,
    pub weekly_reports: bool,
    pub auto_backup: bool,
    pub data_retention: DataRetention,
    pub timezone: Timezone,
    pub max_file_size_mb: String,
    pub allowed_formats: String,
    pub system_maintenance: bool,
    pub session_timeout: SessionTimeout,
    pub smtp: SmtpForm,
}

impl Default for SettingsForm {
    fn default() -> Self {
        Self {
            email_notifications: true,
            error_alerts: true,
            weekly_reports: false,
            auto_backup: true,
            data_retention: DataRetention::TwoYears,
            timezone: Timezone::Central,
            max_file_size_mb: "50".to_string(),
            allowed_formats: "xlsx,xls,csv".to_string(),
            system_maintenance: false,
            session_timeout: SessionTimeout::FourHours,
            smtp: SmtpForm::default(),
        }
    }
}

#[derive(Debug, Default)]
pub struct SettingsPage {
    pub form: SettingsForm,
}

impl SettingsPage {
    pub fn save(&self, out: &mut PageOutput) {
        log::info!("Settings saved: {:?}", self.form);
        out.toast(SAVED_TITLE, SAVED_DESCRIPTION);
    }

    pub fn show(&mut self, ui: &mut egui::Ui, out: &mut PageOutput) {
        page_header(
            ui,
            "Settings",
            "Configure system preferences and operational parameters",
        );

        let form = &mut self.form;
        ui.columns(2, |cols| {
            card(&mut cols[0], "🔔 Notifications", "Configure email alerts and system notifications", |ui| {
                switch(ui, &mut form.email_notifications, "Email Notifications", "Receive updates via email");
                ui.separator();
                switch(ui, &mut form.error_alerts, "Error Alerts", "Instant alerts for critical errors");
                ui.separator();
                switch(ui, &mut form.weekly_reports, "Weekly Reports", "Automated weekly summary reports");
            });
            card(&mut cols[1], "🗄 Data Management", "Configure data storage and backup settings", |ui| {
                switch(ui, &mut form.auto_backup, "Auto Backup", "Automatic daily backups");
                ui.separator();
                ui.label("Data Retention Period");
                combo(ui, "data_retention", &mut form.data_retention, &DataRetention::CHOICES, DataRetention::label);
                ui.label("Timezone");
                combo(ui, "timezone", &mut form.timezone, &Timezone::CHOICES, Timezone::label);
            });
        });
        ui.add_space(12.0);

        ui.columns(2, |cols| {
            card(&mut cols[0], "⚙ File Upload Configuration", "Configure file upload limits and accepted formats", |ui| {
                ui.label("Maximum File Size (MB)");
                ui.add(egui::TextEdit::singleline(&mut form.max_file_size_mb).hint_text("50"));
                ui.label("Allowed File Formats");
                ui.add(egui::TextEdit::singleline(&mut form.allowed_formats).hint_text("xlsx,xls,csv"));
                ui.label(RichText::new("Comma-separated list of file extensions").small().weak());
            });
            card(&mut cols[1], "🛡 Security & Access", "Configure security and access control settings", |ui| {
                switch(ui, &mut form.system_maintenance, "Maintenance Mode", "Restrict system access for maintenance");
                ui.separator();
                ui.label("Session Timeout");
                combo(ui, "session_timeout", &mut form.session_timeout, &SessionTimeout::CHOICES, SessionTimeout::label);
                ui.label("Password Policy");
                ui.add_enabled(
                    false,
                    egui::Label::new(
                        RichText::new("Minimum 8 characters, must include uppercase, lowercase, numbers, and special characters")
                            .weak(),
                    )
                    .wrap(true),
                );
            });
        });
        ui.add_space(12.0);

        card(ui, "✉ Email Configuration", "Configure SMTP settings for email notifications", |ui| {
            let smtp = &mut form.smtp;
            egui::Grid::new("smtp").num_columns(4).spacing([12.0, 8.0]).show(ui, |ui| {
                ui.label("SMTP Server");
                ui.add(egui::TextEdit::singleline(&mut smtp.server).hint_text("smtp.example.com"));
                ui.label("Port");
                ui.add(egui::TextEdit::singleline(&mut smtp.port).hint_text("587"));
                ui.end_row();
                ui.label("Username");
                ui.add(egui::TextEdit::singleline(&mut smtp.username).hint_text("notifications@company.com"));
                ui.label("Password");
                ui.add(egui::TextEdit::singleline(&mut smtp.password).password(true).hint_text("••••••••"));
                ui.end_row();
                ui.label("From Name");
                ui.add(egui::TextEdit::singleline(&mut smtp.from_name).hint_text("DrillLog Pro System"));
                ui.label("From Email");
                ui.add(egui::TextEdit::singleline(&mut smtp.from_email).hint_text("noreply@company.com"));
                ui.end_row();
            });
        });
        ui.add_space(12.0);

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Min), |ui| {
            if ui.button("💾 Save Settings").clicked() {
                self.save(out);
            }
        });
    }
}

fn switch(ui: &mut egui::Ui, value: &mut bool, label: &str, hint: &str) {
    ui.horizontal(|ui| {
        ui.vertical(|ui| {
            ui.label(RichText::new(label).strong());
            ui.label(RichText::new(hint).small().weak());
        });
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            ui.toggle_value(value, if *value { "On" } else { "Off" });
        });
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_shipped_configuration() {
        let form = SettingsForm::default();
        assert!(form.email_notifications);
        assert!(!form.weekly_reports);
        assert_eq!(form.data_retention.label(), "2 Years");
        assert_eq!(form.timezone.label(), "Central Time");
        assert_eq!(form.session_timeout.label(), "4 Hours");
        assert_eq!(form.allowed_formats, "xlsx,xls,csv");
    }

    #[test]
    fn saving_raises_a_single_notification() {
        let page = SettingsPage::default();
        let mut out = PageOutput::default();
        page.save(&mut out);
        assert_eq!(
            out.toasts,
            vec![(SAVED_TITLE.to_string(), SAVED_DESCRIPTION.to_string())]
        );
        assert!(out.navigate.is_none());
    }
}
