use crate::app::widgets::{card, dot, list_row, page_header, stat_card};
use crate::app::PageOutput;
use crate::data::dashboard::{RECENT_ACTIVITIES, RECENT_ERRORS, STATS};
use eframe::egui::{self, RichText};

#[derive(Debug, Default)]
pub struct DashboardPage;

impl DashboardPage {
    pub fn show(&mut self, ui: &mut egui::Ui, out: &mut PageOutput) {
        page_header(
            ui,
            "Dashboard",
            "Overview of your drilling operations and job logs",
        );

        card(ui, "📄 Quick Actions", "Common tasks and operations", |ui| {
            ui.columns(2, |cols| {
                let size = egui::vec2(cols[0].available_width(), 32.0);
                if cols[0]
                    .add(egui::Button::new("📤 Upload Job Log File").min_size(size))
                    .clicked()
                {
                    out.navigate("/upload");
                }
                if cols[1]
                    .add(egui::Button::new("👁 View Analytics").min_size(size))
                    .clicked()
                {
                    out.navigate("/analytics");
                }
            });
        });
        ui.add_space(12.0);

        ui.columns(STATS.len(), |cols| {
            for (col, stat) in cols.iter_mut().zip(STATS) {
                stat_card(
                    col,
                    &format!("{} {}", stat.icon, stat.title),
                    stat.value,
                    stat.change,
                    stat.trend,
                );
            }
        });
        ui.add_space(12.0);

        ui.columns(2, |cols| {
            card(&mut cols[0], "📊 Recent Activity", "Latest updates and system events", |ui| {
                for activity in RECENT_ACTIVITIES {
                    list_row(ui, |ui| {
                        ui.horizontal(|ui| {
                            dot(ui, activity.kind.tone());
                            ui.vertical(|ui| {
                                ui.label(RichText::new(activity.action).strong());
                                ui.label(RichText::new(activity.subject).small().weak());
                            });
                            ui.with_layout(
                                egui::Layout::right_to_left(egui::Align::Center),
                                |ui| ui.label(RichText::new(activity.time).small().weak()),
                            );
                        });
                    });
                    ui.add_space(4.0);
                }
            });

            card(&mut cols[1], "⚠ Recent Error Logs", "Latest system errors and warnings", |ui| {
                for note in RECENT_ERRORS {
                    list_row(ui, |ui| {
                        ui.horizontal(|ui| {
                            dot(ui, note.tone);
                            ui.label(note.title);
                            ui.with_layout(
                                egui::Layout::right_to_left(egui::Align::Center),
                                |ui| ui.label(RichText::new(note.time).small().weak()),
                            );
                        });
                    });
                    ui.add_space(4.0);
                }
                if ui.button("View All Errors").clicked() {
                    out.navigate("/errors");
                }
            });
        });
    }
}
