use crate::app::widgets::{badge, card, combo, page_header, search_box};
use crate::data::error_logs::{filter_errors, ErrorLog, ErrorStats, Severity, SeverityFilter, ERROR_LOGS};
use crate::utils::color;
use eframe::egui::{self, Color32, RichText};

#[derive(Debug, Default)]
pub struct ErrorLogsPage {
    pub search: String,
    pub severity: SeverityFilter,
}

impl ErrorLogsPage {
    pub fn visible_rows(&self) -> Vec<&'static ErrorLog> {
        filter_errors(ERROR_LOGS, &self.search, self.severity)
    }

    pub fn show(&mut self, ui: &mut egui::Ui) {
        page_header(
            ui,
            "Error Logs",
            "Monitor and manage system errors and data validation issues",
        );

        let stats = ErrorStats::from_logs(ERROR_LOGS);
        let tiles = [
            (stats.total, "Total Errors", ui.visuals().text_color()),
            (stats.high, "High Severity", color::destructive()),
            (stats.medium, "Medium Severity", Color32::from_rgb(234, 179, 8)),
            (stats.low, "Low Severity", color::muted()),
            (stats.resolved, "Resolved", color::success()),
            (stats.unresolved, "Unresolved", ui.visuals().text_color()),
        ];
        ui.columns(tiles.len(), |cols| {
            for (col, (count, label, tint)) in cols.iter_mut().zip(tiles) {
                card(col, "", "", |ui| {
                    ui.colored_label(tint, RichText::new(count.to_string()).size(22.0).strong());
                    ui.label(RichText::new(label).small().weak());
                });
            }
        });
        ui.add_space(12.0);

        card(
            ui,
            "⚠ Error Log Database",
            "System errors, validation issues, and processing failures",
            |ui| {
                ui.horizontal(|ui| {
                    search_box(ui, &mut self.search, "Search errors by message, source, or file...");
                    combo(
                        ui,
                        "severity_filter",
                        &mut self.severity,
                        &SeverityFilter::CHOICES,
                        SeverityFilter::label,
                    );
                    if ui.button("🔄 Refresh").clicked() {
                        log::debug!("Error log refresh requested; the table is static");
                    }
                });
                ui.add_space(8.0);

                let rows = self.visible_rows();
                egui::Grid::new("error_logs")
                    .striped(true)
                    .num_columns(7)
                    .spacing([16.0, 8.0])
                    .show(ui, |ui| {
                        for heading in [
                            "Error ID", "Timestamp", "Severity", "Source", "Message", "File", "Status",
                        ] {
                            ui.label(RichText::new(heading).strong());
                        }
                        ui.end_row();

                        for error in rows {
                            ui.label(RichText::new(error.id).strong());
                            ui.label(RichText::new(error.timestamp).small());
                            ui.horizontal(|ui| {
                                ui.colored_label(severity_tint(error.severity), "⚠");
                                badge(ui, error.severity.label(), error.severity.tone());
                            });
                            ui.label(error.source);
                            ui.add(egui::Label::new(error.message).truncate(true))
                                .on_hover_text(error.message);
                            ui.label(RichText::new(error.file).small().weak());
                            let (label, tone) = error.resolution();
                            badge(ui, label, tone);
                            ui.end_row();
                        }
                    });
            },
        );
    }
}

fn severity_tint(severity: Severity) -> Color32 {
    match severity {
        Severity::High => color::destructive(),
        Severity::Medium => Color32::from_rgb(234, 179, 8),
        Severity::Low => color::muted(),
    }
}
