use crate::app::widgets::{badge, card, combo, list_row, page_header, search_box};
use crate::data::filter_rows;
use crate::data::reports::{DateRange, ExportFormat, Report, ReportSelection, REPORTS};
use crate::data::Tone;
use eframe::egui::{self, RichText};

#[derive(Debug, Default)]
pub struct DownloadPage {
    pub search: String,
    pub date_range: DateRange,
    pub format: ExportFormat,
    pub selection: ReportSelection,
}

impl DownloadPage {
    pub fn visible_rows(&self) -> Vec<&'static Report> {
        filter_rows(REPORTS, &self.search)
    }

    /// Logs each selected report. Returns how many were "downloaded".
    pub fn download_selected(&self) -> usize {
        if self.selection.is_empty() {
            return 0;
        }
        let picked = self.selection.download(REPORTS);
        log::info!(
            "Prepared {} report(s) for {} as {}",
            picked.len(),
            self.date_range.label(),
            self.format.label()
        );
        picked.len()
    }

    pub fn show(&mut self, ui: &mut egui::Ui) {
        page_header(
            ui,
            "Download Reports",
            "Generate and download comprehensive reports for your drilling operations",
        );

        ui.columns(2, |cols| {
            card(&mut cols[0], "🔽 Filters", "", |ui| {
                ui.label(RichText::new("Date Range").strong());
                combo(ui, "date_range", &mut self.date_range, &DateRange::CHOICES, DateRange::label);
                ui.add_space(8.0);
                ui.label(RichText::new("Format").strong());
                combo(ui, "export_format", &mut self.format, &ExportFormat::CHOICES, ExportFormat::label);
                ui.add_space(12.0);
                let label = format!("📥 Download Selected ({})", self.selection.len());
                if ui
                    .add_enabled(!self.selection.is_empty(), egui::Button::new(label))
                    .clicked()
                {
                    self.download_selected();
                }
            });

            card(
                &mut cols[1],
                "Available Reports",
                "Select reports to download. All reports are generated based on your current filter settings.",
                |ui| {
                    ui.horizontal(|ui| {
                        search_box(ui, &mut self.search, "Search reports...");
                        let toggle_label = if self.selection.all_selected(REPORTS) {
                            "Deselect All"
                        } else {
                            "Select All"
                        };
                        if ui.button(toggle_label).clicked() {
                            self.selection.toggle_all(REPORTS);
                        }
                    });
                    ui.add_space(8.0);

                    for report in self.visible_rows() {
                        list_row(ui, |ui| {
                            ui.horizontal(|ui| {
                                let mut checked = self.selection.is_selected(report.id);
                                if ui.checkbox(&mut checked, "").changed() {
                                    self.selection.set(report.id, checked);
                                }
                                ui.label(RichText::new("📄").size(24.0));
                                ui.vertical(|ui| {
                                    ui.label(RichText::new(report.name).strong());
                                    ui.label(RichText::new(report.description).small().weak());
                                    ui.horizontal(|ui| {
                                        badge(ui, report.size, Tone::Outline);
                                        ui.label(
                                            RichText::new(format!(
                                                "📅 Last generated: {}",
                                                report.last_generated
                                            ))
                                            .small()
                                            .weak(),
                                        );
                                    });
                                });
                                ui.with_layout(
                                    egui::Layout::right_to_left(egui::Align::Center),
                                    |ui| {
                                        if ui.button("📥").clicked() {
                                            self.selection.toggle(report.id);
                                        }
                                    },
                                );
                            });
                        });
                        ui.add_space(4.0);
                    }
                },
            );
        });
    }
}
