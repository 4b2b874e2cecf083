use crate::app::widgets::{badge, card, page_header, search_box};
use crate::data::filter_rows;
use crate::data::job_logs::{JobLog, JOB_LOGS};
use eframe::egui::{self, RichText};

#[derive(Debug, Default)]
pub struct JobLogsPage {
    pub search: String,
}

impl JobLogsPage {
    pub fn visible_rows(&self) -> Vec<&'static JobLog> {
        filter_rows(JOB_LOGS, &self.search)
    }

    pub fn show(&mut self, ui: &mut egui::Ui) {
        page_header(ui, "Job Logs", "Manage and review all drilling operation logs");

        card(
            ui,
            "Job Log Database",
            "Complete record of all drilling operations and supervisor observations",
            |ui| {
                search_box(
                    ui,
                    &mut self.search,
                    "Search by customer, well name, supervisor...",
                );
                ui.add_space(8.0);

                let rows = self.visible_rows();
                egui::Grid::new("job_logs")
                    .striped(true)
                    .num_columns(7)
                    .spacing([16.0, 8.0])
                    .show(ui, |ui| {
                        for heading in [
                            "Job ID",
                            "Customer",
                            "Well Name",
                            "Supervisor",
                            "Location",
                            "Status",
                            "Date",
                        ] {
                            ui.label(RichText::new(heading).strong());
                        }
                        ui.end_row();

                        for log in rows {
                            ui.label(RichText::new(log.id).strong())
                                .on_hover_text(format!(
                                    "Tools: {}\n{}",
                                    log.tools.join(", "),
                                    log.observations
                                ));
                            ui.label(log.customer);
                            ui.label(log.well_name);
                            ui.label(log.supervisor);
                            ui.label(log.location());
                            badge(ui, log.status.label(), log.status.tone());
                            ui.label(log.date);
                            ui.end_row();
                        }
                    });
            },
        );
    }
}
