use crate::app::widgets::{badge, card, page_header};
use crate::app::PageOutput;
use crate::config::UploadConfig;
use crate::data::Tone;
use crate::upload::{
    BatchEvent, FileProcessor, OutcomeDecider, RandomOutcome, SelectedFile, Ticker, UploadBatch,
    UploadId, UploadStatus,
};
use crate::utils::color;
use crate::utils::file_size::FileSizeUtils;
use derivative::Derivative;
use eframe::egui::{self, Color32, RichText};
use std::time::Duration;

pub const COMPLETED_TITLE: &str = "Upload completed";
pub const COMPLETED_DESCRIPTION: &str = "All files have been processed. Check results below.";

const REQUIRED_COLUMNS: &str = "Customer Name, State, Zip Code, Supervisor Name, Well Name, \
    Date, Materials Used, Tools Used, Observations, Status";

#[derive(Derivative)]
#[derivative(Debug)]
pub struct UploadPage {
    batch: UploadBatch,
    processor: FileProcessor,
    step_delay: Duration,
    #[derivative(Debug = "ignore")]
    decider: Box<dyn OutcomeDecider>,
    ticker: Option<Ticker>,
}

impl UploadPage {
    pub fn new(config: &UploadConfig) -> Self {
        Self::with_decider(config, Box::new(RandomOutcome::new(config.error_rate)))
    }

    pub fn with_decider(config: &UploadConfig, decider: Box<dyn OutcomeDecider>) -> Self {
        Self {
            batch: UploadBatch::new(),
            processor: FileProcessor::new(&config.accepted_extensions),
            step_delay: config.step_delay(),
            decider,
            ticker: None,
        }
    }

    pub fn batch(&self) -> &UploadBatch {
        &self.batch
    }

    pub fn step_delay(&self) -> Duration {
        self.step_delay
    }

    pub fn is_processing(&self) -> bool {
        self.batch.is_running()
    }

    pub fn add_files(&mut self, files: Vec<SelectedFile>) -> Vec<UploadId> {
        if !files.is_empty() {
            log::info!("Selected {} file(s) for upload", files.len());
        }
        self.batch.add_files(files)
    }

    pub fn remove(&mut self, id: UploadId) -> bool {
        self.batch.remove(id)
    }

    /// Starts the batch with a background ticker that calls `repaint` on every step.
    pub fn process<F>(&mut self, repaint: F, out: &mut PageOutput) -> bool
    where
        F: Fn() + Send + 'static,
    {
        if !self.batch.can_process() {
            return false;
        }
        match Ticker::spawn(self.step_delay, repaint) {
            Ok(ticker) => {
                self.ticker = Some(ticker);
                self.start_batch()
            }
            Err(e) => {
                log::error!("Could not start upload ticker: {}", e);
                out.toast("Processing failed to start", e.to_string());
                false
            }
        }
    }

    /// Starts the batch without a ticker; steps are then driven through `advance`.
    pub fn start_batch(&mut self) -> bool {
        self.batch.start()
    }

    /// Applies ticks delivered by the background ticker.
    pub fn poll(&mut self, out: &mut PageOutput) {
        let ticks = self.ticker.as_ref().map_or(0, Ticker::drain);
        if ticks > 0 {
            self.advance(ticks, out);
        }
    }

    pub fn advance(&mut self, ticks: usize, out: &mut PageOutput) {
        for _ in 0..ticks {
            let events = self.batch.tick(&mut *self.decider);
            for event in events {
                if let BatchEvent::Completed { .. } = event {
                    self.ticker = None;
                    out.toast(COMPLETED_TITLE, COMPLETED_DESCRIPTION);
                }
            }
            if !self.batch.is_running() {
                break;
            }
        }
    }

    pub fn show(&mut self, ui: &mut egui::Ui, out: &mut PageOutput) {
        page_header(
            ui,
            "Upload Data",
            "Import Excel sheets containing job logs and supervisor data",
        );

        card(
            ui,
            "Excel File Upload",
            "Upload Excel files containing customer information, supervisor details, observations, and materials used",
            |ui| {
                self.show_picker(ui);

                if !self.batch.is_empty() {
                    ui.add_space(12.0);
                    self.show_items(ui, out);
                }

                ui.add_space(12.0);
                egui::Frame::group(ui.style()).show(ui, |ui| {
                    ui.set_width(ui.available_width());
                    ui.horizontal_wrapped(|ui| {
                        ui.label(RichText::new("📄 Required Excel columns:").strong());
                        ui.label(REQUIRED_COLUMNS);
                    });
                });
            },
        );
    }

    fn show_picker(&mut self, ui: &mut egui::Ui) {
        egui::Frame::group(ui.style())
            .inner_margin(24.0)
            .show(ui, |ui| {
                ui.set_width(ui.available_width());
                ui.vertical_centered(|ui| {
                    ui.label(RichText::new("📤").size(32.0));
                    ui.horizontal(|ui| {
                        if ui.button("Click to upload files").clicked() {
                            let files = self.processor.pick_files();
                            self.add_files(files);
                        }
                        if ui.button("📁 Add folder").clicked() {
                            let files = self.processor.pick_folder();
                            self.add_files(files);
                        }
                    });
                    ui.label(
                        RichText::new(format!(
                            "Supports Excel files and CSV files ({})",
                            self.processor.accept_hint()
                        ))
                        .small()
                        .weak(),
                    );
                });
            });
    }

    fn show_items(&mut self, ui: &mut egui::Ui, out: &mut PageOutput) {
        ui.horizontal(|ui| {
            ui.label(RichText::new("Uploaded Files").size(16.0).strong());
            let total: u64 = self.batch.items().iter().map(|i| i.file().size_bytes).sum();
            ui.label(RichText::new(FileSizeUtils::format_size(total)).weak());
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                let button = ui.add_enabled(self.batch.can_process(), egui::Button::new("Process Files"));
                if button.clicked() {
                    let ctx = ui.ctx().clone();
                    self.process(move || ctx.request_repaint(), out);
                }
            });
        });
        ui.add_space(8.0);

        let mut to_remove = None;
        for item in self.batch.items() {
            egui::Frame::group(ui.style()).show(ui, |ui| {
                ui.set_width(ui.available_width());
                ui.horizontal(|ui| {
                    ui.label(status_icon(item.status()));
                    ui.vertical(|ui| {
                        ui.label(RichText::new(&item.file().name).strong());
                        ui.label(RichText::new(item.file().display_size()).small().weak());
                    });
                    badge(ui, item.status().label(), status_tone(item.status()));
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        let removable = item.status() != UploadStatus::Processing;
                        if ui.add_enabled(removable, egui::Button::new("✖")).clicked() {
                            to_remove = Some(item.id());
                        }
                    });
                });

                if item.status() == UploadStatus::Processing {
                    ui.add_space(6.0);
                    ui.add(
                        egui::ProgressBar::new(f32::from(item.progress()) / 100.0)
                            .animate(false)
                            .fill(color::primary()),
                    );
                    ui.label(
                        RichText::new(format!("Processing... {}%", item.progress()))
                            .small()
                            .weak(),
                    );
                }

                if !item.errors().is_empty() {
                    ui.add_space(6.0);
                    ui.label(RichText::new("⚠ Validation Errors Found:").strong());
                    for error in item.errors() {
                        ui.colored_label(color::destructive(), format!("• {}", error));
                    }
                }
            });
            ui.add_space(4.0);
        }

        if let Some(id) = to_remove {
            self.remove(id);
        }
    }
}

fn status_icon(status: UploadStatus) -> RichText {
    match status {
        UploadStatus::Success => RichText::new("✅").color(color::success()),
        UploadStatus::Error => RichText::new("⚠").color(color::destructive()),
        UploadStatus::Processing => RichText::new("⏳").color(color::primary()),
        UploadStatus::Pending => RichText::new("📄").color(Color32::GRAY),
    }
}

fn status_tone(status: UploadStatus) -> Tone {
    match status {
        UploadStatus::Success => Tone::Default,
        UploadStatus::Error => Tone::Destructive,
        UploadStatus::Processing => Tone::Secondary,
        UploadStatus::Pending => Tone::Outline,
    }
}
