use crate::app::PageOutput;
use eframe::egui::{self, RichText};

#[derive(Debug)]
pub struct NotFoundPage {
    path: String,
}

impl NotFoundPage {
    pub fn new(path: &str) -> Self {
        log::warn!("404 Error: User attempted to access non-existent route: {}", path);
        Self {
            path: path.to_string(),
        }
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn show(&mut self, ui: &mut egui::Ui, out: &mut PageOutput) {
        ui.vertical_centered(|ui| {
            ui.add_space(ui.available_height() * 0.25);
            ui.label(RichText::new("404").size(40.0).strong());
            ui.add_space(8.0);
            ui.label(RichText::new("Oops! Page not found").size(18.0).weak());
            ui.label(RichText::new(&self.path).small().monospace().weak());
            ui.add_space(12.0);
            if ui.link("Return to Home").clicked() {
                out.navigate("/");
            }
        });
    }
}
