use super::route::{is_active, NAV_ITEMS};
use super::{DrillLogApp, PageOutput};
use crate::utils::color;
use eframe::egui::{self, Align, Color32, RichText};
use std::time::Instant;

const TOAST_WIDTH: f32 = 320.0;

impl DrillLogApp {
    pub fn render(&mut self, ctx: &egui::Context) {
        let mut out = PageOutput::default();

        egui::TopBottomPanel::top("header").show(ctx, |ui| {
            ui.add_space(8.0);
            ui.horizontal(|ui| {
                ui.label(RichText::new("📄").size(24.0).color(color::primary()));
                ui.vertical(|ui| {
                    ui.label(RichText::new("DrillLog Pro").size(18.0).strong());
                    ui.label(
                        RichText::new("Oil Well Management System")
                            .small()
                            .color(ui.visuals().text_color().gamma_multiply(0.7)),
                    );
                });
            });
            ui.separator();
            ui.horizontal_wrapped(|ui| {
                for item in NAV_ITEMS.iter() {
                    let active = is_active(&self.current_path, item.url);
                    let text = RichText::new(format!("{} {}", item.icon, item.title));
                    let button = if active {
                        egui::Button::new(text.strong().color(Color32::WHITE)).fill(color::primary())
                    } else {
                        egui::Button::new(text).frame(false)
                    };
                    if ui.add(button).clicked() {
                        out.navigate(item.url);
                    }
                }
            });
            ui.add_space(6.0);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .auto_shrink([false, false])
                .show(ui, |ui| {
                    ui.add_space(8.0);
                    self.page.show(ui, &mut out);
                    ui.add_space(20.0);
                });
        });

        self.render_toasts(ctx);
        self.apply(out, Instant::now());
    }

    fn render_toasts(&self, ctx: &egui::Context) {
        if self.toasts.is_empty() {
            return;
        }
        egui::Area::new("toasts")
            .anchor(egui::Align2::RIGHT_BOTTOM, egui::vec2(-16.0, -16.0))
            .order(egui::Order::Foreground)
            .show(ctx, |ui| {
                ui.with_layout(egui::Layout::bottom_up(Align::Max), |ui| {
                    for toast in self.toasts.iter() {
                        egui::Frame::popup(ui.style())
                            .fill(ui.visuals().panel_fill)
                            .show(ui, |ui| {
                                ui.set_width(TOAST_WIDTH);
                                ui.label(RichText::new(&toast.title).strong());
                                if !toast.description.is_empty() {
                                    ui.label(
                                        RichText::new(&toast.description)
                                            .color(Color32::from_gray(140)),
                                    );
                                }
                            });
                        ui.add_space(6.0);
                    }
                });
            });
    }
}
