use crate::data::{Tone, Trend};
use crate::utils::color;
use eframe::egui::{self, RichText};

pub fn page_header(ui: &mut egui::Ui, title: &str, subtitle: &str) {
    ui.add_space(8.0);
    ui.label(RichText::new(title).size(26.0).strong());
    ui.label(RichText::new(subtitle).color(ui.visuals().text_color().gamma_multiply(0.7)));
    ui.add_space(16.0);
}

/// Bordered block with a title and optional description.
pub fn card<R>(
    ui: &mut egui::Ui,
    title: &str,
    description: &str,
    add_contents: impl FnOnce(&mut egui::Ui) -> R,
) -> R {
    egui::Frame::group(ui.style())
        .inner_margin(12.0)
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            if !title.is_empty() {
                ui.label(RichText::new(title).size(16.0).strong());
            }
            if !description.is_empty() {
                ui.label(RichText::new(description).weak());
            }
            ui.add_space(8.0);
            add_contents(ui)
        })
        .inner
}

pub fn badge(ui: &mut egui::Ui, text: &str, tone: Tone) -> egui::Response {
    let (fill, text_color) = color::tone_colors(tone);
    let stroke_color = if tone == Tone::Outline {
        color::muted()
    } else {
        fill
    };
    egui::Frame::none()
        .fill(fill)
        .stroke(egui::Stroke::new(1.0, stroke_color))
        .rounding(8.0)
        .inner_margin(egui::Margin::symmetric(6.0, 1.0))
        .show(ui, |ui| ui.label(RichText::new(text).small().color(text_color)))
        .response
}

/// Small colored dot used in activity lists.
pub fn dot(ui: &mut egui::Ui, tone: Tone) {
    let (fill, _) = color::tone_colors(tone);
    let (rect, _) = ui.allocate_exact_size(egui::vec2(8.0, 8.0), egui::Sense::hover());
    ui.painter().circle_filled(rect.center(), 4.0, fill);
}

pub fn trend_label(ui: &mut egui::Ui, change: &str, trend: Trend) {
    let (arrow, tint) = match trend {
        Trend::Up => ("⬆", color::success()),
        Trend::Down => ("⬇", color::destructive()),
        Trend::Stable => ("➡", color::muted()),
    };
    ui.colored_label(tint, RichText::new(format!("{} {}", arrow, change)).small());
}

pub fn stat_card(ui: &mut egui::Ui, title: &str, value: &str, change: &str, trend: Trend) {
    card(ui, "", "", |ui| {
        ui.label(RichText::new(title).weak());
        ui.label(RichText::new(value).size(22.0).strong());
        trend_label(ui, change, trend);
    });
}

pub fn search_box(ui: &mut egui::Ui, query: &mut String, hint: &str) -> egui::Response {
    ui.horizontal(|ui| {
        ui.label("🔍");
        ui.add(
            egui::TextEdit::singleline(query)
                .hint_text(hint)
                .desired_width(320.0),
        )
    })
    .inner
}

/// Row inside a card, framed like a list entry.
pub fn list_row<R>(ui: &mut egui::Ui, add_contents: impl FnOnce(&mut egui::Ui) -> R) -> R {
    egui::Frame::none()
        .stroke(ui.visuals().widgets.noninteractive.bg_stroke)
        .rounding(6.0)
        .inner_margin(8.0)
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            add_contents(ui)
        })
        .inner
}

pub fn combo<T: Copy + PartialEq>(
    ui: &mut egui::Ui,
    id: &str,
    value: &mut T,
    choices: &[T],
    label: impl Fn(T) -> &'static str,
) {
    egui::ComboBox::from_id_source(id)
        .selected_text(label(*value))
        .show_ui(ui, |ui| {
            for choice in choices {
                ui.selectable_value(value, *choice, label(*choice));
            }
        });
}
