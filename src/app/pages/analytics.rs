use crate::app::widgets::{badge, card, combo, list_row, page_header, stat_card};
use crate::data::analytics::{
    Period, MATERIAL_USAGE, PERFORMANCE_METRICS, REGIONS, TOP_SUPERVISORS,
};
use eframe::egui::{self, RichText};

#[derive(Debug, Default)]
pub struct AnalyticsPage {
    pub period: Period,
}

impl AnalyticsPage {
    pub fn show(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.vertical(|ui| {
                page_header(ui, "Analytics", "Performance insights and operational analytics");
            });
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                combo(ui, "analytics_period", &mut self.period, &Period::CHOICES, Period::label);
            });
        });

        ui.columns(PERFORMANCE_METRICS.len(), |cols| {
            for (col, metric) in cols.iter_mut().zip(PERFORMANCE_METRICS) {
                stat_card(col, metric.label, metric.value, metric.change, metric.trend);
            }
        });
        ui.add_space(12.0);

        ui.columns(2, |cols| {
            card(&mut cols[0], "📍 Regional Performance", "Job completion rates by state", |ui| {
                for region in REGIONS {
                    list_row(ui, |ui| {
                        ui.horizontal(|ui| {
                            ui.vertical(|ui| {
                                ui.label(RichText::new(region.state).strong());
                                ui.label(RichText::new(format!("{} jobs", region.jobs)).small().weak());
                            });
                            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                                let (rating, tone) = region.rating();
                                badge(ui, rating, tone);
                                ui.vertical(|ui| {
                                    ui.label(RichText::new(format!("{}%", region.completion)).strong());
                                    ui.label(
                                        RichText::new(format!("{} supervisors", region.supervisors))
                                            .small()
                                            .weak(),
                                    );
                                });
                            });
                        });
                    });
                    ui.add_space(4.0);
                }
            });

            card(&mut cols[1], "👥 Top Supervisors", "Performance rankings and metrics", |ui| {
                for (rank, supervisor) in TOP_SUPERVISORS.iter().enumerate() {
                    list_row(ui, |ui| {
                        ui.horizontal(|ui| {
                            ui.label(RichText::new(format!("#{}", rank + 1)).strong());
                            ui.vertical(|ui| {
                                ui.label(RichText::new(supervisor.name).strong());
                                ui.label(
                                    RichText::new(format!("{} jobs completed", supervisor.jobs))
                                        .small()
                                        .weak(),
                                );
                            });
                            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                                ui.vertical(|ui| {
                                    ui.label(format!("{}% success", supervisor.success));
                                    ui.label(
                                        RichText::new(format!(
                                            "{} days avg",
                                            supervisor.avg_duration_days
                                        ))
                                        .small()
                                        .weak(),
                                    );
                                });
                            });
                        });
                    });
                    ui.add_space(4.0);
                }
            });
        });
        ui.add_space(12.0);

        card(
            ui,
            "📊 Material & Equipment Usage",
            "Usage patterns and efficiency metrics for materials and tools",
            |ui| {
                ui.columns(MATERIAL_USAGE.len(), |cols| {
                    for (col, material) in cols.iter_mut().zip(MATERIAL_USAGE) {
                        list_row(col, |ui| {
                            ui.vertical_centered(|ui| {
                                ui.label(RichText::new(format!("{}%", material.usage)).size(18.0).strong());
                                ui.label(material.item);
                                badge(ui, material.trend.label(), material.tone());
                            });
                        });
                    }
                });
            },
        );
    }
}
