//! Dashboard view: aggregate statistics, distributions, assigned tasks.
//!
//! Summary numbers come from `/stats`; the distribution panels are computed
//! client-side from the fetched resource list, same as the counts shown on
//! the cards of the original product.

use std::time::Duration;

use eframe::egui::{self, ProgressBar, RichText, ScrollArea};
use egui_extras::{Column, TableBuilder};

use crate::domain::Resource;

use super::app::RostrApp;
use super::tasks;
use super::theme::{
    ACCENT_AMBER, ACCENT_BLUE, ACCENT_GREEN, ACCENT_RED, BG_CARD, BG_PRIMARY, BRAND_BLUE,
    BRAND_ORANGE, TEXT_MUTED, TEXT_PRIMARY,
};

impl RostrApp {
    /// Fetch dashboard data unless a recent fetch is still fresh.
    pub(crate) fn refresh_dashboard_if_stale(&mut self) {
        if self.dashboard_loading {
            return;
        }
        let max_age = Duration::from_secs(self.config.settings.gui.dashboard_refresh_secs);
        let stale = self
            .dashboard_last_refresh
            .map(|at| at.elapsed() > max_age)
            .unwrap_or(true);
        if stale {
            self.dashboard_loading = true;
            self.dashboard_rx = Some(tasks::spawn_dashboard_fetch(self.client.clone()));
        }
    }

    pub(crate) fn render_dashboard(&mut self, ctx: &egui::Context) {
        self.refresh_dashboard_if_stale();

        egui::CentralPanel::default()
            .frame(egui::Frame::NONE.fill(BG_PRIMARY).inner_margin(16.0))
            .show(ctx, |ui| {
                ScrollArea::vertical()
                    .auto_shrink([false, false])
                    .show(ui, |ui| {
                        ui.label(
                            RichText::new("System Dashboard")
                                .size(22.0)
                                .strong()
                                .color(BRAND_BLUE),
                        );
                        ui.add_space(12.0);

                        if let Some(error) = &self.dashboard_error {
                            ui.label(RichText::new(format!("⚠ {error}")).color(ACCENT_RED));
                            ui.add_space(8.0);
                        }

                        if !self.dashboard_loaded {
                            ui.horizontal(|ui| {
                                ui.spinner();
                                ui.label(RichText::new("Loading dashboard...").color(TEXT_MUTED));
                            });
                            return;
                        }

                        self.render_summary_cards(ui);
                        ui.add_space(16.0);
                        self.render_distributions(ui);
                        ui.add_space(16.0);
                        self.render_top_skills(ui);
                        ui.add_space(16.0);
                        self.render_assigned_tasks(ui);
                    });
            });
    }

    fn render_summary_cards(&self, ui: &mut egui::Ui) {
        let stats = &self.dashboard.stats;
        let spacing = 8.0;
        let cards = 4.0;
        let width = (ui.available_width() - spacing * (cards - 1.0)) / cards;

        ui.horizontal(|ui| {
            ui.spacing_mut().item_spacing.x = spacing;
            summary_card(ui, "Total Resources", &stats.total_resources.to_string(), BRAND_BLUE, width);
            summary_card(ui, "Available", &stats.available_resources.to_string(), ACCENT_GREEN, width);
            summary_card(ui, "Busy", &stats.busy_resources.to_string(), ACCENT_RED, width);
            summary_card(
                ui,
                "Avg Workload",
                &format!("{:.0}%", stats.average_workload),
                BRAND_ORANGE,
                width,
            );
        });
        ui.add_space(spacing);
        ui.horizontal(|ui| {
            ui.spacing_mut().item_spacing.x = spacing;
            summary_card(ui, "Total Tasks", &stats.total_tasks.to_string(), BRAND_BLUE, width);
            summary_card(ui, "Pending", &stats.pending_tasks.to_string(), ACCENT_AMBER, width);
            summary_card(ui, "Assigned", &stats.assigned_tasks.to_string(), ACCENT_BLUE, width);
            summary_card(
                ui,
                "Assignment Rate",
                &format!(
                    "{:.0}%",
                    if stats.total_tasks > 0 {
                        stats.assigned_tasks as f32 / stats.total_tasks as f32 * 100.0
                    } else {
                        0.0
                    }
                ),
                ACCENT_GREEN,
                width,
            );
        });
    }

    fn render_distributions(&self, ui: &mut egui::Ui) {
        let resources = &self.dashboard.resources;

        ui.columns(3, |cols| {
            distribution_panel(
                &mut cols[0],
                "By Department",
                count_by(resources, |r| r.department.clone()),
            );
            distribution_panel(
                &mut cols[1],
                "By Expertise",
                count_by(resources, |r| r.expertise_level.clone()),
            );
            distribution_panel(&mut cols[2], "By Workload", workload_ranges(resources));
        });
    }

    fn render_top_skills(&self, ui: &mut egui::Ui) {
        let skills = &self.dashboard.stats.top_skills;
        if skills.is_empty() {
            return;
        }

        ui.label(RichText::new("Top Skills").strong().color(TEXT_PRIMARY));
        egui::Frame::NONE
            .fill(BG_CARD)
            .corner_radius(6.0)
            .inner_margin(12.0)
            .show(ui, |ui| {
                let max = skills.iter().map(|s| s.count).max().unwrap_or(1).max(1);
                egui::Grid::new("top_skills_grid")
                    .num_columns(3)
                    .spacing([12.0, 4.0])
                    .show(ui, |ui| {
                        for entry in skills {
                            ui.label(RichText::new(&entry.skill).small());
                            ui.add(
                                ProgressBar::new(entry.count as f32 / max as f32)
                                    .desired_width(160.0)
                                    .fill(BRAND_BLUE),
                            );
                            ui.label(
                                RichText::new(entry.count.to_string())
                                    .small()
                                    .color(TEXT_MUTED),
                            );
                            ui.end_row();
                        }
                    });
            });
    }

    fn render_assigned_tasks(&self, ui: &mut egui::Ui) {
        let assigned: Vec<_> = self
            .dashboard
            .tasks
            .iter()
            .filter(|task| task.is_assigned())
            .collect();

        ui.label(
            RichText::new(format!("Assigned Tasks ({})", assigned.len()))
                .strong()
                .color(TEXT_PRIMARY),
        );

        if assigned.is_empty() {
            ui.label(RichText::new("No tasks assigned yet").small().color(TEXT_MUTED));
            return;
        }

        egui::Frame::NONE
            .fill(BG_CARD)
            .corner_radius(6.0)
            .inner_margin(12.0)
            .show(ui, |ui| {
                TableBuilder::new(ui)
                    .striped(true)
                    .column(Column::remainder())
                    .column(Column::auto())
                    .column(Column::auto())
                    .column(Column::auto())
                    .column(Column::auto())
                    .header(20.0, |mut header| {
                        for title in ["Task", "Priority", "Status", "Est. Hours", "Deadline"] {
                            header.col(|ui| {
                                ui.label(RichText::new(title).small().strong().color(TEXT_MUTED));
                            });
                        }
                    })
                    .body(|mut body| {
                        for task in &assigned {
                            body.row(18.0, |mut row| {
                                row.col(|ui| {
                                    ui.label(RichText::new(&task.title).small());
                                });
                                row.col(|ui| {
                                    let color = match task.priority.to_lowercase().as_str() {
                                        "high" | "critical" => ACCENT_RED,
                                        "medium" => ACCENT_AMBER,
                                        _ => TEXT_MUTED,
                                    };
                                    ui.label(RichText::new(&task.priority).small().color(color));
                                });
                                row.col(|ui| {
                                    ui.label(RichText::new(&task.status).small());
                                });
                                row.col(|ui| {
                                    ui.label(
                                        RichText::new(format!("{:.0}", task.estimated_hours))
                                            .small(),
                                    );
                                });
                                row.col(|ui| {
                                    ui.label(
                                        RichText::new(task.deadline.to_string()).small(),
                                    );
                                });
                            });
                        }
                    });
            });
    }
}

fn summary_card(ui: &mut egui::Ui, label: &str, value: &str, color: egui::Color32, width: f32) {
    egui::Frame::NONE
        .fill(BG_CARD)
        .corner_radius(6.0)
        .inner_margin(12.0)
        .show(ui, |ui| {
            ui.set_width(width - 24.0);
            ui.vertical(|ui| {
                ui.label(RichText::new(value).size(24.0).strong().color(color));
                ui.label(RichText::new(label).small().color(TEXT_MUTED));
            });
        });
}

fn distribution_panel(ui: &mut egui::Ui, title: &str, entries: Vec<(String, usize)>) {
    ui.label(RichText::new(title).strong().color(TEXT_PRIMARY));
    egui::Frame::NONE
        .fill(BG_CARD)
        .corner_radius(6.0)
        .inner_margin(12.0)
        .show(ui, |ui| {
            if entries.is_empty() {
                ui.label(RichText::new("No data").small().color(TEXT_MUTED));
                return;
            }
            let max = entries.iter().map(|(_, n)| *n).max().unwrap_or(1).max(1);
            for (name, count) in &entries {
                ui.horizontal(|ui| {
                    ui.label(RichText::new(name).small());
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        ui.label(RichText::new(count.to_string()).small().color(TEXT_MUTED));
                        ui.add(
                            ProgressBar::new(*count as f32 / max as f32)
                                .desired_width(80.0)
                                .fill(BRAND_ORANGE),
                        );
                    });
                });
            }
        });
}

/// Count resources by a key, sorted by descending count.
fn count_by(resources: &[Resource], key: impl Fn(&Resource) -> String) -> Vec<(String, usize)> {
    let mut counts: Vec<(String, usize)> = Vec::new();
    for resource in resources {
        let name = key(resource);
        match counts.iter_mut().find(|(existing, _)| *existing == name) {
            Some((_, count)) => *count += 1,
            None => counts.push((name, 1)),
        }
    }
    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts
}

/// Bucket resources into the workload quartiles shown on the dashboard.
fn workload_ranges(resources: &[Resource]) -> Vec<(String, usize)> {
    let ranges = [
        ("0-25%", 0.0..25.0),
        ("26-50%", 25.0..50.0),
        ("51-75%", 50.0..75.0),
        ("76-100%", 75.0..f32::INFINITY),
    ];
    ranges
        .into_iter()
        .map(|(label, range)| {
            let count = resources
                .iter()
                .filter(|r| range.contains(&r.current_workload))
                .count();
            (label.to_string(), count)
        })
        .collect()
}
