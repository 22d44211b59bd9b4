//! Profile modal: full resource details plus the workload assignment form.

use eframe::egui::{self, ProgressBar, RichText};

use crate::domain::Resource;

use super::app::RostrApp;
use super::search::{avatar, chip, open_teams_chat, workload_color};
use super::tasks;
use super::theme::{
    ACCENT_GREEN, ACCENT_RED, BG_HIGHLIGHT, BG_INSET, BRAND_BLUE, BRAND_ORANGE, TEXT_MUTED,
    TEXT_ON_BRAND, TEXT_PRIMARY,
};

impl RostrApp {
    pub(crate) fn open_profile(&mut self, resource: Resource) {
        self.selected = Some(resource);
        self.assign_hours.clear();
        self.assign_feedback = None;
        self.assign_in_flight = false;
    }

    pub(crate) fn close_profile(&mut self) {
        self.selected = None;
        self.assign_hours.clear();
        self.assign_feedback = None;
        self.assign_in_flight = false;
    }

    pub(crate) fn render_profile_modal(&mut self, ctx: &egui::Context) {
        let Some(resource) = self.selected.clone() else {
            return;
        };

        let mut open = true;
        let mut close_requested = false;

        egui::Window::new(&resource.name)
            .open(&mut open)
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .frame(
                egui::Frame::window(&ctx.style())
                    .fill(super::theme::BG_CARD)
                    .inner_margin(20.0),
            )
            .show(ctx, |ui| {
                ui.set_width(420.0);

                ui.horizontal(|ui| {
                    avatar(ui, &resource.initials());
                    ui.vertical(|ui| {
                        ui.label(RichText::new(&resource.name).size(20.0).strong());
                        ui.label(RichText::new(&resource.title).color(TEXT_MUTED));
                        ui.label(
                            RichText::new(format!(
                                "{} · {}",
                                resource.department, resource.location
                            ))
                            .small()
                            .color(TEXT_MUTED),
                        );
                    });
                });

                ui.separator();

                if let Some(percent) = resource.match_percent() {
                    ui.label(RichText::new("Match Score").strong());
                    ui.label(
                        RichText::new(format!("{percent}%"))
                            .size(28.0)
                            .strong()
                            .color(BRAND_ORANGE),
                    );
                    ui.label(
                        RichText::new("Compatibility Match")
                            .small()
                            .color(TEXT_MUTED),
                    );
                    ui.separator();
                }

                ui.label(RichText::new("Current Status").strong());
                egui::Grid::new("profile_status")
                    .num_columns(2)
                    .spacing([24.0, 4.0])
                    .show(ui, |ui| {
                        ui.label(RichText::new("Availability").color(TEXT_MUTED));
                        let color = match resource.availability_status() {
                            crate::domain::Availability::Available => ACCENT_GREEN,
                            _ => ACCENT_RED,
                        };
                        ui.label(RichText::new(&resource.availability).color(color));
                        ui.end_row();

                        ui.label(RichText::new("Current Workload").color(TEXT_MUTED));
                        ui.horizontal(|ui| {
                            ui.add(
                                ProgressBar::new(resource.current_workload / 100.0)
                                    .desired_width(140.0)
                                    .fill(workload_color(resource.workload_band())),
                            );
                            ui.label(format!("{:.0}%", resource.current_workload));
                        });
                        ui.end_row();

                        ui.label(RichText::new("Experience").color(TEXT_MUTED));
                        ui.label(format!("{} years", resource.experience_years));
                        ui.end_row();

                        ui.label(RichText::new("Projects Completed").color(TEXT_MUTED));
                        ui.label(resource.projects_completed.to_string());
                        ui.end_row();

                        ui.label(RichText::new("Email").color(TEXT_MUTED));
                        ui.label(&resource.email);
                        ui.end_row();
                    });

                ui.separator();

                ui.label(
                    RichText::new(format!("All Skills ({})", resource.skills.len())).strong(),
                );
                ui.horizontal_wrapped(|ui| {
                    for skill in &resource.skills {
                        chip(ui, skill, BG_INSET, TEXT_PRIMARY);
                    }
                });

                let reasons = resource.recommendation_bullets();
                if !reasons.is_empty() {
                    ui.separator();
                    ui.label(RichText::new("Why Recommended").strong());
                    for reason in reasons {
                        ui.label(format!("✔ {reason}"));
                    }
                }

                ui.separator();

                // Assign workload
                ui.horizontal(|ui| {
                    ui.label(RichText::new("Add workload (hours)").color(TEXT_MUTED));
                    ui.add(
                        egui::TextEdit::singleline(&mut self.assign_hours).desired_width(60.0),
                    );

                    let label = if self.assign_in_flight {
                        "Assigning..."
                    } else {
                        "Assign Work"
                    };
                    let button =
                        egui::Button::new(RichText::new(label).color(TEXT_ON_BRAND))
                            .fill(BRAND_BLUE);
                    if ui.add_enabled(!self.assign_in_flight, button).clicked() {
                        self.submit_workload(resource.id);
                    }

                    let message_button =
                        egui::Button::new(RichText::new("💬 Send Message").color(TEXT_ON_BRAND))
                            .fill(BRAND_ORANGE);
                    if ui.add(message_button).clicked() {
                        open_teams_chat(ui.ctx(), &resource);
                        close_requested = true;
                    }
                });

                if let Some((message, is_error)) = &self.assign_feedback {
                    let color = if *is_error { ACCENT_RED } else { ACCENT_GREEN };
                    ui.label(RichText::new(message).color(color));
                }

                ui.add_space(8.0);
                if ui
                    .add(egui::Button::new("Close").fill(BG_HIGHLIGHT))
                    .clicked()
                {
                    close_requested = true;
                }
            });

        if !open || close_requested {
            self.close_profile();
        }
    }

    /// Validate the hours field and kick off the update.
    fn submit_workload(&mut self, resource_id: i64) {
        let hours: f32 = match self.assign_hours.trim().parse() {
            Ok(value) if value > 0.0 => value,
            _ => {
                self.assign_feedback = Some((
                    "Please enter a valid number of hours greater than 0".to_string(),
                    true,
                ));
                return;
            }
        };

        self.assign_in_flight = true;
        self.assign_feedback = None;
        self.assign_rx = Some(tasks::spawn_workload_update(
            self.client.clone(),
            resource_id,
            hours,
        ));
    }
}
