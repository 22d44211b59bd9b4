//! Search page: query input with voice dictation, ranked result cards.

use eframe::egui::{self, Key, ProgressBar, RichText, ScrollArea};

use crate::domain::{Availability, Resource, WorkloadBand};

use super::app::RostrApp;
use super::theme::{
    ACCENT_AMBER, ACCENT_BLUE, ACCENT_GREEN, ACCENT_RED, BG_CARD, BG_HIGHLIGHT, BG_INSET,
    BRAND_BLUE, BRAND_ORANGE, TEXT_MUTED, TEXT_ON_BRAND, TEXT_PRIMARY,
};

const SEARCH_HINT: &str =
    "Search: \"find me a React developer\", \"React and Python expert\", \"senior backend engineer\"";

pub(crate) fn workload_color(band: WorkloadBand) -> egui::Color32 {
    match band {
        WorkloadBand::Light => ACCENT_GREEN,
        WorkloadBand::Moderate => ACCENT_AMBER,
        WorkloadBand::Heavy => ACCENT_RED,
    }
}

impl RostrApp {
    pub(crate) fn render_search(&mut self, ctx: &egui::Context) {
        egui::CentralPanel::default()
            .frame(egui::Frame::NONE.fill(super::theme::BG_PRIMARY).inner_margin(16.0))
            .show(ctx, |ui| {
                ScrollArea::vertical()
                    .auto_shrink([false, false])
                    .show(ui, |ui| {
                        self.render_search_box(ui);
                        ui.add_space(16.0);
                        self.render_results(ui);
                    });
            });
    }

    fn render_search_box(&mut self, ui: &mut egui::Ui) {
        egui::Frame::NONE
            .fill(BG_CARD)
            .corner_radius(8.0)
            .inner_margin(16.0)
            .show(ui, |ui| {
                ui.horizontal(|ui| {
                    let field = egui::TextEdit::singleline(&mut self.search_query)
                        .hint_text(SEARCH_HINT)
                        .desired_width(ui.available_width() - 48.0);
                    let response = ui.add(field);
                    if response.lost_focus() && ui.input(|i| i.key_pressed(Key::Enter)) {
                        self.run_search(self.search_query.clone());
                    }

                    self.render_mic_button(ui);
                });

                if self.listening {
                    ui.add_space(8.0);
                    banner(ui, ACCENT_RED, "🎤 Listening... Speak now");
                }

                if let Some(error) = self.error.clone() {
                    ui.add_space(8.0);
                    banner(ui, ACCENT_RED, &format!("⚠ {error}"));
                }

                ui.add_space(12.0);
                ui.horizontal(|ui| {
                    let search_label = if self.searching {
                        "Searching with AI..."
                    } else {
                        "✨ AI-Powered Search"
                    };
                    let search_button = egui::Button::new(
                        RichText::new(search_label).color(TEXT_ON_BRAND).strong(),
                    )
                    .fill(BRAND_BLUE);
                    if ui.add_enabled(!self.searching, search_button).clicked() {
                        self.run_search(self.search_query.clone());
                    }

                    if ui
                        .add_enabled(!self.searching, egui::Button::new("Show All"))
                        .clicked()
                    {
                        self.load_all_resources();
                    }
                });
            });
    }

    fn render_mic_button(&mut self, ui: &mut egui::Ui) {
        if !self.voice_supported {
            ui.add_enabled(false, egui::Button::new("🎤"))
                .on_disabled_hover_text(&self.voice_status);
            return;
        }

        let (icon, fill) = if self.listening {
            ("🔇", ACCENT_RED)
        } else {
            ("🎤", BG_HIGHLIGHT)
        };
        let hover = if self.listening {
            "Stop listening"
        } else {
            "Start voice command"
        };
        if ui
            .add(egui::Button::new(icon).fill(fill))
            .on_hover_text(hover)
            .clicked()
        {
            self.toggle_listening();
        }
    }

    fn render_results(&mut self, ui: &mut egui::Ui) {
        if self.searching {
            centered_card(ui, |ui| {
                ui.spinner();
                ui.label(
                    RichText::new("AI is analyzing and finding the best matches...")
                        .size(16.0)
                        .color(TEXT_MUTED),
                );
            });
            return;
        }

        if self.showing_all {
            if !self.exact_matches.is_empty() {
                section_title(ui, &format!("All Resources ({})", self.exact_matches.len()));
                let resources = self.exact_matches.clone();
                self.render_card_grid(ui, &resources);
            }
            return;
        }

        if !self.exact_matches.is_empty() {
            section_title(
                ui,
                &format!("✅ Perfect Matches ({})", self.exact_matches.len()),
            );
            let resources = self.exact_matches.clone();
            self.render_card_grid(ui, &resources);
            ui.add_space(16.0);
        }

        if self.exact_matches.is_empty() && !self.recommendations.is_empty() {
            self.render_no_exact_match_note(ui);
            ui.add_space(12.0);
        }

        if !self.recommendations.is_empty() {
            section_title(
                ui,
                &format!(
                    "🤖 AI-Recommended Alternatives ({})",
                    self.recommendations.len()
                ),
            );
            let resources = self.recommendations.clone();
            self.render_card_grid(ui, &resources);
        }

        if self.exact_matches.is_empty() && self.recommendations.is_empty() {
            if self.search_performed {
                centered_card(ui, |ui| {
                    ui.label(RichText::new("No Developers Found").size(18.0).strong());
                    ui.label(
                        RichText::new(
                            "Try searching with different skills or criteria: \
                             \"React developer\", \"Python and Django expert\", \
                             or \"senior backend engineer\"",
                        )
                        .color(TEXT_MUTED),
                    );
                });
            } else {
                centered_card(ui, |ui| {
                    ui.label(
                        RichText::new("✨ AI-Powered Developer Search")
                            .size(18.0)
                            .strong()
                            .color(BRAND_BLUE),
                    );
                    ui.label(
                        RichText::new(
                            "Use natural language to find the perfect developer:\n\
                             \"Find me a React developer\"\n\
                             \"React and Python expert\"\n\
                             \"Senior backend engineer\"",
                        )
                        .color(TEXT_MUTED),
                    );
                });
            }
        }
    }

    fn render_no_exact_match_note(&self, ui: &mut egui::Ui) {
        egui::Frame::NONE
            .fill(BG_CARD)
            .corner_radius(8.0)
            .inner_margin(16.0)
            .show(ui, |ui| {
                ui.label(
                    RichText::new("✨ No Exact Match Found")
                        .size(18.0)
                        .strong()
                        .color(BRAND_ORANGE),
                );
                ui.label(
                    "We couldn't find developers with the exact skills you requested, \
                     but here are some highly recommended alternatives based on:",
                );
                ui.horizontal_wrapped(|ui| {
                    for factor in [
                        "Experience & Seniority",
                        "Similar Tech Stack",
                        "Low Workload",
                        "Proven Track Record",
                    ] {
                        chip(ui, factor, BG_HIGHLIGHT, BRAND_BLUE);
                    }
                });
                ui.label(
                    RichText::new(
                        "💡 AI Insight: these developers can quickly adapt to new \
                         technologies based on their experience and completed projects.",
                    )
                    .small()
                    .color(TEXT_MUTED),
                );
            });
    }

    /// Two cards per row.
    fn render_card_grid(&mut self, ui: &mut egui::Ui, resources: &[Resource]) {
        for pair in resources.chunks(2) {
            ui.columns(2, |cols| {
                for (col, resource) in cols.iter_mut().zip(pair) {
                    self.render_resource_card(col, resource);
                }
            });
            ui.add_space(8.0);
        }
    }

    fn render_resource_card(&mut self, ui: &mut egui::Ui, resource: &Resource) {
        egui::Frame::NONE
            .fill(BG_CARD)
            .corner_radius(8.0)
            .inner_margin(12.0)
            .show(ui, |ui| {
                ui.horizontal(|ui| {
                    avatar(ui, &resource.initials());
                    ui.vertical(|ui| {
                        ui.label(RichText::new(&resource.name).size(16.0).strong());
                        ui.label(RichText::new(&resource.title).color(TEXT_MUTED));
                        ui.label(
                            RichText::new(&resource.department)
                                .small()
                                .color(TEXT_MUTED),
                        );
                    });
                    if let Some(percent) = resource.match_percent() {
                        ui.with_layout(egui::Layout::right_to_left(egui::Align::Min), |ui| {
                            ui.vertical(|ui| {
                                ui.label(
                                    RichText::new(format!("{percent}%"))
                                        .size(22.0)
                                        .strong()
                                        .color(BRAND_ORANGE),
                                );
                                ui.label(RichText::new("MATCH").small().color(TEXT_MUTED));
                            });
                        });
                    }
                });

                ui.separator();

                ui.horizontal(|ui| {
                    ui.label(RichText::new("Workload").color(TEXT_MUTED));
                    ui.add(
                        ProgressBar::new(resource.current_workload / 100.0)
                            .desired_width(120.0)
                            .fill(workload_color(resource.workload_band())),
                    );
                    ui.label(format!("{:.0}%", resource.current_workload));

                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        let (chip_color, text_color) = match resource.availability_status() {
                            Availability::Available => (ACCENT_GREEN, TEXT_ON_BRAND),
                            Availability::Busy => (ACCENT_RED, TEXT_ON_BRAND),
                            Availability::Other => (BG_INSET, TEXT_PRIMARY),
                        };
                        chip(ui, &resource.availability, chip_color, text_color);
                    });
                });
                ui.horizontal(|ui| {
                    ui.label(RichText::new("Experience").color(TEXT_MUTED));
                    ui.label(format!("{} years", resource.experience_years));
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        ui.label(format!("{} projects", resource.projects_completed));
                    });
                });

                ui.add_space(4.0);
                ui.label(RichText::new("SKILLS").small().color(TEXT_MUTED));
                ui.horizontal_wrapped(|ui| {
                    for skill in resource.skills.iter().take(5) {
                        chip(ui, skill, BG_INSET, TEXT_PRIMARY);
                    }
                    if resource.skills.len() > 5 {
                        chip(
                            ui,
                            &format!("+{}", resource.skills.len() - 5),
                            BG_HIGHLIGHT,
                            BRAND_BLUE,
                        );
                    }
                });

                let reasons = resource.recommendation_bullets();
                if !reasons.is_empty() {
                    ui.add_space(4.0);
                    egui::Frame::NONE
                        .fill(BG_HIGHLIGHT)
                        .corner_radius(6.0)
                        .inner_margin(8.0)
                        .show(ui, |ui| {
                            ui.label(
                                RichText::new("AI RECOMMENDATION")
                                    .small()
                                    .strong()
                                    .color(ACCENT_BLUE),
                            );
                            for reason in reasons {
                                ui.label(RichText::new(format!("• {reason}")).small());
                            }
                        });
                }

                ui.add_space(8.0);
                ui.horizontal(|ui| {
                    if ui.button("👤 View Profile").clicked() {
                        self.open_profile(resource.clone());
                    }
                    let message = egui::Button::new(
                        RichText::new("💬 Message").color(TEXT_ON_BRAND),
                    )
                    .fill(BRAND_BLUE);
                    if ui.add(message).clicked() {
                        open_teams_chat(ui.ctx(), resource);
                    }
                });
            });
    }
}

/// Launch a Teams chat with the resource through the msteams deep link.
pub(crate) fn open_teams_chat(ctx: &egui::Context, resource: &Resource) {
    let message = format!("Hi {}, I'd like to discuss a project opportunity.", resource.name);
    let url = format!(
        "msteams://teams.microsoft.com/l/chat/0/0?users={}&message={}",
        resource.teams_id,
        urlencode(&message),
    );
    ctx.open_url(egui::OpenUrl::new_tab(url));
}

/// Percent-encode the query-string characters that matter for deep links.
fn urlencode(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for byte in value.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                out.push(byte as char)
            }
            _ => out.push_str(&format!("%{byte:02X}")),
        }
    }
    out
}

fn section_title(ui: &mut egui::Ui, title: &str) {
    ui.label(RichText::new(title).size(18.0).strong().color(TEXT_PRIMARY));
    ui.add_space(8.0);
}

fn banner(ui: &mut egui::Ui, color: egui::Color32, text: &str) {
    egui::Frame::NONE
        .fill(BG_INSET)
        .corner_radius(6.0)
        .inner_margin(8.0)
        .show(ui, |ui| {
            ui.label(RichText::new(text).color(color).strong());
        });
}

fn centered_card(ui: &mut egui::Ui, add_contents: impl FnOnce(&mut egui::Ui)) {
    egui::Frame::NONE
        .fill(BG_CARD)
        .corner_radius(8.0)
        .inner_margin(24.0)
        .show(ui, |ui| {
            ui.vertical_centered(add_contents);
        });
}

pub(crate) fn chip(ui: &mut egui::Ui, label: &str, fill: egui::Color32, text: egui::Color32) {
    egui::Frame::NONE
        .fill(fill)
        .corner_radius(10.0)
        .inner_margin(egui::Margin::symmetric(8, 3))
        .show(ui, |ui| {
            ui.label(RichText::new(label).small().color(text));
        });
}

pub(crate) fn avatar(ui: &mut egui::Ui, initials: &str) {
    egui::Frame::NONE
        .fill(BRAND_BLUE)
        .corner_radius(18.0)
        .inner_margin(egui::Margin::symmetric(10, 10))
        .show(ui, |ui| {
            ui.label(RichText::new(initials).color(TEXT_ON_BRAND).strong());
        });
}
