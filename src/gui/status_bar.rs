//! Status bar component for the GUI
//!
//! Renders the bottom status bar with backend connection state and voice
//! input availability.

use eframe::egui::{self, RichText};

use super::app::RostrApp;
use super::theme::{ACCENT_GREEN, ACCENT_RED, BG_CARD, TEXT_MUTED};

/// Render the bottom status bar
pub fn render_status_bar(ctx: &egui::Context, app: &RostrApp) {
    egui::TopBottomPanel::bottom("status_bar")
        .frame(egui::Frame::NONE.fill(BG_CARD).inner_margin(4.0))
        .show(ctx, |ui| {
            ui.horizontal(|ui| {
                let (backend_text, backend_color) = match app.backend_ok {
                    Some(true) => ("Backend: connected", ACCENT_GREEN),
                    Some(false) => ("Backend: unreachable", ACCENT_RED),
                    None => ("Backend: checking...", TEXT_MUTED),
                };
                ui.label(
                    RichText::new(backend_text)
                        .small()
                        .monospace()
                        .color(backend_color),
                );

                ui.separator();

                let (voice_text, voice_color) = if app.listening {
                    ("Voice: listening", ACCENT_RED)
                } else if app.voice_supported {
                    ("Voice: ready", ACCENT_GREEN)
                } else {
                    ("Voice: unavailable", TEXT_MUTED)
                };
                ui.label(
                    RichText::new(voice_text)
                        .small()
                        .monospace()
                        .color(voice_color),
                )
                .on_hover_text(&app.voice_status);

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(
                        RichText::new(app.client.base_url())
                            .small()
                            .monospace()
                            .color(TEXT_MUTED),
                    );
                });
            });
        });
}
