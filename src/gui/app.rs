//! Main application state and frame loop.

use std::sync::mpsc::Receiver;
use std::time::Instant;

use eframe::egui::{self, RichText, Stroke};

use crate::api::ApiClient;
use crate::config::Config;
use crate::domain::Resource;
use crate::voice::{NativeEngine, VoiceSession};

use super::tasks::{self, DashboardData, SearchKind};
use super::theme::{
    BG_CARD, BG_HIGHLIGHT, BG_PRIMARY, BRAND_BLUE, TEXT_MUTED, TEXT_ON_BRAND, TEXT_PRIMARY,
};
use super::voice_input::VoiceUiEvent;

/// Which page fills the central panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewMode {
    #[default]
    Search,
    Dashboard,
}

/// Top-level application state.
pub struct RostrApp {
    pub(crate) config: Config,
    pub(crate) client: ApiClient,
    pub(crate) view: ViewMode,

    // Search page
    pub(crate) search_query: String,
    pub(crate) searching: bool,
    pub(crate) search_performed: bool,
    pub(crate) exact_matches: Vec<Resource>,
    pub(crate) recommendations: Vec<Resource>,
    pub(crate) error: Option<String>,
    pub(crate) search_rx: Option<Receiver<Result<Vec<Resource>, String>>>,
    /// The last search was "Show All" (skip the exact/recommended split)
    pub(crate) showing_all: bool,

    // Profile modal
    pub(crate) selected: Option<Resource>,
    pub(crate) assign_hours: String,
    pub(crate) assign_in_flight: bool,
    /// (message, is_error) feedback under the assign form
    pub(crate) assign_feedback: Option<(String, bool)>,
    pub(crate) assign_rx: Option<Receiver<Result<(Resource, Option<String>), String>>>,

    // Dashboard page
    pub(crate) dashboard: DashboardData,
    pub(crate) dashboard_loaded: bool,
    pub(crate) dashboard_loading: bool,
    pub(crate) dashboard_rx: Option<Receiver<Result<DashboardData, String>>>,
    pub(crate) dashboard_error: Option<String>,
    pub(crate) dashboard_last_refresh: Option<Instant>,

    // Backend health, shown in the status bar
    pub(crate) backend_ok: Option<bool>,
    pub(crate) health_rx: Option<Receiver<bool>>,

    // Voice input
    pub(crate) voice: Option<VoiceSession<NativeEngine>>,
    pub(crate) voice_rx: Option<Receiver<VoiceUiEvent>>,
    pub(crate) voice_status: String,
    pub(crate) voice_supported: bool,
    pub(crate) listening: bool,
}

impl RostrApp {
    pub fn new(config: Config) -> Self {
        let client = ApiClient::new(
            &config.settings.api.base_url,
            config.settings.api.timeout_secs,
        );
        let health_rx = Some(tasks::spawn_health_check(client.clone()));
        let (voice_supported, voice_status) = Self::probe_voice(&config);

        Self {
            config,
            client,
            view: ViewMode::Search,
            search_query: String::new(),
            searching: false,
            search_performed: false,
            exact_matches: Vec::new(),
            recommendations: Vec::new(),
            error: None,
            search_rx: None,
            showing_all: false,
            selected: None,
            assign_hours: String::new(),
            assign_in_flight: false,
            assign_feedback: None,
            assign_rx: None,
            dashboard: DashboardData::default(),
            dashboard_loaded: false,
            dashboard_loading: false,
            dashboard_rx: None,
            dashboard_error: None,
            dashboard_last_refresh: None,
            backend_ok: None,
            health_rx,
            voice: None,
            voice_rx: None,
            voice_status,
            voice_supported,
            listening: false,
        }
    }

    /// Apply the light theme to the egui context.
    pub(crate) fn apply_theme(&self, ctx: &egui::Context) {
        let mut style = (*ctx.style()).clone();
        style.visuals.dark_mode = false;
        style.visuals.panel_fill = BG_PRIMARY;
        style.visuals.window_fill = BG_CARD;
        style.visuals.extreme_bg_color = BG_CARD;
        style.visuals.widgets.noninteractive.bg_fill = BG_CARD;
        style.visuals.widgets.inactive.bg_fill = BG_HIGHLIGHT;
        style.visuals.widgets.hovered.bg_fill = BG_HIGHLIGHT;
        style.visuals.widgets.active.bg_fill = BG_HIGHLIGHT;
        style.visuals.selection.bg_fill = BRAND_BLUE;
        style.visuals.selection.stroke = Stroke::new(1.0, TEXT_ON_BRAND);
        style.visuals.override_text_color = Some(TEXT_PRIMARY);
        ctx.set_style(style);
    }

    /// Kick off a ranked search for `query`.
    pub(crate) fn run_search(&mut self, query: String) {
        let query = query.trim().to_string();
        if query.is_empty() {
            self.error = Some("Please enter a search query or use voice command".to_string());
            return;
        }

        self.searching = true;
        self.search_performed = true;
        self.showing_all = false;
        self.error = None;
        self.exact_matches.clear();
        self.recommendations.clear();
        self.search_rx = Some(tasks::spawn_search(
            self.client.clone(),
            SearchKind::Recommend {
                query,
                top_k: self.config.settings.gui.search_top_k,
            },
        ));
    }

    /// Fetch the unranked full listing.
    pub(crate) fn load_all_resources(&mut self) {
        self.searching = true;
        self.search_performed = true;
        self.showing_all = true;
        self.error = None;
        self.exact_matches.clear();
        self.recommendations.clear();
        self.search_rx = Some(tasks::spawn_search(self.client.clone(), SearchKind::All));
    }

    /// Drain all pending channel results. Called once per frame.
    fn poll_background(&mut self) {
        if let Some(rx) = &self.search_rx {
            if let Ok(result) = rx.try_recv() {
                self.search_rx = None;
                self.searching = false;
                match result {
                    Ok(resources) => self.ingest_results(resources),
                    Err(message) => {
                        tracing::warn!("search failed: {message}");
                        self.error = Some(message);
                    }
                }
            }
        }

        if let Some(rx) = &self.assign_rx {
            if let Ok(result) = rx.try_recv() {
                self.assign_rx = None;
                self.assign_in_flight = false;
                match result {
                    Ok((resource, message)) => {
                        self.apply_updated_resource(resource);
                        let message =
                            message.unwrap_or_else(|| "Workload updated successfully".to_string());
                        self.assign_feedback = Some((message, false));
                        self.assign_hours.clear();
                    }
                    Err(message) => {
                        tracing::warn!("workload update failed: {message}");
                        self.assign_feedback = Some((message, true));
                    }
                }
            }
        }

        if let Some(rx) = &self.dashboard_rx {
            if let Ok(result) = rx.try_recv() {
                self.dashboard_rx = None;
                self.dashboard_loading = false;
                match result {
                    Ok(data) => {
                        self.dashboard = data;
                        self.dashboard_loaded = true;
                        self.dashboard_error = None;
                    }
                    Err(message) => {
                        tracing::warn!("dashboard fetch failed: {message}");
                        self.dashboard_error = Some(message);
                    }
                }
                self.dashboard_last_refresh = Some(Instant::now());
            }
        }

        if let Some(rx) = &self.health_rx {
            if let Ok(healthy) = rx.try_recv() {
                self.health_rx = None;
                self.backend_ok = Some(healthy);
            }
        }
    }

    /// Split ranked results at the exact-match threshold and store them.
    fn ingest_results(&mut self, resources: Vec<Resource>) {
        if self.showing_all {
            self.exact_matches = resources;
            return;
        }

        let threshold = self.config.settings.gui.exact_threshold;
        let (exact, recommended) = resources
            .into_iter()
            .partition(|resource| resource.is_exact_match(threshold));
        self.exact_matches = exact;
        self.recommendations = recommended;
    }

    /// Write an updated resource back into every list that shows it.
    pub(crate) fn apply_updated_resource(&mut self, updated: Resource) {
        for list in [&mut self.exact_matches, &mut self.recommendations] {
            for resource in list.iter_mut() {
                if resource.id == updated.id {
                    let score = resource.match_score;
                    let reason = resource.recommendation_reason.clone();
                    *resource = updated.clone();
                    // Ranked metadata is not part of the update response
                    resource.match_score = score;
                    resource.recommendation_reason = reason;
                }
            }
        }
        if let Some(selected) = &mut self.selected {
            if selected.id == updated.id {
                let score = selected.match_score;
                let reason = selected.recommendation_reason.clone();
                *selected = updated;
                selected.match_score = score;
                selected.recommendation_reason = reason;
            }
        }
    }

    /// Top navigation: brand block plus the two page buttons.
    fn render_header(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("header")
            .frame(egui::Frame::NONE.fill(BG_CARD).inner_margin(12.0))
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.label(
                        RichText::new("rostr")
                            .size(22.0)
                            .strong()
                            .color(BRAND_BLUE),
                    );
                    ui.label(
                        RichText::new("AI-Powered Task Assignment & Skill Matching")
                            .small()
                            .color(TEXT_MUTED),
                    );

                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        self.nav_button(ui, ViewMode::Dashboard, "📊 Dashboard");
                        self.nav_button(ui, ViewMode::Search, "🔍 Find Resources");
                    });
                });
            });
    }

    fn nav_button(&mut self, ui: &mut egui::Ui, target: ViewMode, label: &str) {
        let active = self.view == target;
        let text = if active {
            RichText::new(label).color(TEXT_ON_BRAND).strong()
        } else {
            RichText::new(label).color(TEXT_PRIMARY)
        };
        let button = egui::Button::new(text).fill(if active { BRAND_BLUE } else { BG_HIGHLIGHT });
        if ui.add(button).clicked() && !active {
            self.view = target;
            if target == ViewMode::Dashboard {
                self.refresh_dashboard_if_stale();
            }
        }
    }

    /// True while any worker thread is outstanding; keeps frames coming.
    fn has_background_work(&self) -> bool {
        self.search_rx.is_some()
            || self.assign_rx.is_some()
            || self.dashboard_rx.is_some()
            || self.health_rx.is_some()
            || self.listening
    }
}

impl eframe::App for RostrApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.apply_theme(ctx);

        self.poll_voice();
        self.poll_background();

        self.render_header(ctx);
        super::status_bar::render_status_bar(ctx, self);

        match self.view {
            ViewMode::Search => self.render_search(ctx),
            ViewMode::Dashboard => self.render_dashboard(ctx),
        }

        if self.selected.is_some() {
            self.render_profile_modal(ctx);
        }

        // Channels and the voice silence deadline are polled per frame, so
        // keep frames coming while anything is pending.
        if self.has_background_work() {
            ctx.request_repaint_after(std::time::Duration::from_millis(100));
        }
    }
}
