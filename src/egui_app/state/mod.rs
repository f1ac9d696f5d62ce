use std::sync::mpsc::{channel, Receiver};

use crate::egui_app::auth;
use crate::egui_app::config::Config;
use crate::egui_app::geo_api::GeoApiClient;
use crate::egui_app::history_api::HistoryApiClient;
use crate::egui_app::types::{AppView, GeoPanelState, SearchPanelState};
use crate::egui_app::validator::is_valid_ip;
use crate::shared::geo::GeoRecord;

/// Own-geo worker result: discovery then resolution, either step can fail.
pub type OwnGeoResult = Result<GeoRecord, String>;
/// History list worker result.
pub type HistoryListResult = Result<Vec<GeoRecord>, String>;
/// Search worker result; `Err` means the lookup itself failed.
pub type SearchResult = Result<SearchSuccess, String>;
/// Logout worker result.
pub type LogoutResult = Result<(), String>;
/// Register worker result carrying the raw response body.
pub type RegisterResult = Result<String, String>;

/// A successful lookup plus the outcome of the follow-up history save.
/// The save is reported separately so a persistence failure cannot mask
/// the record that was found.
#[derive(Debug)]
pub struct SearchSuccess {
    pub record: GeoRecord,
    pub saved: Result<(), String>,
}

/// Central application state shared across egui views.
///
/// Each network operation owns exactly one pending-receiver slot.
/// Starting a new request replaces the receiver, so the response of a
/// superseded request is dropped unread instead of overwriting newer
/// state.
pub struct AppState {
    pub config: Config,
    pub current_view: AppView,

    /// Login and register form inputs
    pub name_input: String,
    pub email_input: String,
    pub password_input: String,
    pub show_password: bool,
    /// Out-of-band session token entry on the login view
    pub token_input: String,

    /// Search form input
    pub search_input: String,

    pub own_geo: GeoPanelState,
    pub search: SearchPanelState,
    pub history: Vec<GeoRecord>,
    /// Set when a looked-up record could not be persisted to history,
    /// independent of the lookup outcome.
    pub history_save_error: Option<String>,

    pub pending_own_geo: Option<Receiver<OwnGeoResult>>,
    pub pending_search: Option<Receiver<SearchResult>>,
    pub pending_history: Option<Receiver<HistoryListResult>>,
    pub pending_logout: Option<Receiver<LogoutResult>>,
    pub pending_register: Option<Receiver<RegisterResult>>,

    /// Whether the home view has kicked off its initial fetches
    pub home_initialized: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            config: Config::new(),
            current_view: AppView::Login,
            name_input: String::new(),
            email_input: String::new(),
            password_input: String::new(),
            show_password: false,
            token_input: String::new(),
            search_input: String::new(),
            own_geo: GeoPanelState::Idle,
            search: SearchPanelState::Idle,
            history: Vec::new(),
            history_save_error: None,
            pending_own_geo: None,
            pending_search: None,
            pending_history: None,
            pending_logout: None,
            pending_register: None,
            home_initialized: false,
        }
    }

    /// Keep views and session consistent; runs every frame before
    /// rendering, so a guarded view never draws a single panel without a
    /// session.
    pub fn guard_routes(&mut self) {
        if self.current_view == AppView::Home && !self.config.has_session() {
            self.current_view = AppView::Login;
        }
        if self.current_view == AppView::Register && self.config.has_session() {
            self.current_view = AppView::Home;
        }
    }

    /// Kick off the initial home fetches exactly once per session.
    pub fn ensure_home_loaded(&mut self) {
        if self.home_initialized {
            return;
        }
        self.home_initialized = true;
        self.refresh_own_geo();
        self.refresh_history();
    }

    /// Establish a session from a token obtained out-of-band.
    pub fn submit_token(&mut self) {
        let token = self.token_input.trim().to_string();
        if token.is_empty() {
            return;
        }
        tracing::info!("session token entered");
        self.config.set_token(Some(token));
        self.token_input.clear();
        self.password_input.clear();
        self.current_view = AppView::Home;
    }

    /// Discover the caller's public IP, then resolve it. Both steps run
    /// on one worker; a discovery failure fails the panel without
    /// attempting resolution.
    pub fn refresh_own_geo(&mut self) {
        self.own_geo = GeoPanelState::Loading;

        let (tx, rx) = channel();
        std::thread::spawn(move || {
            let api = GeoApiClient::new();
            let result = api.fetch_own_ip().and_then(|ip| api.fetch_geo(&ip));
            let _ = tx.send(result);
        });

        self.pending_own_geo = Some(rx);
    }

    /// Validate the search input and, if it is a usable IP, look it up
    /// and persist the result. Invalid input never reaches the network.
    pub fn handle_search(&mut self) {
        let input = self.search_input.trim().to_string();
        self.history_save_error = None;

        if !is_valid_ip(&input) {
            self.search = SearchPanelState::InvalidIp;
            self.pending_search = None;
            return;
        }

        self.search = SearchPanelState::Loading;

        let config = self.config.clone();
        let (tx, rx) = channel();
        std::thread::spawn(move || {
            let api = GeoApiClient::new();
            let result = match api.fetch_geo(&input) {
                Ok(record) => {
                    let saved = HistoryApiClient::new(config).create(&record);
                    Ok(SearchSuccess { record, saved })
                }
                Err(e) => Err(e),
            };
            let _ = tx.send(result);
        });

        self.pending_search = Some(rx);
    }

    /// Reload the history list from the server.
    pub fn refresh_history(&mut self) {
        let config = self.config.clone();
        let (tx, rx) = channel();
        std::thread::spawn(move || {
            let result = HistoryApiClient::new(config).list();
            let _ = tx.send(result);
        });

        self.pending_history = Some(rx);
    }

    /// Submit the registration form. The outcome is only logged; the
    /// view does not navigate or surface it.
    pub fn handle_register(&mut self) {
        if self.name_input.is_empty() || self.email_input.is_empty() || self.password_input.is_empty()
        {
            return;
        }

        let name = self.name_input.clone();
        let email = self.email_input.clone();
        let password = self.password_input.clone();
        let config = self.config.clone();

        let (tx, rx) = channel();
        std::thread::spawn(move || {
            let result = auth::register(&config, name, email, password);
            let _ = tx.send(result);
        });

        self.pending_register = Some(rx);
    }

    /// End the session server-side; the local token is cleared only once
    /// the server confirms.
    pub fn handle_logout(&mut self) {
        if !self.config.has_session() {
            return;
        }

        let config = self.config.clone();
        let (tx, rx) = channel();
        std::thread::spawn(move || {
            let result = auth::logout(&config);
            let _ = tx.send(result);
        });

        self.pending_logout = Some(rx);
    }

    /// Poll every pending worker once; called at the top of each frame.
    pub fn check_pending_results(&mut self) {
        if let Some(ref rx) = self.pending_own_geo {
            if let Ok(result) = rx.try_recv() {
                self.pending_own_geo = None;
                match result {
                    Ok(record) => {
                        self.own_geo = GeoPanelState::Ready(record);
                    }
                    Err(e) => {
                        tracing::error!("own-geo lookup failed: {}", e);
                        self.own_geo = GeoPanelState::Failed(e);
                    }
                }
            }
        }

        if let Some(ref rx) = self.pending_search {
            if let Ok(result) = rx.try_recv() {
                self.pending_search = None;
                match result {
                    Ok(SearchSuccess { record, saved }) => {
                        self.search = SearchPanelState::Ready(record);
                        match saved {
                            Ok(()) => self.refresh_history(),
                            Err(e) => {
                                tracing::error!("history save failed: {}", e);
                                self.history_save_error = Some(e);
                            }
                        }
                    }
                    Err(e) => {
                        tracing::error!("search lookup failed: {}", e);
                        self.search = SearchPanelState::LookupFailed(e);
                    }
                }
            }
        }

        if let Some(ref rx) = self.pending_history {
            if let Ok(result) = rx.try_recv() {
                self.pending_history = None;
                match result {
                    Ok(records) => {
                        self.history = records;
                    }
                    Err(e) => {
                        // The list on screen stays as-is.
                        tracing::warn!("history fetch failed: {}", e);
                    }
                }
            }
        }

        if let Some(ref rx) = self.pending_logout {
            if let Ok(result) = rx.try_recv() {
                self.pending_logout = None;
                match result {
                    Ok(()) => {
                        self.config.clear_token();
                        self.reset_to_login();
                    }
                    Err(e) => {
                        tracing::error!("error logging out: {}", e);
                    }
                }
            }
        }

        if let Some(ref rx) = self.pending_register {
            if let Ok(result) = rx.try_recv() {
                self.pending_register = None;
                match result {
                    Ok(body) => {
                        tracing::info!("registration response: {}", body);
                    }
                    Err(e) => {
                        tracing::error!("registration failed: {}", e);
                    }
                }
            }
        }
    }

    /// Drop all per-session state and return to the login view.
    fn reset_to_login(&mut self) {
        self.current_view = AppView::Login;
        self.name_input.clear();
        self.email_input.clear();
        self.password_input.clear();
        self.token_input.clear();
        self.search_input.clear();
        self.own_geo = GeoPanelState::Idle;
        self.search = SearchPanelState::Idle;
        self.history.clear();
        self.history_save_error = None;
        self.pending_own_geo = None;
        self.pending_search = None;
        self.pending_history = None;
        self.pending_register = None;
        self.home_initialized = false;
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
