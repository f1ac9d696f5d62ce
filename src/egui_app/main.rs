//! egui Native Desktop App - Main Entry Point

use eframe::egui;
use ipgeo::egui_app::{views, AppState, AppView};

fn main() -> Result<(), eframe::Error> {
    let env_filter = std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(&env_filter))
        .init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1100.0, 720.0])
            .with_min_inner_size([800.0, 560.0]),
        ..Default::default()
    };
    eframe::run_native(
        "IPGeo",
        options,
        Box::new(|_cc| Ok(Box::new(IpGeoApp::default()))),
    )
}

/// Main application shell
struct IpGeoApp {
    state: AppState,
}

impl Default for IpGeoApp {
    fn default() -> Self {
        Self {
            state: AppState::new(),
        }
    }
}

impl eframe::App for IpGeoApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.state.check_pending_results();

        // Guard before anything draws: a guarded view without a session
        // never renders a panel.
        self.state.guard_routes();
        if self.state.current_view == AppView::Home {
            self.state.ensure_home_loaded();
        }

        views::render_top_bar(ctx, &mut self.state);
        views::render_main_panel(ctx, &mut self.state);

        ctx.request_repaint();
    }
}
