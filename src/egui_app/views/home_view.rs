use eframe::egui;

use crate::egui_app::state::AppState;
use crate::egui_app::theme::colors;
use crate::egui_app::types::{GeoPanelState, SearchPanelState};
use crate::shared::geo::GeoRecord;

pub fn render(ui: &mut egui::Ui, state: &mut AppState) {
    ui.add_space(16.0);
    ui.horizontal_top(|ui| {
        ui.add_space(16.0);
        own_geo_panel(ui, state);
        ui.add_space(16.0);
        search_panel(ui, state);
        ui.add_space(16.0);
        history_panel(ui, state);
    });
}

fn card() -> egui::Frame {
    egui::Frame::default()
        .fill(colors::CARD_BG)
        .corner_radius(egui::CornerRadius::same(6))
        .inner_margin(egui::Margin::same(12))
}

fn own_geo_panel(ui: &mut egui::Ui, state: &AppState) {
    card().show(ui, |ui| {
        ui.set_width(240.0);
        ui.label(
            egui::RichText::new("Your IP")
                .size(16.0)
                .strong()
                .color(colors::TEXT_LIGHT),
        );
        ui.add_space(8.0);

        match &state.own_geo {
            GeoPanelState::Idle | GeoPanelState::Loading => {
                loading_row(ui);
            }
            GeoPanelState::Ready(record) => record_fields(ui, record),
            GeoPanelState::Failed(_) => {
                ui.colored_label(colors::ERROR, "Failed fetching IP");
            }
        }
    });
}

fn search_panel(ui: &mut egui::Ui, state: &mut AppState) {
    card().show(ui, |ui| {
        ui.set_width(340.0);

        ui.horizontal(|ui| {
            let response = ui.add_sized(
                [260.0, 24.0],
                egui::TextEdit::singleline(&mut state.search_input)
                    .hint_text("Type an IP address")
                    .text_color(colors::TEXT_LIGHT),
            );
            let submitted =
                response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
            if ui.button("Show").clicked() || submitted {
                state.handle_search();
            }
        });
        ui.add_space(10.0);

        match &state.search {
            SearchPanelState::Idle => {}
            SearchPanelState::Loading => loading_row(ui),
            SearchPanelState::InvalidIp => {
                ui.colored_label(colors::ERROR, "Invalid IP");
            }
            SearchPanelState::LookupFailed(_) => {
                ui.colored_label(colors::ERROR, "Failed fetching IP");
            }
            SearchPanelState::Ready(record) => record_fields(ui, record),
        }
    });
}

fn history_panel(ui: &mut egui::Ui, state: &AppState) {
    card().show(ui, |ui| {
        ui.set_width(280.0);
        ui.label(
            egui::RichText::new("Search History")
                .size(16.0)
                .strong()
                .color(colors::TEXT_LIGHT),
        );
        if state.history_save_error.is_some() {
            ui.add_space(4.0);
            ui.colored_label(colors::ERROR, "Failed to save search to history");
        }
        ui.add_space(8.0);

        egui::ScrollArea::vertical().max_height(420.0).show(ui, |ui| {
            for record in &state.history {
                egui::Frame::default()
                    .fill(colors::BG_DARK)
                    .corner_radius(egui::CornerRadius::same(6))
                    .inner_margin(egui::Margin::same(8))
                    .show(ui, |ui| {
                        ui.set_width(240.0);
                        record_fields(ui, record);
                    });
                ui.add_space(6.0);
            }
        });
    });
}

fn loading_row(ui: &mut egui::Ui) {
    ui.horizontal(|ui| {
        ui.spinner();
        ui.colored_label(colors::TEXT_SECONDARY, "Loading...");
    });
}

fn record_fields(ui: &mut egui::Ui, record: &GeoRecord) {
    field_row(ui, "IP", &record.ip);
    field_row(ui, "City", &record.city);
    field_row(ui, "Region", &record.region);
    field_row(ui, "Country", &record.country);
    field_row(ui, "Location", &record.loc);
    field_row(ui, "Postal", record.postal.as_deref().unwrap_or(""));
    field_row(ui, "Timezone", record.timezone.as_deref().unwrap_or(""));
}

fn field_row(ui: &mut egui::Ui, label: &str, value: &str) {
    ui.horizontal(|ui| {
        ui.label(
            egui::RichText::new(format!("{}:", label))
                .strong()
                .color(colors::TEXT_SECONDARY),
        );
        ui.colored_label(colors::TEXT_LIGHT, value);
    });
}
