use eframe::egui;

use crate::egui_app::state::AppState;
use crate::egui_app::theme::colors;
use crate::egui_app::types::AppView;

/// The registration form posts to the server and the outcome is only
/// logged; the view never navigates or surfaces the result.
pub fn render(ui: &mut egui::Ui, state: &mut AppState) {
    let available_rect = ui.available_rect_before_wrap();
    ui.painter().rect_filled(available_rect, 0.0, colors::BG_DARK);

    ui.scope_builder(egui::UiBuilder::new().max_rect(available_rect), |ui| {
        ui.vertical_centered(|ui| {
            let top_space = (available_rect.height() - 360.0).max(0.0) / 2.0;
            ui.add_space(top_space);

            ui.label(
                egui::RichText::new("Register")
                    .size(24.0)
                    .strong()
                    .color(colors::TEXT_LIGHT),
            );
            ui.add_space(20.0);

            let input_width = 280.0;
            let label_width = 80.0;

            ui.horizontal(|ui| {
                ui.add_space((available_rect.width() - input_width - label_width - 20.0) / 2.0);
                ui.add_sized(
                    [label_width, 24.0],
                    egui::Label::new(egui::RichText::new("Name:").color(colors::TEXT_SECONDARY)),
                );
                ui.add_sized(
                    [input_width, 28.0],
                    egui::TextEdit::singleline(&mut state.name_input)
                        .text_color(colors::TEXT_LIGHT),
                );
            });
            ui.add_space(8.0);

            ui.horizontal(|ui| {
                ui.add_space((available_rect.width() - input_width - label_width - 20.0) / 2.0);
                ui.add_sized(
                    [label_width, 24.0],
                    egui::Label::new(egui::RichText::new("Email:").color(colors::TEXT_SECONDARY)),
                );
                ui.add_sized(
                    [input_width, 28.0],
                    egui::TextEdit::singleline(&mut state.email_input)
                        .text_color(colors::TEXT_LIGHT),
                );
            });
            ui.add_space(8.0);

            ui.horizontal(|ui| {
                ui.add_space((available_rect.width() - input_width - label_width - 20.0) / 2.0);
                ui.add_sized(
                    [label_width, 24.0],
                    egui::Label::new(
                        egui::RichText::new("Password:").color(colors::TEXT_SECONDARY),
                    ),
                );
                ui.add_sized(
                    [input_width - 30.0, 28.0],
                    egui::TextEdit::singleline(&mut state.password_input)
                        .password(!state.show_password)
                        .text_color(colors::TEXT_LIGHT),
                );
                if ui
                    .small_button(if state.show_password { "🙈" } else { "👁" })
                    .clicked()
                {
                    state.show_password = !state.show_password;
                }
            });

            ui.add_space(20.0);

            if ui
                .add_sized(
                    [120.0, 32.0],
                    egui::Button::new(
                        egui::RichText::new("Register").color(colors::TEXT_LIGHT),
                    )
                    .fill(colors::ACCENT),
                )
                .clicked()
            {
                state.handle_register();
            }

            ui.add_space(15.0);
            ui.label(
                egui::RichText::new("Already have an account?").color(colors::TEXT_SECONDARY),
            );
            if ui
                .link(egui::RichText::new("Login").color(colors::TEXT_LIGHT))
                .clicked()
            {
                state.current_view = AppView::Login;
                state.password_input.clear();
            }
        });
    });
}
