//! Anything that mutates the app is deferred to the end of each view
//! function so render borrows stay simple.

pub mod home;
pub mod onboarding;
pub mod signup;

use egui::RichText;

use crate::app::EchoRoomApp;
use crate::store::QueryKey;

/// Splash shown until the first auth check comes back. If that check
/// failed there is no sensible page to pick, so the error sits here with
/// a retry.
pub fn loading(app: &mut EchoRoomApp, ui: &mut egui::Ui) {
    let error_color = ui.visuals().error_fg_color;
    let mut retry = false;
    ui.vertical_centered(|ui| {
        ui.add_space(ui.available_height() * 0.4);
        ui.heading("EchoRoom");
        ui.add_space(8.0);
        match app.store.auth_user.error() {
            Some(message) => {
                ui.label(RichText::new(message).color(error_color));
                retry = ui.button("Retry").clicked();
            }
            None => {
                ui.spinner();
            }
        }
    });
    if retry {
        app.retry(QueryKey::AuthUser);
    }
}
