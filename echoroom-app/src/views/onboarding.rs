use egui::{ComboBox, RichText, ScrollArea, TextEdit};

use crate::app::EchoRoomApp;
use crate::catalog;

pub fn show(app: &mut EchoRoomApp, ui: &mut egui::Ui) {
    ScrollArea::vertical().auto_shrink([false; 2]).show(ui, |ui| {
        ui.heading("Let the Echo Begin");
        ui.label(
            RichText::new("Tell us a bit about yourself — someone out there is waiting to hear you.")
                .weak(),
        );
        ui.add_space(8.0);

        if app.onboarding.profile_pic.is_empty() {
            ui.label(RichText::new("No profile picture yet").weak());
        } else {
            ui.label(RichText::new(&app.onboarding.profile_pic).weak().small());
        }
        if ui.button("Generate Avatar").clicked() {
            app.shuffle_avatar();
        }
        ui.add_space(8.0);

        ui.label("Full Name");
        ui.add(TextEdit::singleline(&mut app.onboarding.full_name).hint_text("Your full name"));
        ui.add_space(4.0);

        ui.label("Bio");
        ui.add(
            TextEdit::multiline(&mut app.onboarding.bio)
                .hint_text("Share your story")
                .desired_rows(3),
        );
        ui.add_space(4.0);

        ui.label("Location");
        ui.add(TextEdit::singleline(&mut app.onboarding.location).hint_text("City, Country"));
        ui.add_space(4.0);

        catalog_select(
            ui,
            "Currently Reading",
            "Select a book",
            catalog::BOOKS,
            &mut app.onboarding.current_book,
        );
        catalog_select(
            ui,
            "Currently Watching",
            "Select a show",
            catalog::SHOWS,
            &mut app.onboarding.current_show,
        );
        catalog_select(
            ui,
            "Hobbies / Interests",
            "Select hobbies",
            catalog::HOBBIES,
            &mut app.onboarding.interests,
        );

        ui.add_space(8.0);
        let label = if app.onboarding.submitting {
            "Onboarding..."
        } else {
            "Complete Onboarding"
        };
        if ui
            .add_enabled(!app.onboarding.submitting, egui::Button::new(label))
            .clicked()
        {
            app.submit_onboarding();
        }
    });
}

/// The empty choice means "not set".
fn catalog_select(
    ui: &mut egui::Ui,
    label: &str,
    placeholder: &str,
    options: &[&str],
    value: &mut String,
) {
    ui.label(label);
    let selected = if value.is_empty() {
        placeholder.to_string()
    } else {
        value.clone()
    };
    ComboBox::from_id_source(label)
        .selected_text(selected)
        .show_ui(ui, |ui| {
            ui.selectable_value(value, String::new(), placeholder);
            for option in options {
                ui.selectable_value(value, option.to_string(), *option);
            }
        });
    ui.add_space(4.0);
}
