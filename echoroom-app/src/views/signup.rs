use egui::{RichText, TextEdit};

use crate::app::EchoRoomApp;

pub fn show(app: &mut EchoRoomApp, ui: &mut egui::Ui) {
    let error_color = ui.visuals().error_fg_color;

    ui.heading("EchoRoom");
    ui.label("Create an Account");
    ui.label(
        RichText::new("Join EchoRoom and start your language learning adventure!").weak(),
    );
    ui.add_space(8.0);

    if let Some(error) = &app.signup.error {
        ui.label(RichText::new(error).color(error_color));
        ui.add_space(4.0);
    }

    ui.label("Full Name");
    ui.add(TextEdit::singleline(&mut app.signup.full_name).hint_text("John Doe"));
    ui.add_space(4.0);

    ui.label("Email");
    ui.add(TextEdit::singleline(&mut app.signup.email).hint_text("john@gmail.com"));
    ui.add_space(4.0);

    ui.label("Password");
    ui.add(
        TextEdit::singleline(&mut app.signup.password)
            .password(true)
            .hint_text("********"),
    );
    ui.label(RichText::new("Password must be at least 6 characters long").weak().small());
    ui.add_space(4.0);

    ui.checkbox(
        &mut app.signup.terms_accepted,
        "I agree to the terms of service and privacy policy",
    );
    ui.add_space(8.0);

    let label = if app.signup.submitting {
        "Loading..."
    } else {
        "Create Account"
    };
    if ui
        .add_enabled(!app.signup.submitting, egui::Button::new(label))
        .clicked()
    {
        app.submit_signup();
    }
}
