use echoroom_common::{User, UserId};
use egui::{RichText, ScrollArea};

use crate::app::EchoRoomApp;
use crate::store::QueryKey;

pub fn show(app: &mut EchoRoomApp, ui: &mut egui::Ui) {
    ScrollArea::vertical().auto_shrink([false; 2]).show(ui, |ui| {
        friends_section(app, ui);
        ui.add_space(16.0);
        recommendations_section(app, ui);
    });
}

fn friends_section(app: &mut EchoRoomApp, ui: &mut egui::Ui) {
    ui.heading("Your Friends");
    ui.add_space(4.0);

    let error_color = ui.visuals().error_fg_color;
    let mut retry = false;
    if let Some(message) = app.store.friends.error() {
        ui.label(RichText::new(message).color(error_color));
        retry = ui.button("Retry").clicked();
    }
    match app.store.friends.data() {
        None => {
            if app.store.friends.is_fetching() {
                ui.spinner();
            }
        }
        Some(friends) if friends.is_empty() => {
            ui.group(|ui| {
                ui.label(RichText::new("No friends yet").strong());
                ui.label("Connect with language partners below to start practicing together!");
            });
        }
        Some(friends) => {
            for friend in friends {
                friend_card(ui, friend);
                ui.add_space(6.0);
            }
        }
    }
    if retry {
        app.retry(QueryKey::Friends);
    }
}

fn recommendations_section(app: &mut EchoRoomApp, ui: &mut egui::Ui) {
    ui.heading("Meet New Friends");
    ui.label(RichText::new("Find people who vibe with your interests").weak());
    ui.add_space(4.0);

    let error_color = ui.visuals().error_fg_color;
    let mut retry = false;
    let mut send_to: Option<UserId> = None;

    if let Some(message) = app.store.recommended.error() {
        ui.label(RichText::new(message).color(error_color));
        retry = ui.button("Retry").clicked();
    }
    match app.store.recommended.data() {
        None => {
            if app.store.recommended.is_fetching() {
                ui.spinner();
            }
        }
        Some(users) if users.is_empty() => {
            ui.group(|ui| {
                ui.label(RichText::new("No recommendations available").strong());
                ui.label("Check back later for new connections!");
            });
        }
        Some(users) => {
            for user in users {
                let sent = app.request_already_sent(&user.id);
                let pending = app.send_pending(&user.id);
                if recommendation_card(ui, user, sent, pending) {
                    send_to = Some(user.id.clone());
                }
                ui.add_space(6.0);
            }
        }
    }

    if retry {
        app.retry(QueryKey::RecommendedUsers);
    }
    if let Some(recipient) = send_to {
        app.send_friend_request(&recipient);
    }
}

fn friend_card(ui: &mut egui::Ui, user: &User) {
    ui.group(|ui| {
        ui.label(RichText::new(&user.full_name).strong());
        if !user.profile_pic.is_empty() {
            ui.label(RichText::new(&user.profile_pic).weak().small());
        }
        if !user.bio.is_empty() {
            ui.label(format!("Bio: {}", user.bio));
        }
        profile_badges(ui, user);
    });
}

/// Returns true when the add-friend button was clicked.
fn recommendation_card(ui: &mut egui::Ui, user: &User, sent: bool, pending: bool) -> bool {
    let mut clicked = false;
    ui.group(|ui| {
        ui.horizontal(|ui| {
            ui.label(RichText::new(&user.full_name).strong());
            if !user.location.is_empty() {
                ui.label(RichText::new(&user.location).weak());
            }
        });
        if !user.profile_pic.is_empty() {
            ui.label(RichText::new(&user.profile_pic).weak().small());
        }
        if !user.bio.is_empty() {
            ui.label(RichText::new(&user.bio).italics());
        }
        profile_badges(ui, user);
        ui.add_space(2.0);
        let label = if sent {
            "Request Sent"
        } else if pending {
            "Sending..."
        } else {
            "Add Friend"
        };
        clicked = ui
            .add_enabled(!sent && !pending, egui::Button::new(label))
            .clicked();
    });
    clicked
}

fn profile_badges(ui: &mut egui::Ui, user: &User) {
    if !user.current_book.is_empty() {
        ui.label(format!("Reading: {}", user.current_book));
    }
    if !user.interests.is_empty() {
        ui.label(format!("Hobby: {}", user.interests));
    }
}
