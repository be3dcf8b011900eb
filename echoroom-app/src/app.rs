//! Application state and the per-frame update loop.
//!
//! All state lives on the UI thread. Worker results are drained at the
//! top of every frame, folded into the query store, and the page to show
//! is derived from the auth snapshot rather than stored anywhere.

use std::collections::HashSet;
use std::sync::mpsc::Receiver;

use eframe::emath::Align2;
use egui::WidgetText;
use egui_toast::{Toast, ToastKind, ToastOptions, Toasts};
use tokio::sync::mpsc::UnboundedSender;
use tracing::info;

use echoroom_common::{User, UserId};

use crate::forms::{random_avatar_url, OnboardingForm, SignupForm};
use crate::reconcile;
use crate::store::{QueryKey, QueryStore};
use crate::views;
use crate::worker::{Command, Update};

/// Which page is on screen. Never stored, always derived: no profile
/// means signup, a profile that has not finished onboarding means
/// onboarding, anything else means home.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Loading,
    Signup,
    Onboarding,
    Home,
}

pub struct EchoRoomApp {
    pub store: QueryStore,
    /// Recipients of the pending outgoing requests, rebuilt from every
    /// outgoing snapshot. Keeps "Add Friend" buttons honest across
    /// refetches.
    outgoing_ids: HashSet<UserId>,
    /// Targets with a send currently in flight. Per target, so sending to
    /// one user never blocks the button for another.
    pending_sends: HashSet<UserId>,
    pub signup: SignupForm,
    pub onboarding: OnboardingForm,
    onboarding_seeded: bool,
    commands: UnboundedSender<Command>,
    updates: Receiver<Update>,
    toasts: Toasts,
}

impl EchoRoomApp {
    pub fn new(commands: UnboundedSender<Command>, updates: Receiver<Update>) -> Self {
        Self {
            store: QueryStore::default(),
            outgoing_ids: HashSet::new(),
            pending_sends: HashSet::new(),
            signup: SignupForm::default(),
            onboarding: OnboardingForm::default(),
            onboarding_seeded: false,
            commands,
            updates,
            toasts: Toasts::new()
                .anchor(Align2::LEFT_TOP, (10.0, 10.0))
                .direction(egui::Direction::TopDown),
        }
    }

    pub fn route(&self) -> Route {
        match self.store.auth_user.data() {
            None => Route::Loading,
            Some(None) => Route::Signup,
            Some(Some(user)) if !user.is_onboarded => Route::Onboarding,
            Some(Some(_)) => Route::Home,
        }
    }

    pub fn auth_user(&self) -> Option<&User> {
        self.store.auth_user.data().and_then(|user| user.as_ref())
    }

    fn dispatch(&self, command: Command) {
        // A closed channel means the worker is gone, which only happens
        // during shutdown.
        let _ = self.commands.send(command);
    }

    pub fn ensure_fresh(&mut self, key: QueryKey) {
        if self.store.needs_fetch(key) {
            self.store.begin(key);
            self.dispatch(Command::Fetch(key));
        }
    }

    pub fn retry(&mut self, key: QueryKey) {
        self.store.invalidate(key);
    }

    pub fn request_already_sent(&self, recipient: &UserId) -> bool {
        self.outgoing_ids.contains(recipient)
    }

    pub fn send_pending(&self, recipient: &UserId) -> bool {
        self.pending_sends.contains(recipient)
    }

    /// Send a friend request unless one is already pending or on record
    /// for this target, in which case this is a no-op.
    pub fn send_friend_request(&mut self, recipient: &UserId) {
        if self.request_already_sent(recipient) || self.send_pending(recipient) {
            return;
        }
        self.pending_sends.insert(recipient.clone());
        self.dispatch(Command::SendFriendRequest(recipient.clone()));
    }

    pub fn submit_signup(&mut self) {
        if self.signup.submitting {
            return;
        }
        match self.signup.validate() {
            Ok(request) => {
                self.signup.error = None;
                self.signup.submitting = true;
                self.dispatch(Command::Signup(request));
            }
            Err(message) => self.signup.error = Some(message),
        }
    }

    pub fn submit_onboarding(&mut self) {
        if self.onboarding.submitting {
            return;
        }
        self.onboarding.submitting = true;
        self.dispatch(Command::CompleteOnboarding(self.onboarding.to_profile()));
    }

    pub fn shuffle_avatar(&mut self) {
        self.onboarding.profile_pic = random_avatar_url(&mut rand::thread_rng());
        self.toast(ToastKind::Success, "Random profile picture generated!");
    }

    fn toast(&mut self, kind: ToastKind, text: impl Into<WidgetText>) {
        self.toasts.add(Toast {
            kind,
            text: text.into(),
            options: ToastOptions::default()
                .duration_in_seconds(4.0)
                .show_progress(true)
                .show_icon(true),
        });
    }

    /// Fold one worker result into the UI state.
    pub fn apply(&mut self, update: Update) {
        match update {
            Update::AuthUser(result) => match result {
                Ok(user) => {
                    if let Some(user) = &user {
                        // Seed the onboarding form the first time a profile
                        // shows up; later refetches must not clobber edits
                        // in progress.
                        if !self.onboarding_seeded {
                            self.onboarding = OnboardingForm::from_profile(user);
                            self.onboarding_seeded = true;
                        }
                    }
                    self.store.auth_user.resolve(Ok(user));
                }
                Err(err) => self.store.auth_user.resolve(Err(err.user_message())),
            },
            Update::Friends(result) => {
                self.store.friends.resolve(result.map_err(|e| e.user_message()));
            }
            Update::Recommended(result) => {
                self.store.recommended.resolve(result.map_err(|e| e.user_message()));
            }
            Update::Outgoing(result) => match result {
                Ok(requests) => {
                    self.outgoing_ids = reconcile::outgoing_recipient_ids(&requests);
                    self.store.outgoing.resolve(Ok(requests));
                }
                Err(err) => self.store.outgoing.resolve(Err(err.user_message())),
            },
            Update::RequestSent { recipient, result } => {
                self.pending_sends.remove(&recipient);
                match result {
                    Ok(()) => self.store.invalidate(QueryKey::OutgoingRequests),
                    Err(err) => self.toast(
                        ToastKind::Error,
                        format!("Could not send friend request: {}", err.user_message()),
                    ),
                }
            }
            Update::SignedUp(result) => {
                self.signup.submitting = false;
                match result {
                    Ok(user) => {
                        info!(user = %user.id, "account created");
                        self.signup.error = None;
                        self.store.invalidate(QueryKey::AuthUser);
                    }
                    // The form keeps its values so the user can correct
                    // and resubmit.
                    Err(err) => self.signup.error = Some(err.user_message()),
                }
            }
            Update::Onboarded(result) => {
                self.onboarding.submitting = false;
                match result {
                    Ok(user) => {
                        info!(user = %user.id, "onboarding complete");
                        self.toast(ToastKind::Success, "Profile onboarded successfully");
                        self.store.invalidate(QueryKey::AuthUser);
                    }
                    Err(err) => self.toast(ToastKind::Error, err.user_message()),
                }
            }
        }
    }
}

impl eframe::App for EchoRoomApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        while let Ok(update) = self.updates.try_recv() {
            self.apply(update);
        }

        self.ensure_fresh(QueryKey::AuthUser);
        let route = self.route();
        if route == Route::Home {
            self.ensure_fresh(QueryKey::Friends);
            self.ensure_fresh(QueryKey::RecommendedUsers);
            self.ensure_fresh(QueryKey::OutgoingRequests);

            egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.heading("EchoRoom");
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        if let Some(user) = self.auth_user() {
                            ui.label(&user.full_name);
                        }
                    });
                });
            });
        }

        egui::CentralPanel::default().show(ctx, |ui| match route {
            Route::Loading => views::loading(self, ui),
            Route::Signup => views::signup::show(self, ui),
            Route::Onboarding => views::onboarding::show(self, ui),
            Route::Home => views::home::show(self, ui),
        });

        self.toasts.show(ctx);
    }
}
