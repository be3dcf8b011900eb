//! The async side of the app.
//!
//! Views never await anything. They push commands into a channel, the
//! worker runs each one as its own task so fetches for different
//! resources proceed independently, and every completion comes back to
//! the UI thread as an update plus a repaint request.

use echoroom_client::{ApiClient, ApiError};
use echoroom_common::{FriendRequest, OnboardingProfile, SignupRequest, User, UserId};
use tokio::sync::mpsc::UnboundedReceiver;

use crate::store::QueryKey;

#[derive(Debug)]
pub enum Command {
    Fetch(QueryKey),
    SendFriendRequest(UserId),
    Signup(SignupRequest),
    CompleteOnboarding(OnboardingProfile),
}

#[derive(Debug)]
pub enum Update {
    AuthUser(Result<Option<User>, ApiError>),
    Friends(Result<Vec<User>, ApiError>),
    Recommended(Result<Vec<User>, ApiError>),
    Outgoing(Result<Vec<FriendRequest>, ApiError>),
    RequestSent {
        recipient: UserId,
        result: Result<(), ApiError>,
    },
    SignedUp(Result<User, ApiError>),
    Onboarded(Result<User, ApiError>),
}

pub async fn run(
    api: ApiClient,
    mut commands: UnboundedReceiver<Command>,
    updates: std::sync::mpsc::Sender<Update>,
    ctx: egui::Context,
) {
    while let Some(command) = commands.recv().await {
        let api = api.clone();
        let updates = updates.clone();
        let ctx = ctx.clone();
        tokio::spawn(async move {
            let update = execute(&api, command).await;
            // The app may already be shutting down; a closed channel just
            // means nobody is listening anymore.
            if updates.send(update).is_ok() {
                ctx.request_repaint();
            }
        });
    }
}

async fn execute(api: &ApiClient, command: Command) -> Update {
    match command {
        Command::Fetch(QueryKey::AuthUser) => Update::AuthUser(api.auth_user().await),
        Command::Fetch(QueryKey::Friends) => Update::Friends(api.friends().await),
        Command::Fetch(QueryKey::RecommendedUsers) => {
            Update::Recommended(api.recommended_users().await)
        }
        Command::Fetch(QueryKey::OutgoingRequests) => {
            Update::Outgoing(api.outgoing_friend_requests().await)
        }
        Command::SendFriendRequest(recipient) => {
            let result = api.send_friend_request(&recipient).await;
            Update::RequestSent { recipient, result }
        }
        Command::Signup(request) => Update::SignedUp(api.signup(&request).await),
        Command::CompleteOnboarding(profile) => {
            Update::Onboarded(api.complete_onboarding(&profile).await)
        }
    }
}
