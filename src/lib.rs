//! Shared wire types for the EchoRoom API.
//!
//! Field names mirror the backend's JSON: camelCase keys, Mongo-style
//! `_id` identifiers. Optional free-text and catalog fields use the empty
//! string as "not set", which is what the backend stores for them.

use serde::{Deserialize, Serialize};

#[derive(Eq, PartialEq, Ord, PartialOrd, Hash, Clone, Debug, Serialize, Deserialize, Default)]
pub struct UserId(pub String);

impl std::fmt::Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Eq, PartialEq, Hash, Clone, Debug, Serialize, Deserialize, Default)]
pub struct RequestId(pub String);

impl std::fmt::Display for RequestId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, Default, Eq, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct User {
    #[serde(rename = "_id")]
    pub id: UserId,
    pub full_name: String,
    #[serde(default)]
    pub profile_pic: String,
    #[serde(default)]
    pub bio: String,
    #[serde(default)]
    pub current_book: String,
    #[serde(default)]
    pub current_show: String,
    #[serde(default)]
    pub interests: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub is_onboarded: bool,
}

/// The populated recipient reference carried by an outgoing friend
/// request. The id is optional: upstream entries are not trusted to be
/// well formed, and a recipient without an id must not break a view.
#[derive(Clone, Debug, Serialize, Deserialize, Default, Eq, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RequestRecipient {
    #[serde(rename = "_id", default)]
    pub id: Option<UserId>,
    #[serde(default)]
    pub full_name: String,
    #[serde(default)]
    pub profile_pic: String,
}

/// One entry of the current user's pending outgoing-request snapshot.
/// The requester is implicit (it is always the current user).
#[derive(Clone, Debug, Serialize, Deserialize, Default, Eq, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FriendRequest {
    #[serde(rename = "_id")]
    pub id: RequestId,
    #[serde(default)]
    pub recipient: Option<RequestRecipient>,
}

#[derive(Clone, Debug, Serialize, Deserialize, Default, Eq, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SignupRequest {
    pub full_name: String,
    pub email: String,
    pub password: String,
}

/// The full profile record submitted by the onboarding form in one shot.
#[derive(Clone, Debug, Serialize, Deserialize, Default, Eq, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct OnboardingProfile {
    pub full_name: String,
    pub bio: String,
    pub location: String,
    pub profile_pic: String,
    pub current_book: String,
    pub current_show: String,
    pub interests: String,
}
