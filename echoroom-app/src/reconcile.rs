//! Derived state for the recommendation view.
//!
//! The outgoing-requests snapshot is folded into a set of recipient ids
//! whenever a fresh snapshot lands. The set is swapped in whole, never
//! patched, so it can only ever disagree with the server by being stale.

use std::collections::HashSet;

use echoroom_common::{FriendRequest, UserId};
use tracing::warn;

/// Collect the recipient ids of the pending outgoing requests.
///
/// Backend data is not trusted here: an entry whose recipient id is
/// missing or blank is skipped with a warning instead of failing the
/// whole snapshot.
pub fn outgoing_recipient_ids(requests: &[FriendRequest]) -> HashSet<UserId> {
    let mut ids = HashSet::new();
    for request in requests {
        match request.recipient.as_ref().and_then(|r| r.id.clone()) {
            Some(id) if !id.0.is_empty() => {
                ids.insert(id);
            }
            _ => warn!(request = %request.id, "invalid recipient on outgoing request, skipping"),
        }
    }
    ids
}
