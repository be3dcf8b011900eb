//! Explicit cache for the resources the app fetches.
//!
//! Every logical resource (auth user, friends, recommendations, outgoing
//! requests) has one entry holding the last snapshot, the fetch status,
//! and a stale bit. The UI thread owns the store; worker results come in
//! as messages and are applied to it, so there is no locking anywhere.

use echoroom_common::{FriendRequest, User};

/// Names for the cached resources.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QueryKey {
    AuthUser,
    Friends,
    RecommendedUsers,
    OutgoingRequests,
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub enum FetchStatus {
    #[default]
    Idle,
    Fetching,
    Failed(String),
}

/// One cached resource.
///
/// Old data stays visible while a refetch is in flight. A failure parks
/// the entry with its message until someone invalidates it again; there
/// is no automatic retry.
#[derive(Debug, Default)]
pub struct Entry<T> {
    data: Option<T>,
    status: FetchStatus,
    stale: bool,
}

impl<T> Entry<T> {
    pub fn data(&self) -> Option<&T> {
        self.data.as_ref()
    }

    pub fn is_fetching(&self) -> bool {
        self.status == FetchStatus::Fetching
    }

    pub fn error(&self) -> Option<&str> {
        match &self.status {
            FetchStatus::Failed(message) => Some(message.as_str()),
            _ => None,
        }
    }

    /// Mark the entry stale. The data stays around until a refetch lands.
    pub fn invalidate(&mut self) {
        self.stale = true;
    }

    /// Whether the owner should issue a fetch right now.
    pub fn needs_fetch(&self) -> bool {
        match self.status {
            FetchStatus::Fetching => false,
            FetchStatus::Failed(_) => self.stale,
            FetchStatus::Idle => self.stale || self.data.is_none(),
        }
    }

    /// Record that a fetch was issued for this entry.
    pub fn begin(&mut self) {
        self.status = FetchStatus::Fetching;
        self.stale = false;
    }

    /// Apply a completed fetch. An error keeps the previous snapshot.
    pub fn resolve(&mut self, result: Result<T, String>) {
        match result {
            Ok(data) => {
                self.data = Some(data);
                self.status = FetchStatus::Idle;
            }
            Err(message) => {
                self.status = FetchStatus::Failed(message);
            }
        }
    }
}

/// The resources the app renders from.
///
/// The auth user is doubly optional: the outer layer is "have we heard
/// back yet", the inner one is "is anyone signed in".
#[derive(Debug, Default)]
pub struct QueryStore {
    pub auth_user: Entry<Option<User>>,
    pub friends: Entry<Vec<User>>,
    pub recommended: Entry<Vec<User>>,
    pub outgoing: Entry<Vec<FriendRequest>>,
}

impl QueryStore {
    pub fn invalidate(&mut self, key: QueryKey) {
        match key {
            QueryKey::AuthUser => self.auth_user.invalidate(),
            QueryKey::Friends => self.friends.invalidate(),
            QueryKey::RecommendedUsers => self.recommended.invalidate(),
            QueryKey::OutgoingRequests => self.outgoing.invalidate(),
        }
    }

    pub fn needs_fetch(&self, key: QueryKey) -> bool {
        match key {
            QueryKey::AuthUser => self.auth_user.needs_fetch(),
            QueryKey::Friends => self.friends.needs_fetch(),
            QueryKey::RecommendedUsers => self.recommended.needs_fetch(),
            QueryKey::OutgoingRequests => self.outgoing.needs_fetch(),
        }
    }

    pub fn begin(&mut self, key: QueryKey) {
        match key {
            QueryKey::AuthUser => self.auth_user.begin(),
            QueryKey::Friends => self.friends.begin(),
            QueryKey::RecommendedUsers => self.recommended.begin(),
            QueryKey::OutgoingRequests => self.outgoing.begin(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_entry_wants_a_fetch() {
        let entry: Entry<Vec<u32>> = Entry::default();
        assert!(entry.needs_fetch());
        assert!(entry.data().is_none());
    }

    #[test]
    fn begin_stops_further_fetches_until_resolved() {
        let mut entry: Entry<Vec<u32>> = Entry::default();
        entry.begin();
        assert!(entry.is_fetching());
        assert!(!entry.needs_fetch());
    }

    #[test]
    fn resolved_entry_is_settled() {
        let mut entry: Entry<Vec<u32>> = Entry::default();
        entry.begin();
        entry.resolve(Ok(vec![1, 2]));
        assert_eq!(entry.data(), Some(&vec![1, 2]));
        assert!(!entry.needs_fetch());
        assert!(entry.error().is_none());
    }

    #[test]
    fn invalidate_keeps_data_visible_and_triggers_a_refetch() {
        let mut entry: Entry<Vec<u32>> = Entry::default();
        entry.begin();
        entry.resolve(Ok(vec![1]));
        entry.invalidate();
        assert_eq!(entry.data(), Some(&vec![1]));
        assert!(entry.needs_fetch());
        entry.begin();
        assert_eq!(entry.data(), Some(&vec![1]));
        entry.resolve(Ok(vec![2]));
        assert_eq!(entry.data(), Some(&vec![2]));
    }

    #[test]
    fn failure_keeps_the_old_snapshot_and_does_not_retry() {
        let mut entry: Entry<Vec<u32>> = Entry::default();
        entry.begin();
        entry.resolve(Ok(vec![1]));
        entry.invalidate();
        entry.begin();
        entry.resolve(Err("boom".to_string()));
        assert_eq!(entry.data(), Some(&vec![1]));
        assert_eq!(entry.error(), Some("boom"));
        assert!(!entry.needs_fetch());
    }

    #[test]
    fn invalidating_a_failed_entry_allows_one_more_attempt() {
        let mut entry: Entry<Vec<u32>> = Entry::default();
        entry.begin();
        entry.resolve(Err("boom".to_string()));
        assert!(!entry.needs_fetch());
        entry.invalidate();
        assert!(entry.needs_fetch());
    }

    #[test]
    fn invalidation_during_a_fetch_survives_the_resolve() {
        let mut entry: Entry<Vec<u32>> = Entry::default();
        entry.begin();
        entry.invalidate();
        entry.resolve(Ok(vec![1]));
        // The snapshot that landed was requested before the invalidation,
        // so it still counts as stale.
        assert!(entry.needs_fetch());
    }

    #[test]
    fn store_routes_keys_to_their_entries() {
        let mut store = QueryStore::default();
        store.begin(QueryKey::Friends);
        assert!(!store.needs_fetch(QueryKey::Friends));
        assert!(store.needs_fetch(QueryKey::RecommendedUsers));
        store.friends.resolve(Ok(vec![]));
        store.invalidate(QueryKey::Friends);
        assert!(store.needs_fetch(QueryKey::Friends));
    }
}
