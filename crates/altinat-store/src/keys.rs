//! Typed access to the three persisted keys

use crate::storage::{Storage, StoreError};
use chrono::{DateTime, Utc};

pub const FRIENDS_KEY: &str = "friends";
pub const LIKED_KEY: &str = "liked";
pub const LAST_VISIT_KEY: &str = "lastVisit";

pub fn load_friends<S: Storage>(storage: &S) -> Vec<String> {
    storage.load(FRIENDS_KEY, Vec::new())
}

pub fn save_friends<S: Storage>(storage: &mut S, friends: &[String]) -> Result<(), StoreError> {
    storage.save(FRIENDS_KEY, friends)
}

pub fn load_liked<S: Storage>(storage: &S) -> Vec<u64> {
    storage.load(LIKED_KEY, Vec::new())
}

pub fn save_liked<S: Storage>(storage: &mut S, ids: &[u64]) -> Result<(), StoreError> {
    storage.save(LIKED_KEY, ids)
}

/// Last recorded visit, or the Unix epoch if none was ever recorded.
///
/// Accepts either a JSON string or a bare ISO-8601 timestamp.
pub fn load_last_visit<S: Storage>(storage: &S) -> DateTime<Utc> {
    let Some(raw) = storage.get(LAST_VISIT_KEY) else {
        return DateTime::<Utc>::UNIX_EPOCH;
    };

    if let Ok(at) = serde_json::from_str::<DateTime<Utc>>(&raw) {
        return at;
    }
    match raw.trim().parse::<DateTime<Utc>>() {
        Ok(at) => at,
        Err(e) => {
            tracing::debug!(error = %e, "unparsable last visit, treating as never visited");
            DateTime::<Utc>::UNIX_EPOCH
        }
    }
}

pub fn save_last_visit<S: Storage>(storage: &mut S, at: DateTime<Utc>) -> Result<(), StoreError> {
    storage.save(LAST_VISIT_KEY, &at)
}
