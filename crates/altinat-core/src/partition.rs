//! Bucketing of fetched observations into feed sections

use crate::likes::LikedSet;
use crate::types::Observation;
use crate::window::DateWindow;
use chrono::{DateTime, Utc};
use std::collections::HashMap;

/// Observations of one section, grouped by friend login
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Bucket {
    by_friend: HashMap<String, Vec<Observation>>,
}

impl Bucket {
    /// Observations for `login`; empty when the friend has none
    pub fn get(&self, login: &str) -> &[Observation] {
        self.by_friend.get(login).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn ids(&self, login: &str) -> Vec<u64> {
        self.get(login).iter().map(|o| o.id).collect()
    }

    pub fn total(&self) -> usize {
        self.by_friend.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }
}

/// The three feed sections
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Sections {
    pub today: Bucket,
    pub this_week: Bucket,
    pub last_30_days: Bucket,
}

/// Split the general collection into today and this week per friend, and
/// take last 30 days verbatim from the monthly mapping.
///
/// Boundaries are half-open: `created_at >= start_today` is today,
/// `start_week <= created_at < start_today` is this week.
pub fn partition(
    general: &[Observation],
    monthly: &HashMap<String, Vec<Observation>>,
    friends: &[String],
    window: &DateWindow,
) -> Sections {
    let mut sections = Sections::default();

    for login in friends {
        let mut today = Vec::new();
        let mut this_week = Vec::new();

        for obs in general.iter().filter(|o| o.login() == login) {
            if obs.created_at >= window.start_today {
                today.push(obs.clone());
            } else if obs.created_at >= window.start_week {
                this_week.push(obs.clone());
            }
        }

        sections.today.by_friend.insert(login.clone(), today);
        sections.this_week.by_friend.insert(login.clone(), this_week);
        sections.last_30_days.by_friend.insert(
            login.clone(),
            monthly.get(login).cloned().unwrap_or_default(),
        );
    }

    sections
}

/// Observations created strictly after `last_visit`, from any friend
pub fn new_since(general: &[Observation], last_visit: DateTime<Utc>) -> Vec<Observation> {
    general
        .iter()
        .filter(|o| o.created_at > last_visit)
        .cloned()
        .collect()
}

/// Liked observations among the general collection, in collection order
pub fn liked_observations<'a>(
    general: &'a [Observation],
    liked: &LikedSet,
) -> Vec<&'a Observation> {
    general.iter().filter(|o| liked.contains(o.id)).collect()
}
