#![allow(dead_code)]

use altinat_core::{Observation, ObservationUser};
use altinat_fetch::{FetchError, ObservationQuery, ObservationSource};
use altinat_store::{MemoryStorage, Storage, StoreError};
use async_trait::async_trait;
use chrono::{DateTime, Duration, TimeZone, Utc};
use std::collections::{HashMap, HashSet};
use std::sync::Mutex;

/// Canned observation source that records every query
#[derive(Default)]
pub struct MockSource {
    general: HashMap<String, Vec<Observation>>,
    monthly: HashMap<String, Vec<Observation>>,
    failing: HashSet<String>,
    calls: Mutex<Vec<ObservationQuery>>,
}

impl MockSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_general(mut self, login: &str, observations: Vec<Observation>) -> Self {
        self.general.insert(login.to_string(), observations);
        self
    }

    pub fn with_monthly(mut self, login: &str, observations: Vec<Observation>) -> Self {
        self.monthly.insert(login.to_string(), observations);
        self
    }

    pub fn failing_for(mut self, login: &str) -> Self {
        self.failing.insert(login.to_string());
        self
    }

    pub fn calls(&self) -> Vec<ObservationQuery> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl ObservationSource for MockSource {
    async fn observations(&self, query: &ObservationQuery) -> Result<Vec<Observation>, FetchError> {
        self.calls.lock().unwrap().push(query.clone());

        if self.failing.contains(&query.user_login) {
            return Err(FetchError::Status {
                login: query.user_login.clone(),
                status: 500,
            });
        }

        let table = if query.range.is_some() {
            &self.monthly
        } else {
            &self.general
        };
        Ok(table
            .get(&query.user_login)
            .map(|obs| {
                obs.iter()
                    .take(query.per_page.get() as usize)
                    .cloned()
                    .collect()
            })
            .unwrap_or_default())
    }
}

/// In-memory storage whose next `failures` writes are rejected
pub struct FailingStorage {
    inner: MemoryStorage,
    failures: usize,
}

impl FailingStorage {
    pub fn failing_next(failures: usize) -> Self {
        Self::wrapping(MemoryStorage::new(), failures)
    }

    pub fn wrapping(inner: MemoryStorage, failures: usize) -> Self {
        Self { inner, failures }
    }
}

impl Storage for FailingStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.inner.get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        if self.failures > 0 {
            self.failures -= 1;
            return Err(StoreError::Write {
                key: key.to_string(),
                source: std::io::Error::other("disk full"),
            });
        }
        self.inner.set(key, value)
    }
}

pub fn obs(id: u64, login: &str, created_at: DateTime<Utc>) -> Observation {
    Observation {
        id,
        created_at,
        species_guess: Some("mallard".to_string()),
        taxon: None,
        photos: Vec::new(),
        user: ObservationUser {
            login: login.to_string(),
        },
        uri: format!("https://www.inaturalist.org/observations/{}", id),
        place_guess: None,
        description: None,
    }
}

/// 2025-06-15 14:00 UTC
pub fn fixed_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 6, 15, 14, 0, 0).unwrap()
}

pub fn start_of_fixed_day() -> DateTime<Utc> {
    fixed_now() - Duration::hours(14)
}
