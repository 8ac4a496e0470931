//! One fetch cycle: plan, run, outcome

use altinat_core::{DateWindow, Observation, PageSize};
use altinat_fetch::{fetch_general, fetch_monthly, FetchError, ObservationSource};
use chrono::{DateTime, Utc};
use std::collections::HashMap;

/// Everything a cycle needs, captured when it begins
#[derive(Debug, Clone)]
pub struct CyclePlan {
    pub id: u64,
    pub friends: Vec<String>,
    pub per_page: PageSize,
    pub monthly_per_page: PageSize,
    pub window: DateWindow,
    pub started_at: DateTime<Utc>,
}

/// Collections produced by a successful cycle
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FetchedData {
    pub general: Vec<Observation>,
    pub monthly: HashMap<String, Vec<Observation>>,
}

#[derive(Debug)]
pub struct CycleOutcome {
    pub id: u64,
    pub started_at: DateTime<Utc>,
    pub result: Result<FetchedData, FetchError>,
}

/// What happened to a cycle once it finished
#[derive(Debug)]
pub enum CycleReport {
    /// No friends tracked; nothing was requested
    Skipped { cycle: u64 },
    Applied {
        cycle: u64,
        observations: usize,
        new_since_last_visit: usize,
    },
    Failed { cycle: u64, error: FetchError },
    /// A newer cycle began while this one was in flight
    Stale { cycle: u64, latest: u64 },
}

impl CycleReport {
    pub fn cycle(&self) -> u64 {
        match self {
            CycleReport::Skipped { cycle }
            | CycleReport::Applied { cycle, .. }
            | CycleReport::Failed { cycle, .. }
            | CycleReport::Stale { cycle, .. } => *cycle,
        }
    }

    pub fn is_applied(&self) -> bool {
        matches!(self, CycleReport::Applied { .. })
    }
}

/// Issue the general and monthly batches together and wait for both.
///
/// Either batch failing fails the cycle.
pub async fn run_cycle<S>(source: &S, plan: CyclePlan) -> CycleOutcome
where
    S: ObservationSource + ?Sized,
{
    tracing::debug!(cycle = plan.id, friends = plan.friends.len(), "starting fetch cycle");

    let general = fetch_general(source, &plan.friends, plan.per_page);
    let monthly = fetch_monthly(
        source,
        &plan.friends,
        plan.window.monthly_range(),
        plan.monthly_per_page,
    );

    let result = futures::try_join!(general, monthly)
        .map(|(general, monthly)| FetchedData { general, monthly });

    CycleOutcome {
        id: plan.id,
        started_at: plan.started_at,
        result,
    }
}
