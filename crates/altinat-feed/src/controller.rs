use crate::cycle::{run_cycle, CycleOutcome, CyclePlan, CycleReport, FetchedData};
use altinat_core::{
    liked_observations, new_since, partition, Config, DateWindow, FriendList, LikedSet,
    Observation, PageSize, PageSizeError, Sections,
};
use altinat_fetch::ObservationSource;
use altinat_store::{
    load_friends, load_last_visit, load_liked, save_friends, save_last_visit, save_liked, Storage,
    StoreError,
};
use chrono::{DateTime, Local, TimeZone, Utc};

#[derive(Debug, thiserror::Error)]
pub enum FeedError {
    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    PageSize(#[from] PageSizeError),
}

/// Single owner of the feed state.
///
/// Friend and like changes are written to storage before they take effect in
/// memory; a failed write leaves both unchanged. Friend and page-size changes
/// then call [`refetch`]. Each
/// refetch is a numbered cycle; results of a cycle that is no longer the
/// latest are dropped.
///
/// [`refetch`]: FeedController::refetch
pub struct FeedController<S, St> {
    source: S,
    storage: St,
    config: Config,
    friends: FriendList,
    liked: LikedSet,
    per_page: PageSize,
    data: FetchedData,
    new_since_last_visit: Vec<Observation>,
    latest_cycle: u64,
}

impl<S, St> FeedController<S, St>
where
    S: ObservationSource,
    St: Storage,
{
    /// Load friends and likes from `storage`. Corrupt values load as empty.
    pub fn open(source: S, storage: St, config: Config) -> Self {
        let friends = FriendList::from_persisted(load_friends(&storage));
        let liked = LikedSet::from_ids(load_liked(&storage));
        tracing::debug!(friends = friends.len(), liked = liked.len(), "feed state loaded");

        Self {
            source,
            storage,
            per_page: config.per_page,
            config,
            friends,
            liked,
            data: FetchedData::default(),
            new_since_last_visit: Vec::new(),
            latest_cycle: 0,
        }
    }

    pub fn friends(&self) -> &FriendList {
        &self.friends
    }

    pub fn likes(&self) -> &LikedSet {
        &self.liked
    }

    pub fn page_size(&self) -> PageSize {
        self.per_page
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn storage(&self) -> &St {
        &self.storage
    }

    pub fn general(&self) -> &[Observation] {
        &self.data.general
    }

    pub fn new_since_last_visit(&self) -> &[Observation] {
        &self.new_since_last_visit
    }

    pub fn latest_cycle(&self) -> u64 {
        self.latest_cycle
    }

    /// Persisted last visit, epoch if none
    pub fn last_visit(&self) -> DateTime<Utc> {
        load_last_visit(&self.storage)
    }

    /// Track a friend. `None` when the name was blank or already tracked.
    pub async fn add_friend(&mut self, name: &str) -> Result<Option<CycleReport>, FeedError> {
        let mut friends = self.friends.clone();
        if !friends.add(name) {
            return Ok(None);
        }
        save_friends(&mut self.storage, friends.as_slice())?;
        self.friends = friends;
        tracing::info!(friend = name.trim(), "friend added");
        Ok(Some(self.refetch().await))
    }

    /// Stop tracking a friend. `None` when it was not tracked.
    pub async fn remove_friend(&mut self, name: &str) -> Result<Option<CycleReport>, FeedError> {
        let mut friends = self.friends.clone();
        if !friends.remove(name) {
            return Ok(None);
        }
        save_friends(&mut self.storage, friends.as_slice())?;
        self.friends = friends;
        tracing::info!(friend = name, "friend removed");
        Ok(Some(self.refetch().await))
    }

    /// Change the general page size. `None` when unchanged.
    pub async fn set_page_size(&mut self, size: u32) -> Result<Option<CycleReport>, FeedError> {
        let size = PageSize::new(size)?;
        if size == self.per_page {
            return Ok(None);
        }
        self.per_page = size;
        Ok(Some(self.refetch().await))
    }

    /// Flip the like on `id` and persist. Returns whether it is now liked.
    ///
    /// The in-memory set only changes once the write succeeded.
    pub fn toggle_like(&mut self, id: u64) -> Result<bool, FeedError> {
        let mut liked = self.liked.clone();
        let now_liked = liked.toggle(id);
        save_liked(&mut self.storage, &liked.to_vec())?;
        self.liked = liked;
        Ok(now_liked)
    }

    pub async fn refetch(&mut self) -> CycleReport {
        self.refetch_at(&Local::now()).await
    }

    /// Run a full cycle as of `now`
    pub async fn refetch_at<Tz: TimeZone>(&mut self, now: &DateTime<Tz>) -> CycleReport {
        let plan = self.begin_cycle(now);
        if plan.friends.is_empty() {
            self.clear();
            tracing::debug!(cycle = plan.id, "no friends tracked, skipping fetch");
            return CycleReport::Skipped { cycle: plan.id };
        }

        let outcome = run_cycle(&self.source, plan).await;
        self.apply_cycle(outcome)
    }

    /// Start a new cycle. Any cycle begun earlier becomes stale.
    pub fn begin_cycle<Tz: TimeZone>(&mut self, now: &DateTime<Tz>) -> CyclePlan {
        self.latest_cycle += 1;
        CyclePlan {
            id: self.latest_cycle,
            friends: self.friends.as_slice().to_vec(),
            per_page: self.per_page,
            monthly_per_page: self.config.monthly_per_page,
            window: DateWindow::at(now),
            started_at: now.with_timezone(&Utc),
        }
    }

    /// Install a finished cycle's results, unless a newer cycle has begun.
    ///
    /// On success the new-since-last-visit subset is computed against the
    /// stored last visit before it is overwritten. The value written is the
    /// instant the cycle began, not the instant it finished, so observations
    /// created while the requests were in flight still count as new next time.
    pub fn apply_cycle(&mut self, outcome: CycleOutcome) -> CycleReport {
        let cycle = outcome.id;
        if cycle != self.latest_cycle {
            tracing::debug!(cycle, latest = self.latest_cycle, "discarding stale cycle");
            return CycleReport::Stale {
                cycle,
                latest: self.latest_cycle,
            };
        }

        let data = match outcome.result {
            Ok(data) => data,
            Err(error) => {
                tracing::warn!(cycle, %error, "fetch cycle failed");
                self.clear();
                return CycleReport::Failed { cycle, error };
            }
        };

        let last_visit = load_last_visit(&self.storage);
        self.new_since_last_visit = new_since(&data.general, last_visit);
        if let Err(e) = save_last_visit(&mut self.storage, outcome.started_at) {
            tracing::warn!(cycle, error = %e, "failed to record last visit");
        }
        self.data = data;

        let report = CycleReport::Applied {
            cycle,
            observations: self.data.general.len(),
            new_since_last_visit: self.new_since_last_visit.len(),
        };
        tracing::info!(
            cycle,
            observations = self.data.general.len(),
            new = self.new_since_last_visit.len(),
            "fetch cycle applied"
        );
        report
    }

    /// Partition the held observations for display as of `now`
    pub fn sections_at<Tz: TimeZone>(&self, now: &DateTime<Tz>) -> Sections {
        partition(
            &self.data.general,
            &self.data.monthly,
            self.friends.as_slice(),
            &DateWindow::at(now),
        )
    }

    /// Liked observations among the current general collection
    pub fn liked_observations(&self) -> Vec<&Observation> {
        liked_observations(&self.data.general, &self.liked)
    }

    fn clear(&mut self) {
        self.data = FetchedData::default();
        self.new_since_last_visit.clear();
    }
}
