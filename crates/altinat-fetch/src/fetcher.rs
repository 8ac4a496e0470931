//! Per-friend fan-out over an observation source

use crate::error::FetchError;
use crate::query::ObservationQuery;
use crate::source::ObservationSource;
use altinat_core::{Observation, PageSize};
use chrono::NaiveDate;
use futures::future::try_join_all;
use std::collections::HashMap;

/// Most recent observations of every friend, flattened.
///
/// One request per friend, all in flight at once. Any failure fails the
/// whole batch. No friends means no requests.
pub async fn fetch_general<S>(
    source: &S,
    friends: &[String],
    per_page: PageSize,
) -> Result<Vec<Observation>, FetchError>
where
    S: ObservationSource + ?Sized,
{
    if friends.is_empty() {
        return Ok(Vec::new());
    }

    let queries: Vec<ObservationQuery> = friends
        .iter()
        .map(|login| ObservationQuery::recent(login, per_page))
        .collect();
    let pages = try_join_all(queries.iter().map(|q| source.observations(q))).await?;

    Ok(pages.into_iter().flatten().collect())
}

/// Observations of every friend within `[d1, d2)`, keyed by login
pub async fn fetch_monthly<S>(
    source: &S,
    friends: &[String],
    (d1, d2): (NaiveDate, NaiveDate),
    per_page: PageSize,
) -> Result<HashMap<String, Vec<Observation>>, FetchError>
where
    S: ObservationSource + ?Sized,
{
    if friends.is_empty() {
        return Ok(HashMap::new());
    }

    let queries: Vec<ObservationQuery> = friends
        .iter()
        .map(|login| ObservationQuery::windowed(login, d1, d2, per_page))
        .collect();
    let pages = try_join_all(queries.iter().map(|q| source.observations(q))).await?;

    Ok(friends.iter().cloned().zip(pages).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use altinat_core::ObservationUser;
    use async_trait::async_trait;
    use chrono::{TimeZone, Utc};
    use std::sync::Mutex;

    #[derive(Default)]
    struct RecordingSource {
        failing: Option<String>,
        calls: Mutex<Vec<ObservationQuery>>,
    }

    #[async_trait]
    impl ObservationSource for RecordingSource {
        async fn observations(
            &self,
            query: &ObservationQuery,
        ) -> Result<Vec<Observation>, FetchError> {
            self.calls.lock().unwrap().push(query.clone());
            if self.failing.as_deref() == Some(query.user_login.as_str()) {
                return Err(FetchError::Status {
                    login: query.user_login.clone(),
                    status: 503,
                });
            }
            let id = self.calls.lock().unwrap().len() as u64;
            Ok(vec![Observation {
                id,
                created_at: Utc.with_ymd_and_hms(2025, 5, 1, 0, 0, 0).unwrap(),
                species_guess: None,
                taxon: None,
                photos: Vec::new(),
                user: ObservationUser {
                    login: query.user_login.clone(),
                },
                uri: String::new(),
                place_guess: None,
                description: None,
            }])
        }
    }

    fn names(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[tokio::test]
    async fn test_no_friends_no_requests() {
        let source = RecordingSource::default();
        let general = fetch_general(&source, &[], PageSize::default()).await.unwrap();
        let range = (
            chrono::NaiveDate::from_ymd_opt(2025, 4, 1).unwrap(),
            chrono::NaiveDate::from_ymd_opt(2025, 4, 24).unwrap(),
        );
        let monthly = fetch_monthly(&source, &[], range, PageSize::default())
            .await
            .unwrap();

        assert!(general.is_empty());
        assert!(monthly.is_empty());
        assert!(source.calls.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_general_flattens_all_friends() {
        let source = RecordingSource::default();
        let general = fetch_general(&source, &names(&["alice", "bob"]), PageSize::default())
            .await
            .unwrap();

        let mut logins: Vec<&str> = general.iter().map(|o| o.login()).collect();
        logins.sort();
        assert_eq!(logins, vec!["alice", "bob"]);

        let calls = source.calls.lock().unwrap();
        assert_eq!(calls.len(), 2);
        assert!(calls.iter().all(|q| q.range.is_none()));
    }

    #[tokio::test]
    async fn test_monthly_keyed_by_login() {
        let source = RecordingSource::default();
        let range = (
            chrono::NaiveDate::from_ymd_opt(2025, 4, 1).unwrap(),
            chrono::NaiveDate::from_ymd_opt(2025, 4, 24).unwrap(),
        );
        let monthly = fetch_monthly(
            &source,
            &names(&["alice", "bob"]),
            range,
            PageSize::new(200).unwrap(),
        )
        .await
        .unwrap();

        assert_eq!(monthly.len(), 2);
        assert_eq!(monthly["bob"][0].login(), "bob");
        assert!(source
            .calls
            .lock()
            .unwrap()
            .iter()
            .all(|q| q.range == Some(range) && q.per_page.get() == 200));
    }

    #[tokio::test]
    async fn test_one_failure_fails_batch() {
        let source = RecordingSource {
            failing: Some("bob".to_string()),
            ..Default::default()
        };
        let result =
            fetch_general(&source, &names(&["alice", "bob", "carol"]), PageSize::default()).await;

        let err = result.unwrap_err();
        assert_eq!(err.login(), Some("bob"));
    }
}
