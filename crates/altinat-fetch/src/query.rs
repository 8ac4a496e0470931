//! Query parameters for the observations endpoint

use crate::error::FetchError;
use altinat_core::PageSize;
use chrono::NaiveDate;
use reqwest::Url;

/// One per-friend request: newest first, optionally bounded to `[d1, d2)`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObservationQuery {
    pub user_login: String,
    pub per_page: PageSize,
    pub range: Option<(NaiveDate, NaiveDate)>,
}

impl ObservationQuery {
    pub fn recent(user_login: &str, per_page: PageSize) -> Self {
        Self {
            user_login: user_login.to_string(),
            per_page,
            range: None,
        }
    }

    pub fn windowed(user_login: &str, d1: NaiveDate, d2: NaiveDate, per_page: PageSize) -> Self {
        Self {
            user_login: user_login.to_string(),
            per_page,
            range: Some((d1, d2)),
        }
    }

    /// Full request URL under `base`, e.g. `https://api.inaturalist.org/v1`
    pub fn to_url(&self, base: &str) -> Result<Url, FetchError> {
        let raw = format!("{}/observations", base.trim_end_matches('/'));
        let mut url = Url::parse(&raw).map_err(|e| FetchError::InvalidUrl {
            url: raw.clone(),
            reason: e.to_string(),
        })?;

        {
            let mut pairs = url.query_pairs_mut();
            pairs.append_pair("user_login", &self.user_login);
            if let Some((d1, d2)) = self.range {
                pairs.append_pair("d1", &d1.format("%Y-%m-%d").to_string());
                pairs.append_pair("d2", &d2.format("%Y-%m-%d").to_string());
            }
            pairs.append_pair("order", "desc");
            pairs.append_pair("order_by", "created_at");
            pairs.append_pair("per_page", &self.per_page.to_string());
        }

        Ok(url)
    }
}
