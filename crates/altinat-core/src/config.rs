//! Feed configuration

use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

/// Largest `per_page` the observations endpoint accepts
pub const MAX_PAGE_SIZE: u32 = 200;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PageSizeError {
    #[error("page size must be positive")]
    Zero,
    #[error("page size {0} exceeds the API maximum of {max}", max = MAX_PAGE_SIZE)]
    TooLarge(u32),
}

/// Per-friend page size for the general query
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct PageSize(u32);

impl PageSize {
    pub fn new(value: u32) -> Result<Self, PageSizeError> {
        match value {
            0 => Err(PageSizeError::Zero),
            v if v > MAX_PAGE_SIZE => Err(PageSizeError::TooLarge(v)),
            v => Ok(Self(v)),
        }
    }

    pub fn get(self) -> u32 {
        self.0
    }
}

impl Default for PageSize {
    fn default() -> Self {
        Self(10)
    }
}

impl TryFrom<u32> for PageSize {
    type Error = PageSizeError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<PageSize> for u32 {
    fn from(size: PageSize) -> Self {
        size.0
    }
}

impl fmt::Display for PageSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Feed configuration, read from `config.json`. Every field is optional.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Observations API root, without trailing slash
    pub api_base_url: String,

    /// Observations per friend in the general query
    pub per_page: PageSize,

    /// Observations per friend in the 30-day query
    pub monthly_per_page: PageSize,

    /// Per-request timeout in seconds; 0 disables the timeout
    pub request_timeout_secs: u64,

    /// Characters of description shown before truncating
    pub description_preview_chars: usize,
}

impl Config {
    pub fn new() -> Self {
        Self {
            api_base_url: "https://api.inaturalist.org/v1".to_string(),
            per_page: PageSize::default(),
            monthly_per_page: PageSize(MAX_PAGE_SIZE),
            request_timeout_secs: 30,
            description_preview_chars: 40,
        }
    }

    /// Per-request timeout, `None` when disabled
    pub fn request_timeout(&self) -> Option<Duration> {
        (self.request_timeout_secs > 0).then(|| Duration::from_secs(self.request_timeout_secs))
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}
