//! Observation fetching from the iNaturalist API

mod error;
mod fetcher;
mod query;
mod source;

pub use error::FetchError;
pub use fetcher::{fetch_general, fetch_monthly};
pub use query::ObservationQuery;
pub use source::{HttpSource, ObservationSource};
