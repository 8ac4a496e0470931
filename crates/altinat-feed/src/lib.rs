//! Feed controller: owns friends, likes and fetched observations

mod controller;
mod cycle;

pub use controller::{FeedController, FeedError};
pub use cycle::{run_cycle, CycleOutcome, CyclePlan, CycleReport, FetchedData};
