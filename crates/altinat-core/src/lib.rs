//! Observation model, date windows and the feed partitioner

mod config;
mod friends;
mod likes;
mod partition;
mod types;
mod window;

pub use config::{Config, PageSize, PageSizeError, MAX_PAGE_SIZE};
pub use friends::FriendList;
pub use likes::LikedSet;
pub use partition::{liked_observations, new_since, partition, Bucket, Sections};
pub use types::{Observation, ObservationPage, ObservationUser, Photo, Taxon};
pub use window::DateWindow;
