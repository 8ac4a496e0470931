//! Local persistence for the friend list, liked observations and last visit

mod io;
mod keys;
mod paths;
mod storage;

pub use io::{atomic_write, parse_or_default, read_optional};
pub use keys::{
    load_friends, load_last_visit, load_liked, save_friends, save_last_visit, save_liked,
    FRIENDS_KEY, LAST_VISIT_KEY, LIKED_KEY,
};
pub use paths::Paths;
pub use storage::{FileStorage, MemoryStorage, Storage, StoreError};
