pub mod feed;
pub mod friends;
pub mod likes;
pub mod status;
pub mod version;
