use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "altinat")]
#[command(version)]
#[command(about = "Follow friends' iNaturalist observations from the terminal")]
pub struct Cli {
    /// Data directory (defaults to ~/.altinat)
    #[arg(long, global = true)]
    pub data_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Manage tracked friends
    Friends {
        #[command(subcommand)]
        action: Option<FriendAction>,
    },

    /// Fetch and show the feed
    Feed {
        /// Section to show
        #[arg(long, value_enum, default_value_t = Section::All)]
        section: Section,

        /// Observations per friend in the general fetch
        #[arg(long, value_parser = clap::value_parser!(u32).range(1..=200))]
        per_page: Option<u32>,
    },

    /// Show observations added since the last visit
    New,

    /// Like or unlike an observation
    Like { id: u64 },

    /// Show liked observations
    Liked,

    /// Show stored state
    Status,

    /// Print version information
    Version,
}

#[derive(Subcommand)]
pub enum FriendAction {
    /// List tracked friends
    List,
    /// Start tracking a friend
    Add { name: String },
    /// Stop tracking a friend
    Remove { name: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Section {
    Today,
    Week,
    Month,
    All,
}
