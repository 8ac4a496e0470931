use crate::app;
use crate::render::{observation_list, report_line, RenderOptions};
use altinat_feed::CycleReport;
use std::path::PathBuf;

pub fn run_toggle(data_dir: Option<PathBuf>, id: u64) -> anyhow::Result<()> {
    let mut feed = app::open(data_dir)?;

    if feed.toggle_like(id)? {
        println!("Liked #{}", id);
    } else {
        println!("Unliked #{}", id);
    }
    Ok(())
}

/// Liked observations found among the friends' latest observations
pub async fn run_list(data_dir: Option<PathBuf>) -> anyhow::Result<()> {
    let mut feed = app::open(data_dir)?;

    let report = feed.refetch().await;
    if matches!(report, CycleReport::Failed { .. }) {
        eprintln!("{}", report_line(&report));
    }

    let opts = RenderOptions {
        liked: feed.likes(),
        preview_chars: feed.config().description_preview_chars,
    };
    print!(
        "{}",
        observation_list(
            "Liked Observations",
            &feed.liked_observations(),
            "No liked observations yet.",
            &opts,
        )
    );
    Ok(())
}
