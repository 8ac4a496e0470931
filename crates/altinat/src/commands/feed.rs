use crate::app::{self, Feed};
use crate::cli::Section;
use crate::render::{observation_list, report_line, section, RenderOptions};
use altinat_feed::CycleReport;
use chrono::Local;
use std::path::PathBuf;

async fn load(feed: &mut Feed, per_page: Option<u32>) -> anyhow::Result<CycleReport> {
    let changed = match per_page {
        Some(size) => feed.set_page_size(size).await?,
        None => None,
    };
    let report = match changed {
        Some(report) => report,
        None => feed.refetch().await,
    };
    Ok(report)
}

pub async fn run(
    data_dir: Option<PathBuf>,
    which: Section,
    per_page: Option<u32>,
) -> anyhow::Result<()> {
    let mut feed = app::open(data_dir)?;
    let report = load(&mut feed, per_page).await?;
    println!("{}", report_line(&report));
    if !report.is_applied() {
        return Ok(());
    }

    let sections = feed.sections_at(&Local::now());
    let opts = RenderOptions {
        liked: feed.likes(),
        preview_chars: feed.config().description_preview_chars,
    };
    let friends = feed.friends();

    let mut blocks = Vec::new();
    if matches!(which, Section::Today | Section::All) {
        blocks.push(section("Today", friends, &sections.today, &opts));
    }
    if matches!(which, Section::Week | Section::All) {
        blocks.push(section("This Week", friends, &sections.this_week, &opts));
    }
    if matches!(which, Section::Month | Section::All) {
        blocks.push(section("Last 30 Days", friends, &sections.last_30_days, &opts));
    }

    for block in blocks {
        println!();
        print!("{}", block);
    }
    Ok(())
}

pub async fn run_new(data_dir: Option<PathBuf>) -> anyhow::Result<()> {
    let mut feed = app::open(data_dir)?;
    let previous_visit = feed.last_visit();
    let report = feed.refetch().await;
    println!("{}", report_line(&report));
    if !report.is_applied() {
        return Ok(());
    }

    let title = if previous_visit == chrono::DateTime::<chrono::Utc>::UNIX_EPOCH {
        "New Observations".to_string()
    } else {
        format!(
            "New since {}",
            previous_visit.with_timezone(&Local).format("%Y-%m-%d %H:%M")
        )
    };
    let opts = RenderOptions {
        liked: feed.likes(),
        preview_chars: feed.config().description_preview_chars,
    };
    let fresh: Vec<_> = feed.new_since_last_visit().iter().collect();
    println!();
    print!(
        "{}",
        observation_list(&title, &fresh, "Nothing new since your last visit.", &opts)
    );
    Ok(())
}
