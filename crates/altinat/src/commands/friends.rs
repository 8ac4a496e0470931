use crate::app;
use crate::render::report_line;
use std::path::PathBuf;

pub fn run_list(data_dir: Option<PathBuf>) -> anyhow::Result<()> {
    let feed = app::open(data_dir)?;

    if feed.friends().is_empty() {
        println!("No friends tracked. Add one with `altinat friends add <login>`.");
        return Ok(());
    }

    println!("Friends ({})", feed.friends().len());
    for login in feed.friends().iter() {
        println!("  {}", login);
    }
    Ok(())
}

pub async fn run_add(data_dir: Option<PathBuf>, name: &str) -> anyhow::Result<()> {
    let mut feed = app::open(data_dir)?;

    match feed.add_friend(name).await? {
        Some(report) => {
            println!("Now tracking {}.", name.trim());
            println!("{}", report_line(&report));
        }
        None => println!("Nothing to add: name is blank or already tracked."),
    }
    Ok(())
}

pub async fn run_remove(data_dir: Option<PathBuf>, name: &str) -> anyhow::Result<()> {
    let mut feed = app::open(data_dir)?;

    match feed.remove_friend(name).await? {
        Some(report) => {
            println!("Stopped tracking {}.", name);
            println!("{}", report_line(&report));
        }
        None => println!("{} is not tracked.", name),
    }
    Ok(())
}
