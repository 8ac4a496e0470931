use std::path::PathBuf;

use altinat_store::{load_friends, load_last_visit, load_liked, FileStorage, Paths};
use chrono::{DateTime, Utc};

use crate::app::load_config;

/// Print stored state as JSON without touching the network
pub fn run(data_dir: Option<PathBuf>) -> anyhow::Result<()> {
    let paths = Paths::resolve(data_dir)?;
    println!("{}", status_json(&paths));
    Ok(())
}

fn status_json(paths: &Paths) -> serde_json::Value {
    let storage = FileStorage::new(paths.storage_dir());
    let config = load_config(paths);
    let friends = load_friends(&storage);
    let liked = load_liked(&storage);
    let last_visit = load_last_visit(&storage);

    let last_visit = if last_visit == DateTime::<Utc>::UNIX_EPOCH {
        serde_json::Value::Null
    } else {
        serde_json::json!(last_visit.to_rfc3339())
    };

    serde_json::json!({
        "data_dir": paths.root.display().to_string(),
        "friends": friends,
        "liked": liked.len(),
        "last_visit": last_visit,
        "per_page": config.per_page.get(),
        "api_base_url": config.api_base_url,
    })
}
