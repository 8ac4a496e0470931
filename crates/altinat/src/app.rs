use altinat_core::Config;
use altinat_feed::FeedController;
use altinat_fetch::HttpSource;
use altinat_store::{parse_or_default, read_optional, FileStorage, Paths};
use std::path::PathBuf;

pub type Feed = FeedController<HttpSource, FileStorage>;

/// Read `config.json`, falling back to defaults when missing or invalid
pub fn load_config(paths: &Paths) -> Config {
    let raw = match read_optional(&paths.config_file()) {
        Ok(raw) => raw,
        Err(e) => {
            tracing::debug!(error = %e, "could not read config file");
            None
        }
    };
    parse_or_default(raw.as_deref(), Config::default())
}

pub fn open(data_dir: Option<PathBuf>) -> anyhow::Result<Feed> {
    let paths = Paths::resolve(data_dir)?;
    let config = load_config(&paths);
    let source = HttpSource::new(&config.api_base_url, config.request_timeout())?;
    let storage = FileStorage::new(paths.storage_dir());
    Ok(FeedController::open(source, storage, config))
}
