use anyhow::Context;
use pihole_exporter_domain::Config;
use std::path::Path;

pub fn load_config(config_path: &Path) -> anyhow::Result<Config> {
    Config::load(config_path)
        .with_context(|| format!("Can't load configuration from {}", config_path.display()))
}
