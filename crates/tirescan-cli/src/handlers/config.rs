use crate::handlers::HandlerContext;
use crate::presentation::presenters::{present_config, present_config_init};
use anyhow::Result;
use std::path::Path;
use tirescan_runtime::{ApiKey, Config};

pub fn show(ctx: &HandlerContext, config_path: &Path) -> Result<()> {
    let config = Config::load(config_path)?;
    let api_key_set = ApiKey::from_env().is_ok();

    ctx.render(&present_config(config_path, &config, api_key_set))
}

/// Write default settings. An existing file is kept unless `force` is set.
pub fn init(ctx: &HandlerContext, config_path: &Path, force: bool) -> Result<()> {
    let written = if config_path.exists() && !force {
        log::info!("config exists, not overwriting: {}", config_path.display());
        false
    } else {
        Config::default().save_to(config_path)?;
        true
    };

    ctx.render(&present_config_init(config_path, written))
}
