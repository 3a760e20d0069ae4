use std::path::Path;
use tirescan_runtime::Config;
use tirescan_runtime::config::API_KEY_ENV;

use crate::presentation::view_models::{
    CommandResultViewModel, ConfigInitViewModel, ConfigViewModel, Guidance, StatusBadge,
};

pub fn present_config(
    path: &Path,
    config: &Config,
    api_key_set: bool,
) -> CommandResultViewModel<ConfigViewModel> {
    let content = ConfigViewModel {
        path: path.to_path_buf(),
        file_exists: path.exists(),
        api_url: config.api_url.clone(),
        search_base_url: config.search_base_url.clone(),
        timeout_secs: config.timeout_secs,
        api_key_set,
    };

    let mut result = CommandResultViewModel::new(content);

    if !api_key_set {
        result = result
            .with_badge(StatusBadge::warning(format!("{} is not set", API_KEY_ENV)))
            .with_suggestion(
                Guidance::new("Export your recognition API key")
                    .with_command(format!("export {}=<your key>", API_KEY_ENV)),
            );
    }

    result
}

pub fn present_config_init(path: &Path, written: bool) -> CommandResultViewModel<ConfigInitViewModel> {
    let content = ConfigInitViewModel {
        path: path.to_path_buf(),
        written,
    };

    if written {
        CommandResultViewModel::new(content).with_badge(StatusBadge::success("Config file written"))
    } else {
        CommandResultViewModel::new(content)
            .with_badge(StatusBadge::info("Config file already exists"))
            .with_suggestion(
                Guidance::new("Overwrite it with defaults").with_command("tirescan config init --force"),
            )
    }
}
