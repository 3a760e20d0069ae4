use std::fmt;

use crate::presentation::view_models::{ConfigInitViewModel, ConfigViewModel};

pub struct ConfigView<'a> {
    data: &'a ConfigViewModel,
}

impl<'a> ConfigView<'a> {
    pub fn new(data: &'a ConfigViewModel) -> Self {
        Self { data }
    }
}

impl<'a> fmt::Display for ConfigView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let origin = if self.data.file_exists {
            ""
        } else {
            " (not found, using defaults)"
        };

        writeln!(f, "{:<16} {}{}", "Config file:", self.data.path.display(), origin)?;
        writeln!(f, "{:<16} {}", "API URL:", self.data.api_url)?;
        writeln!(f, "{:<16} {}", "Search base:", self.data.search_base_url)?;
        writeln!(f, "{:<16} {}s", "Timeout:", self.data.timeout_secs)?;
        writeln!(
            f,
            "{:<16} {}",
            "API key:",
            if self.data.api_key_set { "set" } else { "not set" }
        )?;

        Ok(())
    }
}

pub struct ConfigInitView<'a> {
    data: &'a ConfigInitViewModel,
}

impl<'a> ConfigInitView<'a> {
    pub fn new(data: &'a ConfigInitViewModel) -> Self {
        Self { data }
    }
}

impl<'a> fmt::Display for ConfigInitView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.data.written {
            writeln!(f, "Wrote {}", self.data.path.display())
        } else {
            writeln!(f, "Kept existing {}", self.data.path.display())
        }
    }
}
