use serde::Serialize;
use std::fmt;
use std::path::PathBuf;

use super::CreateView;
use crate::presentation::views::{ConfigInitView, ConfigView};

#[derive(Debug, Serialize)]
pub struct ConfigViewModel {
    pub path: PathBuf,
    pub file_exists: bool,
    pub api_url: String,
    pub search_base_url: String,
    pub timeout_secs: u64,
    pub api_key_set: bool,
}

impl CreateView for ConfigViewModel {
    fn create_view<'a>(&'a self) -> Box<dyn fmt::Display + 'a> {
        Box::new(ConfigView::new(self))
    }
}

#[derive(Debug, Serialize)]
pub struct ConfigInitViewModel {
    pub path: PathBuf,
    pub written: bool,
}

impl CreateView for ConfigInitViewModel {
    fn create_view<'a>(&'a self) -> Box<dyn fmt::Display + 'a> {
        Box::new(ConfigInitView::new(self))
    }
}
