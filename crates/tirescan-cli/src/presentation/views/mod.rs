mod analysis;
mod config;

pub use analysis::{AnalysisHtmlView, AnalysisView};
pub use config::{ConfigInitView, ConfigView};
