pub mod analysis;
pub mod config;

pub use analysis::present_analysis;
pub use config::{present_config, present_config_init};
