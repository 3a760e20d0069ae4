use crate::handlers::HandlerContext;
use crate::presentation::presenters::present_analysis;
use anyhow::{Context, Result};
use std::path::Path;
use tirescan_runtime::{Config, Outcome};
use tirescan_types::AnalysisResult;

/// Render a saved API reply exactly as `analyze` would have, without
/// sending anything or needing an API key.
pub fn handle(ctx: &HandlerContext, config_path: &Path, response: &Path) -> Result<()> {
    let config = Config::load(config_path)?;

    let body = std::fs::read_to_string(response)
        .with_context(|| format!("Failed to read {}", response.display()))?;
    let result = AnalysisResult::parse(&body)
        .with_context(|| format!("{} is not a JSON reply", response.display()))?;

    let outcome = Outcome::classify(Ok(result), &config.search_base_url);
    log::info!("inspect outcome: {}", outcome.kind());

    ctx.render(&present_analysis(outcome))
}
