use crate::handlers::HandlerContext;
use crate::presentation::presenters::present_analysis;
use crate::presentation::view_models::{AnalysisViewModel, CommandResultViewModel};
use anyhow::Result;
use std::path::{Path, PathBuf};
use tirescan_runtime::{AnalysisClient, ApiKey, Config, HttpAnalysisClient, run_analysis};

pub fn handle(
    ctx: &HandlerContext,
    config_path: &Path,
    tire: Option<PathBuf>,
    car: Option<PathBuf>,
) -> Result<()> {
    let config = Config::load(config_path)?;
    let api_key = ApiKey::from_env()?;
    let client = HttpAnalysisClient::new(&config, api_key)?;

    let view_model = execute(&client, &config, tire.as_deref(), car.as_deref());
    ctx.render(&view_model)
}

/// One submission: photos in, a rendered-ready result out. Never fails;
/// every problem becomes one of the outcomes.
pub fn execute(
    client: &dyn AnalysisClient,
    config: &Config,
    tire: Option<&Path>,
    car: Option<&Path>,
) -> CommandResultViewModel<AnalysisViewModel> {
    let outcome = run_analysis(client, tire, car, &config.search_base_url);
    present_analysis(outcome)
}
