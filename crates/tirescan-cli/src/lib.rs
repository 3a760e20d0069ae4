// NOTE: tirescan Architecture Rationale
//
// Why keep the raw API reply (not just the extracted fields)?
// - The recognition API is a black box and its schema shifts without notice
// - Every outcome, failures included, shows the full reply for diagnosis
// - `inspect` can re-render a saved reply offline after a fix
//
// Why classify into one Outcome before rendering?
// - The six states are mutually exclusive; one enum makes that explicit
// - Renderers (plain/json/html) stay dumb and cannot disagree on the state
//
// Why is the API key environment-only?
// - It is a secret; config files get copied, committed and shared
// - No default: a missing key stops `analyze` before any photo is read

mod args;
mod commands;
mod handlers;
pub mod presentation;
pub mod types;

pub use args::{Cli, Commands, ConfigCommand};
pub use commands::run;
pub use types::{LogLevel, OutputFormat};
