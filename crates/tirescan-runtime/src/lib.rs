pub mod analyze;
pub mod client;
pub mod config;
pub mod encoder;
pub mod error;
pub mod link;
pub mod outcome;

pub use analyze::run_analysis;
pub use client::{AnalysisClient, AnalyzeRequest, ApiResponse, HttpAnalysisClient, TransportError};
pub use config::{ApiKey, Config};
pub use encoder::{EncodedImage, encode, encode_file};
pub use error::{Error, Result};
pub use link::search_link;
pub use outcome::{Outcome, RawResponse};
