pub mod analysis;
pub mod error;
pub mod tire;

pub use analysis::{AnalysisResult, VehicleRecord};
pub use error::{Error, Result};
pub use tire::{Dimension, TireSource, TireSpec, resolve};
