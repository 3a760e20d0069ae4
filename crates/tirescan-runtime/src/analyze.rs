use std::path::Path;

use crate::client::{AnalysisClient, AnalyzeRequest};
use crate::encoder::{EncodedImage, encode_file};
use crate::outcome::Outcome;
use crate::{Error, Result};

pub const MISSING_PHOTOS: &str = "Please provide both photos (--tire and --car) before analyzing.";

/// Run one submission end to end: validate and encode both photos, call the
/// API once, and classify what came back.
///
/// Input problems are reported as [`Outcome::InvalidInput`] without sending
/// anything. There are no retries.
pub fn run_analysis(
    client: &dyn AnalysisClient,
    tire: Option<&Path>,
    car: Option<&Path>,
    search_base: &str,
) -> Outcome {
    let (Some(tire), Some(car)) = (tire, car) else {
        log::warn!("analysis skipped: missing photo");
        return Outcome::InvalidInput {
            message: MISSING_PHOTOS.to_string(),
        };
    };

    let request = match build_request(tire, car) {
        Ok(request) => request,
        Err(err) => {
            log::warn!("analysis skipped: {}", err);
            return err.into();
        }
    };

    let outcome = Outcome::from_response(client.analyze(&request), search_base);
    log::info!("analysis outcome: {}", outcome.kind());
    outcome
}

fn build_request(tire: &Path, car: &Path) -> Result<AnalyzeRequest> {
    let tire = load(tire)?;
    let car = load(car)?;

    Ok(AnalyzeRequest {
        tire_image: tire.data,
        car_image: car.data,
    })
}

fn load(path: &Path) -> Result<EncodedImage> {
    let image = encode_file(path)?;
    image.ensure_plausible()?;
    log::debug!(
        "encoded {} ({}, {} bytes -> {} chars)",
        image.path.display(),
        image.media_type,
        image.byte_len,
        image.data.len()
    );
    Ok(image)
}

impl From<Error> for Outcome {
    fn from(err: Error) -> Self {
        Outcome::InvalidInput {
            message: err.to_string(),
        }
    }
}
