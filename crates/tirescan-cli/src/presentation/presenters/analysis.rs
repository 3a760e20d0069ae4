use tirescan_runtime::Outcome;
use tirescan_runtime::config::TIMEOUT_ENV;
use tirescan_types::{TireSpec, VehicleRecord};

use crate::presentation::view_models::{
    AnalysisStatus, AnalysisViewModel, CommandResultViewModel, Guidance, StatusBadge,
    TireSizeViewModel, VehicleViewModel,
};

const RETRY_COMMAND: &str = "tirescan analyze --tire <PATH> --car <PATH>";

pub fn present_analysis(outcome: Outcome) -> CommandResultViewModel<AnalysisViewModel> {
    match outcome {
        Outcome::InvalidInput { message } => CommandResultViewModel::new(AnalysisViewModel {
            status: AnalysisStatus::InvalidInput,
            message: Some(message.clone()),
            vehicle: None,
            tire_size: None,
            link: None,
            raw_response: None,
        })
        .with_badge(StatusBadge::warning(message))
        .with_suggestion(
            Guidance::new("Pass a tire close-up and a full vehicle photo (jpg, jpeg or png)")
                .with_command(RETRY_COMMAND),
        ),

        Outcome::TransportFailed { message, timed_out } => {
            let tip = if timed_out {
                Guidance::new(format!(
                    "The API did not answer in time; retry or raise {}",
                    TIMEOUT_ENV
                ))
            } else {
                Guidance::new("Check your connection and the configured API URL, then submit again")
            };

            CommandResultViewModel::new(AnalysisViewModel {
                status: AnalysisStatus::TransportFailed,
                message: Some(message.clone()),
                vehicle: None,
                tire_size: None,
                link: None,
                raw_response: None,
            })
            .with_badge(StatusBadge::error(format!("Connection error: {}", message)))
            .with_suggestion(tip)
        }

        Outcome::ApiError { message, raw } => CommandResultViewModel::new(AnalysisViewModel {
            status: AnalysisStatus::ApiError,
            message: Some(message.clone()),
            vehicle: None,
            tire_size: None,
            link: None,
            raw_response: Some(raw),
        })
        .with_badge(StatusBadge::error(format!("API error: {}", message))),

        Outcome::NoVehicle { raw } => CommandResultViewModel::new(AnalysisViewModel {
            status: AnalysisStatus::NoVehicle,
            message: None,
            vehicle: None,
            tire_size: None,
            link: None,
            raw_response: Some(raw),
        })
        .with_badge(StatusBadge::error(
            "The API responded, but no vehicle was found in the photos",
        ))
        .with_suggestion(Guidance::new(
            "Make sure the vehicle photo shows the whole car and the tire photo is legible",
        )),

        Outcome::Incomplete { vehicle, raw } => CommandResultViewModel::new(AnalysisViewModel {
            status: AnalysisStatus::Incomplete,
            message: None,
            vehicle: Some(present_vehicle(&vehicle)),
            tire_size: None,
            link: None,
            raw_response: Some(raw),
        })
        .with_badge(StatusBadge::warning(
            "Vehicle identified, but the tire size could not be read completely",
        ))
        .with_suggestion(
            Guidance::new("Try a clearer photo of the tire sidewall").with_command(RETRY_COMMAND),
        ),

        Outcome::Resolved {
            vehicle,
            spec,
            link,
            raw,
        } => {
            let vehicle = present_vehicle(&vehicle);
            let label = format!("Identified: {}", vehicle.display_name);

            CommandResultViewModel::new(AnalysisViewModel {
                status: AnalysisStatus::Resolved,
                message: None,
                vehicle: Some(vehicle),
                tire_size: Some(present_tire_size(&spec)),
                link: Some(link),
                raw_response: Some(raw),
            })
            .with_badge(StatusBadge::success(label))
        }
    }
}

fn present_vehicle(vehicle: &VehicleRecord) -> VehicleViewModel {
    VehicleViewModel {
        brand: vehicle.brand().map(str::to_string),
        model: vehicle.model().map(str::to_string),
        display_name: vehicle.display_name(),
    }
}

fn present_tire_size(spec: &TireSpec) -> TireSizeViewModel {
    TireSizeViewModel {
        width: spec.width().clone(),
        aspect_ratio: spec.aspect_ratio().clone(),
        diameter: spec.diameter().clone(),
        source: spec.source(),
    }
}
