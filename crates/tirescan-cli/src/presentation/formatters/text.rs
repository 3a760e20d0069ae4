use tirescan_types::TireSource;

use crate::presentation::view_models::TireSizeViewModel;

/// Conventional size notation, e.g. `205/55 R16`
pub fn tire_label(size: &TireSizeViewModel) -> String {
    format!("{}/{} R{}", size.width, size.aspect_ratio, size.diameter)
}

pub fn source_description(source: TireSource) -> &'static str {
    match source {
        TireSource::CurrentTire => "read from the tire sidewall",
        TireSource::OeFrontTire => "factory front size",
        TireSource::OeRearTire => "factory rear size",
    }
}
