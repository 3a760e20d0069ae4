use serde::Serialize;
use std::fmt;
use tirescan_runtime::RawResponse;
use tirescan_types::{Dimension, TireSource};

use super::CreateView;
use crate::presentation::views::{AnalysisHtmlView, AnalysisView};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AnalysisStatus {
    InvalidInput,
    TransportFailed,
    ApiError,
    NoVehicle,
    Incomplete,
    Resolved,
}

#[derive(Debug, Serialize)]
pub struct VehicleViewModel {
    pub brand: Option<String>,
    pub model: Option<String>,
    pub display_name: String,
}

#[derive(Debug, Serialize)]
pub struct TireSizeViewModel {
    pub width: Dimension,
    pub aspect_ratio: Dimension,
    pub diameter: Dimension,
    pub source: TireSource,
}

#[derive(Debug, Serialize)]
pub struct AnalysisViewModel {
    pub status: AnalysisStatus,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub vehicle: Option<VehicleViewModel>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub tire_size: Option<TireSizeViewModel>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,

    /// Always present in JSON; `null` when no reply was received
    pub raw_response: Option<RawResponse>,
}

impl CreateView for AnalysisViewModel {
    fn create_view<'a>(&'a self) -> Box<dyn fmt::Display + 'a> {
        Box::new(AnalysisView::new(self))
    }

    fn create_html<'a>(&'a self) -> Box<dyn fmt::Display + 'a> {
        Box::new(AnalysisHtmlView::new(self))
    }
}
