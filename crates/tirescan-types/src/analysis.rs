use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::Result;
use crate::tire::TireSource;

/// Decoded response body of the recognition API.
///
/// The body is untrusted input, so it is kept as raw JSON and every accessor
/// tolerates missing keys, nulls and values of the wrong type. The raw value
/// stays available for diagnostics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AnalysisResult(Value);

impl AnalysisResult {
    pub fn new(raw: Value) -> Self {
        Self(raw)
    }

    /// Parse a response body. Fails only when the body is not JSON at all.
    pub fn parse(body: &str) -> Result<Self> {
        Ok(Self(serde_json::from_str(body)?))
    }

    pub fn raw(&self) -> &Value {
        &self.0
    }

    pub fn into_raw(self) -> Value {
        self.0
    }

    /// True only when `success` is the JSON literal `true`
    pub fn is_success(&self) -> bool {
        self.0.get("success").and_then(Value::as_bool) == Some(true)
    }

    /// The API's own error text. Non-string errors are rendered as compact JSON.
    pub fn error_message(&self) -> Option<String> {
        match self.0.get("error")? {
            Value::Null => None,
            Value::String(s) if s.trim().is_empty() => None,
            Value::String(s) => Some(s.clone()),
            other => Some(other.to_string()),
        }
    }

    /// `data.vehicles`, or an empty slice when it is absent or not a list
    pub fn vehicles(&self) -> &[Value] {
        self.0
            .get("data")
            .and_then(|data| data.get("vehicles"))
            .and_then(Value::as_array)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// The first vehicle, if it is an object with at least one key.
    ///
    /// The API answers `success: true` with a placeholder `{}` when nothing
    /// was matched, so an empty object does not count as a vehicle.
    pub fn first_vehicle(&self) -> Option<VehicleRecord> {
        self.vehicles()
            .first()
            .and_then(VehicleRecord::from_value)
    }

    pub fn is_vehicle_detected(&self) -> bool {
        self.is_success() && self.first_vehicle().is_some()
    }
}

/// One entry of `data.vehicles`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VehicleRecord(Map<String, Value>);

impl VehicleRecord {
    pub fn new(fields: Map<String, Value>) -> Self {
        Self(fields)
    }

    /// Accepts only non-empty JSON objects
    pub fn from_value(value: &Value) -> Option<Self> {
        value
            .as_object()
            .filter(|fields| !fields.is_empty())
            .map(|fields| Self(fields.clone()))
    }

    pub fn fields(&self) -> &Map<String, Value> {
        &self.0
    }

    pub fn brand(&self) -> Option<&str> {
        self.text("brand")
    }

    pub fn model(&self) -> Option<&str> {
        self.text("model")
    }

    /// "Brand Model", skipping whichever part is missing
    pub fn display_name(&self) -> String {
        let parts: Vec<&str> = [self.brand(), self.model()].into_iter().flatten().collect();
        if parts.is_empty() {
            "Unknown vehicle".to_string()
        } else {
            parts.join(" ")
        }
    }

    /// The tire object stored under `source`, if it is an object
    pub fn tire(&self, source: TireSource) -> Option<&Map<String, Value>> {
        self.0.get(source.key()).and_then(Value::as_object)
    }

    fn text(&self, key: &str) -> Option<&str> {
        self.0
            .get(key)
            .and_then(Value::as_str)
            .map(str::trim)
            .filter(|s| !s.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_rejects_non_json() {
        assert!(AnalysisResult::parse("<html>Bad Gateway</html>").is_err());
    }

    #[test]
    fn test_success_requires_literal_true() {
        assert!(AnalysisResult::new(json!({"success": true})).is_success());
        assert!(!AnalysisResult::new(json!({"success": "true"})).is_success());
        assert!(!AnalysisResult::new(json!({"success": 1})).is_success());
        assert!(!AnalysisResult::new(json!({})).is_success());
        assert!(!AnalysisResult::new(json!(null)).is_success());
    }

    #[test]
    fn test_error_message_variants() {
        let text = AnalysisResult::new(json!({"success": false, "error": "invalid image"}));
        assert_eq!(text.error_message().as_deref(), Some("invalid image"));

        let structured = AnalysisResult::new(json!({"error": {"code": 401}}));
        assert_eq!(structured.error_message().as_deref(), Some(r#"{"code":401}"#));

        assert!(AnalysisResult::new(json!({"error": null})).error_message().is_none());
        assert!(AnalysisResult::new(json!({"error": ""})).error_message().is_none());
        assert!(AnalysisResult::new(json!({})).error_message().is_none());
    }

    #[test]
    fn test_vehicles_tolerates_bad_shapes() {
        assert!(AnalysisResult::new(json!({})).vehicles().is_empty());
        assert!(AnalysisResult::new(json!({"data": null})).vehicles().is_empty());
        assert!(
            AnalysisResult::new(json!({"data": {"vehicles": null}}))
                .vehicles()
                .is_empty()
        );
        assert!(
            AnalysisResult::new(json!({"data": {"vehicles": {"brand": "Ford"}}}))
                .vehicles()
                .is_empty()
        );
        assert!(AnalysisResult::new(json!([1, 2, 3])).vehicles().is_empty());
    }

    #[test]
    fn test_first_vehicle_must_be_non_empty_object() {
        let strings = AnalysisResult::new(json!({"data": {"vehicles": ["Ford"]}}));
        assert!(strings.first_vehicle().is_none());

        let nulls = AnalysisResult::new(json!({"data": {"vehicles": [null]}}));
        assert!(nulls.first_vehicle().is_none());
    }

    #[test]
    fn test_display_name() {
        let full = VehicleRecord::from_value(&json!({"brand": "Toyota", "model": "Corolla"}));
        assert_eq!(full.unwrap().display_name(), "Toyota Corolla");

        let brand_only = VehicleRecord::from_value(&json!({"brand": "Seat", "model": null}));
        assert_eq!(brand_only.unwrap().display_name(), "Seat");

        let anonymous = VehicleRecord::from_value(&json!({"current_tire": {}}));
        assert_eq!(anonymous.unwrap().display_name(), "Unknown vehicle");
    }

    #[test]
    fn test_tire_ignores_non_objects() {
        let vehicle = VehicleRecord::from_value(&json!({
            "current_tire": "205/55 R16",
            "oe_front_tire": {"width": 205}
        }))
        .unwrap();

        assert!(vehicle.tire(TireSource::CurrentTire).is_none());
        assert!(vehicle.tire(TireSource::OeFrontTire).is_some());
        assert!(vehicle.tire(TireSource::OeRearTire).is_none());
    }
}
