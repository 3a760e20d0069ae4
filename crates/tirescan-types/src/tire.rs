use serde::Serialize;
use serde_json::{Map, Number, Value};
use std::fmt;

use crate::analysis::VehicleRecord;

/// A single tire measurement (width, aspect ratio or rim diameter).
///
/// The recognition API reports these either as JSON numbers or as numeric
/// strings. Both are kept verbatim so the value is rendered exactly as received.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Dimension {
    Number(Number),
    Text(String),
}

impl Dimension {
    /// Accept a raw JSON value as a dimension.
    ///
    /// Usable values are positive numbers and strings that are not blank.
    /// Null, zero, negatives, booleans, arrays and objects yield `None`.
    pub fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Number(n) if n.as_f64().is_some_and(|v| v > 0.0) => {
                Some(Self::Number(n.clone()))
            }
            Value::String(s) if !s.trim().is_empty() => Some(Self::Text(s.clone())),
            _ => None,
        }
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Dimension::Number(n) => write!(f, "{}", n),
            Dimension::Text(s) => write!(f, "{}", s),
        }
    }
}

impl From<u32> for Dimension {
    fn from(n: u32) -> Self {
        Self::Number(Number::from(n))
    }
}

impl From<&str> for Dimension {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

/// Where in a vehicle record a tire measurement was found
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TireSource {
    /// Read visually from the tire photo
    CurrentTire,
    /// Factory (original equipment) front size
    OeFrontTire,
    /// Factory (original equipment) rear size
    OeRearTire,
}

impl TireSource {
    /// Resolution order: the size read off the sidewall beats the factory
    /// sheet, and the front factory size beats the rear one.
    pub const PRIORITY: [TireSource; 3] = [
        TireSource::CurrentTire,
        TireSource::OeFrontTire,
        TireSource::OeRearTire,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            TireSource::CurrentTire => "current_tire",
            TireSource::OeFrontTire => "oe_front_tire",
            TireSource::OeRearTire => "oe_rear_tire",
        }
    }
}

impl fmt::Display for TireSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}

/// A complete tire size: all three dimensions are present and usable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TireSpec {
    width: Dimension,
    aspect_ratio: Dimension,
    diameter: Dimension,
    source: TireSource,
}

impl TireSpec {
    pub fn new(
        width: impl Into<Dimension>,
        aspect_ratio: impl Into<Dimension>,
        diameter: impl Into<Dimension>,
        source: TireSource,
    ) -> Self {
        Self {
            width: width.into(),
            aspect_ratio: aspect_ratio.into(),
            diameter: diameter.into(),
            source,
        }
    }

    /// Build a spec from one tire object, or `None` if any dimension is unusable
    pub fn from_tire(tire: &Map<String, Value>, source: TireSource) -> Option<Self> {
        let field = |key: &str| tire.get(key).and_then(Dimension::from_value);

        Some(Self {
            width: field("width")?,
            aspect_ratio: field("aspect_ratio")?,
            diameter: field("diameter")?,
            source,
        })
    }

    pub fn width(&self) -> &Dimension {
        &self.width
    }

    pub fn aspect_ratio(&self) -> &Dimension {
        &self.aspect_ratio
    }

    pub fn diameter(&self) -> &Dimension {
        &self.diameter
    }

    pub fn source(&self) -> TireSource {
        self.source
    }
}

/// Renders the conventional size label, e.g. `195/65 R15`
impl fmt::Display for TireSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{} R{}", self.width, self.aspect_ratio, self.diameter)
    }
}

/// Pick the best complete tire size out of a vehicle record.
///
/// Candidates are scanned in [`TireSource::PRIORITY`] order and the first
/// complete one wins. Returns `None` when no candidate is complete.
pub fn resolve(vehicle: &VehicleRecord) -> Option<TireSpec> {
    TireSource::PRIORITY.iter().find_map(|&source| {
        vehicle
            .tire(source)
            .and_then(|tire| TireSpec::from_tire(tire, source))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_dimension_accepts_numbers_and_numeric_strings() {
        assert_eq!(Dimension::from_value(&json!(205)), Some(Dimension::from(205u32)));
        assert_eq!(
            Dimension::from_value(&json!("55")),
            Some(Dimension::from("55"))
        );
        assert!(Dimension::from_value(&json!(17.5)).is_some());
    }

    #[test]
    fn test_dimension_rejects_unusable_values() {
        assert!(Dimension::from_value(&Value::Null).is_none());
        assert!(Dimension::from_value(&json!(0)).is_none());
        assert!(Dimension::from_value(&json!(-3)).is_none());
        assert!(Dimension::from_value(&json!("")).is_none());
        assert!(Dimension::from_value(&json!("   ")).is_none());
        assert!(Dimension::from_value(&json!(true)).is_none());
        assert!(Dimension::from_value(&json!([205])).is_none());
        assert!(Dimension::from_value(&json!({"value": 205})).is_none());
    }

    #[test]
    fn test_dimension_display_is_verbatim() {
        assert_eq!(Dimension::from(16u32).to_string(), "16");
        assert_eq!(Dimension::from("R16").to_string(), "R16");
        let fractional = Dimension::from_value(&json!(17.5)).unwrap();
        assert_eq!(fractional.to_string(), "17.5");
    }

    #[test]
    fn test_spec_label() {
        let spec = TireSpec::new(195u32, 65u32, 15u32, TireSource::CurrentTire);
        assert_eq!(spec.to_string(), "195/65 R15");
    }

    #[test]
    fn test_from_tire_requires_all_fields() {
        let tire = json!({"width": 205, "aspect_ratio": 55});
        let map = tire.as_object().unwrap();
        assert!(TireSpec::from_tire(map, TireSource::OeFrontTire).is_none());
    }

    #[test]
    fn test_spec_serializes_dimensions_verbatim() {
        let spec = TireSpec::new(205u32, "55", 16u32, TireSource::OeFrontTire);
        let value = serde_json::to_value(&spec).unwrap();
        assert_eq!(
            value,
            json!({
                "width": 205,
                "aspect_ratio": "55",
                "diameter": 16,
                "source": "oe_front_tire"
            })
        );
    }
}
