use serde_json::{Value, json};
use tirescan_types::*;

fn vehicle(value: Value) -> VehicleRecord {
    VehicleRecord::from_value(&value).expect("fixture must be a non-empty object")
}

fn dims(spec: &TireSpec) -> (String, String, String) {
    (
        spec.width().to_string(),
        spec.aspect_ratio().to_string(),
        spec.diameter().to_string(),
    )
}

#[test]
fn test_current_tire_wins_over_factory_sizes() {
    let record = vehicle(json!({
        "brand": "Toyota",
        "current_tire": {"width": 195, "aspect_ratio": 65, "diameter": 15},
        "oe_front_tire": {"width": 205, "aspect_ratio": 55, "diameter": 16},
        "oe_rear_tire": {"width": 225, "aspect_ratio": 45, "diameter": 17}
    }));

    let spec = resolve(&record).expect("spec should resolve");
    assert_eq!(dims(&spec), ("195".into(), "65".into(), "15".into()));
    assert_eq!(spec.source(), TireSource::CurrentTire);
}

#[test]
fn test_current_tire_wins_even_when_factory_sizes_are_broken() {
    let record = vehicle(json!({
        "current_tire": {"width": "185", "aspect_ratio": "60", "diameter": "14"},
        "oe_front_tire": null,
        "oe_rear_tire": "garbage"
    }));

    let spec = resolve(&record).unwrap();
    assert_eq!(dims(&spec), ("185".into(), "60".into(), "14".into()));
}

#[test]
fn test_front_factory_size_used_when_current_is_incomplete() {
    let incomplete_currents = [
        json!(null),
        json!({}),
        json!({"width": 195, "aspect_ratio": 65}),
        json!({"width": 195, "aspect_ratio": null, "diameter": 15}),
        json!({"width": "", "aspect_ratio": 65, "diameter": 15}),
        json!({"width": 0, "aspect_ratio": 65, "diameter": 15}),
    ];

    for current in incomplete_currents {
        let record = vehicle(json!({
            "current_tire": current.clone(),
            "oe_front_tire": {"width": 205, "aspect_ratio": 55, "diameter": 16},
            "oe_rear_tire": {"width": 225, "aspect_ratio": 45, "diameter": 17}
        }));

        let spec = resolve(&record).unwrap();
        assert_eq!(spec.source(), TireSource::OeFrontTire, "current: {}", current);
        assert_eq!(dims(&spec), ("205".into(), "55".into(), "16".into()));
    }
}

#[test]
fn test_front_factory_size_used_when_current_is_absent() {
    let record = vehicle(json!({
        "brand": "Seat",
        "oe_front_tire": {"width": 205, "aspect_ratio": 55, "diameter": 16}
    }));

    assert_eq!(resolve(&record).unwrap().source(), TireSource::OeFrontTire);
}

#[test]
fn test_rear_factory_size_used_as_last_resort() {
    let record = vehicle(json!({
        "current_tire": {"width": 195},
        "oe_front_tire": {"aspect_ratio": 55, "diameter": 16},
        "oe_rear_tire": {"width": 225, "aspect_ratio": 45, "diameter": 17}
    }));

    let spec = resolve(&record).unwrap();
    assert_eq!(spec.source(), TireSource::OeRearTire);
    assert_eq!(spec.to_string(), "225/45 R17");
}

#[test]
fn test_no_complete_source_resolves_to_none() {
    let records = [
        json!({"brand": "Ford"}),
        json!({"current_tire": {}, "oe_front_tire": {}, "oe_rear_tire": {}}),
        json!({
            "current_tire": {"width": 195, "aspect_ratio": 65},
            "oe_front_tire": {"width": null, "aspect_ratio": 55, "diameter": 16},
            "oe_rear_tire": {"width": 225, "aspect_ratio": 45, "diameter": ""}
        }),
    ];

    for record in records {
        assert!(resolve(&vehicle(record.clone())).is_none(), "{}", record);
    }
}

#[test]
fn test_vehicle_detection() {
    let empty_list = AnalysisResult::new(json!({"success": true, "data": {"vehicles": []}}));
    assert!(!empty_list.is_vehicle_detected());

    let placeholder = AnalysisResult::new(json!({"success": true, "data": {"vehicles": [{}]}}));
    assert!(!placeholder.is_vehicle_detected());

    let found = AnalysisResult::new(json!({"success": true, "data": {"vehicles": [{"brand": "Ford"}]}}));
    assert!(found.is_vehicle_detected());
}

#[test]
fn test_vehicle_detection_requires_success() {
    let failed = AnalysisResult::new(json!({
        "success": false,
        "data": {"vehicles": [{"brand": "Ford"}]}
    }));
    assert!(!failed.is_vehicle_detected());

    let missing_data = AnalysisResult::new(json!({"success": true}));
    assert!(!missing_data.is_vehicle_detected());
}

#[test]
fn test_only_first_vehicle_is_considered() {
    let result = AnalysisResult::new(json!({
        "success": true,
        "data": {"vehicles": [{}, {"brand": "Ford"}]}
    }));
    assert!(!result.is_vehicle_detected());
}

#[test]
fn test_parse_end_to_end_body() -> anyhow::Result<()> {
    let body = r#"{"success": true, "data": {"vehicles": [{"brand":"Toyota","model":"Corolla","current_tire":{"width":195,"aspect_ratio":65,"diameter":15}}]}}"#;
    let result = AnalysisResult::parse(body)?;

    let vehicle = result.first_vehicle().unwrap();
    assert_eq!(vehicle.display_name(), "Toyota Corolla");
    assert_eq!(resolve(&vehicle).unwrap().to_string(), "195/65 R15");
    Ok(())
}
