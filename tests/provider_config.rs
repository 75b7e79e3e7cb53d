// tests/provider_config.rs
//
// Provider configurations are plain data: they round-trip through JSON
// and are validated once when the engine is built.

use chrono::NaiveDate;

use timetable_scrape::{
    ColumnMapping, ColumnRole, Engine, EngineError, ProviderConfig, VehicleType, providers,
};

#[test]
fn provider_config_from_json() {
    let json = r#"{
        "name": "json_provider",
        "region": { "anchor": "<table id=\"dep\">", "close_tag": "table" },
        "columns": [
            { "index": 0, "role": "time" },
            { "index": 1, "role": "vehicle-type" },
            { "index": 2, "role": "target" }
        ],
        "vehicle_types": { "sbahn": "interurban-train" }
    }"#;

    let cfg: ProviderConfig = serde_json::from_str(json).unwrap();
    // Unspecified fields fall back to the usual table dialect.
    assert_eq!(cfg.row_tag, "tr");
    assert_eq!(cfg.time_format, "hh:mm");
    assert_eq!(cfg.vehicle_types.get("sbahn"), Some(&VehicleType::InterurbanTrain));

    let engine = Engine::new(cfg).unwrap();
    let doc = r#"<table id="dep"><tr><td>8:05</td><td>SBahn</td><td>Airport</td></tr></table>"#;
    let result = engine.extract_departures_at(doc, NaiveDate::from_ymd_opt(2010, 6, 1).unwrap());
    assert_eq!(result.records.len(), 1);
    assert_eq!(result.records[0].vehicle_type, VehicleType::InterurbanTrain);
}

#[test]
fn shipped_providers_build() {
    for cfg in [
        providers::de_db::departures(),
        providers::de_db::stop_suggestions(),
        providers::sk_imhd::departures(),
    ] {
        let name = cfg.name.clone();
        assert!(Engine::new(cfg).is_ok(), "provider {name} failed to build");
    }
}

#[test]
fn duplicate_role_is_rejected() {
    let mut cfg = providers::sk_imhd::departures();
    cfg.columns.push(ColumnMapping { index: 5, role: ColumnRole::Time });
    let err = Engine::new(cfg).err().expect("duplicate role must not build");
    assert!(matches!(err, EngineError::DuplicateRole(ColumnRole::Time)), "{err:?}");
}

#[test]
fn empty_mapping_is_rejected() {
    let mut cfg = providers::sk_imhd::departures();
    cfg.columns.clear();
    assert!(matches!(Engine::new(cfg), Err(EngineError::NoColumns)));
}

#[test]
fn bad_anchor_pattern_is_rejected() {
    let mut cfg = providers::sk_imhd::departures();
    cfg.region.anchor = "<table [unclosed".into();
    let err = Engine::new(cfg).err().expect("bad pattern must not build");
    match err {
        EngineError::BadPattern { pattern, .. } => assert!(pattern.contains("[unclosed")),
        other => panic!("expected BadPattern, got {other:?}"),
    }
}

#[test]
fn unknown_time_format_is_rejected() {
    let mut cfg = providers::sk_imhd::departures();
    cfg.time_format = "mm-hh".into();
    assert!(matches!(Engine::new(cfg), Err(EngineError::BadTimeFormat(_))));
}

#[test]
fn date_format_is_exposed_for_callers() {
    let engine = Engine::new(providers::de_db::departures()).unwrap();
    let fmt = engine.date_format().expect("de_db declares a date format");
    assert_eq!(fmt.parse("01.06.10").unwrap(), NaiveDate::from_ymd_opt(2010, 6, 1).unwrap());

    let engine = Engine::new(providers::sk_imhd::departures()).unwrap();
    assert!(engine.date_format().is_none());
}
