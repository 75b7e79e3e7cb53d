// tests/stop_suggestions.rs
//
// Stop-name suggestion extraction: the second record type the engine
// produces, sharing the tokenizer but with its own required role.

use std::collections::HashMap;

use timetable_scrape::{
    ColumnMapping, ColumnRole, Engine, ProviderConfig, RegionLocator, Severity,
};

fn suggestion_config() -> ProviderConfig {
    ProviderConfig {
        name: "test_stops".into(),
        region: RegionLocator {
            anchor: r#"<table id="suggestions">"#.into(),
            close_tag: "table".into(),
        },
        row_tag: "tr".into(),
        cell_tags: vec!["td".into()],
        header_cell_tag: "th".into(),
        columns: vec![
            ColumnMapping { index: 0, role: ColumnRole::StopName },
            ColumnMapping { index: 1, role: ColumnRole::StopId },
        ],
        time_format: "hh:mm".into(),
        date_format: None,
        vehicle_types: HashMap::new(),
        line_prefix_types: Vec::new(),
        default_vehicle_type: None,
        route: None,
        capitalize_target: false,
    }
}

const SUGGESTIONS: &str = r#"<table id="suggestions">
<tr><td>Central Station</td><td>900001</td></tr>
<tr><td>Central Park</td><td></td></tr>
<tr><td>  </td><td>900003</td></tr>
</table>"#;

#[test]
fn names_and_ids_in_document_order() {
    let engine = Engine::new(suggestion_config()).unwrap();
    let result = engine.extract_stop_suggestions(SUGGESTIONS);

    assert_eq!(result.records.len(), 2);
    assert_eq!(result.records[0].name, "Central Station");
    assert_eq!(result.records[0].id, "900001");
    assert_eq!(result.records[1].name, "Central Park");
    assert_eq!(result.records[1].id, "");

    // The blank-name row is skipped with a row diagnostic.
    assert_eq!(result.diagnostics.len(), 1);
    assert_eq!(result.diagnostics[0].severity, Severity::Row);
    assert!(result.diagnostics[0].message.contains("empty stop name"));
}

#[test]
fn id_column_is_optional() {
    let mut cfg = suggestion_config();
    cfg.columns = vec![ColumnMapping { index: 0, role: ColumnRole::StopName }];
    let engine = Engine::new(cfg).unwrap();
    let result = engine.extract_stop_suggestions(SUGGESTIONS);

    assert_eq!(result.records.len(), 2);
    assert!(result.records.iter().all(|s| s.id.is_empty()));
}

#[test]
fn missing_name_column_aborts() {
    let mut cfg = suggestion_config();
    cfg.columns = vec![ColumnMapping { index: 0, role: ColumnRole::Target }];
    let engine = Engine::new(cfg).unwrap();
    let result = engine.extract_stop_suggestions(SUGGESTIONS);

    assert!(result.records.is_empty());
    assert_eq!(result.diagnostics.len(), 1);
    assert_eq!(result.diagnostics[0].severity, Severity::Document);
    assert!(result.diagnostics[0].message.contains("stop-name"));
}

#[test]
fn missing_region_aborts() {
    let engine = Engine::new(suggestion_config()).unwrap();
    let result = engine.extract_stop_suggestions("<p>no suggestions here</p>");

    assert!(!result.has_data());
    assert_eq!(result.diagnostics.len(), 1);
    assert_eq!(result.diagnostics[0].severity, Severity::Document);
}
