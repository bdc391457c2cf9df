use chart_def::{AxisMap, ChartDef, ChartType, PlotConfig, YAxisSeriesConfig, storage};
use tempfile::tempdir;

fn sample() -> ChartDef {
    let plot = PlotConfig {
        chart_type: Some(ChartType::Area),
        ..Default::default()
    };
    ChartDef::new(
        serde_json::json!({"temp": [21.5, 22.0, 19.8]}),
        plot,
        AxisMap::new(vec![YAxisSeriesConfig::new("temp")]),
    )
}

#[test]
fn save_then_load_preserves_the_definition() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("chart.json");
    let def = sample();

    storage::save_json(&def, &path).unwrap();
    let txt = std::fs::read_to_string(&path).unwrap();
    // Pretty output, with the wire names on disk.
    assert!(txt.contains("\"plotConfig\""));
    assert!(txt.contains("\"axisMap\""));

    let back = storage::load_json(&path).unwrap();
    assert_eq!(back, def);
}

#[test]
fn load_of_malformed_file_fails_with_json_error() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("bad.json");
    std::fs::write(&path, r#"{"plotConfig":{}}"#).unwrap();

    let err = storage::load_json(&path).unwrap_err();
    assert!(matches!(err, storage::StorageError::Json(_)));
}

#[test]
fn load_of_missing_file_fails_with_io_error() {
    let dir = tempdir().unwrap();
    let err = storage::load_json(dir.path().join("absent.json")).unwrap_err();
    assert!(matches!(err, storage::StorageError::Io(_)));
}
