use pretty_assertions::assert_eq;
use report_writer::commands::{
    check_location, execute_report, render_chart, validate_args, ReportArgs,
};
use tempfile::NamedTempFile;

fn write_rows(dir: &std::path::Path) -> std::path::PathBuf {
    let path = dir.join("rows.json");
    std::fs::write(&path, r#"[["run","latency"],["1","12"],["2","15"]]"#).unwrap();
    path
}

#[test]
fn test_execute_report_writes_all_files() {
    let temp_dir = tempfile::tempdir().unwrap();
    let args = ReportArgs {
        rows_path: write_rows(temp_dir.path()),
        output_dir: temp_dir.path().to_path_buf(),
        name: "latency".to_string(),
        html: true,
    };

    let files = execute_report(args).unwrap();

    assert_eq!(
        std::fs::read_to_string(&files.csv).unwrap(),
        "run,latency\n1,12\n2,15\n"
    );

    let json: Vec<Vec<String>> =
        serde_json::from_slice(&std::fs::read(&files.json).unwrap()).unwrap();
    assert_eq!(json.len(), 3);
    assert_eq!(json[0], vec!["run".to_string(), "latency".to_string()]);

    let html = files.html.unwrap();
    assert!(std::fs::read_to_string(html).unwrap().contains("run,latency"));
}

#[test]
fn test_execute_report_without_html() {
    let temp_dir = tempfile::tempdir().unwrap();
    let args = ReportArgs {
        rows_path: write_rows(temp_dir.path()),
        output_dir: temp_dir.path().to_path_buf(),
        name: "plain".to_string(),
        html: false,
    };

    let files = execute_report(args).unwrap();

    assert!(files.html.is_none());
    assert!(!temp_dir.path().join("plain.html").exists());
}

#[test]
fn test_execute_report_missing_output_dir() {
    let temp_dir = tempfile::tempdir().unwrap();
    let args = ReportArgs {
        rows_path: write_rows(temp_dir.path()),
        output_dir: temp_dir.path().join("nowhere"),
        name: "latency".to_string(),
        html: false,
    };

    assert!(execute_report(args).is_err());
}

#[test]
fn test_execute_report_bad_rows_file() {
    let temp_dir = tempfile::tempdir().unwrap();
    let rows_path = temp_dir.path().join("rows.json");
    std::fs::write(&rows_path, "{\"not\": \"rows\"}").unwrap();

    let args = ReportArgs {
        rows_path,
        output_dir: temp_dir.path().to_path_buf(),
        name: "latency".to_string(),
        html: false,
    };

    assert!(execute_report(args).is_err());
    assert!(!temp_dir.path().join("latency.csv").exists());
}

#[test]
fn test_validate_args_rejects_nested_name() {
    let args = ReportArgs {
        name: "sub/dir".to_string(),
        ..Default::default()
    };

    assert!(validate_args(&args).is_err());
}

#[test]
fn test_check_location_directory() {
    let temp_dir = tempfile::tempdir().unwrap();

    assert!(check_location(temp_dir.path()).is_ok());
}

#[test]
fn test_check_location_file() {
    let temp_file = NamedTempFile::new().unwrap();

    assert!(check_location(temp_file.path()).is_err());
}

#[test]
fn test_render_chart_writes_html() {
    let temp_dir = tempfile::tempdir().unwrap();
    let csv_path = temp_dir.path().join("chart.csv");
    let html_path = temp_dir.path().join("chart.html");
    std::fs::write(&csv_path, "run,latency\n1,12\n").unwrap();

    render_chart(&csv_path, &html_path).unwrap();

    let page = std::fs::read_to_string(&html_path).unwrap();
    assert!(page.contains("run,latency\n1,12\n"));
}

#[test]
fn test_render_chart_missing_csv_names_both_paths() {
    let temp_dir = tempfile::tempdir().unwrap();
    let csv_path = temp_dir.path().join("missing.csv");
    let html_path = temp_dir.path().join("chart.html");

    let err = render_chart(&csv_path, &html_path).unwrap_err();

    let msg = err.to_string();
    assert!(msg.contains(&csv_path.display().to_string()));
    assert!(msg.contains(&html_path.display().to_string()));
    assert!(!html_path.exists());
}
