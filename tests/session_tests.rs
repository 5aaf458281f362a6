use std::fs;
use std::path::PathBuf;

use currency::{RateTable, StaticRateProvider};
use fare_features::FeatureSet;
use fare_regression::{finish, session, PipelineError, RunConfig, Session};

fn config() -> RunConfig {
    RunConfig {
        features: FeatureSet::basic(),
        airports_path: PathBuf::from("airports.csv"),
        plot_path: None,
        rates_url: String::new(),
        log_dir: std::env::temp_dir(),
    }
}

fn provider() -> StaticRateProvider {
    StaticRateProvider::new(RateTable::new().with_rate("inr", 90.0))
}

fn write_dataset(name: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!("fare_session_{}", name));
    let csv = "Airline,Duration,Price\n\
               IndiGo,2h 50m,3897\n\
               Air India,7h 25m,7662\n\
               Jet Airways,19h,13882\n\
               IndiGo,5h 25m,6218\n";
    fs::write(&path, csv).expect("Failed to write test file");
    path
}

// Runs a session on `input` and returns its result with everything written to stdout
fn run_session(input: &str) -> (Result<Session, PipelineError>, String) {
    let mut output = Vec::new();
    let result = session(
        &mut input.as_bytes(),
        &mut output,
        &config(),
        &provider(),
        None,
    );
    (result, String::from_utf8(output).unwrap())
}

#[test]
fn test_exit_at_the_file_prompt() {
    let (result, output) = run_session("exit\n");

    assert_eq!(result.unwrap(), Session::Exited);
    assert_eq!(output, "Enter the name of the CSV file: ");
    assert_eq!(finish(Ok(Session::Exited), &mut Vec::new(), &mut Vec::new(), None), 0);
}

#[test]
fn test_exit_at_the_currency_prompt() {
    let path = write_dataset("exit_currency.csv");

    let (result, output) = run_session(&format!("{}\nexit\n", path.display()));

    assert_eq!(result.unwrap(), Session::Exited);
    assert!(output.ends_with("Enter the currency of the prices: "));

    fs::remove_file(path).unwrap();
}

#[test]
fn test_missing_file_exits_with_status_one_on_stdout() {
    let (result, _) = run_session("missing_fare_session.csv\n");
    let err = result.as_ref().unwrap_err();
    assert!(err.is_user_error());

    let mut out = Vec::new();
    let mut err_out = Vec::new();
    let status = finish(result, &mut out, &mut err_out, None);

    assert_eq!(status, 1);
    assert_eq!(
        String::from_utf8(out).unwrap(),
        "File missing_fare_session.csv not found.\n"
    );
    assert!(err_out.is_empty());
}

#[test]
fn test_unsupported_currency_exits_with_status_one_on_stdout() {
    let path = write_dataset("bad_currency.csv");

    let (result, _) = run_session(&format!("{}\nxyz\n", path.display()));
    assert!(result.as_ref().unwrap_err().is_user_error());

    let mut out = Vec::new();
    let mut err_out = Vec::new();
    assert_eq!(finish(result, &mut out, &mut err_out, None), 1);
    assert_eq!(String::from_utf8(out).unwrap(), "Currency xyz not supported.\n");
    assert!(err_out.is_empty());

    fs::remove_file(path).unwrap();
}

#[test]
fn test_format_error_goes_to_stderr() {
    let path = std::env::temp_dir().join("fare_session_bad_duration.csv");
    fs::write(&path, "Airline,Duration,Price\nA,1h 2m 3s,100\nB,2h,200\n").unwrap();

    let (result, _) = run_session(&format!("{}\ninr\n", path.display()));

    let mut out = Vec::new();
    let mut err_out = Vec::new();
    assert_eq!(finish(result, &mut out, &mut err_out, None), 1);
    assert!(out.is_empty());
    assert!(!err_out.is_empty());

    fs::remove_file(path).unwrap();
}

#[test]
fn test_completed_session_prints_the_report() {
    let path = write_dataset("completed.csv");

    let (result, output) = run_session(&format!("{}\nINR\n", path.display()));

    assert_eq!(result.unwrap(), Session::Completed);
    assert!(output.contains("R-squared: "));
    assert!(output.contains("Intercept: "));
    assert!(output.contains("Duration coefficient: "));
    assert!(output.contains("Demand coefficient: "));
    assert!(!output.contains("Plot saved"));

    fs::remove_file(path).unwrap();
}
