use std::fs;
use std::path::PathBuf;

use currency::{RateProvider, RateTable, StaticRateProvider};
use fare_features::{AirportTable, Feature, FeatureError, FeatureSet, TicketSet};
use fare_regression::{run, PipelineError};

// Writes `contents` to a file under the temp dir and returns its path
fn write_temp(name: &str, contents: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!("fare_regression_{}", name));
    fs::write(&path, contents).expect("Failed to write test file");
    path
}

fn close(a: f64, b: f64, tolerance: f64) -> bool {
    (a - b).abs() <= tolerance * b.abs().max(1.0)
}

#[test]
fn test_exact_linear_prices_are_recovered() {
    // price in EUR = 50 + 0.5 * duration + 30 * stops + 10 * demand, quoted in
    // a currency worth half a euro
    let csv = "Airline,Duration,Total_Stops,Price\n\
               A,1h,non-stop,200\n\
               A,1h 30m,1 stop,290\n\
               B,2h,non-stop,260\n\
               B,2h 30m,2 stops,410\n\
               C,3h 20m,1 stop,380\n";
    let path = write_temp("exact.csv", csv);
    let dataset = TicketSet::from_path(&path).unwrap();
    let rates = StaticRateProvider::new(RateTable::new().with_rate("usd", 2.0))
        .fetch_rates()
        .unwrap();

    let outcome = run(&dataset, "usd", &rates, None, &FeatureSet::with_stops()).unwrap();
    let report = &outcome.report;

    assert_eq!(report.features, vec!["Duration", "Stops", "Demand"]);
    assert_eq!(report.rows_used, 5);
    assert_eq!(report.rows_dropped, 0);
    assert!(close(report.intercept, 50.0, 1e-8), "{}", report.intercept);
    assert!(close(report.coefficients[0], 0.5, 1e-8));
    assert!(close(report.coefficients[1], 30.0, 1e-8));
    assert!(close(report.coefficients[2], 10.0, 1e-8));
    assert!(close(report.r_squared, 1.0, 1e-10));

    fs::remove_file(path).unwrap();
}

#[test]
fn test_noisy_prices_match_reference_least_squares() {
    let csv = "Airline,Duration,Price\n\
               IndiGo,2h 50m,3897\n\
               Air India,7h 25m,7662\n\
               Jet Airways,19h,13882\n\
               IndiGo,5h 25m,6218\n\
               IndiGo,4h 45m,13302\n\
               SpiceJet,2h 25m,3873\n";
    let path = write_temp("noisy.csv", csv);
    let dataset = TicketSet::from_path(&path).unwrap();
    let rates = RateTable::from_json(r#"{"date": "2024-05-01", "eur": {"inr": 90.0}}"#).unwrap();

    let outcome = run(&dataset, "INR", &rates, None, &FeatureSet::basic()).unwrap();
    let report = &outcome.report;

    // Normal equations solved in exact arithmetic
    assert!(close(report.intercept, 13.331_748_814_486_5, 1e-9));
    assert!(close(report.coefficient("Duration").unwrap(), 0.114_978_220_307_828_9, 1e-9));
    assert!(close(report.coefficient("Demand").unwrap(), 14.501_181_178_369_205, 1e-9));
    assert!(close(report.r_squared, 0.579_899_912_772_814, 1e-9));
    assert!(close(outcome.prices_eur[0], 3897.0 / 90.0, 1e-12));

    fs::remove_file(path).unwrap();
}

#[test]
fn test_unknown_airports_are_left_out_of_the_fit() {
    let tickets = "Airline,Route,Duration,Total_Stops,Price\n\
                   IndiGo,BLR ? DEL,2h 50m,non-stop,3897\n\
                   Air India,CCU ? BLR,2h 35m,non-stop,4500\n\
                   IndiGo,DEL ? XXX ? COK,19h,2 stops,13882\n\
                   SpiceJet,DEL ? BOM,2h 10m,non-stop,5200\n\
                   Air India,BLR ? BOM ? DEL,5h,1 stop,7000\n\
                   IndiGo,CCU ? DEL,2h 15m,,4100\n";
    let airports = "IATA,Latitude,Longitude\n\
                    BLR,13.1986,77.7066\n\
                    DEL,28.5665,77.1031\n\
                    CCU,22.6547,88.4467\n\
                    BOM,19.0887,72.8679\n";
    let tickets_path = write_temp("routes.csv", tickets);
    let airports_path = write_temp("airports.csv", airports);

    let dataset = TicketSet::from_path(&tickets_path).unwrap();
    let table = AirportTable::from_path(&airports_path).unwrap();
    let rates = RateTable::new().with_rate("inr", 90.0);

    let outcome = run(
        &dataset,
        "inr",
        &rates,
        Some(&table),
        &FeatureSet::with_distance(),
    )
    .unwrap();

    assert_eq!(outcome.report.rows_dropped, 1);
    assert_eq!(outcome.matrix.kept, vec![0, 1, 3, 4, 5]);
    assert_eq!(outcome.prices_eur.len(), 5);
    let distances = outcome.matrix.column(Feature::Distance).unwrap();
    assert!(distances.iter().all(|km| km.is_finite() && *km > 0.0));
    // Missing stop count filled with 0
    assert_eq!(outcome.matrix.column(Feature::Stops).unwrap()[4], 0.0);
    // IndiGo appears twice once the unknown route is gone
    assert_eq!(
        outcome.matrix.column(Feature::Demand).unwrap(),
        vec![2.0, 2.0, 1.0, 2.0, 2.0]
    );
    assert!(outcome.report.r_squared <= 1.0);

    fs::remove_file(tickets_path).unwrap();
    fs::remove_file(airports_path).unwrap();
}

#[test]
fn test_malformed_stop_count_aborts_the_run() {
    let csv = "Airline,Duration,Total_Stops,Price\nA,1h,direct,100\nB,2h,non-stop,200\n";
    let path = write_temp("bad_stops.csv", csv);
    let dataset = TicketSet::from_path(&path).unwrap();
    let rates = RateTable::new().with_rate("eur", 1.0);

    let err = run(&dataset, "eur", &rates, None, &FeatureSet::with_stops()).unwrap_err();
    assert!(matches!(
        err,
        PipelineError::FeatureError(FeatureError::InvalidStops(_))
    ));
    assert!(!err.is_user_error());

    fs::remove_file(path).unwrap();
}

#[test]
fn test_missing_dataset_is_a_user_error() {
    let err: PipelineError = TicketSet::from_path("no_such_dataset.csv")
        .unwrap_err()
        .into();
    assert!(err.is_user_error());
    assert_eq!(err.to_string(), "File no_such_dataset.csv not found.");
}
