use std::io;
use std::process::ExitCode;

use chrono::Local;
use clap::Parser;
use currency::HttpRateProvider;
use fare_features::{Feature, FeatureSet};
use fare_regression::{finish, session, Args, RunConfig, EXIT_COMMAND};
use logger::Logger;

fn main() -> ExitCode {
    let config = match RunConfig::try_from(Args::parse()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}", e);
            return ExitCode::FAILURE;
        }
    };

    let run_name = Local::now().format("%Y%m%d_%H%M%S").to_string();
    let logger = match Logger::new(&config.log_dir, &run_name) {
        Ok(logger) => Some(logger),
        Err(e) => {
            eprintln!("Running without a log file: {}", e);
            None
        }
    };

    intro(&config.features);

    let provider = HttpRateProvider::new(&config.rates_url);
    let result = session(
        &mut io::stdin().lock(),
        &mut io::stdout(),
        &config,
        &provider,
        logger.as_ref(),
    );
    let status = finish(result, &mut io::stdout(), &mut io::stderr(), logger.as_ref());
    ExitCode::from(status)
}

fn intro(features: &FeatureSet) {
    let terms: Vec<String> = features
        .labels()
        .iter()
        .map(|label| format!("{} Coefficient * {}", label, label))
        .collect();

    println!("HELLO!");
    println!(
        "This is a simple linear regression program that retrieves data from a prompted CSV file of flight tickets and returns their R-squared, their coefficients and a 3D representation figure."
    );
    println!(
        "This program uses this formula for the model: Price = Intercept + {}",
        terms.join(" + ")
    );
    println!("Requirement: A CSV file with the following columns: {}.", required_columns(features));
    println!("Requirement: The currency of the prices in the CSV file.");
    println!("Requirement: An internet connection to get the exchange rate.");
    if features.contains(Feature::Distance) {
        println!("Requirement: The Route of the flight in the format 'IATA ? IATA ? ... ? IATA'");
    }
    println!("Output: The R-squared value.");
    println!("Output: The coefficients of the model.");
    println!("Output: 3D plots of the data and the regression planes.");
    println!("Note: The program uses an open-source API to convert the prices to euros.");
    println!("You can exit the program at any time by prompting '{}'.", EXIT_COMMAND);
    println!();
}

fn required_columns(features: &FeatureSet) -> String {
    let mut columns = vec!["'Airline'", "'Duration'"];
    if features.contains(Feature::Stops) {
        columns.push("'Total_Stops'");
    }
    if features.contains(Feature::Distance) {
        columns.push("'Route'");
    }
    columns.push("'Price'");
    columns.join(", ")
}
