use std::io::{BufRead, Write};
use std::path::Path;

use currency::RateProvider;
use fare_features::{AirportTable, Feature, TicketSet};
use logger::{Color, Logger};
use visualizer::{render_model, PlotData};

use crate::config::RunConfig;
use crate::errors::PipelineError;
use crate::pipeline::{run, FitOutcome};

pub const EXIT_COMMAND: &str = "exit";

/// Outcome of an interactive session that did not fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Session {
    Completed,
    Exited,
}

/// Asks for the dataset and its currency on `input`, fetches the rates from
/// `provider`, fits and writes the report (and the plot, if configured).
///
/// Answering `exit` to either prompt ends the session before anything else
/// is read.
pub fn session<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    config: &RunConfig,
    provider: &dyn RateProvider,
    logger: Option<&Logger>,
) -> Result<Session, PipelineError> {
    let file = prompt(input, output, "Enter the name of the CSV file: ")?;
    if file == EXIT_COMMAND {
        return Ok(Session::Exited);
    }
    let dataset = TicketSet::from_path(&file)?;
    log_info(
        logger,
        &format!("Loaded {} tickets from {}", dataset.len(), file),
        Color::Cyan,
    );

    let currency = prompt(input, output, "Enter the currency of the prices: ")?;
    if currency == EXIT_COMMAND {
        return Ok(Session::Exited);
    }

    let rates = provider.fetch_rates()?;
    log_info(
        logger,
        &format!(
            "Fetched {} exchange rates (date: {})",
            rates.len(),
            rates.date().unwrap_or("unknown")
        ),
        Color::Cyan,
    );
    rates.rate(&currency)?;

    let airports = if config.features.contains(Feature::Distance) {
        let table = AirportTable::from_path(&config.airports_path)?;
        log_info(
            logger,
            &format!(
                "Loaded {} airports from {}",
                table.len(),
                config.airports_path.display()
            ),
            Color::Cyan,
        );
        Some(table)
    } else {
        None
    };

    let outcome = run(
        &dataset,
        &currency,
        &rates,
        airports.as_ref(),
        &config.features,
    )?;
    if outcome.report.rows_dropped > 0 {
        if let Some(logger) = logger {
            let _ = logger.warn(
                &format!(
                    "Dropped {} rows with an undefined distance",
                    outcome.report.rows_dropped
                ),
                false,
            );
        }
    }
    log_info(
        logger,
        &format!(
            "Fitted {} rows: R-squared {}",
            outcome.report.rows_used, outcome.report.r_squared
        ),
        Color::Green,
    );

    write!(output, "{}", outcome.report).map_err(PipelineError::InputError)?;

    if let Some(plot_path) = &config.plot_path {
        plot(&outcome, plot_path)?;
        writeln!(output, "Plot saved to {}", plot_path.display())
            .map_err(PipelineError::InputError)?;
        log_info(
            logger,
            &format!("Plot saved to {}", plot_path.display()),
            Color::Green,
        );
    }

    Ok(Session::Completed)
}

/// Reports how a session ended and returns the process exit status.
///
/// User errors (unknown file, unsupported currency) go to `out`, every other
/// failure to `err`.
pub fn finish<W: Write, E: Write>(
    result: Result<Session, PipelineError>,
    out: &mut W,
    err: &mut E,
    logger: Option<&Logger>,
) -> u8 {
    match result {
        Ok(Session::Completed) | Ok(Session::Exited) => 0,
        Err(e) => {
            if e.is_user_error() {
                let _ = writeln!(out, "{}", e);
            } else {
                let _ = writeln!(err, "{}", e);
            }
            if let Some(logger) = logger {
                let _ = logger.error(&e.to_string(), false);
            }
            1
        }
    }
}

/// Writes `message`, then reads one trimmed line. End of input reads as `exit`.
pub fn prompt<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    message: &str,
) -> Result<String, PipelineError> {
    write!(output, "{}", message).map_err(PipelineError::InputError)?;
    output.flush().map_err(PipelineError::InputError)?;

    let mut line = String::new();
    let read = input
        .read_line(&mut line)
        .map_err(PipelineError::InputError)?;
    if read == 0 {
        return Ok(EXIT_COMMAND.to_string());
    }
    Ok(line.trim().to_string())
}

fn plot(outcome: &FitOutcome, path: &Path) -> Result<(), PipelineError> {
    let data = PlotData {
        labels: &outcome.report.features,
        rows: &outcome.matrix.rows,
        target: &outcome.prices_eur,
    };
    render_model(path, &data, &outcome.model)?;
    Ok(())
}

fn log_info(logger: Option<&Logger>, message: &str, color: Color) {
    if let Some(logger) = logger {
        let _ = logger.info(message, color, false);
    }
}
