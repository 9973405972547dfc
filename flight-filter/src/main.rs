use std::process::ExitCode;

use chrono::Local;
use tracing::{error, info};

use flight_filter::config::ReportConfig;
use flight_filter::domain::Flight;
use flight_filter::filter::{Filterable, FlightFilter, TimeArrow};
use flight_filter::logging::init_logger;
use flight_filter::source::{load_flights, sample_flights};

fn main() -> ExitCode {
    init_logger();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "Flight filter failed");
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let config = ReportConfig::from_env()?;
    let now = Local::now().naive_local();

    // Load flights from file if configured, otherwise use the sample set
    let flights = match &config.data_path {
        Some(path) => load_flights(path)?,
        None => sample_flights(now),
    };
    info!(
        flights = flights.len(),
        source = %config
            .data_path
            .as_ref()
            .map_or("sample".into(), |p| p.display().to_string()),
        "Loaded flights"
    );

    let filter = FlightFilter::new(flights);

    println!("Task #1: Excluded flights which depart up to the current point in time:");
    print_flights(&filter.filter_for(TimeArrow::EarlierDepDate, now)?);

    println!();
    println!("Task #2: Excluded flights whose arrival is earlier than departure:");
    print_flights(&filter.filter_incorrect_dates()?);

    println!();
    println!(
        "Task #3: Excluded flights with more than {} on the ground:",
        config.max_ground_time_label()
    );
    print_flights(&filter.filter_summary_time_more_than(config.max_ground_time)?);

    Ok(())
}

fn print_flights(flights: &[Flight]) {
    for flight in flights {
        println!("{flight}");
    }
}
