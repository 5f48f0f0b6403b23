use std::process::ExitCode;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;

mod cli;

use booking_estimator::pricing::responses::format_money;
use booking_estimator::pricing::BookingError;
use booking_estimator::{init_tracing, AppConfig, BookingEstimator, BookingForm, BookingInput, Catalog};
use cli::{Cli, Commands, FormArgs};

fn main() -> Result<ExitCode> {
    let args = Cli::parse();

    let config = AppConfig::from_env().context("failed to load configuration")?;
    init_tracing(&config.log_level);

    let catalog = Arc::new(Catalog::builtin());
    tracing::info!(packages = catalog.len(), "catalog loaded");
    let estimator = BookingEstimator::with_catalog(catalog);

    match args.command {
        Commands::Packages => show_packages(&estimator, &config, args.json)?,
        Commands::Estimate(form) => {
            let input = read_input(form)?;
            show_estimate(&estimator, &config, &input, args.json)?;
        }
        Commands::Submit(form) => {
            let input = read_input(form)?;
            match estimator.submit(&input) {
                Ok(confirmation) => {
                    if args.json {
                        println!("{}", serde_json::to_string_pretty(&confirmation)?);
                    } else {
                        println!("{}", confirmation.message(&config.currency_symbol));
                    }
                }
                Err(BookingError::Invalid { issues }) => {
                    eprintln!("Booking not submitted:");
                    for issue in issues {
                        eprintln!("  - {}", issue);
                    }
                    return Ok(ExitCode::FAILURE);
                }
            }
        }
    }

    Ok(ExitCode::SUCCESS)
}

fn read_input(args: FormArgs) -> Result<BookingInput> {
    let form = if args.stdin {
        BookingForm::from_json_reader(std::io::stdin().lock())
            .context("failed to read booking form from stdin")?
    } else {
        BookingForm::from(args)
    };
    Ok(BookingInput::from(form))
}

fn show_packages(estimator: &BookingEstimator, config: &AppConfig, json: bool) -> Result<()> {
    let rows = estimator.catalog_rows();
    if json {
        println!("{}", serde_json::to_string_pretty(&rows)?);
        return Ok(());
    }

    let symbol = &config.currency_symbol;
    println!(
        "{:<4} {:<14} {:<10} {:>12} {:<8} {:>12}",
        "Id", "Destination", "Duration", "Base Price", "Season", "Final Price"
    );
    for row in rows {
        println!(
            "{:<4} {:<14} {:<10} {:>12} {:<8} {:>12}",
            row.id,
            row.destination,
            row.duration_label,
            format_money(symbol, row.base_price),
            row.season.as_str(),
            format_money(symbol, row.final_price),
        );
    }
    Ok(())
}

fn show_estimate(
    estimator: &BookingEstimator,
    config: &AppConfig,
    input: &BookingInput,
    json: bool,
) -> Result<()> {
    let result = estimator.estimate(input);
    if json {
        println!("{}", serde_json::to_string_pretty(&result)?);
        return Ok(());
    }

    let view = result.view(&config.currency_symbol);
    println!("Nights: {}", view.nights);
    println!("Total:  {}", view.total);
    println!(
        "Submit: {}",
        if view.submit_enabled { "enabled" } else { "disabled" }
    );
    Ok(())
}
