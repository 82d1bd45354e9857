//! # Aurum CLI
//!
//! Terminal front end for `aurum_core`: value a ring from flags, an
//! estimator result or a JSON input file, and save or reopen appraisals.

mod cli;
mod report;

use std::path::Path;
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use aurum_core::appraisal::Appraisal;
use aurum_core::calculations::ValuationInput;
use aurum_core::errors::{CalcError, CalcResult};
use aurum_core::estimate::RingEstimate;
use aurum_core::pricing::PriceTable;
use aurum_core::settings::ValuationSettings;
use aurum_core::{load_appraisal, save_appraisal};

use crate::cli::{currency_for, Cli, Command, OutputArgs, ValueArgs};

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            if let Ok(json) = serde_json::to_string_pretty(&e) {
                eprintln!();
                eprintln!("Error JSON:");
                eprintln!("{}", json);
            }
            if e.is_input_error() {
                ExitCode::from(2)
            } else {
                ExitCode::FAILURE
            }
        }
    }
}

/// Log to stderr; `RUST_LOG` overrides the `-v` level.
fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn run(cli: Cli) -> CalcResult<()> {
    let settings = match &cli.config {
        Some(path) => ValuationSettings::load(path)?,
        None => ValuationSettings::default(),
    };

    match cli.command {
        Command::Value(args) => handle_value(&args, &settings),
        Command::Appraise(args) => {
            let input = read_json::<ValuationInput>(&args.input, "read input")?;
            let appraisal = Appraisal::create(input, None, settings.currency.clone())?;
            emit(&appraisal, &args.output)
        }
        Command::Show { path } => {
            let appraisal = load_appraisal(&path)?;
            print!("{}", report::appraisal_report(&appraisal));
            Ok(())
        }
        Command::Sizes => {
            print!("{}", report::sizes_table());
            Ok(())
        }
        Command::Purities => {
            print!("{}", report::purities_table());
            Ok(())
        }
    }
}

fn handle_value(args: &ValueArgs, settings: &ValuationSettings) -> CalcResult<()> {
    let estimate = match &args.estimate {
        Some(path) => Some(read_json::<RingEstimate>(path, "read estimate")?),
        None => None,
    };
    let prices = match &args.prices {
        Some(path) => {
            let json = std::fs::read_to_string(path).map_err(|e| {
                CalcError::file_error("read prices", path.display().to_string(), e.to_string())
            })?;
            Some(PriceTable::from_quote_json(&json)?)
        }
        None => None,
    };

    let input = args.to_input(settings, estimate.as_ref(), prices.as_ref())?;
    let currency = currency_for(settings, prices.as_ref());
    let appraisal = Appraisal::create(input, estimate, currency)?;
    emit(&appraisal, &args.output)
}

/// Print the appraisal and save it if asked.
fn emit(appraisal: &Appraisal, output: &OutputArgs) -> CalcResult<()> {
    if output.json {
        let json = serde_json::to_string_pretty(appraisal).map_err(|e| CalcError::SerializationError {
            reason: e.to_string(),
        })?;
        println!("{}", json);
    } else {
        print!("{}", report::appraisal_report(appraisal));
    }

    if let Some(path) = &output.save {
        save_appraisal(appraisal, path)?;
        if !output.json {
            println!("Saved to {}", path.display());
        }
    }
    Ok(())
}

fn read_json<T: serde::de::DeserializeOwned>(path: &Path, operation: &str) -> CalcResult<T> {
    let contents = std::fs::read_to_string(path)
        .map_err(|e| CalcError::file_error(operation, path.display().to_string(), e.to_string()))?;
    serde_json::from_str(&contents).map_err(|e| CalcError::SerializationError {
        reason: format!("Invalid JSON in {}: {}", path.display(), e),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_then_show() {
        let dir = tempfile::tempdir().unwrap();
        let saved = dir.path().join("ring.json");
        let estimate_path = dir.path().join("estimate.json");
        std::fs::write(
            &estimate_path,
            r#"{ "estimatedWidthMinMm": 1.8, "estimatedWidthMaxMm": 2.4,
                 "estimatedThicknessMm": 1.3, "confidence": "Medium", "description": "Domed band" }"#,
        )
        .unwrap();

        let cli = Cli::try_parse_from([
            "aurum",
            "value",
            "--size",
            "52",
            "--width",
            "2.0",
            "--price",
            "250",
            "--estimate",
            estimate_path.to_str().unwrap(),
            "--json",
            "--save",
            saved.to_str().unwrap(),
        ])
        .unwrap();
        run(cli).unwrap();

        let loaded = load_appraisal(&saved).unwrap();
        assert_eq!(loaded.result.total_price, 796.42);
        assert_eq!(loaded.result.range.unwrap().max_price, 880.7);
        assert!(loaded.estimate.is_some());

        let show = Cli::try_parse_from(["aurum", "show", saved.to_str().unwrap()]).unwrap();
        assert!(run(show).is_ok());
    }

    #[test]
    fn test_appraise_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let input_path = dir.path().join("input.json");
        std::fs::write(
            &input_path,
            r#"{ "geometry": { "size": "60", "width_mm": 3.0, "thickness_mm": 1.6, "profile": "flat" },
                 "hollow": "light",
                 "material": { "purity": "18K", "price_per_gram": 210.0 } }"#,
        )
        .unwrap();
        let saved = dir.path().join("out.json");

        let cli = Cli::try_parse_from([
            "aurum",
            "appraise",
            input_path.to_str().unwrap(),
            "--save",
            saved.to_str().unwrap(),
        ])
        .unwrap();
        run(cli).unwrap();
        assert!(load_appraisal(&saved).unwrap().result.mass_grams > 0.0);
    }

    #[test]
    fn test_errors_surface() {
        let cli = Cli::try_parse_from(["aurum", "value", "--size", "90", "--width", "2", "--thickness", "1.3"]).unwrap();
        assert_eq!(run(cli).unwrap_err().error_code(), "INVALID_SIZE_KEY");

        let cli = Cli::try_parse_from(["aurum", "--config", "/nonexistent/aurum.toml", "sizes"]).unwrap();
        assert_eq!(run(cli).unwrap_err().error_code(), "FILE_ERROR");
    }
}
