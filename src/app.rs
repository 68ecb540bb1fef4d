//! Top-level application orchestration.
//!
//! `src/main.rs` is intentionally tiny; this module is the "real main" that:
//! - parses CLI arguments
//! - loads configuration and sets up logging
//! - runs the estimate pipeline
//! - prints reports/plots or launches the interactive form

use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::cli::{CalcArgs, Command, TableArgs};
use crate::config::{Config, LANG_VAR};
use crate::domain::{Locale, NormalizedInputs, RawInputs};
use crate::error::AppError;
use crate::estimate::grid::{estimate_grid, linspace};
use crate::normalize::{ValidationErrors, normalize, parse_decimal};
use crate::report::{JsonReport, format_errors, format_estimate, format_explanation, format_grid_table};

pub mod pipeline;

/// Entry point for the `walkcal` binary.
pub fn run() -> Result<(), AppError> {
    // `walkcal` and `walkcal -w 80` behave like `walkcal tui ...`.
    let argv = rewrite_args(std::env::args().collect());
    let cli = crate::cli::Cli::parse_from(argv);

    let config = Config::from_env().with_locale(cli.lang);
    let notice = lang_notice(&config);

    // No subscriber for the TUI: log lines would corrupt the alternate screen.
    if !matches!(cli.command, Command::Tui(_)) {
        init_logging(&config);
        if let Some(notice) = &notice {
            tracing::warn!("{notice}");
        }
    }

    match cli.command {
        Command::Calc(args) => handle_calc(&args, config.locale),
        Command::Table(args) => handle_table(&args, config.locale),
        Command::Explain => {
            print!("{}", format_explanation(config.locale));
            Ok(())
        }
        Command::Tui(args) => crate::tui::run(args, config.locale, notice),
    }
}

/// Message for a `WALKCAL_LANG` value that was ignored, if any.
fn lang_notice(config: &Config) -> Option<String> {
    config
        .unsupported_lang
        .as_ref()
        .map(|tag| format!("unsupported {LANG_VAR} '{tag}', using default"))
}

/// Install the stderr tracing subscriber.
fn init_logging(config: &Config) {
    let filter = EnvFilter::try_new(&config.log_filter)
        .unwrap_or_else(|_| EnvFilter::new(crate::config::DEFAULT_LOG_FILTER));
    // A second init (e.g. from tests) is not an error worth surfacing.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

fn handle_calc(args: &CalcArgs, locale: Locale) -> Result<(), AppError> {
    let form = &args.form;
    let run = match pipeline::run_estimate_text(&form.weight, &form.speed, &form.grade, &form.duration) {
        Ok(run) => run,
        Err(errors) => {
            if args.json {
                println!("{}", serde_json::to_string_pretty(&JsonReport::invalid(&errors))?);
            }
            return Err(AppError::invalid_input(format_errors(&errors, locale)));
        }
    };

    if args.json {
        let report = JsonReport::Ok {
            inputs: &run.shown,
            result: &run.result,
            adjusted: &run.adjusted,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    print!("{}", format_estimate(&run.shown, &run.result, locale));

    if args.plot {
        println!();
        print!(
            "{}",
            crate::plot::render_grade_plot(&run.inputs, usize::from(args.width), usize::from(args.height))
        );
    }

    if args.explain {
        println!();
        print!("{}", format_explanation(locale));
    }

    Ok(())
}

fn handle_table(args: &TableArgs, locale: Locale) -> Result<(), AppError> {
    let invalid = |e: ValidationErrors| AppError::invalid_input(format_errors(&e, locale));
    let (base, speeds, grades) = table_inputs(args).map_err(invalid)?;
    let cells = estimate_grid(&base, &speeds, &grades).map_err(invalid)?;

    print!("{}", format_grid_table(&cells, grades.len(), locale));
    Ok(())
}

/// Base inputs, speed rows and grade columns for `walkcal table`.
///
/// Bad speed or grade text becomes NaN here and is rejected by the grid's
/// own validation.
fn table_inputs(args: &TableArgs) -> Result<(NormalizedInputs, Vec<f64>, Vec<f64>), ValidationErrors> {
    // Speed and grade are placeholders; only weight and duration are used as the base.
    let base = normalize(&RawInputs::parse(&args.weight, "1", "0", &args.duration))?;
    let speeds = args.speeds.iter().map(|s| parse_decimal(s)).collect();
    let grades = linspace(
        parse_decimal(&args.grade_min),
        parse_decimal(&args.grade_max),
        usize::from(args.grade_steps.max(1)),
    );
    Ok((base, speeds, grades))
}

/// Rewrite argv so `walkcal` defaults to `walkcal tui`.
///
/// Rules:
/// - `walkcal`                      -> `walkcal tui`
/// - `walkcal -w 80 ...`            -> `walkcal tui -w 80 ...`
/// - `walkcal --help/--version/-h`  -> unchanged (show top-level help/version)
fn rewrite_args(mut argv: Vec<String>) -> Vec<String> {
    let Some(arg1) = argv.get(1).cloned() else {
        argv.push("tui".to_string());
        return argv;
    };

    let is_top_level_help_or_version = matches!(
        arg1.as_str(),
        "-h" | "--help" | "-V" | "--version" | "help"
    );
    if is_top_level_help_or_version {
        return argv;
    }

    let is_subcommand = matches!(arg1.as_str(), "calc" | "table" | "explain" | "tui");
    if is_subcommand {
        return argv;
    }

    // If the first token is a flag, treat it as "tui flags".
    if arg1.starts_with('-') {
        argv.insert(1, "tui".to_string());
        return argv;
    }

    // Otherwise, leave as-is.
    argv
}
