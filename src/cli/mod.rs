//! Command-line parsing for the uphill walking calorie estimator.
//!
//! The goal of this module is to keep **argument parsing** separate from the
//! normalization/estimation code. Numeric values are taken as text so that a
//! decimal comma (`4,5`) is accepted exactly like in the interactive form.

use clap::{Args, Parser, Subcommand};

use crate::domain::Locale;

/// Top-level CLI.
#[derive(Debug, Parser)]
#[command(name = "walkcal", version, about = "Uphill walking calorie estimator (ACSM walking equation)")]
pub struct Cli {
    /// Output language (overrides WALKCAL_LANG).
    #[arg(long, value_enum, global = true)]
    pub lang: Option<Locale>,

    #[command(subcommand)]
    pub command: Command,
}

/// CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Compute calories for one walk and print the result.
    Calc(CalcArgs),
    /// Print total kcal over a grid of speeds and grades.
    Table(TableArgs),
    /// Print the explanation of the formula and its assumptions.
    Explain,
    /// Launch the interactive form.
    Tui(FormArgs),
}

/// The four walk parameters, as entered.
#[derive(Debug, Args, Clone)]
pub struct FormArgs {
    /// Body weight (kg).
    #[arg(short = 'w', long, default_value = "70", allow_hyphen_values = true)]
    pub weight: String,

    /// Walking speed (km/h).
    #[arg(short = 's', long, default_value = "5", allow_hyphen_values = true)]
    pub speed: String,

    /// Incline grade (%).
    #[arg(short = 'g', long, default_value = "10", allow_hyphen_values = true)]
    pub grade: String,

    /// Duration (minutes).
    #[arg(short = 'd', long, default_value = "30", allow_hyphen_values = true)]
    pub duration: String,
}

#[derive(Debug, Args, Clone)]
pub struct CalcArgs {
    #[command(flatten)]
    pub form: FormArgs,

    /// Print a JSON document instead of text.
    #[arg(long)]
    pub json: bool,

    /// Also print the formula explanation.
    #[arg(long)]
    pub explain: bool,

    /// Render an ASCII plot of kcal/min against grade.
    #[arg(long)]
    pub plot: bool,

    /// Plot width (columns).
    #[arg(long, default_value_t = 60, value_parser = clap::value_parser!(u16).range(10..=200))]
    pub width: u16,

    /// Plot height (rows).
    #[arg(long, default_value_t = 15, value_parser = clap::value_parser!(u16).range(5..=100))]
    pub height: u16,
}

#[derive(Debug, Args, Clone)]
pub struct TableArgs {
    /// Body weight (kg).
    #[arg(short = 'w', long, default_value = "70", allow_hyphen_values = true)]
    pub weight: String,

    /// Duration (minutes).
    #[arg(short = 'd', long, default_value = "30", allow_hyphen_values = true)]
    pub duration: String,

    /// Speeds to tabulate (km/h), separated by `;` so `3,5` reads as 3.5.
    #[arg(long, value_delimiter = ';', default_values = ["3", "4", "5", "6"], allow_hyphen_values = true)]
    pub speeds: Vec<String>,

    /// Lowest grade (%).
    #[arg(long, default_value = "0", allow_hyphen_values = true)]
    pub grade_min: String,

    /// Highest grade (%).
    #[arg(long, default_value = "30", allow_hyphen_values = true)]
    pub grade_max: String,

    /// Number of grade columns.
    #[arg(long, default_value_t = 7, value_parser = clap::value_parser!(u16).range(1..=61))]
    pub grade_steps: u16,
}
