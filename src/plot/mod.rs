//! Terminal plots.

pub mod ascii;

pub use ascii::render_grade_plot;
