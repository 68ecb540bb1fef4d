//! Formatted terminal output.
//!
//! We keep formatting code in one place so:
//! - the normalizer and estimator stay free of presentation concerns
//! - output changes are localized (and covered by golden tests below)

use crate::domain::{EstimateResult, Field, Locale};
use crate::estimate::GridCell;
use crate::normalize::display::round_to;
use crate::normalize::{DisplayedInputs, ValidationErrors};
use crate::report::text::strings;

/// Format `value` with `decimals` places using the locale's decimal separator.
///
/// Halves round away from zero, like the redisplayed input values.
pub fn format_number(value: f64, decimals: usize, locale: Locale) -> String {
    let value = round_to(value, decimals);
    let s = format!("{value:.decimals$}");
    let sep = strings(locale).decimal_separator;
    if sep == '.' { s } else { s.replace('.', &sep.to_string()) }
}

/// One combined message listing every failing field.
pub fn format_errors(errors: &ValidationErrors, locale: Locale) -> String {
    let s = strings(locale);
    let mut out = String::new();
    out.push_str(s.invalid_heading);
    for e in errors.errors() {
        out.push_str("\n- ");
        out.push_str(s.field_error(*e));
    }
    out
}

/// Result block: headline numbers followed by the values actually used.
pub fn format_estimate(shown: &DisplayedInputs, result: &EstimateResult, locale: Locale) -> String {
    let s = strings(locale);
    let mut out = String::new();

    out.push_str(&format!("=== {} ===\n", s.title));
    out.push_str(&format!("{}:\n", s.result_heading));
    for (label, value) in result_lines(result, locale) {
        out.push_str(&format!("  {label:<24} {value}\n"));
    }

    out.push_str(&format!("\n{}:\n", s.inputs_heading));
    for field in Field::ALL {
        out.push_str(&format!(
            "  {:<24} {} {}\n",
            s.field_label(field),
            format_number(shown.get(field), field.display_decimals(), locale),
            field.unit(),
        ));
    }

    out
}

/// `(label, value)` pairs for the three headline numbers, already rounded.
pub fn result_lines(result: &EstimateResult, locale: Locale) -> [(&'static str, String); 3] {
    let s = strings(locale);
    [
        (s.total_label, format!("{} kcal", format_number(result.total_kcal, 0, locale))),
        (
            s.per_min_label,
            format!("{} kcal/min", format_number(result.kcal_per_min, 1, locale)),
        ),
        (
            s.vo2_label,
            format!("{} ml/kg/min", format_number(result.vo2, 1, locale)),
        ),
    ]
}

/// Static explanation block.
pub fn format_explanation(locale: Locale) -> String {
    let s = strings(locale);
    let mut out = String::new();
    out.push_str(s.explanation_heading);
    out.push('\n');
    for line in s.explanation {
        out.push_str(line);
        out.push('\n');
    }
    out
}

/// Total kcal table: one row per speed, one column per grade.
///
/// `cells` must be row-major with `grades` columns, as produced by
/// [`crate::estimate::estimate_grid`].
pub fn format_grid_table(cells: &[GridCell], grades: usize, locale: Locale) -> String {
    let mut out = String::new();
    if cells.is_empty() || grades == 0 {
        return out;
    }

    let s = strings(locale);
    let first = &cells[0].inputs;
    out.push_str(&format!(
        "kcal | {} {} {} | {} {} {}\n",
        s.field_label(Field::Weight),
        format_number(first.weight_kg(), 1, locale),
        Field::Weight.unit(),
        s.field_label(Field::Duration),
        format_number(first.duration_min(), 0, locale),
        Field::Duration.unit(),
    ));

    let mut header = format!("{:>10}", "km/h \\ %");
    for cell in cells.iter().take(grades) {
        header.push_str(&format!(" {:>8}", format_number(cell.inputs.grade_percent(), 1, locale)));
    }
    out.push_str(header.trim_end());
    out.push('\n');

    let mut rule = format!("{:-<10}", "");
    for _ in 0..grades {
        rule.push_str(&format!(" {:-<8}", ""));
    }
    out.push_str(&rule);
    out.push('\n');

    for row in cells.chunks(grades) {
        let mut line = format!("{:>10}", format_number(row[0].inputs.speed_kmh(), 1, locale));
        for cell in row {
            line.push_str(&format!(" {:>8}", format_number(cell.result.total_kcal, 0, locale)));
        }
        out.push_str(line.trim_end());
        out.push('\n');
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::RawInputs;
    use crate::estimate::{estimate, estimate_grid};
    use crate::normalize::normalize;

    fn reference() -> (DisplayedInputs, EstimateResult) {
        let n = normalize(&RawInputs {
            weight_kg: 70.0,
            speed_kmh: 5.0,
            grade_percent: 10.0,
            duration_min: 30.0,
        })
        .unwrap();
        (DisplayedInputs::from(&n), estimate(&n))
    }

    #[test]
    fn estimate_golden_english() {
        let (shown, result) = reference();
        let txt = format_estimate(&shown, &result, Locale::En);
        let expected = concat!(
            "=== Calories burned walking uphill ===\n",
            "Result:\n",
            "  Total expenditure        282 kcal\n",
            "  Expenditure per minute   9.4 kcal/min\n",
            "  Estimated VO₂            26.8 ml/kg/min\n",
            "\n",
            "Values used:\n",
            "  Weight                   70.0 kg\n",
            "  Speed                    5.0 km/h\n",
            "  Grade                    10.0 %\n",
            "  Duration                 30 min\n",
        );
        assert_eq!(txt, expected);
    }

    #[test]
    fn french_uses_decimal_comma() {
        let (shown, result) = reference();
        let txt = format_estimate(&shown, &result, Locale::Fr);
        assert!(txt.contains("282 kcal"));
        assert!(txt.contains("9,4 kcal/min"));
        assert!(txt.contains("26,8 ml/kg/min"));
        assert!(txt.contains("5,0 km/h"));
    }

    #[test]
    fn half_kcal_total_rounds_up() {
        // 100 kg at 6 km/h on the flat for 30 min is exactly 202.5 kcal.
        let run = crate::app::pipeline::run_estimate_text("100", "6", "0", "30").unwrap();
        assert!((run.result.total_kcal - 202.5).abs() < 1e-9);
        assert_eq!(result_lines(&run.result, Locale::En)[0].1, "203 kcal");
        assert_eq!(format_number(0.25, 1, Locale::Fr), "0,3");
        assert_eq!(format_number(2.5, 0, Locale::En), "3");
    }

    #[test]
    fn errors_are_listed_in_field_order() {
        let err = normalize(&RawInputs {
            weight_kg: -1.0,
            speed_kmh: f64::NAN,
            grade_percent: -5.0,
            duration_min: 0.0,
        })
        .unwrap_err();
        let txt = format_errors(&err, Locale::Fr);
        assert_eq!(
            txt,
            "Veuillez corriger les valeurs suivantes :\n- Poids invalide.\n- Vitesse invalide.\n- Pente invalide.\n- Durée invalide."
        );
    }

    #[test]
    fn explanation_is_static() {
        let txt = format_explanation(Locale::En);
        assert!(txt.starts_with("How this is calculated\n"));
        assert!(txt.contains("0.1 × speed + 1.8 × speed × grade + 3.5"));
        assert_eq!(txt, format_explanation(Locale::En));
    }

    #[test]
    fn grid_table_golden() {
        let n = normalize(&RawInputs {
            weight_kg: 70.0,
            speed_kmh: 5.0,
            grade_percent: 0.0,
            duration_min: 30.0,
        })
        .unwrap();
        let cells = estimate_grid(&n, &[5.0], &[0.0, 10.0]).unwrap();
        let txt = format_grid_table(&cells, 2, Locale::En);
        let expected = concat!(
            "kcal | Weight 70.0 kg | Duration 30 min\n",
            "  km/h \\ %      0.0     10.0\n",
            "---------- -------- --------\n",
            "       5.0      124      282\n",
        );
        assert_eq!(txt, expected);
    }
}
