//! Localized user-facing text.
//!
//! All wording lives here so that rendering code only deals with layout. The
//! explanation block is static: it never depends on the inputs.

use crate::domain::{Field, Locale};
use crate::normalize::FieldError;

/// Every string a front end needs for one language.
#[derive(Debug)]
pub struct Strings {
    pub title: &'static str,
    pub invalid_heading: &'static str,
    pub inputs_heading: &'static str,
    pub result_heading: &'static str,
    pub total_label: &'static str,
    pub per_min_label: &'static str,
    pub vo2_label: &'static str,
    pub calculate_hint: &'static str,
    pub explanation_heading: &'static str,
    pub explanation: &'static [&'static str],
    pub decimal_separator: char,
    field_labels: [&'static str; 4],
    field_errors: [&'static str; 4],
}

impl Strings {
    pub fn field_label(&self, field: Field) -> &'static str {
        self.field_labels[field_index(field)]
    }

    pub fn field_error(&self, error: FieldError) -> &'static str {
        self.field_errors[field_index(error.field())]
    }
}

fn field_index(field: Field) -> usize {
    match field {
        Field::Weight => 0,
        Field::Speed => 1,
        Field::Grade => 2,
        Field::Duration => 3,
    }
}

pub fn strings(locale: Locale) -> &'static Strings {
    match locale {
        Locale::Fr => &FR,
        Locale::En => &EN,
    }
}

static FR: Strings = Strings {
    title: "Calories brûlées en marche en côte",
    invalid_heading: "Veuillez corriger les valeurs suivantes :",
    inputs_heading: "Valeurs utilisées",
    result_heading: "Résultat",
    total_label: "Dépense totale",
    per_min_label: "Dépense par minute",
    vo2_label: "VO₂ estimée",
    calculate_hint: "Entrée : calculer",
    explanation_heading: "Comment ce calcul fonctionne",
    explanation: &[
        "L'estimation repose sur l'équation de marche de l'ACSM (American College of Sports Medicine) :",
        "  VO₂ (ml/kg/min) = 0,1 × vitesse + 1,8 × vitesse × pente + 3,5",
        "où la vitesse est exprimée en mètres par minute et la pente en fraction (10 % = 0,10).",
        "Un litre d'oxygène consommé correspond à environ 5 kcal :",
        "  kcal/min = VO₂ × poids (kg) / 1000 × 5",
        "  total = kcal/min × durée (min)",
        "Hypothèses et limites :",
        "- l'équation est valable pour la marche (0,5 à 9 km/h), pas pour la course ;",
        "- seules les pentes montantes de 0 à 30 % sont prises en compte ;",
        "- l'altitude, le terrain et la condition physique individuelle ne sont pas modélisés.",
        "Les valeurs hors de ces plages sont ramenées à la limite la plus proche.",
    ],
    decimal_separator: ',',
    field_labels: ["Poids", "Vitesse", "Pente", "Durée"],
    field_errors: [
        "Poids invalide.",
        "Vitesse invalide.",
        "Pente invalide.",
        "Durée invalide.",
    ],
};

static EN: Strings = Strings {
    title: "Calories burned walking uphill",
    invalid_heading: "Please correct the following values:",
    inputs_heading: "Values used",
    result_heading: "Result",
    total_label: "Total expenditure",
    per_min_label: "Expenditure per minute",
    vo2_label: "Estimated VO₂",
    calculate_hint: "Enter: calculate",
    explanation_heading: "How this is calculated",
    explanation: &[
        "The estimate uses the ACSM (American College of Sports Medicine) walking equation:",
        "  VO₂ (ml/kg/min) = 0.1 × speed + 1.8 × speed × grade + 3.5",
        "where speed is in metres per minute and grade is a fraction (10 % = 0.10).",
        "One litre of consumed oxygen releases about 5 kcal:",
        "  kcal/min = VO₂ × weight (kg) / 1000 × 5",
        "  total = kcal/min × duration (min)",
        "Assumptions and limits:",
        "- the equation applies to walking (0.5 to 9 km/h), not running;",
        "- only uphill grades from 0 to 30 % are covered;",
        "- altitude, terrain and individual fitness are not modelled.",
        "Values outside these ranges are moved to the nearest limit.",
    ],
    decimal_separator: '.',
    field_labels: ["Weight", "Speed", "Grade", "Duration"],
    field_errors: [
        "Invalid weight.",
        "Invalid speed.",
        "Invalid grade.",
        "Invalid duration.",
    ],
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_locale_has_a_message_per_field() {
        for locale in [Locale::Fr, Locale::En] {
            let s = strings(locale);
            for field in Field::ALL {
                assert!(!s.field_label(field).is_empty());
            }
            assert!(!s.explanation.is_empty());
        }
        assert_eq!(strings(Locale::Fr).field_error(FieldError::InvalidGrade), "Pente invalide.");
        assert_eq!(strings(Locale::En).field_error(FieldError::InvalidWeight), "Invalid weight.");
    }
}
