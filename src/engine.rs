//! Calculator entry points: input validation, unit handling and dispatch.
//!
//! Text input is validated here before any formula runs. Once a value gets
//! past [`parse_positive`] the formulas below cannot fail.

use serde::Serialize;

use crate::domain::{Division, ScoreSystem, Sex, TargetSystem};
use crate::error::InputError;
use crate::formulas::{
    calculate_dots, calculate_ipf_gl, calculate_ipf_points, calculate_old_wilks, calculate_wilks2,
    dots_lift_for, ipf_gl_lift_for, wilks2_lift_for,
};
use crate::units::MassUnit;

/// Which input field a number came from, for error reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Bodyweight,
    WeightLifted,
    TargetScore,
}

impl Field {
    fn invalid(&self) -> InputError {
        match self {
            Field::Bodyweight => InputError::InvalidBodyweight,
            Field::WeightLifted => InputError::InvalidWeightLifted,
            Field::TargetScore => InputError::InvalidTargetScore,
        }
    }
}

/// Largest accepted body weight, lift or target score, in any unit.
///
/// Far above any real lift, and small enough that every formula and unit
/// conversion stays finite.
pub const MAX_INPUT_VALUE: f64 = 100_000.0;

/// Parses a user-entered number, accepting only values in `(0, MAX_INPUT_VALUE]`.
pub fn parse_positive(text: &str, field: Field) -> Result<f64, InputError> {
    let value: f64 = text.trim().parse().map_err(|_| field.invalid())?;
    if !value.is_finite() || value <= 0.0 || value > MAX_INPUT_VALUE {
        return Err(field.invalid());
    }
    Ok(value)
}

/// All five scores for one lift.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScoreResults {
    pub ipf_gl: f64,
    pub dots: f64,
    pub wilks2: f64,
    pub ipf_points: f64,
    pub old_wilks: f64,
}

impl ScoreResults {
    pub fn get(&self, system: ScoreSystem) -> f64 {
        match system {
            ScoreSystem::IpfGl => self.ipf_gl,
            ScoreSystem::Dots => self.dots,
            ScoreSystem::Wilks2 => self.wilks2,
            ScoreSystem::IpfPoints => self.ipf_points,
            ScoreSystem::OldWilks => self.old_wilks,
        }
    }

    /// Scores paired with their system, in display order.
    pub fn entries(&self) -> impl Iterator<Item = (ScoreSystem, f64)> + '_ {
        ScoreSystem::all().iter().map(move |s| (*s, self.get(*s)))
    }
}

/// Computes every score for a lift.
///
/// `bodyweight` and `lifted` are both in `unit`; mixing units between the
/// two is a caller error.
pub fn calculate_all_scores(
    bodyweight: f64,
    lifted: f64,
    sex: Sex,
    division: Division,
    unit: MassUnit,
) -> ScoreResults {
    let bw = unit.to_kilograms(bodyweight);
    let wl = unit.to_kilograms(lifted);

    ScoreResults {
        ipf_gl: calculate_ipf_gl(bw, wl, sex, division),
        dots: calculate_dots(bw, wl, sex),
        wilks2: calculate_wilks2(bw, wl, sex),
        ipf_points: calculate_ipf_points(bw, wl, sex, division),
        old_wilks: calculate_old_wilks(bw, wl, sex),
    }
}

/// Solves for the weight that reaches `target_score`.
///
/// `bodyweight` is read in `unit` and the result is returned in `unit`.
/// `division` only matters for IPF GL.
pub fn calculate_target_weight(
    bodyweight: f64,
    target_score: f64,
    system: TargetSystem,
    sex: Sex,
    division: Division,
    unit: MassUnit,
) -> f64 {
    let bw = unit.to_kilograms(bodyweight);

    let weight_kg = match system {
        TargetSystem::Dots => dots_lift_for(bw, target_score, sex),
        TargetSystem::Wilks2 => wilks2_lift_for(bw, target_score, sex),
        TargetSystem::IpfGl => ipf_gl_lift_for(bw, target_score, sex, division),
    };

    unit.from_kilograms(weight_kg)
}

/// Renders a score with two decimals.
pub fn format_score(score: f64) -> String {
    format!("{:.2}", score)
}

/// Renders a weight with one decimal and its unit label.
pub fn format_weight(weight: f64, unit: MassUnit) -> String {
    format!("{:.1} {}", weight, unit.label())
}
