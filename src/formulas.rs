//! Powerlifting score formulas and their closed-form inverses.
//!
//! All functions take kilograms. Forward scores are never negative and never
//! fail: out-of-domain body weight is clamped (polynomial systems) or scores
//! 0 (IPF points below 40 kg, IPF GL below 35 kg).

use crate::coefficients::{self, GOODLIFT_MIN_BODYWEIGHT, IPF_POINTS_MIN_BODYWEIGHT};
use crate::domain::{Division, Sex};

const OLD_WILKS_NUMERATOR: f64 = 500.0;
const WILKS2_NUMERATOR: f64 = 600.0;
const DOTS_NUMERATOR: f64 = 500.0;

fn non_negative(score: f64) -> f64 {
    if score < 0.0 { 0.0 } else { score }
}

/// Calculates the original (pre-2020) Wilks score.
///
/// Formula: Wilks = Lifted × 500 / P(bw), with P a 5th degree polynomial and
/// bw clamped to [40, 201.9] for men and [26.51, 154.53] for women.
pub fn calculate_old_wilks(bodyweight_kg: f64, lifted_kg: f64, sex: Sex) -> f64 {
    let denominator = coefficients::old_wilks(sex).denominator(bodyweight_kg);
    non_negative(OLD_WILKS_NUMERATOR * lifted_kg / denominator)
}

/// Calculates the Wilks 2.0 score.
///
/// Formula: Wilks2 = Lifted × 600 / P(bw), bw clamped to [40, 200.95] for men
/// and [40, 150.95] for women.
pub fn calculate_wilks2(bodyweight_kg: f64, lifted_kg: f64, sex: Sex) -> f64 {
    let denominator = coefficients::wilks2(sex).denominator(bodyweight_kg);
    non_negative(WILKS2_NUMERATOR * lifted_kg / denominator)
}

/// Calculates the DOTS score.
///
/// Formula: DOTS = Lifted × 500 / P(bw), with P a 4th degree polynomial and
/// bw clamped to [40, 210] for men and [40, 150] for women.
pub fn calculate_dots(bodyweight_kg: f64, lifted_kg: f64, sex: Sex) -> f64 {
    let denominator = coefficients::dots(sex).denominator(bodyweight_kg);
    non_negative(DOTS_NUMERATOR * lifted_kg / denominator)
}

/// Calculates legacy IPF points.
///
/// Formula: IPF = 500 + 100 × (Lifted − (C1·ln(bw) − C2)) / (C3·ln(bw) − C4)
///
/// # Arguments
/// * `bodyweight_kg` - Athlete's bodyweight in kg
/// * `lifted_kg` - Total (or bench press for bench-only) in kg
/// * `sex` - Selects the coefficient table
/// * `division` - Equipment class and meet category
///
/// # Returns
/// IPF points, or 0.0 below 40 kg bodyweight or when the formula goes negative
pub fn calculate_ipf_points(
    bodyweight_kg: f64,
    lifted_kg: f64,
    sex: Sex,
    division: Division,
) -> f64 {
    if bodyweight_kg < IPF_POINTS_MIN_BODYWEIGHT {
        return 0.0;
    }

    let coeff = coefficients::ipf_points(sex, division);
    let ln_bw = bodyweight_kg.ln();
    let mean = coeff.c1 * ln_bw - coeff.c2;
    let deviation = coeff.c3 * ln_bw - coeff.c4;

    non_negative(500.0 + 100.0 * (lifted_kg - mean) / deviation)
}

/// Calculates IPF GoodLift score.
///
/// Formula: GL = Lifted × 100 / (A − B × e^(−C × bw))
///
/// # Arguments
/// * `bodyweight_kg` - Athlete's bodyweight in kg
/// * `lifted_kg` - Total (or bench press for bench-only) in kg
/// * `sex` - Selects the coefficient table
/// * `division` - Equipment class and meet category
///
/// # Returns
/// IPF GL score, or 0.0 below 35 kg bodyweight
pub fn calculate_ipf_gl(bodyweight_kg: f64, lifted_kg: f64, sex: Sex, division: Division) -> f64 {
    if bodyweight_kg < GOODLIFT_MIN_BODYWEIGHT {
        return 0.0;
    }

    let denominator = coefficients::goodlift(sex, division).denominator(bodyweight_kg);
    non_negative(lifted_kg * 100.0 / denominator)
}

/// Weight needed for a DOTS score, using the same clamped bodyweight as
/// [`calculate_dots`].
pub fn dots_lift_for(bodyweight_kg: f64, target_score: f64, sex: Sex) -> f64 {
    target_score * coefficients::dots(sex).denominator(bodyweight_kg) / DOTS_NUMERATOR
}

/// Weight needed for a Wilks 2.0 score.
pub fn wilks2_lift_for(bodyweight_kg: f64, target_score: f64, sex: Sex) -> f64 {
    target_score * coefficients::wilks2(sex).denominator(bodyweight_kg) / WILKS2_NUMERATOR
}

/// Weight needed for an IPF GL score.
///
/// No bodyweight floor is applied here; below 35 kg the forward score is 0
/// regardless of the lift, so the result there is only nominal.
pub fn ipf_gl_lift_for(bodyweight_kg: f64, target_score: f64, sex: Sex, division: Division) -> f64 {
    target_score * coefficients::goodlift(sex, division).denominator(bodyweight_kg) / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Equipment, MeetCategory};
    use approx::assert_relative_eq;

    fn all_divisions() -> Vec<Division> {
        let mut divisions = Vec::new();
        for equipment in [Equipment::Classic, Equipment::Equipped] {
            for category in [MeetCategory::FullMeet, MeetCategory::BenchOnly] {
                divisions.push(Division::new(equipment, category));
            }
        }
        divisions
    }

    #[test]
    fn test_reference_scores_male_classic() {
        // 500kg total at 83kg, classic powerlifting
        let division = Division::default();
        assert_relative_eq!(
            calculate_ipf_gl(83.0, 500.0, Sex::Male, division),
            69.2133,
            max_relative = 1e-5
        );
        assert_relative_eq!(calculate_dots(83.0, 500.0, Sex::Male), 337.5437, max_relative = 1e-5);
        assert_relative_eq!(calculate_wilks2(83.0, 500.0, Sex::Male), 400.8214, max_relative = 1e-5);
        assert_relative_eq!(calculate_old_wilks(83.0, 500.0, Sex::Male), 333.7497, max_relative = 1e-5);
        assert_relative_eq!(
            calculate_ipf_points(83.0, 500.0, Sex::Male, division),
            482.9496,
            max_relative = 1e-5
        );
    }

    #[test]
    fn test_reference_scores_female_classic() {
        // 350kg total at 60kg
        let division = Division::default();
        assert_relative_eq!(
            calculate_ipf_gl(60.0, 350.0, Sex::Female, division),
            79.1141,
            max_relative = 1e-5
        );
        assert_relative_eq!(calculate_dots(60.0, 350.0, Sex::Female), 387.9910, max_relative = 1e-5);
        assert_relative_eq!(
            calculate_ipf_points(60.0, 350.0, Sex::Female, division),
            620.4012,
            max_relative = 1e-5
        );
    }

    #[test]
    fn test_ipf_gl_near_hundred_for_elite_total() {
        let score = calculate_ipf_gl(83.0, 720.0, Sex::Male, Division::default());
        assert!(score > 90.0 && score < 110.0);
    }

    #[test]
    fn test_below_floor_scores_zero() {
        let division = Division::default();
        assert_eq!(calculate_ipf_points(30.0, 200.0, Sex::Female, division), 0.0);
        assert_eq!(calculate_ipf_points(39.99, 200.0, Sex::Male, division), 0.0);
        assert_eq!(calculate_ipf_gl(30.0, 200.0, Sex::Female, division), 0.0);
        assert_eq!(calculate_ipf_gl(34.9, 200.0, Sex::Male, division), 0.0);
        // 35-40kg: GL scores, IPF points do not
        assert!(calculate_ipf_gl(37.0, 200.0, Sex::Female, division) > 0.0);
        assert_eq!(calculate_ipf_points(37.0, 200.0, Sex::Female, division), 0.0);
    }

    #[test]
    fn test_ipf_points_clamped_to_zero() {
        // A tiny total drives the raw formula negative
        assert_eq!(calculate_ipf_points(83.0, 50.0, Sex::Male, Division::default()), 0.0);
    }

    #[test]
    fn test_dots_clamps_above_domain() {
        assert_eq!(
            calculate_dots(210.0, 600.0, Sex::Male),
            calculate_dots(250.0, 600.0, Sex::Male)
        );
        assert_eq!(
            calculate_dots(150.0, 400.0, Sex::Female),
            calculate_dots(175.0, 400.0, Sex::Female)
        );
    }

    #[test]
    fn test_polynomial_systems_clamp_below_domain() {
        assert_eq!(
            calculate_wilks2(40.0, 200.0, Sex::Male),
            calculate_wilks2(30.0, 200.0, Sex::Male)
        );
        assert_eq!(
            calculate_old_wilks(26.51, 150.0, Sex::Female),
            calculate_old_wilks(20.0, 150.0, Sex::Female)
        );
    }

    #[test]
    fn test_deterministic() {
        for sex in [Sex::Male, Sex::Female] {
            let a = calculate_dots(74.3, 612.5, sex);
            let b = calculate_dots(74.3, 612.5, sex);
            assert_eq!(a.to_bits(), b.to_bits());
            let a = calculate_wilks2(74.3, 612.5, sex);
            let b = calculate_wilks2(74.3, 612.5, sex);
            assert_eq!(a.to_bits(), b.to_bits());
            let a = calculate_old_wilks(74.3, 612.5, sex);
            let b = calculate_old_wilks(74.3, 612.5, sex);
            assert_eq!(a.to_bits(), b.to_bits());

            for division in all_divisions() {
                let a = calculate_ipf_gl(74.3, 612.5, sex, division);
                let b = calculate_ipf_gl(74.3, 612.5, sex, division);
                assert_eq!(a.to_bits(), b.to_bits());
                let a = calculate_ipf_points(74.3, 612.5, sex, division);
                let b = calculate_ipf_points(74.3, 612.5, sex, division);
                assert_eq!(a.to_bits(), b.to_bits());
            }
        }
    }

    #[test]
    fn test_scores_never_negative() {
        for sex in [Sex::Male, Sex::Female] {
            for division in all_divisions() {
                for bw in [20.0, 35.0, 40.0, 52.0, 83.0, 120.0, 160.0, 220.0, 300.0] {
                    for lifted in [1.0, 20.0, 100.0, 400.0, 1000.0] {
                        assert!(calculate_old_wilks(bw, lifted, sex) >= 0.0);
                        assert!(calculate_wilks2(bw, lifted, sex) >= 0.0);
                        assert!(calculate_dots(bw, lifted, sex) >= 0.0);
                        assert!(calculate_ipf_points(bw, lifted, sex, division) >= 0.0);
                        assert!(calculate_ipf_gl(bw, lifted, sex, division) >= 0.0);
                    }
                }
            }
        }
    }

    #[test]
    fn test_monotonic_in_lifted_weight() {
        for sex in [Sex::Male, Sex::Female] {
            for division in all_divisions() {
                for bw in [45.0, 63.0, 93.0, 140.0] {
                    let mut previous = [0.0_f64; 5];
                    for step in 1..=40 {
                        let lifted = step as f64 * 25.0;
                        let current = [
                            calculate_old_wilks(bw, lifted, sex),
                            calculate_wilks2(bw, lifted, sex),
                            calculate_dots(bw, lifted, sex),
                            calculate_ipf_points(bw, lifted, sex, division),
                            calculate_ipf_gl(bw, lifted, sex, division),
                        ];
                        for (now, before) in current.iter().zip(previous.iter()) {
                            assert!(now >= before);
                        }
                        previous = current;
                    }
                }
            }
        }
    }

    #[test]
    fn test_dots_inverse_recovers_target() {
        let lifted = dots_lift_for(83.0, 450.0, Sex::Male);
        assert_relative_eq!(calculate_dots(83.0, lifted, Sex::Male), 450.0, max_relative = 1e-6);
    }

    #[test]
    fn test_inverse_round_trip_in_domain() {
        for sex in [Sex::Male, Sex::Female] {
            for bw in [40.0, 57.5, 83.0, 105.0, 150.0] {
                for lifted in [60.0, 245.0, 512.5, 900.0] {
                    let dots = calculate_dots(bw, lifted, sex);
                    assert_relative_eq!(dots_lift_for(bw, dots, sex), lifted, max_relative = 1e-6);

                    let wilks2 = calculate_wilks2(bw, lifted, sex);
                    assert_relative_eq!(wilks2_lift_for(bw, wilks2, sex), lifted, max_relative = 1e-6);

                    for division in all_divisions() {
                        let gl = calculate_ipf_gl(bw, lifted, sex, division);
                        assert_relative_eq!(
                            ipf_gl_lift_for(bw, gl, sex, division),
                            lifted,
                            max_relative = 1e-6
                        );
                    }
                }
            }
        }
    }

    #[test]
    fn test_inverse_uses_same_clamp() {
        // Above the ceiling both directions see 210kg
        assert_eq!(
            dots_lift_for(250.0, 400.0, Sex::Male),
            dots_lift_for(210.0, 400.0, Sex::Male)
        );
        let lifted = dots_lift_for(250.0, 400.0, Sex::Male);
        assert_relative_eq!(calculate_dots(250.0, lifted, Sex::Male), 400.0, max_relative = 1e-6);
    }
}
