//! Coefficient tables for the supported scoring systems.
//!
//! Tables are compile-time constants keyed by sex, or by sex and division for
//! the two IPF formulas. Lookups are exhaustive matches, so every
//! combination has an entry and there is no default to fall back on.

use crate::domain::{Division, Equipment, MeetCategory, Sex};

/// Minimum body weight for legacy IPF points; lighter lifters score 0.
pub const IPF_POINTS_MIN_BODYWEIGHT: f64 = 40.0;

/// Minimum body weight for IPF GL; lighter lifters score 0.
pub const GOODLIFT_MIN_BODYWEIGHT: f64 = 35.0;

/// Polynomial body-weight normalisation (Wilks, Wilks 2.0, DOTS).
///
/// Body weight is clamped into `[min_bodyweight, max_bodyweight]` before
/// the polynomial is evaluated.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Polynomial {
    /// Coefficients in ascending power order, starting at the constant term.
    pub coefficients: &'static [f64],
    pub min_bodyweight: f64,
    pub max_bodyweight: f64,
}

impl Polynomial {
    /// Clamps body weight into the valid domain of this polynomial.
    pub fn clamp(&self, bodyweight_kg: f64) -> f64 {
        bodyweight_kg.clamp(self.min_bodyweight, self.max_bodyweight)
    }

    /// Evaluates the denominator at the clamped body weight.
    pub fn denominator(&self, bodyweight_kg: f64) -> f64 {
        let bw = self.clamp(bodyweight_kg);
        self.coefficients
            .iter()
            .enumerate()
            .map(|(power, c)| c * bw.powi(power as i32))
            .sum()
    }
}

/// Legacy IPF points coefficients.
///
/// Score = 500 + 100 × (lifted − (c1·ln(bw) − c2)) / (c3·ln(bw) − c4)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IpfPointsCoefficients {
    pub c1: f64,
    pub c2: f64,
    pub c3: f64,
    pub c4: f64,
}

/// IPF GL (Goodlift) coefficients.
///
/// Score = lifted × 100 / (A − B·e^(−C·bw))
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GoodliftCoefficients {
    pub a: f64,
    pub b: f64,
    pub c: f64,
}

impl GoodliftCoefficients {
    /// The bodyweight-dependent denominator `A − B·e^(−C·bw)`.
    pub fn denominator(&self, bodyweight_kg: f64) -> f64 {
        self.a - self.b * (-self.c * bodyweight_kg).exp()
    }
}

const OLD_WILKS_MALE: Polynomial = Polynomial {
    coefficients: &[
        -216.0475144,
        16.2606339,
        -0.002388645,
        -0.00113732,
        7.01863e-6,
        -1.291e-8,
    ],
    min_bodyweight: 40.0,
    max_bodyweight: 201.9,
};

const OLD_WILKS_FEMALE: Polynomial = Polynomial {
    coefficients: &[
        594.31747775582,
        -27.23842536447,
        0.82112226871,
        -0.00930733913,
        4.731582e-5,
        -9.054e-8,
    ],
    min_bodyweight: 26.51,
    max_bodyweight: 154.53,
};

const WILKS2_MALE: Polynomial = Polynomial {
    coefficients: &[
        47.4617885411949,
        8.47206137941125,
        0.073694103462609,
        -1.39583381094385e-3,
        7.07665973070743e-6,
        -1.20804336482315e-8,
    ],
    min_bodyweight: 40.0,
    max_bodyweight: 200.95,
};

const WILKS2_FEMALE: Polynomial = Polynomial {
    coefficients: &[
        -125.425539779509,
        13.7121941940668,
        -0.0330725063103405,
        -1.0504000506583e-3,
        9.38773881462799e-6,
        -2.3334613884954e-8,
    ],
    min_bodyweight: 40.0,
    max_bodyweight: 150.95,
};

const DOTS_MALE: Polynomial = Polynomial {
    coefficients: &[
        -307.75076,
        24.0900756,
        -0.1918759221,
        0.0007391293,
        -0.000001093,
    ],
    min_bodyweight: 40.0,
    max_bodyweight: 210.0,
};

const DOTS_FEMALE: Polynomial = Polynomial {
    coefficients: &[
        -57.96288,
        13.6175032,
        -0.1126655495,
        0.0005158568,
        -0.0000010706,
    ],
    min_bodyweight: 40.0,
    max_bodyweight: 150.0,
};

pub fn old_wilks(sex: Sex) -> &'static Polynomial {
    match sex {
        Sex::Male => &OLD_WILKS_MALE,
        Sex::Female => &OLD_WILKS_FEMALE,
    }
}

pub fn wilks2(sex: Sex) -> &'static Polynomial {
    match sex {
        Sex::Male => &WILKS2_MALE,
        Sex::Female => &WILKS2_FEMALE,
    }
}

pub fn dots(sex: Sex) -> &'static Polynomial {
    match sex {
        Sex::Male => &DOTS_MALE,
        Sex::Female => &DOTS_FEMALE,
    }
}

/// Legacy IPF points coefficients for a sex and division.
pub fn ipf_points(sex: Sex, division: Division) -> IpfPointsCoefficients {
    use Equipment::*;
    use MeetCategory::*;

    let [c1, c2, c3, c4] = match (sex, division.equipment, division.category) {
        (Sex::Male, Classic, FullMeet) => [310.67, 857.785, 53.216, 147.0835],
        (Sex::Male, Classic, BenchOnly) => [86.4745, 259.155, 17.5785, 53.122],
        (Sex::Male, Equipped, FullMeet) => [387.265, 1121.28, 80.6324, 222.4896],
        (Sex::Male, Equipped, BenchOnly) => [133.94, 441.465, 35.3938, 113.0057],
        (Sex::Female, Classic, FullMeet) => [125.1435, 228.03, 34.5246, 86.8301],
        (Sex::Female, Classic, BenchOnly) => [25.0485, 43.848, 6.7172, 13.952],
        (Sex::Female, Equipped, FullMeet) => [176.58, 373.315, 48.4534, 110.0103],
        (Sex::Female, Equipped, BenchOnly) => [49.106, 124.209, 23.199, 67.4926],
    };

    IpfPointsCoefficients { c1, c2, c3, c4 }
}

/// IPF GL coefficients for a sex and division.
pub fn goodlift(sex: Sex, division: Division) -> GoodliftCoefficients {
    use Equipment::*;
    use MeetCategory::*;

    let [a, b, c] = match (sex, division.equipment, division.category) {
        (Sex::Male, Classic, FullMeet) => [1199.72839, 1025.18162, 0.00921],
        (Sex::Male, Classic, BenchOnly) => [320.98041, 281.40258, 0.01008],
        (Sex::Male, Equipped, FullMeet) => [1236.25115, 1449.21864, 0.01644],
        (Sex::Male, Equipped, BenchOnly) => [381.22073, 733.79378, 0.02398],
        (Sex::Female, Classic, FullMeet) => [610.32796, 1045.59282, 0.03048],
        (Sex::Female, Classic, BenchOnly) => [142.40398, 442.52671, 0.04724],
        (Sex::Female, Equipped, FullMeet) => [758.63878, 949.31382, 0.02435],
        (Sex::Female, Equipped, BenchOnly) => [221.82209, 357.00377, 0.02937],
    };

    GoodliftCoefficients { a, b, c }
}
