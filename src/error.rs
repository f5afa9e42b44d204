//! Error types for the powerscore application.

use thiserror::Error;

/// Errors raised while validating calculator input.
///
/// The scoring formulas themselves never fail; everything here is rejected
/// at the boundary before a formula is called. Messages are shown to users
/// as-is.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InputError {
    #[error("Enter a valid body weight")]
    InvalidBodyweight,

    #[error("Enter a valid weight lifted")]
    InvalidWeightLifted,

    #[error("Enter a valid target score")]
    InvalidTargetScore,

    #[error("unknown sex: {0}")]
    UnknownSex(String),

    #[error("unknown equipment class: {0}")]
    UnknownEquipment(String),

    #[error("unknown meet category: {0}")]
    UnknownCategory(String),

    #[error("unknown unit: {0}")]
    UnknownUnit(String),

    #[error("unknown scoring system: {0}")]
    UnknownSystem(String),

    #[error("{0} cannot be solved for a target weight")]
    NotInvertible(&'static str),
}
