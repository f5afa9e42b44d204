//! Domain types for lifter categories and scoring systems.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::InputError;

/// Sex category; selects the coefficient table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sex {
    #[default]
    Male,
    Female,
}

impl Sex {
    pub fn display_name(&self) -> &'static str {
        match self {
            Sex::Male => "Male",
            Sex::Female => "Female",
        }
    }
}

impl FromStr for Sex {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "m" | "male" | "men" => Ok(Sex::Male),
            "f" | "female" | "women" => Ok(Sex::Female),
            _ => Err(InputError::UnknownSex(s.to_string())),
        }
    }
}

impl std::fmt::Display for Sex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Equipment class. Only IPF points and IPF GL distinguish these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Equipment {
    /// Unequipped ("raw").
    #[default]
    Classic,
    Equipped,
}

impl Equipment {
    pub fn display_name(&self) -> &'static str {
        match self {
            Equipment::Classic => "Classic",
            Equipment::Equipped => "Equipped",
        }
    }
}

impl FromStr for Equipment {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "cl" | "classic" | "raw" => Ok(Equipment::Classic),
            "eq" | "equipped" => Ok(Equipment::Equipped),
            _ => Err(InputError::UnknownEquipment(s.to_string())),
        }
    }
}

impl std::fmt::Display for Equipment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Meet category: three-lift total or bench press only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MeetCategory {
    #[default]
    FullMeet,
    BenchOnly,
}

impl MeetCategory {
    pub fn display_name(&self) -> &'static str {
        match self {
            MeetCategory::FullMeet => "Powerlifting",
            MeetCategory::BenchOnly => "Bench Only",
        }
    }
}

impl FromStr for MeetCategory {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "pl" | "full" | "full_meet" | "fullmeet" | "powerlifting" | "sbd" => {
                Ok(MeetCategory::FullMeet)
            }
            "bn" | "bench" | "bench_only" | "benchonly" | "b" => Ok(MeetCategory::BenchOnly),
            _ => Err(InputError::UnknownCategory(s.to_string())),
        }
    }
}

impl std::fmt::Display for MeetCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Equipment class and meet category together, the key for the IPF tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Division {
    pub equipment: Equipment,
    pub category: MeetCategory,
}

impl Division {
    pub fn new(equipment: Equipment, category: MeetCategory) -> Self {
        Self {
            equipment,
            category,
        }
    }

    /// Federation short code, e.g. `CLPL` or `EQBN`.
    pub fn code(&self) -> &'static str {
        match (self.equipment, self.category) {
            (Equipment::Classic, MeetCategory::FullMeet) => "CLPL",
            (Equipment::Classic, MeetCategory::BenchOnly) => "CLBN",
            (Equipment::Equipped, MeetCategory::FullMeet) => "EQPL",
            (Equipment::Equipped, MeetCategory::BenchOnly) => "EQBN",
        }
    }
}

/// Scoring systems computed by the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreSystem {
    IpfGl,
    Dots,
    Wilks2,
    IpfPoints,
    OldWilks,
}

impl ScoreSystem {
    /// Returns all systems in display order.
    pub fn all() -> &'static [ScoreSystem] {
        &[
            ScoreSystem::IpfGl,
            ScoreSystem::Dots,
            ScoreSystem::Wilks2,
            ScoreSystem::IpfPoints,
            ScoreSystem::OldWilks,
        ]
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            ScoreSystem::IpfGl => "IPF GL",
            ScoreSystem::Dots => "DOTS",
            ScoreSystem::Wilks2 => "Wilks 2.0",
            ScoreSystem::IpfPoints => "IPF Points",
            ScoreSystem::OldWilks => "Old Wilks",
        }
    }
}

impl FromStr for ScoreSystem {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "ipfgl" | "ipf_gl" | "ipf gl" | "gl" | "goodlift" => Ok(ScoreSystem::IpfGl),
            "dots" => Ok(ScoreSystem::Dots),
            "wilks2" | "wilks 2.0" | "wilks2.0" | "new_wilks" => Ok(ScoreSystem::Wilks2),
            "ipf" | "ipf_points" | "ipf points" => Ok(ScoreSystem::IpfPoints),
            "wilks" | "old_wilks" | "old wilks" => Ok(ScoreSystem::OldWilks),
            _ => Err(InputError::UnknownSystem(s.to_string())),
        }
    }
}

impl std::fmt::Display for ScoreSystem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// A scoring system with a closed-form inverse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TargetSystem {
    #[default]
    Dots,
    Wilks2,
    IpfGl,
}

impl From<TargetSystem> for ScoreSystem {
    fn from(system: TargetSystem) -> Self {
        match system {
            TargetSystem::Dots => ScoreSystem::Dots,
            TargetSystem::Wilks2 => ScoreSystem::Wilks2,
            TargetSystem::IpfGl => ScoreSystem::IpfGl,
        }
    }
}

impl TryFrom<ScoreSystem> for TargetSystem {
    type Error = InputError;

    fn try_from(system: ScoreSystem) -> Result<Self, Self::Error> {
        match system {
            ScoreSystem::Dots => Ok(TargetSystem::Dots),
            ScoreSystem::Wilks2 => Ok(TargetSystem::Wilks2),
            ScoreSystem::IpfGl => Ok(TargetSystem::IpfGl),
            ScoreSystem::IpfPoints | ScoreSystem::OldWilks => {
                Err(InputError::NotInvertible(system.display_name()))
            }
        }
    }
}

impl FromStr for TargetSystem {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TargetSystem::try_from(ScoreSystem::from_str(s)?)
    }
}

impl std::fmt::Display for TargetSystem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", ScoreSystem::from(*self))
    }
}
