use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoachError;

/// One of the six fixed training-target categories.
///
/// Catalog files may label parts with the English names (any case) or with the
/// original data files' Chinese labels; both parse to the same variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum BodyPart {
    Chest,
    Back,
    Shoulder,
    Arms,
    Legs,
    Core,
}

impl BodyPart {
    /// All parts in the canonical order used for per-part arrays, feature
    /// columns, and display.
    pub const ALL: [BodyPart; 6] = [
        BodyPart::Chest,
        BodyPart::Back,
        BodyPart::Shoulder,
        BodyPart::Arms,
        BodyPart::Legs,
        BodyPart::Core,
    ];

    /// Stable index into per-part arrays.
    pub fn index(self) -> usize {
        match self {
            BodyPart::Chest => 0,
            BodyPart::Back => 1,
            BodyPart::Shoulder => 2,
            BodyPart::Arms => 3,
            BodyPart::Legs => 4,
            BodyPart::Core => 5,
        }
    }

    /// Lowercase key used to build feature-column names ("chest_max", ...).
    pub fn key(self) -> &'static str {
        match self {
            BodyPart::Chest => "chest",
            BodyPart::Back => "back",
            BodyPart::Shoulder => "shoulder",
            BodyPart::Arms => "arms",
            BodyPart::Legs => "legs",
            BodyPart::Core => "core",
        }
    }

    /// Display label.
    pub fn label(self) -> &'static str {
        match self {
            BodyPart::Chest => "Chest",
            BodyPart::Back => "Back",
            BodyPart::Shoulder => "Shoulder",
            BodyPart::Arms => "Arms",
            BodyPart::Legs => "Legs",
            BodyPart::Core => "Core",
        }
    }
}

impl FromStr for BodyPart {
    type Err = CoachError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "chest" | "胸部" => Ok(BodyPart::Chest),
            "back" | "背部" => Ok(BodyPart::Back),
            "shoulder" | "shoulders" | "肩部" => Ok(BodyPart::Shoulder),
            "arms" | "arm" | "hand" | "手臂" => Ok(BodyPart::Arms),
            "legs" | "leg" | "腿部" => Ok(BodyPart::Legs),
            "core" | "belly" | "核心" => Ok(BodyPart::Core),
            other => Err(CoachError::InvalidInput(format!(
                "unknown body part: {other}"
            ))),
        }
    }
}

impl TryFrom<String> for BodyPart {
    type Error = CoachError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<BodyPart> for String {
    fn from(part: BodyPart) -> Self {
        part.label().to_string()
    }
}

impl fmt::Display for BodyPart {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// An immutable catalog record: one exercise with its cost and payoff.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Exercise {
    #[serde(rename = "Name")]
    pub name: String,

    #[serde(rename = "BodyPart")]
    pub body_part: BodyPart,

    #[serde(rename = "EnergyCost")]
    pub energy_cost: f64,

    #[serde(rename = "MuscleYield")]
    pub muscle_yield: f64,

    #[serde(rename = "Difficulty")]
    pub difficulty: u8,
}

impl Exercise {
    /// Muscle gained per unit of energy spent.
    ///
    /// Zero-cost exercises count as zero efficiency rather than dividing by
    /// zero.
    #[inline]
    pub fn efficiency(&self) -> f64 {
        if self.energy_cost > 0.0 {
            self.muscle_yield / self.energy_cost
        } else {
            0.0
        }
    }

    /// Basic validation: non-negative cost/yield and a difficulty tier of 1-5.
    pub fn is_valid(&self) -> bool {
        self.energy_cost >= 0.0 && self.muscle_yield >= 0.0 && (1..=5).contains(&self.difficulty)
    }

    /// Canonical key for lookups (lowercase name).
    pub fn key(&self) -> String {
        self.name.to_lowercase()
    }
}

impl PartialEq for Exercise {
    fn eq(&self, other: &Self) -> bool {
        self.name.to_lowercase() == other.name.to_lowercase()
    }
}

impl Eq for Exercise {}

impl std::hash::Hash for Exercise {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.name.to_lowercase().hash(state);
    }
}
