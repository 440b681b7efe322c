use std::fs;
use std::path::Path;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::{CoachError, Result};
use crate::models::BodyPart;

/// Character-creation ranges, matching the profile simulator.
pub const AGE_RANGE: (u32, u32) = (18, 65);
pub const WEIGHT_RANGE: (f64, f64) = (50.0, 100.0);
pub const HEIGHT_RANGE: (f64, f64) = (150.0, 190.0);
pub const ENERGY_MAX_RANGE: (u32, u32) = (200, 500);
pub const DIFFICULTY_RANGE: (u8, u8) = (1, 5);

/// A player character: demographics, six energy pools, and training history.
///
/// Every field carries a serde default, so a partially-initialized saved
/// profile deserializes with documented substitutes instead of failing:
/// gender 1, age 20, weight 70.0, height 170.0, difficulty 3, every max and
/// current energy 300, counters 0.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerProfile {
    #[serde(default = "default_name")]
    pub name: String,

    /// 0 = female, 1 = male.
    #[serde(default = "default_gender")]
    pub gender: u8,

    #[serde(default = "default_age")]
    pub age: u32,

    /// Body weight in kilograms.
    #[serde(default = "default_weight")]
    pub weight: f64,

    /// Height in centimeters. Stored for the status card; never a model
    /// feature.
    #[serde(default = "default_height")]
    pub height: f64,

    /// Chosen difficulty level, 1-5; gates which exercises are eligible.
    #[serde(default = "default_difficulty")]
    pub difficulty: u8,

    /// Per-part maximum energy, indexed by `BodyPart::index`. Fixed at
    /// character creation.
    #[serde(default = "default_energy")]
    pub energy_max: [f64; 6],

    /// Per-part current energy; spent by training, restored only by resting.
    #[serde(default = "default_energy")]
    pub energy: [f64; 6],

    /// Completed exercises per part; monotonically non-decreasing.
    #[serde(default)]
    pub training_counts: [u32; 6],
}

fn default_name() -> String {
    "Player".to_string()
}

fn default_gender() -> u8 {
    1
}

fn default_age() -> u32 {
    20
}

fn default_weight() -> f64 {
    70.0
}

fn default_height() -> f64 {
    170.0
}

fn default_difficulty() -> u8 {
    3
}

fn default_energy() -> [f64; 6] {
    [300.0; 6]
}

fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

impl PlayerProfile {
    /// Roll a random character within the documented ranges.
    ///
    /// Current energy starts equal to the rolled maxima. Pass a difficulty to
    /// pin it; otherwise it is rolled too.
    pub fn random(name: impl Into<String>, difficulty: Option<u8>, rng: &mut impl Rng) -> Self {
        let mut energy_max = [0.0; 6];
        for slot in &mut energy_max {
            *slot = rng.gen_range(ENERGY_MAX_RANGE.0..=ENERGY_MAX_RANGE.1) as f64;
        }

        Self {
            name: name.into(),
            gender: rng.gen_range(0..=1),
            age: rng.gen_range(AGE_RANGE.0..=AGE_RANGE.1),
            weight: round1(rng.gen_range(WEIGHT_RANGE.0..=WEIGHT_RANGE.1)),
            height: round1(rng.gen_range(HEIGHT_RANGE.0..=HEIGHT_RANGE.1)),
            difficulty: difficulty
                .unwrap_or_else(|| rng.gen_range(DIFFICULTY_RANGE.0..=DIFFICULTY_RANGE.1)),
            energy: energy_max,
            energy_max,
            training_counts: [0; 6],
        }
    }

    /// Current energy for a body part.
    pub fn energy(&self, part: BodyPart) -> f64 {
        self.energy[part.index()]
    }

    /// Maximum energy for a body part.
    pub fn max_energy(&self, part: BodyPart) -> f64 {
        self.energy_max[part.index()]
    }

    /// Completed-exercise counter for a body part.
    pub fn training_count(&self, part: BodyPart) -> u32 {
        self.training_counts[part.index()]
    }

    /// Whether the part's pool covers an energy cost.
    pub fn can_afford(&self, part: BodyPart, cost: f64) -> bool {
        self.energy(part) >= cost
    }

    /// Record one completed exercise: deduct its cost and bump the counter.
    pub fn train(&mut self, part: BodyPart, cost: f64) -> Result<()> {
        let index = part.index();
        if self.energy[index] < cost {
            return Err(CoachError::InvalidInput(format!(
                "not enough {} energy ({} left, {} needed)",
                part.label(),
                self.energy[index],
                cost
            )));
        }
        self.energy[index] -= cost;
        self.training_counts[index] += 1;
        Ok(())
    }

    /// Restore every current-energy pool to its maximum.
    pub fn rest(&mut self) {
        self.energy = self.energy_max;
    }

    /// Load a profile from a JSON file, substituting defaults for any missing
    /// fields.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let profile: PlayerProfile = serde_json::from_str(&content)?;
        Ok(profile)
    }

    /// Save the profile as pretty-printed JSON.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        Ok(())
    }
}
