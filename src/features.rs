use std::collections::HashSet;

use crate::models::{BodyPart, MenuCandidate, PlayerProfile};

/// Prefix marking exercise-indicator feature columns.
pub const ACTION_PREFIX: &str = "act_";

/// Demographic/energy feature columns, in the order frozen into every dataset
/// and model artifact. Height is intentionally absent.
pub const ATTRIBUTE_COLUMNS: [&str; 16] = [
    "gender",
    "age",
    "weight",
    "chest_max",
    "back_max",
    "shoulder_max",
    "arms_max",
    "legs_max",
    "core_max",
    "chest_energy",
    "back_energy",
    "shoulder_energy",
    "arms_energy",
    "legs_energy",
    "core_energy",
    "difficulty",
];

/// Indicator column name for an exercise.
pub fn action_column(name: &str) -> String {
    format!("{ACTION_PREFIX}{name}")
}

/// Exercise name behind an indicator column, if it carries the prefix.
pub fn action_name(column: &str) -> Option<&str> {
    column.strip_prefix(ACTION_PREFIX)
}

/// Attribute values for a profile, in `ATTRIBUTE_COLUMNS` order.
pub fn attribute_values(profile: &PlayerProfile) -> [f64; 16] {
    let mut values = [0.0; 16];
    values[0] = f64::from(profile.gender);
    values[1] = f64::from(profile.age);
    values[2] = profile.weight;
    for (i, part) in BodyPart::ALL.into_iter().enumerate() {
        values[3 + i] = profile.max_energy(part);
        values[9 + i] = profile.energy(part);
    }
    values[15] = f64::from(profile.difficulty);
    values
}

/// A frozen feature-column ordering shared by dataset rows and model
/// inference.
///
/// The ordering is load-bearing: it is persisted inside the model artifact
/// and must never be re-derived independently at inference time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeatureSchema {
    columns: Vec<String>,
    action_columns: Vec<String>,
}

impl FeatureSchema {
    /// Build a schema from exercise names: the attribute columns first, then
    /// one sorted `act_` indicator per name.
    pub fn from_action_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut action_columns: Vec<String> = names
            .into_iter()
            .map(|name| action_column(name.as_ref()))
            .collect();
        action_columns.sort();
        action_columns.dedup();

        let columns = ATTRIBUTE_COLUMNS
            .iter()
            .map(|column| (*column).to_string())
            .chain(action_columns.iter().cloned())
            .collect();

        Self {
            columns,
            action_columns,
        }
    }

    /// Rebuild a schema from a stored column list (dataset header or model
    /// artifact). The ordering is taken verbatim; indicators are recognized by
    /// prefix.
    pub fn from_columns(columns: Vec<String>) -> Self {
        let action_columns = columns
            .iter()
            .filter(|column| column.starts_with(ACTION_PREFIX))
            .cloned()
            .collect();
        Self {
            columns,
            action_columns,
        }
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn action_columns(&self) -> &[String] {
        &self.action_columns
    }

    /// Row width.
    pub fn width(&self) -> usize {
        self.columns.len()
    }

    /// Encode one profile + candidate pair into a feature row.
    ///
    /// Indicator columns absent from the candidate's union are 0; exercises
    /// unknown to the schema are ignored.
    pub fn encode(&self, profile: &PlayerProfile, candidate: &MenuCandidate) -> Vec<f64> {
        let chosen: HashSet<&str> = candidate.action_set();

        let mut row = Vec::with_capacity(self.width());
        row.extend(attribute_values(profile));
        for column in &self.action_columns {
            let name = action_name(column).unwrap_or(column.as_str());
            row.push(if chosen.contains(name) { 1.0 } else { 0.0 });
        }
        row
    }
}
