use std::collections::HashMap;
use std::path::Path;

use crate::error::{CoachError, Result};
use crate::models::{BodyPart, Exercise};

/// The read-only exercise reference table, partitioned by body part.
///
/// Loaded once at startup; every later component only reads from it.
pub struct ExerciseCatalog {
    by_part: [Vec<Exercise>; 6],
    count: usize,
}

impl ExerciseCatalog {
    /// Build a catalog from records.
    ///
    /// Names are deduplicated case-insensitively (last occurrence wins), which
    /// establishes the catalog-wide uniqueness invariant. Invalid records are
    /// rejected outright.
    pub fn new(records: Vec<Exercise>) -> Result<Self> {
        let mut seen: HashMap<String, Exercise> = HashMap::new();
        for exercise in records {
            if !exercise.is_valid() {
                return Err(CoachError::InvalidInput(format!(
                    "invalid catalog record: {}",
                    exercise.name
                )));
            }
            seen.insert(exercise.key(), exercise);
        }

        // Sort before partitioning so catalog order never depends on hash
        // iteration order.
        let mut all: Vec<Exercise> = seen.into_values().collect();
        all.sort_by(|a, b| a.name.cmp(&b.name));

        let count = all.len();
        let mut by_part: [Vec<Exercise>; 6] = Default::default();
        for exercise in all {
            by_part[exercise.body_part.index()].push(exercise);
        }

        Ok(Self { by_part, count })
    }

    /// Load the catalog from its CSV file.
    ///
    /// A missing or unreadable file is an error; callers that need the catalog
    /// treat it as fatal.
    pub fn from_csv<P: AsRef<Path>>(path: P) -> Result<Self> {
        let mut reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_path(path)?;

        let mut records = Vec::new();
        for row in reader.deserialize() {
            let exercise: Exercise = row?;
            records.push(exercise);
        }
        Self::new(records)
    }

    /// All exercises targeting one body part. May be empty.
    pub fn part(&self, part: BodyPart) -> &[Exercise] {
        &self.by_part[part.index()]
    }

    /// Look up an exercise by name (case-insensitive).
    pub fn get(&self, name: &str) -> Option<&Exercise> {
        let key = name.to_lowercase();
        self.exercises().find(|exercise| exercise.key() == key)
    }

    /// Look up an exercise by name, erroring when absent.
    pub fn require(&self, name: &str) -> Result<&Exercise> {
        self.get(name)
            .ok_or_else(|| CoachError::ExerciseNotFound(name.to_string()))
    }

    /// Every exercise, in per-part order.
    pub fn exercises(&self) -> impl Iterator<Item = &Exercise> {
        self.by_part.iter().flatten()
    }

    /// All exercise names.
    pub fn names(&self) -> Vec<String> {
        self.exercises().map(|exercise| exercise.name.clone()).collect()
    }

    pub fn len(&self) -> usize {
        self.count
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }
}
