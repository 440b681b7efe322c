use std::collections::HashSet;

use crate::models::BodyPart;

/// Menu generated for a single body part: chosen exercise names in selection
/// order, plus the normalized part score (0 to 20).
#[derive(Debug, Clone, Default)]
pub struct PartMenu {
    pub exercises: Vec<String>,
    pub score: f64,
}

/// One full-body menu proposal.
///
/// Candidates are generated fresh per selection request, scored, and
/// discarded; they are never persisted.
#[derive(Debug, Clone)]
pub struct MenuCandidate {
    parts: [PartMenu; 6],
    total_score: f64,
}

impl MenuCandidate {
    pub fn new(parts: [PartMenu; 6]) -> Self {
        let total_score = parts.iter().map(|menu| menu.score).sum();
        Self { parts, total_score }
    }

    pub fn part(&self, part: BodyPart) -> &PartMenu {
        &self.parts[part.index()]
    }

    /// Parts paired with their menus, in canonical order.
    pub fn parts(&self) -> impl Iterator<Item = (BodyPart, &PartMenu)> {
        BodyPart::ALL.into_iter().zip(self.parts.iter())
    }

    /// Sum of the six part scores.
    pub fn total_score(&self) -> f64 {
        self.total_score
    }

    /// All chosen exercises, flattened in part order then selection order.
    pub fn all_exercises(&self) -> Vec<String> {
        self.parts
            .iter()
            .flat_map(|menu| menu.exercises.iter().cloned())
            .collect()
    }

    /// Union of chosen exercises across all parts, for indicator encoding.
    pub fn action_set(&self) -> HashSet<&str> {
        self.parts
            .iter()
            .flat_map(|menu| menu.exercises.iter().map(String::as_str))
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.parts.iter().all(|menu| menu.exercises.is_empty())
    }
}
