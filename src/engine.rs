use ndarray::Array2;
use rand::Rng;

use crate::catalog::ExerciseCatalog;
use crate::features::FeatureSchema;
use crate::generator::constants::DEFAULT_NUM_CANDIDATES;
use crate::generator::generate_candidate;
use crate::model::ModelArtifact;
use crate::models::{MenuCandidate, PlayerProfile};

/// Recommendation engine settings.
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// Candidate menus generated and scored per request. 0 is clamped to 1 so
    /// the caller always gets a usable response.
    pub num_candidates: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            num_candidates: DEFAULT_NUM_CANDIDATES,
        }
    }
}

/// What the game loop receives back.
///
/// The caller is the one that deducts energy, bumps training counters, and
/// persists the profile; the engine never mutates it.
#[derive(Debug, Clone)]
pub struct Recommendation {
    pub candidate: MenuCandidate,
    /// The model's score for the chosen candidate, when a model did the
    /// picking. For selection and logging only — the displayed score is
    /// always the true one.
    pub predicted_score: Option<f64>,
}

impl Recommendation {
    /// Chosen exercises, flattened in part order.
    pub fn exercises(&self) -> Vec<String> {
        self.candidate.all_exercises()
    }

    /// True efficiency score of the chosen menu.
    pub fn true_score(&self) -> f64 {
        self.candidate.total_score()
    }
}

/// Generates candidate menus and picks one per request.
///
/// The model picks, reality grades: the artifact's predictions choose among
/// candidates, but the returned score is the candidate's true score. With no
/// artifact the engine falls back to the best true score among the same pool.
pub struct RecommendationEngine {
    catalog: ExerciseCatalog,
    artifact: Option<ModelArtifact>,
    config: EngineConfig,
}

impl RecommendationEngine {
    pub fn new(
        catalog: ExerciseCatalog,
        artifact: Option<ModelArtifact>,
        config: EngineConfig,
    ) -> Self {
        Self {
            catalog,
            artifact,
            config,
        }
    }

    pub fn catalog(&self) -> &ExerciseCatalog {
        &self.catalog
    }

    pub fn has_model(&self) -> bool {
        self.artifact.is_some()
    }

    /// Generate candidates for the profile and return the pick.
    ///
    /// Ties break first-seen on both the predicted and the true-score path.
    pub fn recommend(&self, profile: &PlayerProfile, rng: &mut impl Rng) -> Recommendation {
        let count = self.config.num_candidates.max(1);
        let mut candidates: Vec<MenuCandidate> = (0..count)
            .map(|_| generate_candidate(&self.catalog, profile, rng))
            .collect();

        if let Some(artifact) = &self.artifact {
            if let Some((index, predicted)) = select_best_predicted(artifact, profile, &candidates)
            {
                let candidate = candidates.swap_remove(index);
                return Recommendation {
                    candidate,
                    predicted_score: Some(predicted),
                };
            }
        }

        let mut best = 0;
        for (i, candidate) in candidates.iter().enumerate() {
            if candidate.total_score() > candidates[best].total_score() {
                best = i;
            }
        }
        let candidate = candidates.swap_remove(best);
        Recommendation {
            candidate,
            predicted_score: None,
        }
    }
}

/// Batch-score candidates for a profile and return the index and value of the
/// highest prediction. First-seen wins on ties.
pub fn select_best_predicted(
    artifact: &ModelArtifact,
    profile: &PlayerProfile,
    candidates: &[MenuCandidate],
) -> Option<(usize, f64)> {
    if candidates.is_empty() {
        return None;
    }

    let schema = artifact.schema();
    let rows = encode_batch(&schema, profile, candidates);
    let predicted = artifact.predict_batch(&rows);

    let mut best = 0;
    for (i, value) in predicted.iter().enumerate() {
        if *value > predicted[best] {
            best = i;
        }
    }
    Some((best, predicted[best]))
}

/// Stack encoded feature rows into one inference matrix.
pub fn encode_batch(
    schema: &FeatureSchema,
    profile: &PlayerProfile,
    candidates: &[MenuCandidate],
) -> Array2<f64> {
    let mut rows = Array2::zeros((candidates.len(), schema.width()));
    for (i, candidate) in candidates.iter().enumerate() {
        for (j, value) in schema.encode(profile, candidate).into_iter().enumerate() {
            rows[(i, j)] = value;
        }
    }
    rows
}
