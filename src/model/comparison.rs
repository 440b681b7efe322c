use std::path::Path;

use rand::Rng;

use crate::catalog::ExerciseCatalog;
use crate::engine::select_best_predicted;
use crate::error::Result;
use crate::generator::generate_candidate;
use crate::model::artifact::ModelArtifact;
use crate::models::{MenuCandidate, PlayerProfile};

/// Comparison experiment settings.
#[derive(Debug, Clone)]
pub struct ComparisonConfig {
    /// Simulated players to evaluate.
    pub players: usize,
    /// Candidate pool size shared by all models for each player.
    pub pool_size: usize,
}

impl Default for ComparisonConfig {
    fn default() -> Self {
        Self {
            players: 100,
            pool_size: 50,
        }
    }
}

/// Per-player true scores achieved by one selection method.
#[derive(Debug, Clone)]
pub struct MethodScores {
    pub method: String,
    pub scores: Vec<f64>,
}

impl MethodScores {
    pub fn average(&self) -> f64 {
        if self.scores.is_empty() {
            0.0
        } else {
            self.scores.iter().sum::<f64>() / self.scores.len() as f64
        }
    }
}

/// Measure each artifact against the single-random-menu baseline.
///
/// Every player gets one fresh candidate pool; all artifacts pick from that
/// same pool, so score differences reflect the models alone. The recorded
/// score is always the picked candidate's TRUE score.
pub fn compare_artifacts(
    catalog: &ExerciseCatalog,
    artifacts: &[ModelArtifact],
    config: &ComparisonConfig,
    rng: &mut impl Rng,
) -> Vec<MethodScores> {
    let mut methods: Vec<MethodScores> = Vec::with_capacity(artifacts.len() + 1);
    methods.push(MethodScores {
        method: "Random".to_string(),
        scores: Vec::with_capacity(config.players),
    });
    for artifact in artifacts {
        methods.push(MethodScores {
            method: artifact.family.label().to_string(),
            scores: Vec::with_capacity(config.players),
        });
    }

    for i in 0..config.players {
        let profile = PlayerProfile::random(format!("Player_{i}"), None, rng);

        let baseline = generate_candidate(catalog, &profile, rng);
        methods[0].scores.push(baseline.total_score());

        let pool: Vec<MenuCandidate> = (0..config.pool_size)
            .map(|_| generate_candidate(catalog, &profile, rng))
            .collect();

        for (slot, artifact) in artifacts.iter().enumerate() {
            let score = select_best_predicted(artifact, &profile, &pool)
                .map(|(index, _)| pool[index].total_score())
                .unwrap_or(0.0);
            methods[slot + 1].scores.push(score);
        }

        if (i + 1) % 10 == 0 {
            println!("Compared {} / {} players...", i + 1, config.players);
        }
    }

    methods
}

/// Write per-player scores as CSV: one column per method.
pub fn write_scores_csv(methods: &[MethodScores], path: &Path) -> Result<()> {
    let mut wtr = csv::Writer::from_path(path)?;

    let mut header = vec!["player".to_string()];
    header.extend(methods.iter().map(|m| m.method.clone()));
    wtr.write_record(&header)?;

    let rows = methods.first().map(|m| m.scores.len()).unwrap_or(0);
    for i in 0..rows {
        let mut record = Vec::with_capacity(header.len());
        record.push((i + 1).to_string());
        for method in methods {
            record.push(format!("{:.2}", method.scores.get(i).copied().unwrap_or(0.0)));
        }
        wtr.write_record(&record)?;
    }

    wtr.flush()?;
    Ok(())
}
