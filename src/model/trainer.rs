use linfa::prelude::*;
use linfa_elasticnet::ElasticNet;
use linfa_linear::LinearRegression;
use ndarray::{Array1, Array2};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;

use crate::dataset::TrainingDataset;
use crate::error::{CoachError, Result};
use crate::model::artifact::{ModelArtifact, ModelFamily};

/// Trainer settings; defaults mirror the offline pipeline.
#[derive(Debug, Clone)]
pub struct TrainConfig {
    /// Seed for the train/test shuffle.
    pub seed: u64,
    /// Held-out fraction, 0.2 by default.
    pub test_fraction: f64,
    /// Regularization strength for ridge and lasso.
    pub penalty: f64,
}

impl Default for TrainConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            test_fraction: 0.2,
            penalty: 0.1,
        }
    }
}

/// Held-out diagnostics for one fitted family.
///
/// Display-only: nothing keys control flow off these numbers.
#[derive(Debug, Clone)]
pub struct TrainReport {
    pub family: ModelFamily,
    pub train_rows: usize,
    pub test_rows: usize,
    pub mse: f64,
    pub r2: f64,
}

/// Fit one family on a seeded 80/20 split and score it on the held-out part.
pub fn train_family(
    dataset: &TrainingDataset,
    family: ModelFamily,
    config: &TrainConfig,
) -> Result<(ModelArtifact, TrainReport)> {
    if dataset.len() < 2 {
        return Err(CoachError::Model(
            "dataset too small to split for training".to_string(),
        ));
    }

    let (train_idx, test_idx) = split_indices(dataset.len(), config.test_fraction, config.seed);
    let (x_train, y_train) = to_arrays(dataset, &train_idx);
    let (x_test, y_test) = to_arrays(dataset, &test_idx);

    let (intercept, coefficients) = fit(family, x_train, y_train, config.penalty)?;

    let artifact = ModelArtifact {
        family,
        intercept,
        coefficients,
        feature_columns: dataset.schema.columns().to_vec(),
        action_columns: dataset.schema.action_columns().to_vec(),
    };

    let predicted = artifact.predict_batch(&x_test);
    let (mse, r2) = regression_metrics(&y_test, &predicted);

    let report = TrainReport {
        family,
        train_rows: train_idx.len(),
        test_rows: test_idx.len(),
        mse,
        r2,
    };
    Ok((artifact, report))
}

/// Fit every family, skipping any that fails to converge, sorted best-R²
/// first.
pub fn train_all(
    dataset: &TrainingDataset,
    config: &TrainConfig,
) -> Result<Vec<(ModelArtifact, TrainReport)>> {
    let mut fitted = Vec::new();
    for family in ModelFamily::ALL {
        match train_family(dataset, family, config) {
            Ok(result) => fitted.push(result),
            Err(e) => eprintln!("{} failed to fit: {}", family.label(), e),
        }
    }

    if fitted.is_empty() {
        return Err(CoachError::Model(
            "no model family could be fitted".to_string(),
        ));
    }

    fitted.sort_by(|a, b| {
        b.1.r2
            .partial_cmp(&a.1.r2)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    Ok(fitted)
}

/// Shuffled train/test index split. At least one row lands on each side.
fn split_indices(n: usize, test_fraction: f64, seed: u64) -> (Vec<usize>, Vec<usize>) {
    let mut indices: Vec<usize> = (0..n).collect();
    let mut rng = StdRng::seed_from_u64(seed);
    indices.shuffle(&mut rng);

    let test_len = ((n as f64) * test_fraction).round() as usize;
    let test_len = test_len.clamp(1, n - 1);
    let (test, train) = indices.split_at(test_len);
    (train.to_vec(), test.to_vec())
}

fn to_arrays(dataset: &TrainingDataset, indices: &[usize]) -> (Array2<f64>, Array1<f64>) {
    let width = dataset.schema.width();
    let mut x = Array2::zeros((indices.len(), width));
    let mut y = Array1::zeros(indices.len());
    for (row, &i) in indices.iter().enumerate() {
        for (col, value) in dataset.rows[i].iter().enumerate() {
            x[(row, col)] = *value;
        }
        y[row] = dataset.labels[i];
    }
    (x, y)
}

fn fit(
    family: ModelFamily,
    x: Array2<f64>,
    y: Array1<f64>,
    penalty: f64,
) -> Result<(f64, Vec<f64>)> {
    let training = Dataset::new(x, y);
    match family {
        ModelFamily::Linear => {
            let model = LinearRegression::new()
                .fit(&training)
                .map_err(|e| CoachError::Model(e.to_string()))?;
            Ok((model.intercept(), model.params().to_vec()))
        }
        ModelFamily::Ridge => {
            let model = ElasticNet::params()
                .penalty(penalty)
                .l1_ratio(0.0)
                .fit(&training)
                .map_err(|e| CoachError::Model(e.to_string()))?;
            Ok((model.intercept(), model.hyperplane().to_vec()))
        }
        ModelFamily::Lasso => {
            let model = ElasticNet::params()
                .penalty(penalty)
                .l1_ratio(1.0)
                .fit(&training)
                .map_err(|e| CoachError::Model(e.to_string()))?;
            Ok((model.intercept(), model.hyperplane().to_vec()))
        }
    }
}

/// Mean squared error and R² on a held-out partition.
fn regression_metrics(actual: &Array1<f64>, predicted: &Array1<f64>) -> (f64, f64) {
    let n = actual.len() as f64;
    let ss_res: f64 = actual
        .iter()
        .zip(predicted.iter())
        .map(|(a, p)| (a - p) * (a - p))
        .sum();
    let mse = ss_res / n;

    let mean = actual.sum() / n;
    let ss_tot: f64 = actual.iter().map(|a| (a - mean) * (a - mean)).sum();
    let r2 = if ss_tot > 0.0 { 1.0 - ss_res / ss_tot } else { 0.0 };

    (mse, r2)
}
