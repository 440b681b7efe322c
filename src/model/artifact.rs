use std::fs;
use std::path::Path;
use std::str::FromStr;

use ndarray::{Array1, Array2};
use serde::{Deserialize, Serialize};

use crate::error::{CoachError, Result};
use crate::features::FeatureSchema;

/// Regression families the trainer can fit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ModelFamily {
    Linear,
    Ridge,
    Lasso,
}

impl ModelFamily {
    pub const ALL: [ModelFamily; 3] = [ModelFamily::Linear, ModelFamily::Ridge, ModelFamily::Lasso];

    pub fn label(self) -> &'static str {
        match self {
            ModelFamily::Linear => "LinearRegression",
            ModelFamily::Ridge => "Ridge",
            ModelFamily::Lasso => "Lasso",
        }
    }
}

impl FromStr for ModelFamily {
    type Err = CoachError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "linear" | "linearregression" | "ols" => Ok(ModelFamily::Linear),
            "ridge" => Ok(ModelFamily::Ridge),
            "lasso" => Ok(ModelFamily::Lasso),
            other => Err(CoachError::InvalidInput(format!(
                "unknown model family: {other} (expected linear, ridge, or lasso)"
            ))),
        }
    }
}

/// A fitted regressor bundled with the feature ordering it was trained on.
///
/// Every supported family is linear-form, so intercept + coefficients fully
/// determine inference. An artifact is immutable once loaded; retraining
/// produces a new one.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelArtifact {
    pub family: ModelFamily,
    pub intercept: f64,
    pub coefficients: Vec<f64>,
    /// Frozen feature-column ordering. Load-bearing: inference must use it
    /// verbatim, never a re-derived ordering.
    pub feature_columns: Vec<String>,
    /// The subset of `feature_columns` that are exercise indicators.
    pub action_columns: Vec<String>,
}

impl ModelArtifact {
    /// The encoding schema this artifact was trained with.
    pub fn schema(&self) -> FeatureSchema {
        FeatureSchema::from_columns(self.feature_columns.clone())
    }

    /// Score a single encoded row.
    pub fn predict(&self, row: &[f64]) -> f64 {
        let dot: f64 = row
            .iter()
            .zip(&self.coefficients)
            .map(|(x, w)| x * w)
            .sum();
        self.intercept + dot
    }

    /// Score a whole candidate batch with one matrix-vector product.
    pub fn predict_batch(&self, rows: &Array2<f64>) -> Array1<f64> {
        let coefficients = Array1::from_vec(self.coefficients.clone());
        rows.dot(&coefficients) + self.intercept
    }

    /// Persist as pretty-printed JSON.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        Ok(())
    }

    /// Load and structurally validate an artifact.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let artifact: ModelArtifact = serde_json::from_str(&content)?;
        artifact.validate()?;
        Ok(artifact)
    }

    fn validate(&self) -> Result<()> {
        if self.coefficients.len() != self.feature_columns.len() {
            return Err(CoachError::Model(format!(
                "artifact has {} coefficients for {} feature columns",
                self.coefficients.len(),
                self.feature_columns.len()
            )));
        }
        for column in &self.action_columns {
            if !self.feature_columns.contains(column) {
                return Err(CoachError::Model(format!(
                    "indicator column '{column}' is not in the feature columns"
                )));
            }
        }
        Ok(())
    }
}
