use std::collections::BTreeSet;
use std::path::Path;

use rand::Rng;

use crate::catalog::ExerciseCatalog;
use crate::error::{CoachError, Result};
use crate::features::FeatureSchema;
use crate::generator::generate_candidate;
use crate::models::PlayerProfile;

/// Label column name in dataset CSVs.
pub const LABEL_COLUMN: &str = "score";

/// Identifier column written first in dataset CSVs; never a feature.
pub const NAME_COLUMN: &str = "name";

/// An encoded training table: one row per simulated profile.
pub struct TrainingDataset {
    pub schema: FeatureSchema,
    pub names: Vec<String>,
    pub rows: Vec<Vec<f64>>,
    pub labels: Vec<f64>,
}

impl TrainingDataset {
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Write the table as CSV: `name`, the schema columns, then `score`.
    pub fn to_csv<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let mut wtr = csv::Writer::from_path(path)?;

        let mut header = vec![NAME_COLUMN.to_string()];
        header.extend(self.schema.columns().iter().cloned());
        header.push(LABEL_COLUMN.to_string());
        wtr.write_record(&header)?;

        for ((name, row), label) in self.names.iter().zip(&self.rows).zip(&self.labels) {
            let mut record = Vec::with_capacity(header.len());
            record.push(name.clone());
            record.extend(row.iter().map(|value| value.to_string()));
            record.push(label.to_string());
            wtr.write_record(&record)?;
        }

        wtr.flush()?;
        Ok(())
    }

    /// Read a table previously written by `to_csv`. The feature ordering is
    /// taken from the header verbatim.
    pub fn from_csv<P: AsRef<Path>>(path: P) -> Result<Self> {
        let mut reader = csv::Reader::from_path(path)?;

        let header: Vec<String> = reader.headers()?.iter().map(str::to_string).collect();
        if header.first().map(String::as_str) != Some(NAME_COLUMN)
            || header.last().map(String::as_str) != Some(LABEL_COLUMN)
        {
            return Err(CoachError::InvalidInput(format!(
                "dataset header must start with '{NAME_COLUMN}' and end with '{LABEL_COLUMN}'"
            )));
        }
        let schema = FeatureSchema::from_columns(header[1..header.len() - 1].to_vec());

        let mut names = Vec::new();
        let mut rows = Vec::new();
        let mut labels = Vec::new();
        for (line, record) in reader.records().enumerate() {
            let record = record?;
            if record.len() != header.len() {
                return Err(CoachError::InvalidInput(format!(
                    "dataset row {} has {} fields, expected {}",
                    line + 1,
                    record.len(),
                    header.len()
                )));
            }

            names.push(record[0].to_string());
            let mut row = Vec::with_capacity(schema.width());
            for field in record.iter().skip(1).take(schema.width()) {
                row.push(parse_number(field, line + 1)?);
            }
            rows.push(row);
            labels.push(parse_number(&record[record.len() - 1], line + 1)?);
        }

        Ok(Self {
            schema,
            names,
            rows,
            labels,
        })
    }
}

fn parse_number(field: &str, line: usize) -> Result<f64> {
    field.trim().parse().map_err(|_| {
        CoachError::InvalidInput(format!("bad number '{field}' in dataset row {line}"))
    })
}

/// Build the synthetic training table.
///
/// Simulates `num_profiles` random players (current energy equal to max),
/// packs one full-body candidate each, then encodes every row against the
/// sorted union of exercises observed across the whole run. The label is the
/// candidate's true total score.
pub fn build_dataset(
    catalog: &ExerciseCatalog,
    num_profiles: usize,
    rng: &mut impl Rng,
) -> TrainingDataset {
    let mut generated = Vec::with_capacity(num_profiles);
    let mut observed: BTreeSet<String> = BTreeSet::new();

    for i in 0..num_profiles {
        let profile = PlayerProfile::random(format!("User_{i}"), None, rng);
        let candidate = generate_candidate(catalog, &profile, rng);
        for name in candidate.action_set() {
            observed.insert(name.to_string());
        }
        generated.push((profile, candidate));

        if (i + 1) % 1000 == 0 {
            println!("Generated {} / {} rows...", i + 1, num_profiles);
        }
    }

    let schema = FeatureSchema::from_action_names(&observed);

    let mut names = Vec::with_capacity(generated.len());
    let mut rows = Vec::with_capacity(generated.len());
    let mut labels = Vec::with_capacity(generated.len());
    for (profile, candidate) in &generated {
        names.push(profile.name.clone());
        rows.push(schema.encode(profile, candidate));
        labels.push(candidate.total_score());
    }

    TrainingDataset {
        schema,
        names,
        rows,
        labels,
    }
}
