pub mod artifact;
pub mod comparison;
pub mod trainer;

pub use artifact::{ModelArtifact, ModelFamily};
pub use comparison::{ComparisonConfig, MethodScores, compare_artifacts, write_scores_csv};
pub use trainer::{TrainConfig, TrainReport, train_all, train_family};
