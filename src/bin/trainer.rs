use std::path::PathBuf;

use clap::Parser;
use rand::SeedableRng;
use rand::rngs::StdRng;

use iron_coach_rs::catalog::ExerciseCatalog;
use iron_coach_rs::dataset::build_dataset;
use iron_coach_rs::error::CoachError;
use iron_coach_rs::model::{
    ComparisonConfig, ModelArtifact, ModelFamily, TrainConfig, compare_artifacts, train_all,
    write_scores_csv,
};

/// Offline pipeline: simulate players, train the menu-scoring models, compare.
#[derive(Parser, Debug)]
#[command(name = "trainer")]
#[command(about = "Dataset generator and model trainer for the menu recommender")]
struct Args {
    /// Number of simulated profiles in the training dataset
    #[arg(long, default_value = "10000")]
    rows: usize,

    /// Random seed for simulation, splitting, and comparison
    #[arg(long, default_value = "42")]
    seed: u64,

    /// Path to the exercise catalog CSV
    #[arg(long, default_value = "exercise_catalog.csv")]
    catalog: PathBuf,

    /// Output CSV for the generated training dataset
    #[arg(long, default_value = "training_dataset.csv")]
    dataset: PathBuf,

    /// Output JSON for the persisted model artifact
    #[arg(long, default_value = "model_artifact.json")]
    artifact: PathBuf,

    /// Persist this family instead of the best-R2 one (linear | ridge | lasso)
    #[arg(long)]
    family: Option<String>,

    /// Skip the model-vs-random comparison experiment
    #[arg(long)]
    skip_compare: bool,

    /// Players in the comparison experiment
    #[arg(long, default_value = "100")]
    players: usize,

    /// Candidate pool size per player in the comparison experiment
    #[arg(long, default_value = "50")]
    pool: usize,

    /// Output CSV for per-player comparison scores
    #[arg(long, default_value = "model_comparison.csv")]
    results: PathBuf,
}

fn main() {
    let args = Args::parse();

    let catalog = match ExerciseCatalog::from_csv(&args.catalog) {
        Ok(catalog) => catalog,
        Err(e) => {
            eprintln!("Error loading catalog {:?}: {}", args.catalog, e);
            std::process::exit(1);
        }
    };
    if catalog.is_empty() {
        eprintln!("Error in {:?}: {}", args.catalog, CoachError::EmptyCatalog);
        std::process::exit(1);
    }
    println!("Loaded {} exercises from {:?}", catalog.len(), args.catalog);

    let mut rng = StdRng::seed_from_u64(args.seed);

    // Stage 1: simulate the training table.
    println!("Simulating {} training rows...", args.rows);
    let dataset = build_dataset(&catalog, args.rows, &mut rng);
    if let Err(e) = dataset.to_csv(&args.dataset) {
        eprintln!("Error writing dataset {:?}: {}", args.dataset, e);
        std::process::exit(1);
    }
    println!(
        "Wrote dataset to {:?} ({} rows, {} feature columns)",
        args.dataset,
        dataset.len(),
        dataset.schema.width()
    );

    // Stage 2: fit every family, report held-out diagnostics.
    let config = TrainConfig {
        seed: args.seed,
        ..Default::default()
    };
    let fitted = match train_all(&dataset, &config) {
        Ok(fitted) => fitted,
        Err(e) => {
            eprintln!("Training failed: {}", e);
            std::process::exit(1);
        }
    };

    println!("\n=== Model Leaderboard (held-out 20%) ===");
    for (rank, (_, report)) in fitted.iter().enumerate() {
        println!(
            "{}. {:<18} MSE: {:>9.4} | R2: {:.4}",
            rank + 1,
            report.family.label(),
            report.mse,
            report.r2
        );
    }

    // Stage 3: persist the chosen artifact.
    let chosen: Option<ModelArtifact> = match &args.family {
        Some(text) => match text.parse::<ModelFamily>() {
            Ok(family) => fitted
                .iter()
                .find(|(artifact, _)| artifact.family == family)
                .map(|(artifact, _)| artifact.clone()),
            Err(e) => {
                eprintln!("Error: {}", e);
                std::process::exit(1);
            }
        },
        None => fitted.first().map(|(artifact, _)| artifact.clone()),
    };
    let Some(artifact) = chosen else {
        eprintln!("No trained model available to persist");
        std::process::exit(1);
    };

    if let Err(e) = artifact.save(&args.artifact) {
        eprintln!("Error writing artifact {:?}: {}", args.artifact, e);
        std::process::exit(1);
    }
    println!(
        "\nPersisted {} artifact to {:?}",
        artifact.family.label(),
        args.artifact
    );

    if args.skip_compare {
        return;
    }

    // Stage 4: how much does picking with a model beat a single random menu?
    println!(
        "\nComparing {} models across {} players (pool: {})...",
        fitted.len(),
        args.players,
        args.pool
    );
    let artifacts: Vec<ModelArtifact> = fitted
        .iter()
        .map(|(artifact, _)| artifact.clone())
        .collect();
    let comparison = ComparisonConfig {
        players: args.players,
        pool_size: args.pool,
    };
    let methods = compare_artifacts(&catalog, &artifacts, &comparison, &mut rng);

    println!("\n=== Average True Score by Method ===");
    let mut ranked: Vec<_> = methods.iter().collect();
    ranked.sort_by(|a, b| {
        b.average()
            .partial_cmp(&a.average())
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    for (rank, method) in ranked.iter().enumerate() {
        println!("{}. {:<18} : {:.2}", rank + 1, method.method, method.average());
    }

    if let Err(e) = write_scores_csv(&methods, &args.results) {
        eprintln!("Error writing comparison CSV: {}", e);
    } else {
        println!("Wrote per-player scores to {:?}", args.results);
    }
}
