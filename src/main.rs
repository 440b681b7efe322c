use std::path::Path;

use clap::Parser;
use rand::SeedableRng;
use rand::rngs::StdRng;

use iron_coach_rs::catalog::ExerciseCatalog;
use iron_coach_rs::cli::{Cli, Command};
use iron_coach_rs::engine::{EngineConfig, RecommendationEngine};
use iron_coach_rs::error::{CoachError, Result};
use iron_coach_rs::interface::{
    SessionChoice, display_profile, display_recommendation, prompt_difficulty, prompt_player_name,
    prompt_session_choice, prompt_yes_no,
};
use iron_coach_rs::model::ModelArtifact;
use iron_coach_rs::models::{BodyPart, PlayerProfile};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let mut cli = Cli::parse();
    let command = cli.command.take().unwrap_or_default();

    match command {
        Command::New { name } => cmd_new(&cli.profile, name),
        Command::Status => cmd_status(&cli.profile),
        Command::Recommend { candidates, seed } => cmd_recommend(&cli, candidates, seed),
        Command::Session { candidates } => cmd_session(&cli, candidates),
        Command::Rest => cmd_rest(&cli.profile),
    }
}

/// Create a new character, prompting for name and difficulty unless a name
/// was passed on the command line.
fn cmd_new(profile_path: &str, name: Option<String>) -> Result<()> {
    let path = Path::new(profile_path);

    if path.exists() {
        let overwrite = prompt_yes_no("A profile already exists. Overwrite it?", false)?;
        if !overwrite {
            println!("Keeping the existing profile.");
            return Ok(());
        }
    }

    let mut rng = rand::thread_rng();
    let profile = match name {
        Some(name) => PlayerProfile::random(name, None, &mut rng),
        None => {
            let name = prompt_player_name()?;
            let difficulty = prompt_difficulty()?;
            PlayerProfile::random(name, Some(difficulty), &mut rng)
        }
    };

    profile.save(path)?;
    display_profile(&profile);
    println!("Profile saved to {}.", profile_path);
    Ok(())
}

/// Show the player status card.
fn cmd_status(profile_path: &str) -> Result<()> {
    let path = Path::new(profile_path);
    if !path.exists() {
        eprintln!("Profile not found: {}. Run 'new' first.", profile_path);
        return Ok(());
    }

    let profile = PlayerProfile::load(path)?;
    display_profile(&profile);
    Ok(())
}

/// Load catalog + artifact and build the engine.
///
/// A missing catalog is fatal; a missing or corrupt artifact only drops the
/// engine to the true-score fallback path.
fn build_engine(cli: &Cli, candidates: usize) -> Result<RecommendationEngine> {
    let catalog_path = Path::new(&cli.catalog);
    if !catalog_path.exists() {
        return Err(CoachError::InvalidInput(format!(
            "exercise catalog not found: {}",
            cli.catalog
        )));
    }
    let catalog = ExerciseCatalog::from_csv(catalog_path)?;

    let artifact = match ModelArtifact::load(&cli.model) {
        Ok(artifact) => Some(artifact),
        Err(e) => {
            eprintln!(
                "Model artifact unavailable ({}); falling back to true-score selection.",
                e
            );
            None
        }
    };

    Ok(RecommendationEngine::new(
        catalog,
        artifact,
        EngineConfig {
            num_candidates: candidates,
        },
    ))
}

/// Print a recommended menu without performing it.
fn cmd_recommend(cli: &Cli, candidates: usize, seed: Option<u64>) -> Result<()> {
    let path = Path::new(&cli.profile);
    if !path.exists() {
        eprintln!("Profile not found: {}. Run 'new' first.", cli.profile);
        return Ok(());
    }
    let profile = PlayerProfile::load(path)?;
    let engine = build_engine(cli, candidates)?;

    let mut rng: StdRng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let recommendation = engine.recommend(&profile, &mut rng);
    display_recommendation(&recommendation, engine.catalog());
    Ok(())
}

/// Run an interactive training session from a recommended menu.
///
/// This is the game-loop side of the contract: the session deducts energy,
/// bumps training counters, and persists the profile afterward.
fn cmd_session(cli: &Cli, candidates: usize) -> Result<()> {
    let path = Path::new(&cli.profile);
    if !path.exists() {
        eprintln!("Profile not found: {}. Run 'new' first.", cli.profile);
        return Ok(());
    }
    let mut profile = PlayerProfile::load(path)?;
    let engine = build_engine(cli, candidates)?;

    let mut rng = StdRng::from_entropy();
    let recommendation = engine.recommend(&profile, &mut rng);
    display_recommendation(&recommendation, engine.catalog());

    if recommendation.candidate.is_empty() {
        return Ok(());
    }

    // Remaining menu as (name, part, cost), in display order.
    let mut menu: Vec<(String, BodyPart, f64)> = Vec::new();
    for (part, part_menu) in recommendation.candidate.parts() {
        for name in &part_menu.exercises {
            let cost = engine.catalog().require(name)?.energy_cost;
            menu.push((name.clone(), part, cost));
        }
    }

    loop {
        let items: Vec<String> = menu
            .iter()
            .map(|(name, part, cost)| {
                format!(
                    "{} [{} | cost: {:.0} | energy left: {:.0}]",
                    name,
                    part.label(),
                    cost,
                    profile.energy(*part)
                )
            })
            .collect();

        match prompt_session_choice(&items)? {
            SessionChoice::Exercise(i) => {
                let (name, part, cost) = menu[i].clone();
                if !profile.can_afford(part, cost) {
                    println!(
                        "Not enough {} energy ({:.0} left, {:.0} needed).",
                        part.label(),
                        profile.energy(part),
                        cost
                    );
                    continue;
                }

                let before = profile.energy(part);
                profile.train(part, cost)?;
                println!(
                    "Completed {}! {} energy: {:.0} -> {:.0}",
                    name,
                    part.label(),
                    before,
                    profile.energy(part)
                );

                menu.remove(i);
                if menu.is_empty() {
                    println!("Menu complete.");
                    break;
                }
            }
            SessionChoice::Finish => break,
        }
    }

    let save = prompt_yes_no("Save updated profile?", true)?;
    if save {
        profile.save(path)?;
        println!("Profile saved.");
    }
    Ok(())
}

/// Restore every energy pool to its maximum.
fn cmd_rest(profile_path: &str) -> Result<()> {
    let path = Path::new(profile_path);
    if !path.exists() {
        eprintln!("Profile not found: {}. Run 'new' first.", profile_path);
        return Ok(());
    }

    let mut profile = PlayerProfile::load(path)?;
    profile.rest();
    profile.save(path)?;

    println!("All energy pools restored to max.");
    display_profile(&profile);
    Ok(())
}
