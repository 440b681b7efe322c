use clap::{Parser, Subcommand};

/// IronCoach — a workout planning CLI backed by a learned menu-scoring model.
#[derive(Parser, Debug)]
#[command(name = "iron_coach")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Path to the player profile JSON file.
    #[arg(short, long, default_value = "player_profile.json")]
    pub profile: String,

    /// Path to the exercise catalog CSV.
    #[arg(short, long, default_value = "exercise_catalog.csv")]
    pub catalog: String,

    /// Path to the trained model artifact JSON.
    #[arg(short, long, default_value = "model_artifact.json")]
    pub model: String,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Create a new player character and save it to the profile file.
    New {
        /// Skip prompts and roll a random character with this name.
        #[arg(long)]
        name: Option<String>,
    },

    /// Show the player status card.
    Status,

    /// Recommend a training menu without performing it.
    Recommend {
        /// Number of candidate menus scored per recommendation.
        #[arg(long, default_value = "1000")]
        candidates: usize,

        /// Seed for reproducible candidate generation.
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Run an interactive training session from a recommended menu.
    Session {
        /// Number of candidate menus scored per recommendation.
        #[arg(long, default_value = "1000")]
        candidates: usize,
    },

    /// Rest: restore every energy pool to its maximum.
    Rest,
}

impl Default for Command {
    fn default() -> Self {
        Command::Recommend {
            candidates: 1000,
            seed: None,
        }
    }
}
