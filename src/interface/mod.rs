pub mod prompts;
pub mod render;

pub use prompts::{
    SessionChoice, prompt_difficulty, prompt_player_name, prompt_session_choice, prompt_yes_no,
};
pub use render::{display_profile, display_recommendation};
