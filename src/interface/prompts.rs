use dialoguer::{Confirm, Input, Select};

use crate::error::{CoachError, Result};

/// Outcome of the session menu prompt.
pub enum SessionChoice {
    /// Perform the exercise at this menu index.
    Exercise(usize),
    /// End the session.
    Finish,
}

/// Prompt for the next exercise to perform.
pub fn prompt_session_choice(items: &[String]) -> Result<SessionChoice> {
    let mut options: Vec<String> = items.to_vec();
    options.push("Finish session".to_string());

    let selection = Select::new()
        .with_prompt("Next exercise")
        .items(&options)
        .default(0)
        .interact()?;

    if selection < items.len() {
        Ok(SessionChoice::Exercise(selection))
    } else {
        Ok(SessionChoice::Finish)
    }
}

/// Prompt for a new character's name.
pub fn prompt_player_name() -> Result<String> {
    let input: String = Input::new()
        .with_prompt("Character name")
        .default("Player".to_string())
        .interact_text()?;

    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(CoachError::InvalidInput("name cannot be empty".to_string()));
    }
    Ok(trimmed.to_string())
}

/// Prompt for the preferred difficulty level (1-5).
pub fn prompt_difficulty() -> Result<u8> {
    let options = [
        "1 (beginner)",
        "2 (casual)",
        "3 (regular)",
        "4 (hard)",
        "5 (insane)",
    ];

    let selection = Select::new()
        .with_prompt("Difficulty level")
        .items(&options)
        .default(2)
        .interact()?;

    Ok(selection as u8 + 1)
}

/// Prompt for yes/no confirmation.
pub fn prompt_yes_no(prompt: &str, default: bool) -> Result<bool> {
    Ok(Confirm::new()
        .with_prompt(prompt)
        .default(default)
        .interact()?)
}
