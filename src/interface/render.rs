use crate::catalog::ExerciseCatalog;
use crate::engine::Recommendation;
use crate::models::{BodyPart, PlayerProfile};

/// Print the player status card.
pub fn display_profile(profile: &PlayerProfile) {
    let sex = if profile.gender == 1 { "male" } else { "female" };

    println!();
    println!("=== {} ===", profile.name);
    println!(
        "{} | {} yrs | {:.1} cm | {:.1} kg | difficulty Lv.{}",
        sex, profile.age, profile.height, profile.weight, profile.difficulty
    );
    println!();
    println!("{:<10} {:>8} {:>8} {:>9}", "Part", "Energy", "Max", "Sessions");
    for part in BodyPart::ALL {
        println!(
            "{:<10} {:>8.0} {:>8.0} {:>9}",
            part.label(),
            profile.energy(part),
            profile.max_energy(part),
            profile.training_count(part)
        );
    }
    println!();
}

/// Print a recommended menu grouped by body part, with per-exercise costs.
///
/// The headline score is the menu's TRUE efficiency score; the model's
/// predicted score is never displayed.
pub fn display_recommendation(recommendation: &Recommendation, catalog: &ExerciseCatalog) {
    let candidate = &recommendation.candidate;
    if candidate.is_empty() {
        println!("No training recommended today — rest up and come back.");
        return;
    }

    println!();
    println!(
        "=== Recommended Menu (score: {:.1}) ===",
        recommendation.true_score()
    );
    if recommendation.predicted_score.is_none() {
        println!("(no model artifact; best generated candidate by true score)");
    }
    println!();

    let mut index = 1;
    for (part, menu) in candidate.parts() {
        if menu.exercises.is_empty() {
            continue;
        }
        let items: Vec<String> = menu
            .exercises
            .iter()
            .map(|name| {
                let cost = catalog
                    .get(name)
                    .map(|exercise| exercise.energy_cost)
                    .unwrap_or(0.0);
                let item = format!("({index}) {name} [cost: {cost:.0}]");
                index += 1;
                item
            })
            .collect();
        println!("[{}] {}", part.label(), items.join(", "));
    }
    println!();
}
