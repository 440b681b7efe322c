use rand::Rng;

use crate::catalog::ExerciseCatalog;
use crate::generator::constants::{EARLY_STOP_PROBABILITY, MAX_ATTEMPTS, PART_SCORE_SCALE};
use crate::models::{BodyPart, Exercise, MenuCandidate, PartMenu, PlayerProfile};

/// Theoretical best efficiency sum for a body-part subset.
///
/// Zero-cost exercises contribute nothing. An empty or all-zero subset maps
/// to 1.0 so callers can divide by it unconditionally.
pub fn perfect_score(exercises: &[Exercise]) -> f64 {
    let sum: f64 = exercises.iter().map(Exercise::efficiency).sum();
    if sum == 0.0 { 1.0 } else { sum }
}

/// Pack one body part's menu with the randomized greedy loop.
///
/// Up to 50 draws, uniform with replacement over the full subset. A draw is
/// accepted when it is not already chosen, fits the remaining budget, and sits
/// within the difficulty cap; acceptance deducts its cost from the local
/// budget. A fair coin after every attempt may end the pass early regardless
/// of remaining budget. The trained models expect menus drawn from exactly
/// this distribution; changing the sampling or the coin changes what they
/// learned on.
pub fn generate_part_menu(
    exercises: &[Exercise],
    energy_budget: f64,
    difficulty_cap: u8,
    rng: &mut impl Rng,
) -> PartMenu {
    if exercises.is_empty() {
        return PartMenu::default();
    }

    let perfect = perfect_score(exercises);
    let mut budget = energy_budget;
    let mut chosen: Vec<String> = Vec::new();
    let mut actual = 0.0;
    let mut attempts = 0;

    while budget > 0.0 && attempts < MAX_ATTEMPTS {
        attempts += 1;
        let pick = &exercises[rng.gen_range(0..exercises.len())];

        if !chosen.iter().any(|name| name == &pick.name)
            && budget - pick.energy_cost >= 0.0
            && pick.difficulty <= difficulty_cap
        {
            budget -= pick.energy_cost;
            actual += pick.efficiency();
            chosen.push(pick.name.clone());
        }

        if rng.gen_bool(EARLY_STOP_PROBABILITY) {
            break;
        }
    }

    PartMenu {
        exercises: chosen,
        score: actual / perfect * PART_SCORE_SCALE,
    }
}

/// Generate one full-body candidate from the player's current energy pools.
pub fn generate_candidate(
    catalog: &ExerciseCatalog,
    profile: &PlayerProfile,
    rng: &mut impl Rng,
) -> MenuCandidate {
    let parts = BodyPart::ALL.map(|part| {
        generate_part_menu(
            catalog.part(part),
            profile.energy(part),
            profile.difficulty,
            rng,
        )
    });
    MenuCandidate::new(parts)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn exercise(name: &str, cost: f64, yield_: f64, difficulty: u8) -> Exercise {
        Exercise {
            name: name.to_string(),
            body_part: BodyPart::Chest,
            energy_cost: cost,
            muscle_yield: yield_,
            difficulty,
        }
    }

    fn sample_subset() -> Vec<Exercise> {
        vec![
            exercise("Bench Press", 80.0, 40.0, 2),
            exercise("Push-Up", 30.0, 12.0, 1),
            exercise("Incline Press", 70.0, 32.0, 3),
            exercise("Cable Fly", 50.0, 22.0, 2),
        ]
    }

    #[test]
    fn test_perfect_score_guards() {
        assert_eq!(perfect_score(&[]), 1.0);
        assert_eq!(perfect_score(&[exercise("Free", 0.0, 10.0, 1)]), 1.0);

        let expected = 40.0 / 80.0 + 12.0 / 30.0 + 32.0 / 70.0 + 22.0 / 50.0;
        assert!((perfect_score(&sample_subset()) - expected).abs() < 1e-9);
    }

    #[test]
    fn test_budget_and_dedup_respected() {
        let subset = sample_subset();
        for seed in 0..200 {
            let mut rng = StdRng::seed_from_u64(seed);
            let menu = generate_part_menu(&subset, 150.0, 5, &mut rng);

            let total_cost: f64 = menu
                .exercises
                .iter()
                .map(|name| {
                    subset
                        .iter()
                        .find(|e| &e.name == name)
                        .unwrap()
                        .energy_cost
                })
                .sum();
            assert!(total_cost <= 150.0, "cost {total_cost} over budget");

            let mut unique = menu.exercises.clone();
            unique.sort();
            unique.dedup();
            assert_eq!(unique.len(), menu.exercises.len(), "duplicate selection");
        }
    }

    #[test]
    fn test_difficulty_cap_respected() {
        let subset = sample_subset();
        for seed in 0..200 {
            let mut rng = StdRng::seed_from_u64(seed);
            let menu = generate_part_menu(&subset, 500.0, 2, &mut rng);
            for name in &menu.exercises {
                let picked = subset.iter().find(|e| &e.name == name).unwrap();
                assert!(picked.difficulty <= 2, "{name} over the cap");
            }
        }
    }

    #[test]
    fn test_zero_budget_yields_empty_menu() {
        let subset = sample_subset();
        for seed in 0..50 {
            let mut rng = StdRng::seed_from_u64(seed);
            let menu = generate_part_menu(&subset, 0.0, 5, &mut rng);
            assert!(menu.exercises.is_empty());
            assert_eq!(menu.score, 0.0);
        }
    }

    #[test]
    fn test_empty_subset_yields_empty_menu() {
        let mut rng = StdRng::seed_from_u64(1);
        let menu = generate_part_menu(&[], 300.0, 5, &mut rng);
        assert!(menu.exercises.is_empty());
        assert_eq!(menu.score, 0.0);
    }

    #[test]
    fn test_part_score_bounds() {
        let subset = sample_subset();
        for seed in 0..200 {
            let mut rng = StdRng::seed_from_u64(seed);
            let menu = generate_part_menu(&subset, 400.0, 5, &mut rng);
            assert!(menu.score >= 0.0);
            assert!(menu.score <= PART_SCORE_SCALE + 1e-9);
        }
    }

    #[test]
    fn test_same_seed_same_menu() {
        let subset = sample_subset();
        let mut a = StdRng::seed_from_u64(99);
        let mut b = StdRng::seed_from_u64(99);
        let menu_a = generate_part_menu(&subset, 200.0, 5, &mut a);
        let menu_b = generate_part_menu(&subset, 200.0, 5, &mut b);
        assert_eq!(menu_a.exercises, menu_b.exercises);
        assert_eq!(menu_a.score, menu_b.score);
    }
}
