/// Maximum random draws per body part in one packing pass.
pub const MAX_ATTEMPTS: usize = 50;

/// Probability of ending the packing loop after any attempt.
pub const EARLY_STOP_PROBABILITY: f64 = 0.5;

/// Points awarded to a body part whose menu matches the theoretical best.
pub const PART_SCORE_SCALE: f64 = 20.0;

/// Default number of candidate menus scored per recommendation.
pub const DEFAULT_NUM_CANDIDATES: usize = 1000;
