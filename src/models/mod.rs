pub mod exercise;
pub mod menu;
pub mod profile;

pub use exercise::{BodyPart, Exercise};
pub use menu::{MenuCandidate, PartMenu};
pub use profile::PlayerProfile;
