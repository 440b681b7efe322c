pub mod catalog;
pub mod cli;
pub mod dataset;
pub mod engine;
pub mod error;
pub mod features;
pub mod generator;
pub mod interface;
pub mod model;
pub mod models;

pub use error::{CoachError, Result};
pub use models::{BodyPart, Exercise, MenuCandidate, PlayerProfile};
