pub mod constants;
mod packer;

pub use packer::{generate_candidate, generate_part_menu, perfect_score};
