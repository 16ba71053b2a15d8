// src/api/handlers/mod.rs
mod health;
mod catalog;
mod solve;

pub use health::health_check;
pub use catalog::{get_models, get_modes};
pub use solve::{json_error_handler, solve_challenge};
