// src/lib.rs
pub mod config;
pub mod errors;
pub mod providers;
pub mod prompts;
pub mod solver;
pub mod models;
pub mod banner;
pub mod api;
