// src/api/mod.rs
pub mod routes;
pub mod handlers;
pub mod state;

pub use routes::configure_routes;
pub use state::AppState;

use actix_cors::Cors;

/// Any origin, any method, any header.
pub fn cors() -> Cors {
    Cors::permissive()
}
