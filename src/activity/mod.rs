// Public API - what other modules can use
pub use handlers::{get_activity, list_activities, signup_for_activity, unregister_participant};
pub use models::ActivityModel;
pub use seed::{seed_roster, Roster};

// Internal modules
mod handlers;
pub mod models;
pub mod repository;
pub mod seed;
pub mod service;
mod types;

pub use types::MessageResponse;
