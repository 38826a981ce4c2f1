// Library crate for the Mergington activities service
// This file exposes the public API for the binary and integration tests

pub mod activity;
pub mod app;
pub mod config;
pub mod shared;

// Re-export commonly used types for easier access in tests
pub use activity::{
    repository::{ActivityRepository, InMemoryActivityRepository},
    ActivityModel, Roster,
};
pub use app::create_app;
pub use config::AppConfig;
pub use shared::{AppError, AppState};
