use std::sync::Arc;

use mergington_activities::{
    create_app, ActivityModel, AppConfig, AppState, InMemoryActivityRepository, Roster,
};

// ============================================================================
// Test Setup Infrastructure
// ============================================================================

pub struct TestApp {
    pub router: axum::Router,
    #[allow(dead_code)]
    pub repository: Arc<InMemoryActivityRepository>,
}

pub struct TestAppBuilder {
    roster: Option<Roster>,
}

impl TestAppBuilder {
    pub fn new() -> Self {
        Self { roster: None }
    }

    /// Replaces the seed roster with a single activity
    #[allow(dead_code)]
    pub fn with_only_activity(mut self, name: &str, max_participants: u32) -> Self {
        let mut roster = Roster::new();
        roster.insert(
            name.to_string(),
            ActivityModel::new("Test activity", "Saturdays", max_participants, &[]),
        );
        self.roster = Some(roster);
        self
    }

    pub fn build(self) -> TestApp {
        let repository = Arc::new(match self.roster {
            Some(roster) => InMemoryActivityRepository::with_roster(roster),
            None => InMemoryActivityRepository::new(),
        });

        let router = create_app(AppState::new(repository.clone()), &AppConfig::default());

        TestApp { router, repository }
    }
}
