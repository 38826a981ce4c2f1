use async_trait::async_trait;
use std::sync::{Mutex, MutexGuard};
use tracing::{debug, error, info, instrument};

use super::models::ActivityModel;
use super::seed::{seed_roster, Roster};
use crate::shared::AppError;

/// Result of attempting to sign a participant up for an activity
#[derive(Debug, Clone, PartialEq)]
pub enum EnrollResult {
    /// Participant was appended, returns updated activity data
    Success(ActivityModel),
    /// Activity does not exist
    ActivityNotFound,
    /// Email is already on the activity's roster
    AlreadyRegistered,
}

/// Result of attempting to remove a participant from an activity
#[derive(Debug, Clone, PartialEq)]
pub enum WithdrawResult {
    /// Participant was removed, returns updated activity data
    Success(ActivityModel),
    /// Activity does not exist
    ActivityNotFound,
    /// Email is not on the activity's roster
    ParticipantNotFound,
}

/// Trait for activity roster operations
#[async_trait]
pub trait ActivityRepository {
    async fn list_activities(&self) -> Result<Roster, AppError>;
    async fn get_activity(&self, name: &str) -> Result<Option<ActivityModel>, AppError>;

    /// Atomically checks the activity exists and the email is new, then appends it
    async fn enroll(&self, activity_name: &str, email: &str) -> Result<EnrollResult, AppError>;

    /// Atomically checks the activity and membership, then removes the email
    async fn withdraw(&self, activity_name: &str, email: &str)
        -> Result<WithdrawResult, AppError>;

    /// Restores the seed roster
    async fn reset(&self) -> Result<(), AppError>;
}

/// In-memory roster guarded by a single lock
pub struct InMemoryActivityRepository {
    activities: Mutex<Roster>,
}

impl Default for InMemoryActivityRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryActivityRepository {
    /// Creates a repository holding the seed roster
    pub fn new() -> Self {
        Self::with_roster(seed_roster())
    }

    pub fn with_roster(roster: Roster) -> Self {
        Self {
            activities: Mutex::new(roster),
        }
    }

    fn lock(&self) -> Result<MutexGuard<'_, Roster>, AppError> {
        self.activities.lock().map_err(|_| {
            error!("Activity roster lock poisoned");
            AppError::Internal
        })
    }
}

#[async_trait]
impl ActivityRepository for InMemoryActivityRepository {
    #[instrument(skip(self))]
    async fn list_activities(&self) -> Result<Roster, AppError> {
        debug!("Listing all activities in memory");

        let activities = self.lock()?;
        Ok(activities.clone())
    }

    #[instrument(skip(self))]
    async fn get_activity(&self, name: &str) -> Result<Option<ActivityModel>, AppError> {
        debug!(activity = %name, "Fetching activity from memory");

        let activities = self.lock()?;
        Ok(activities.get(name).cloned())
    }

    #[instrument(skip(self))]
    async fn enroll(&self, activity_name: &str, email: &str) -> Result<EnrollResult, AppError> {
        debug!(activity = %activity_name, email = %email, "Attempting to enroll atomically");

        let mut activities = self.lock()?;

        let activity = match activities.get_mut(activity_name) {
            Some(activity) => activity,
            None => {
                debug!(activity = %activity_name, "Activity not found");
                return Ok(EnrollResult::ActivityNotFound);
            }
        };

        if activity.has_participant(email) {
            debug!(activity = %activity_name, email = %email, "Participant already enrolled");
            return Ok(EnrollResult::AlreadyRegistered);
        }

        activity.add_participant(email.to_string());

        info!(
            activity = %activity_name,
            email = %email,
            participant_count = activity.participant_count(),
            "Participant enrolled (atomic)"
        );

        Ok(EnrollResult::Success(activity.clone()))
    }

    #[instrument(skip(self))]
    async fn withdraw(
        &self,
        activity_name: &str,
        email: &str,
    ) -> Result<WithdrawResult, AppError> {
        debug!(activity = %activity_name, email = %email, "Attempting to withdraw atomically");

        let mut activities = self.lock()?;

        let activity = match activities.get_mut(activity_name) {
            Some(activity) => activity,
            None => {
                debug!(activity = %activity_name, "Activity not found");
                return Ok(WithdrawResult::ActivityNotFound);
            }
        };

        if !activity.remove_participant(email) {
            debug!(activity = %activity_name, email = %email, "Participant not enrolled");
            return Ok(WithdrawResult::ParticipantNotFound);
        }

        info!(
            activity = %activity_name,
            email = %email,
            participant_count = activity.participant_count(),
            "Participant withdrawn (atomic)"
        );

        Ok(WithdrawResult::Success(activity.clone()))
    }

    #[instrument(skip(self))]
    async fn reset(&self) -> Result<(), AppError> {
        let mut activities = self.lock()?;
        *activities = seed_roster();

        info!("Activity roster reset to seed data");
        Ok(())
    }
}
