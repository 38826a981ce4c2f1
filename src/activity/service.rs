use std::sync::Arc;
use tracing::{debug, info, instrument, warn};

use super::{
    models::ActivityModel,
    repository::{ActivityRepository, EnrollResult, WithdrawResult},
    seed::Roster,
    types::MessageResponse,
};
use crate::shared::AppError;

pub const ACTIVITY_NOT_FOUND: &str = "Activity not found";
pub const PARTICIPANT_NOT_FOUND: &str = "Participant not found";
pub const ALREADY_SIGNED_UP: &str = "Student is already signed up for this activity";

/// Service for handling activity roster business logic
pub struct ActivityService {
    repository: Arc<dyn ActivityRepository + Send + Sync>,
}

impl ActivityService {
    pub fn new(repository: Arc<dyn ActivityRepository + Send + Sync>) -> Self {
        Self { repository }
    }

    /// Lists every activity with its current roster
    #[instrument(skip(self))]
    pub async fn list_activities(&self) -> Result<Roster, AppError> {
        let activities = self.repository.list_activities().await?;
        debug!(activity_count = activities.len(), "Activities retrieved");
        Ok(activities)
    }

    #[instrument(skip(self))]
    pub async fn get_activity(&self, activity_name: &str) -> Result<ActivityModel, AppError> {
        self.repository
            .get_activity(activity_name)
            .await?
            .ok_or_else(|| AppError::NotFound(ACTIVITY_NOT_FOUND.to_string()))
    }

    /// Signs a student up for an activity
    #[instrument(skip(self))]
    pub async fn enroll(
        &self,
        activity_name: &str,
        email: &str,
    ) -> Result<MessageResponse, AppError> {
        match self.repository.enroll(activity_name, email).await? {
            EnrollResult::Success(activity) => {
                info!(
                    activity = %activity_name,
                    email = %email,
                    participant_count = activity.participant_count(),
                    max_participants = activity.max_participants,
                    "Student signed up"
                );
                Ok(MessageResponse::signed_up(email, activity_name))
            }
            EnrollResult::ActivityNotFound => {
                warn!(activity = %activity_name, "Signup for unknown activity");
                Err(AppError::NotFound(ACTIVITY_NOT_FOUND.to_string()))
            }
            EnrollResult::AlreadyRegistered => {
                warn!(activity = %activity_name, email = %email, "Duplicate signup");
                Err(AppError::AlreadyRegistered(ALREADY_SIGNED_UP.to_string()))
            }
        }
    }

    /// Removes a student from one activity, leaving their other signups intact
    #[instrument(skip(self))]
    pub async fn withdraw(
        &self,
        activity_name: &str,
        email: &str,
    ) -> Result<MessageResponse, AppError> {
        match self.repository.withdraw(activity_name, email).await? {
            WithdrawResult::Success(activity) => {
                info!(
                    activity = %activity_name,
                    email = %email,
                    participant_count = activity.participant_count(),
                    "Student unregistered"
                );
                Ok(MessageResponse::unregistered(email, activity_name))
            }
            WithdrawResult::ActivityNotFound => {
                warn!(activity = %activity_name, "Unregister from unknown activity");
                Err(AppError::NotFound(ACTIVITY_NOT_FOUND.to_string()))
            }
            WithdrawResult::ParticipantNotFound => {
                warn!(activity = %activity_name, email = %email, "Unregister of non-member");
                Err(AppError::NotFound(PARTICIPANT_NOT_FOUND.to_string()))
            }
        }
    }
}
