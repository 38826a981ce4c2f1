use axum::{
    extract::{Path, Query, State},
    Json,
};
use std::sync::Arc;
use tracing::{info, instrument};

use super::{
    models::ActivityModel,
    seed::Roster,
    service::ActivityService,
    types::{MessageResponse, SignupQuery, UnregisterQuery},
};
use crate::shared::{AppError, AppState};

/// HTTP handler for listing all activities
///
/// GET /activities
/// Returns a mapping of activity name to details and participants
#[instrument(name = "list_activities", skip(state))]
pub async fn list_activities(State(state): State<AppState>) -> Result<Json<Roster>, AppError> {
    let service = ActivityService::new(Arc::clone(&state.activity_repository));
    let activities = service.list_activities().await?;

    info!(activity_count = activities.len(), "Activities listed");

    Ok(Json(activities))
}

/// GET /activities/:activity_name
#[instrument(name = "get_activity", skip(state))]
pub async fn get_activity(
    State(state): State<AppState>,
    Path(activity_name): Path<String>,
) -> Result<Json<ActivityModel>, AppError> {
    let service = ActivityService::new(Arc::clone(&state.activity_repository));
    let activity = service.get_activity(&activity_name).await?;

    Ok(Json(activity))
}

/// HTTP handler for signing a student up
///
/// POST /activities/:activity_name/signup?email=...
#[instrument(name = "signup_for_activity", skip(state))]
pub async fn signup_for_activity(
    State(state): State<AppState>,
    Path(activity_name): Path<String>,
    Query(query): Query<SignupQuery>,
) -> Result<Json<MessageResponse>, AppError> {
    let service = ActivityService::new(Arc::clone(&state.activity_repository));
    let response = service.enroll(&activity_name, &query.email).await?;

    Ok(Json(response))
}

/// HTTP handler for removing a student from an activity
///
/// DELETE /unregister?participant=...&activity=...
#[instrument(name = "unregister_participant", skip(state))]
pub async fn unregister_participant(
    State(state): State<AppState>,
    Query(query): Query<UnregisterQuery>,
) -> Result<Json<MessageResponse>, AppError> {
    let service = ActivityService::new(Arc::clone(&state.activity_repository));
    let response = service
        .withdraw(&query.activity, &query.participant)
        .await?;

    Ok(Json(response))
}
