use serde::{Deserialize, Serialize};

/// Query string for POST /activities/:activity_name/signup
#[derive(Debug, Deserialize)]
pub struct SignupQuery {
    pub email: String,
}

/// Query string for DELETE /unregister
#[derive(Debug, Deserialize)]
pub struct UnregisterQuery {
    pub participant: String,
    pub activity: String,
}

/// Confirmation body for successful roster changes
#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn signed_up(email: &str, activity_name: &str) -> Self {
        Self {
            message: format!("Signed up {} for {}", email, activity_name),
        }
    }

    pub fn unregistered(participant: &str, activity_name: &str) -> Self {
        Self {
            message: format!("Unregistered {} from {}", participant, activity_name),
        }
    }
}
