use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use serde_json::Value;
use tower::ServiceExt; // for `oneshot`

use super::setup::TestApp;

pub struct ApiResponse {
    pub status: StatusCode,
    pub body: Value,
}

impl ApiResponse {
    pub fn message(&self) -> &str {
        self.body["message"].as_str().unwrap_or_default()
    }

    pub fn detail(&self) -> &str {
        self.body["detail"].as_str().unwrap_or_default()
    }
}

/// Percent-encodes spaces so activity names can be used in a URI
fn encode(value: &str) -> String {
    value.replace(' ', "%20")
}

impl TestApp {
    pub async fn request(&self, method: &str, uri: &str) -> ApiResponse {
        let request = Request::builder()
            .method(method)
            .uri(uri)
            .body(Body::empty())
            .unwrap();

        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);

        ApiResponse { status, body }
    }

    pub async fn get_activities(&self) -> ApiResponse {
        self.request("GET", "/activities").await
    }

    pub async fn signup(&self, activity: &str, email: &str) -> ApiResponse {
        let uri = format!("/activities/{}/signup?email={}", encode(activity), email);
        self.request("POST", &uri).await
    }

    pub async fn unregister(&self, activity: &str, participant: &str) -> ApiResponse {
        let uri = format!(
            "/unregister?participant={}&activity={}",
            participant,
            encode(activity)
        );
        self.request("DELETE", &uri).await
    }

    /// Participants of one activity as seen through GET /activities
    pub async fn participants_of(&self, activity: &str) -> Vec<String> {
        let response = self.get_activities().await;
        serde_json::from_value(response.body[activity]["participants"].clone()).unwrap()
    }
}
