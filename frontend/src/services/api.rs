use std::rc::Rc;

use gloo::net::http::{Request, Response};
use shared::{ClientConfig, GoalListing, GoalsQuery};

use crate::services::logging::Logger;

const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

/// Failure of a request to the goal server
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ApiError {
    #[error("Network error: {0}")]
    Network(String),
    #[error("Server error {status}: {body}")]
    Server { status: u16, body: String },
}

impl ApiError {
    /// Text shown to the user. Server failures carry their raw response body.
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Server { body, .. } if !body.trim().is_empty() => body.clone(),
            ApiError::Server { status, .. } => format!("Request failed with status {}", status),
            ApiError::Network(e) => format!("Could not reach the server: {}", e),
        }
    }
}

/// API client for communicating with the goal server
#[derive(Clone, PartialEq)]
pub struct ApiClient {
    config: Rc<ClientConfig>,
}

impl ApiClient {
    pub fn with_config(config: ClientConfig) -> Self {
        Self { config: Rc::new(config) }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Fetch the server-rendered goal table for a filter
    pub async fn fetch_goals(&self, query: &GoalsQuery) -> Result<GoalListing, ApiError> {
        let url = self.config.goals_listing_url(query);

        let response = Request::get(&url)
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        let status = response.status();
        let body = read_success_body(response).await?;
        Ok(GoalListing::from_response(status, body))
    }

    /// Send a URL-encoded form body the way a browser form with `method`/`action` would
    pub async fn send_form(&self, method: &str, action: &str, body: String) -> Result<String, ApiError> {
        let sent = if method.eq_ignore_ascii_case("get") {
            Request::get(&format!("{}?{}", action, body)).send().await
        } else {
            Request::post(action)
                .header("Content-Type", FORM_CONTENT_TYPE)
                .body(body)
                .map_err(|e| ApiError::Network(format!("Failed to build request: {}", e)))?
                .send()
                .await
        };
        let response = sent.map_err(|e| ApiError::Network(e.to_string()))?;

        read_success_body(response).await
    }

    /// Tell the server to end the session
    pub async fn logout(&self) -> Result<(), ApiError> {
        let url = self.config.endpoint(&self.config.logout_path);

        let response = Request::post(&url)
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        read_success_body(response).await.map(|_| ())
    }
}

async fn read_success_body(response: Response) -> Result<String, ApiError> {
    let status = response.status();
    let ok = response.ok();
    let body = match response.text().await {
        Ok(body) => body,
        Err(e) => {
            Logger::warn_with_component(
                "api",
                &format!("could not read body of {} response: {}", status, e),
            );
            String::new()
        }
    };

    if ok {
        Ok(body)
    } else {
        Err(ApiError::Server { status, body })
    }
}
