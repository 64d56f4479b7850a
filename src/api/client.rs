use std::time::Duration;

use reqwest::Client;
use serde::Deserialize;

use super::error::ApiError;

/// Sign-in state reported by the planner's auth endpoint.
///
/// Signed-out responses carry `loginUrl`; signed-in responses carry the
/// session email and `logoutUrl`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthStatus {
    #[serde(default)]
    pub logged_in: bool,
    pub username: Option<String>,
    pub email: Option<String>,
    pub login_url: Option<String>,
    pub logout_url: Option<String>,
}

/// Client for the trip-planner service: auth gating and trip submission.
pub struct PlannerClient {
    http: Client,
    base_url: String,
}

impl PlannerClient {
    /// Creates a client for the given planner base URL.
    pub fn new(base_url: impl Into<String>) -> Result<Self, ApiError> {
        let http = Client::builder().timeout(Duration::from_secs(30)).build()?;
        Ok(Self {
            http,
            base_url: base_url.into(),
        })
    }

    /// Fetches the current sign-in state.
    pub async fn auth_status(&self) -> Result<AuthStatus, ApiError> {
        let url = format!("{}/auth", self.base_url);
        let response = self.http.get(&url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status(status.as_u16()));
        }
        Ok(response.json().await?)
    }

    /// Submits the trip as a form POST.
    ///
    /// `fields` is posted in the given order, so the server receives the POI
    /// entries exactly as the user last arranged them.
    pub async fn submit_trip(&self, fields: &[(String, String)]) -> Result<(), ApiError> {
        let url = format!("{}/calculate-trip", self.base_url);
        let response = self.http.post(&url).form(fields).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status(status.as_u16()));
        }
        Ok(())
    }
}
