//! HTTP client for the activities backend, over the browser fetch API.

use activity_signup_core::api::{self, ApiError, ErrorBody, SignupConfirmation};
use activity_signup_core::ActivityCatalog;
use gloo_net::http::{Request, Response};

/// Thin client over the three backend endpoints.
///
/// `base_url` is empty for same-origin deployments, otherwise a scheme and
/// authority such as `http://localhost:8000`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActivitiesApi {
    base_url: String,
}

impl ActivitiesApi {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Fetch the full activity catalog.
    pub async fn fetch_catalog(&self) -> Result<ActivityCatalog, ApiError> {
        let response = Request::get(&self.endpoint(api::CATALOG_PATH))
            .send()
            .await
            .map_err(ApiError::network)?;

        if !response.ok() {
            return Err(rejection(response).await);
        }

        response
            .json()
            .await
            .map_err(|err| ApiError::Decode(err.to_string()))
    }

    /// Register `email` for `activity`; returns the server's confirmation
    /// message.
    pub async fn sign_up(&self, activity: &str, email: &str) -> Result<String, ApiError> {
        let response = Request::post(&self.endpoint(&api::signup_path(activity, email)))
            .send()
            .await
            .map_err(ApiError::network)?;

        if !response.ok() {
            return Err(rejection(response).await);
        }

        let confirmation: SignupConfirmation = response
            .json()
            .await
            .map_err(|err| ApiError::Decode(err.to_string()))?;
        Ok(confirmation.message)
    }

    /// Remove `email` from `activity`. The success body is ignored.
    pub async fn unregister(&self, activity: &str, email: &str) -> Result<(), ApiError> {
        let response = Request::post(&self.endpoint(&api::unregister_path(activity, email)))
            .send()
            .await
            .map_err(ApiError::network)?;

        if !response.ok() {
            return Err(rejection(response).await);
        }

        Ok(())
    }
}

/// Turn a non-success response into an [`ApiError`], salvaging the JSON
/// `detail` field when the body carries one.
async fn rejection(response: Response) -> ApiError {
    let status = response.status();
    let detail = response
        .json::<ErrorBody>()
        .await
        .ok()
        .and_then(|body| body.detail);
    ApiError::Rejected { status, detail }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_joins_base_url_and_path() {
        let client = ActivitiesApi::new("http://localhost:8000");
        assert_eq!(
            client.endpoint(api::CATALOG_PATH),
            "http://localhost:8000/activities"
        );
    }

    #[test]
    fn test_empty_base_url_yields_same_origin_paths() {
        let client = ActivitiesApi::new("");
        assert_eq!(
            client.endpoint(&api::signup_path("Chess Club", "a@b.com")),
            "/activities/Chess%20Club/signup?email=a%40b.com"
        );
    }
}
