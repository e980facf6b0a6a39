use crate::{WorkoutId, http, requests, responses};
use reqwest::{Method, StatusCode};
use serde::Serialize;

type ReqwestResult = Result<reqwest::Response, reqwest::Error>;

/// Base origins of the three services the client talks to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    pub auth: String,
    pub workouts: String,
    pub bookings: String,
}

impl Endpoints {
    /// All three services served from one origin (dev server, tests).
    pub fn single_origin(origin: impl Into<String>) -> Self {
        let origin = origin.into();
        Self {
            auth: origin.clone(),
            workouts: origin.clone(),
            bookings: origin,
        }
    }

    pub fn register(&self) -> String {
        format!("{}/api/Auth/register", self.auth)
    }

    pub fn sign_in(&self) -> String {
        format!("{}/api/Auth/signin", self.auth)
    }

    pub fn forgot_password(&self) -> String {
        format!("{}/api/Auth/forgot-password", self.auth)
    }

    pub fn reset_password(&self) -> String {
        format!("{}/api/Auth/reset-password", self.auth)
    }

    pub fn workouts(&self) -> String {
        format!("{}/api/workout", self.workouts)
    }

    pub fn workout(&self, workout_id: &WorkoutId) -> String {
        format!("{}/api/workout/{}", self.workouts, segment(workout_id))
    }

    pub fn bookings(&self) -> String {
        format!("{}/api/Bookings", self.bookings)
    }

    pub fn booking(&self, user_email: &str, workout_id: &WorkoutId) -> String {
        format!(
            "{}/api/Bookings/{}/{}",
            self.bookings,
            segment(user_email),
            segment(workout_id)
        )
    }

    pub fn raw_bookings(&self, user_email: &str) -> String {
        format!(
            "{}/api/Bookings/GetRawBookings/{}",
            self.bookings,
            segment(user_email)
        )
    }
}

/// Percent-encode one path segment.
fn segment(value: &(impl std::fmt::Display + ?Sized)) -> String {
    urlencoding::encode(&value.to_string()).into_owned()
}

/// A client for the authentication, workout catalog and booking services.
pub struct ServiceClient {
    pub endpoints: Endpoints,
    pub inner_client: reqwest::Client,
}

/// Helper methods for http actions
impl ServiceClient {
    async fn post(&self, url: &str, body: &impl Serialize) -> ReqwestResult {
        self.inner_client.post(url).json(body).send().await
    }

    async fn get(&self, url: &str) -> ReqwestResult {
        self.inner_client.get(url).send().await
    }

    async fn delete(&self, url: &str) -> ReqwestResult {
        self.inner_client.request(Method::DELETE, url).send().await
    }
}

/// Methods on the external services
impl ServiceClient {
    pub async fn register(
        &self,
        details: &requests::Register,
    ) -> Result<(), ClientError> {
        let response = self.post(&self.endpoints.register(), details).await?;
        ok_empty(response).await
    }

    pub async fn sign_in(
        &self,
        credentials: &requests::SignIn,
    ) -> Result<responses::SignedIn, ClientError> {
        let response =
            self.post(&self.endpoints.sign_in(), credentials).await?;
        ok_body(response).await
    }

    /// Ask the auth service to email a password reset link.
    pub async fn forgot_password(
        &self,
        details: &requests::ForgotPassword,
    ) -> Result<(), ClientError> {
        let response =
            self.post(&self.endpoints.forgot_password(), details).await?;
        ok_empty(response).await
    }

    /// Set a new password using the code from the reset link.
    pub async fn reset_password(
        &self,
        details: &requests::ResetPassword,
    ) -> Result<(), ClientError> {
        let response =
            self.post(&self.endpoints.reset_password(), details).await?;
        ok_empty(response).await
    }

    pub async fn list_workouts(
        &self,
    ) -> Result<Vec<responses::Workout>, ClientError> {
        let response = self.get(&self.endpoints.workouts()).await?;
        ok_body(response).await
    }

    pub async fn get_workout(
        &self,
        workout_id: &WorkoutId,
    ) -> Result<responses::Workout, ClientError> {
        let response = self.get(&self.endpoints.workout(workout_id)).await?;
        ok_body(response).await
    }

    pub async fn create_booking(
        &self,
        details: &requests::CreateBooking,
    ) -> Result<responses::RawBooking, ClientError> {
        let response = self.post(&self.endpoints.bookings(), details).await?;
        ok_body(response).await
    }

    pub async fn delete_booking(
        &self,
        user_email: &str,
        workout_id: &WorkoutId,
    ) -> Result<(), ClientError> {
        let response = self
            .delete(&self.endpoints.booking(user_email, workout_id))
            .await?;
        ok_empty(response).await
    }

    /// Bookings for one user, referencing workouts by identifier only.
    pub async fn raw_bookings(
        &self,
        user_email: &str,
    ) -> Result<Vec<responses::RawBooking>, ClientError> {
        let response =
            self.get(&self.endpoints.raw_bookings(user_email)).await?;
        Ok(http::ok_json(response).await?.unwrap_or_default())
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// A non-success response, with a trimmed excerpt of its body.
    #[error("{}", describe_status(.0, .1))]
    APIError(StatusCode, String),
    #[error("Network error. Please check your connection.")]
    Network(#[from] reqwest::Error),
    #[error("Unexpected response from server: {0}")]
    Decode(#[from] serde_json::Error),
}

impl ClientError {
    pub fn api(status: StatusCode, body: &str) -> Self {
        Self::APIError(status, http::body_excerpt(body))
    }

    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Self::APIError(status, _) => Some(*status),
            Self::Network(e) => e.status(),
            Self::Decode(_) => None,
        }
    }
}

fn describe_status(status: &StatusCode, excerpt: &str) -> String {
    // StatusCode's Display is "404 Not Found"
    if excerpt.is_empty() {
        status.to_string()
    } else {
        format!("{status} – {excerpt}")
    }
}

/// Deserialize a successful request into the desired type, or return an
/// appropriate error.
pub async fn ok_body<T: serde::de::DeserializeOwned>(
    response: reqwest::Response,
) -> Result<T, ClientError> {
    let status = response.status();
    if !status.is_success() {
        return Err(ClientError::api(status, &response.text().await?));
    }
    let bytes = response.bytes().await?;
    Ok(serde_json::from_slice(&bytes)?)
}

/// Check that a response is OK, discarding any body, or return a
/// ClientError if not.
pub async fn ok_empty(response: reqwest::Response) -> Result<(), ClientError> {
    let status = response.status();
    if !status.is_success() {
        return Err(ClientError::api(status, &response.text().await?));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_errors_describe_status_and_body() {
        let conflict = ClientError::api(
            StatusCode::CONFLICT,
            "  Email already registered\n",
        );
        assert_eq!(
            conflict.to_string(),
            "409 Conflict – Email already registered"
        );
        assert_eq!(conflict.status(), Some(StatusCode::CONFLICT));

        let bare = ClientError::api(StatusCode::INTERNAL_SERVER_ERROR, "   ");
        assert_eq!(bare.to_string(), "500 Internal Server Error");
    }

    #[test]
    fn endpoint_paths() {
        let endpoints = Endpoints {
            auth: "https://auth.test".into(),
            workouts: "https://workouts.test".into(),
            bookings: "https://bookings.test".into(),
        };
        let id = WorkoutId::from("w-1");

        assert_eq!(endpoints.sign_in(), "https://auth.test/api/Auth/signin");
        assert_eq!(
            endpoints.workout(&id),
            "https://workouts.test/api/workout/w-1"
        );
        assert_eq!(
            endpoints.booking("user@example.com", &id),
            "https://bookings.test/api/Bookings/user%40example.com/w-1"
        );
        assert_eq!(
            endpoints.raw_bookings("user@example.com"),
            "https://bookings.test/api/Bookings/GetRawBookings/user%40example.com"
        );
    }

    #[test]
    fn emails_stay_within_one_path_segment() {
        let endpoints = Endpoints::single_origin("http://localhost");
        let id = WorkoutId::from("w-1");

        assert_eq!(
            endpoints.raw_bookings("a/b#c?d%e@example.com"),
            "http://localhost/api/Bookings/GetRawBookings/a%2Fb%23c%3Fd%25e%40example.com"
        );
        assert_eq!(
            endpoints.booking("x+y@example.com", &id),
            "http://localhost/api/Bookings/x%2By%40example.com/w-1"
        );
    }
}
