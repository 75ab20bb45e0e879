mod error;
mod models;

pub use crate::error::AuthApiError;
pub use crate::models::*;
use serde::Serialize;
use serde::de::DeserializeOwned;

const BASE_URL: &str = "http://192.168.56.1:3000";

/// Client for the auth service. Issues exactly one request per call;
/// callers decide whether to re-submit after a failure.
pub struct Client {
    http: reqwest::Client,
    base_url: String,
}

impl Client {
    pub fn new() -> Self {
        Self::with_base_url(BASE_URL)
    }

    /// Point the client at a non-default server (used by tests).
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    /// `POST /register`. Success carries the server's confirmation message.
    pub async fn register(
        &self,
        email: &str,
        username: &str,
        password: &str,
    ) -> Result<RegisterResponse, AuthApiError> {
        let body = RegisterRequest {
            email: email.to_string(),
            username: username.to_string(),
            password: password.to_string(),
        };
        self.post("/register", &body).await
    }

    /// `POST /login`. Success carries the server-asserted identity.
    pub async fn login(
        &self,
        username: &str,
        password: &str,
    ) -> Result<LoginResponse, AuthApiError> {
        let body = LoginRequest {
            username: username.to_string(),
            password: password.to_string(),
        };
        self.post("/login", &body).await
    }

    async fn post<B, T>(&self, endpoint: &str, body: &B) -> Result<T, AuthApiError>
    where
        B: Serialize,
        T: DeserializeOwned,
    {
        let url = format!("{}{}", self.base_url, endpoint);
        let response = self.http.post(&url).json(body).send().await?;

        let status = response.status();
        if status.is_success() {
            // A malformed 2xx body surfaces as a transport error.
            Ok(response.json::<T>().await?)
        } else {
            let body = response.text().await.unwrap_or_default();
            Err(AuthApiError::rejected(status, &body))
        }
    }
}

impl Default for Client {
    fn default() -> Self {
        Self::new()
    }
}
