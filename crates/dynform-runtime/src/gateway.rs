//! Remote form service client
//!
//! Two operations against a fixed base URL:
//! - `POST /create-user` with `{rollNumber, name}`
//! - `GET /get-form?rollNumber=...`

use std::time::Duration;

use async_trait::async_trait;
use dynform_types::{CreateUserResponse, FormResponse, User};
use reqwest::Client;
use serde::Deserialize;
use tracing::{debug, info, warn};

use crate::config::ApiConfig;
use crate::{Error, Result};

/// Substring the service uses when a roll number is already registered.
/// Registration is idempotent: such a reply counts as success.
pub const USER_EXISTS_MARKER: &str = "User already exists";

const CREATE_USER_FALLBACK: &str = "Failed to create user";
const GET_FORM_FALLBACK: &str = "Failed to fetch form";

#[async_trait]
pub trait FormGateway: Send + Sync {
    /// Register a user, or confirm an existing registration.
    ///
    /// Only transport failures are errors; a rejection by the service comes
    /// back as `success: false` with the server's message.
    async fn create_user(&self, user: &User) -> Result<CreateUserResponse>;

    /// Fetch the form issued to a roll number
    async fn get_form_structure(&self, roll_number: &str) -> Result<FormResponse>;
}

#[derive(Debug, Default, Deserialize)]
struct ServerMessage {
    #[serde(default)]
    message: Option<String>,
}

impl ServerMessage {
    fn parse(body: &str) -> Self {
        serde_json::from_str(body).unwrap_or_default()
    }
}

/// HTTP implementation backed by reqwest
pub struct HttpFormGateway {
    base_url: String,
    client: Client,
}

impl HttpFormGateway {
    pub fn new(base_url: &str) -> Result<Self> {
        Self::with_client(base_url, Client::builder().build()?)
    }

    pub fn from_config(api: &ApiConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(api.timeout_secs))
            .build()?;
        Self::with_client(&api.base_url, client)
    }

    fn with_client(base_url: &str, client: Client) -> Result<Self> {
        let base_url = base_url.trim_end_matches('/');
        if base_url.is_empty() {
            return Err(Error::Config("API base URL is empty".to_string()));
        }
        Ok(Self {
            base_url: base_url.to_string(),
            client,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[async_trait]
impl FormGateway for HttpFormGateway {
    async fn create_user(&self, user: &User) -> Result<CreateUserResponse> {
        let url = format!("{}/create-user", self.base_url);
        debug!("POST {}", url);

        let response = self.client.post(&url).json(user).send().await?;
        let status = response.status();
        let body = response.text().await?;
        let message = ServerMessage::parse(&body).message;

        if let Some(message) = message.as_deref()
            && message.contains(USER_EXISTS_MARKER)
        {
            info!(roll_number = %user.roll_number, "user already registered");
            return Ok(CreateUserResponse {
                success: true,
                message: message.to_string(),
            });
        }

        if !status.is_success() {
            warn!(status = status.as_u16(), "create-user rejected");
            return Ok(CreateUserResponse {
                success: false,
                message: message
                    .filter(|m| !m.is_empty())
                    .unwrap_or_else(|| CREATE_USER_FALLBACK.to_string()),
            });
        }

        info!(roll_number = %user.roll_number, "user created");
        Ok(CreateUserResponse {
            success: true,
            message: message.unwrap_or_default(),
        })
    }

    async fn get_form_structure(&self, roll_number: &str) -> Result<FormResponse> {
        let url = format!("{}/get-form", self.base_url);
        debug!("GET {}?rollNumber={}", url, roll_number);

        let response = self
            .client
            .get(&url)
            .query(&[("rollNumber", roll_number)])
            .send()
            .await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            let message = ServerMessage::parse(&body)
                .message
                .filter(|m| !m.is_empty())
                .unwrap_or_else(|| GET_FORM_FALLBACK.to_string());
            warn!(status = status.as_u16(), %message, "get-form failed");
            return Err(Error::Status {
                status: status.as_u16(),
                message,
            });
        }

        let form: FormResponse =
            serde_json::from_str(&body).map_err(dynform_types::Error::from)?;
        Ok(form)
    }
}
