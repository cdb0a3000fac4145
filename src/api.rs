use serde::Deserialize;
use serde_json::json;
use std::{sync::OnceLock, time::Duration};
use ureq::Agent;

use crate::error::Error;

/// Default server base URL (the mock API's development host and port).
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:5000";

static USER_AGENT: OnceLock<String> = OnceLock::new();

pub fn user_agent() -> &'static str {
    USER_AGENT
        .get_or_init(|| format!("{}/{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION")))
        .as_str()
}

/// Login pair served by the environment endpoint.
///
/// The endpoint carries extra fields (the mock server also exposes its JWT
/// secret); anything beyond the login pair is ignored.
#[derive(Deserialize, Debug, Clone)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

#[derive(Deserialize, Debug)]
pub struct TokenResponse {
    pub token: String,
}

/// One roster entry. An `employeeId` is also present on the wire but the
/// roster page only renders these three fields.
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Employee {
    pub name: String,
    pub organization: String,
    pub role: String,
}

#[derive(Deserialize, Debug)]
pub struct StatusResponse {
    pub status: String,
}

/// Client for the employees API.
pub struct Backend {
    agent: Agent,
    base_url: String,
}

impl Backend {
    pub fn new(base_url: impl Into<String>) -> Backend {
        let config = Agent::config_builder()
            .timeout_global(Some(Duration::from_secs(10)))
            .user_agent(user_agent())
            .build();

        Backend {
            agent: config.into(),
            base_url: base_url.into(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetches the login pair from the environment endpoint.
    pub fn fetch_credentials(&self) -> Result<Credentials, Error> {
        let response = self
            .agent
            .get(&format!("{}/get_environment_variables", self.base_url))
            .call();

        match response {
            Ok(mut resp) => resp
                .body_mut()
                .read_json::<Credentials>()
                .map_err(|e| Error::Parse(e.to_string())),
            Err(ureq::Error::StatusCode(code)) => Err(Error::Status(code)),
            Err(e) => Err(Error::Network(e.to_string())),
        }
    }

    /// Exchanges the credentials for a bearer token.
    ///
    /// The request body carries exactly the username/password pair received
    /// from the environment endpoint.
    pub fn generate_token(&self, credentials: &Credentials) -> Result<String, Error> {
        let response = self
            .agent
            .post(&format!("{}/generate-token", self.base_url))
            .header("Content-Type", "application/json")
            .send_json(json!({
                "username": credentials.username,
                "password": credentials.password,
            }));

        match response {
            Ok(mut resp) => resp
                .body_mut()
                .read_json::<TokenResponse>()
                .map(|body| body.token)
                .map_err(|e| Error::Parse(e.to_string())),
            Err(ureq::Error::StatusCode(code)) => Err(Error::Status(code)),
            Err(e) => Err(Error::Network(e.to_string())),
        }
    }

    /// Fetches the employee roster using the bearer token.
    pub fn fetch_employees(&self, token: &str) -> Result<Vec<Employee>, Error> {
        let authorization = format!("Bearer {token}");
        let response = self
            .agent
            .get(&format!("{}/employees", self.base_url))
            .header("Authorization", &authorization)
            .call();

        match response {
            Ok(mut resp) => resp
                .body_mut()
                .read_json::<Vec<Employee>>()
                .map_err(|e| Error::Parse(e.to_string())),
            Err(ureq::Error::StatusCode(code)) => Err(Error::Status(code)),
            Err(e) => Err(Error::Network(e.to_string())),
        }
    }

    /// Advisory reachability probe against the status endpoint.
    pub fn status(&self) -> Result<String, Error> {
        let response = self
            .agent
            .get(&format!("{}/status", self.base_url))
            .call();

        match response {
            Ok(mut resp) => resp
                .body_mut()
                .read_json::<StatusResponse>()
                .map(|body| body.status)
                .map_err(|e| Error::Parse(e.to_string())),
            Err(ureq::Error::StatusCode(code)) => Err(Error::Status(code)),
            Err(e) => Err(Error::Network(e.to_string())),
        }
    }
}
