//! Realtime Database REST client.

use reqwest::header::{ACCEPT, HeaderValue};
use serde_json::Value;
use tracing::{debug, instrument, trace};

use rtdb_core::Result;
use rtdb_core::error::{ProtocolError, StoreError, TransportError};
use rtdb_core::types::{AuthToken, DatabasePath, DatabaseUrl};

/// Error body returned by the database, e.g. `{"error": "Permission denied"}`.
#[derive(Debug, serde::Deserialize)]
struct RestErrorResponse {
    error: Option<String>,
}

fn map_reqwest(err: reqwest::Error) -> StoreError {
    let transport = if err.is_timeout() {
        TransportError::Timeout
    } else if err.is_connect() {
        TransportError::Connection {
            message: err.to_string(),
        }
    } else {
        TransportError::Http {
            message: err.to_string(),
        }
    };
    transport.into()
}

/// HTTP client for REST reads against one database.
#[derive(Debug, Clone)]
pub struct RestClient {
    client: reqwest::Client,
    url: DatabaseUrl,
    auth: Option<AuthToken>,
    namespace: Option<String>,
}

impl RestClient {
    /// Create a new client for the given database.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn new(url: DatabaseUrl) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(concat!("rtdb/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(map_reqwest)?;

        Ok(Self {
            client,
            url,
            auth: None,
            namespace: None,
        })
    }

    /// Send `token` as the `auth` query parameter on every read.
    pub fn with_auth(mut self, token: AuthToken) -> Self {
        self.auth = Some(token);
        self
    }

    /// Send `ns` as the `ns` query parameter, as the local emulator expects.
    pub fn with_namespace(mut self, ns: impl Into<String>) -> Self {
        self.namespace = Some(ns.into());
        self
    }

    /// Returns the database URL this client is configured for.
    pub fn url(&self) -> &DatabaseUrl {
        &self.url
    }

    /// Read the value at `path`.
    ///
    /// A `null` or empty body means nothing is stored there.
    #[instrument(skip(self), fields(db = %self.url, %path))]
    pub async fn get(&self, path: &DatabasePath) -> Result<Option<Value>> {
        let url = self.url.rest_url(path);
        debug!(%url, "REST read");

        let mut query: Vec<(&str, &str)> = Vec::new();
        if let Some(ref auth) = self.auth {
            query.push(("auth", auth.as_str()));
        }
        if let Some(ref ns) = self.namespace {
            query.push(("ns", ns.as_str()));
        }

        let response = self
            .client
            .get(url)
            .query(&query)
            .header(ACCEPT, HeaderValue::from_static("application/json"))
            .send()
            .await
            .map_err(map_reqwest)?;

        self.handle_response(response).await
    }

    /// Handle a REST response, parsing the body or error.
    async fn handle_response(&self, response: reqwest::Response) -> Result<Option<Value>> {
        let status = response.status();
        trace!(status = %status, "REST response");

        if !status.is_success() {
            return Err(self.parse_error_response(response).await.into());
        }

        let body = response.bytes().await.map_err(map_reqwest)?;
        if body.iter().all(u8::is_ascii_whitespace) {
            return Ok(None);
        }

        let value: Value = serde_json::from_slice(&body).map_err(|e| TransportError::Http {
            message: format!("invalid JSON body: {}", e),
        })?;

        Ok(if value.is_null() { None } else { Some(value) })
    }

    /// Parse a REST error response.
    async fn parse_error_response(&self, response: reqwest::Response) -> ProtocolError {
        let status = response.status().as_u16();

        match response.json::<RestErrorResponse>().await {
            Ok(body) => ProtocolError::new(status, body.error),
            Err(_) => ProtocolError::new(status, None),
        }
    }
}
