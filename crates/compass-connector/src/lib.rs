//! # compass-connector
//!
//! HTTP client that drives the Compass connector from integration tests:
//! obtain a one-time token through the director, read the signing info,
//! and submit a CSR for a client certificate chain.
//!
//! The client only calls a connector; it never issues certificates.

mod error;
mod http;
mod types;

use compass_config::ConnectorConfig;
use reqwest::StatusCode;
use reqwest::header::{CONNECTION, CONTENT_TYPE, HeaderValue};

pub use error::ConnectorError;
pub use types::{
    ApiInfo, CertificateInfo, CrtResponse, CsrRequest, ErrorResponse, InfoResponse, TokenResponse,
};

pub const APPLICATION_HEADER: &str = "Application";
pub const GROUP_HEADER: &str = "Group";
pub const TENANT_HEADER: &str = "Tenant";
pub const TENANT: &str = "testkit-tenant";
pub const EXTENSIONS: &str = "";
pub const KEY_ALGORITHM: &str = "rsa2048";

/// Director side of the token handshake.
pub trait DirectorClient: Send + Sync {
    /// Returns `(url, token)` for a fresh one-time token of `application_id`.
    fn get_one_time_token_url(
        &self,
        application_id: &str,
    ) -> impl Future<Output = Result<(String, String), ConnectorError>> + Send;
}

/// Build the HTTP client used for connector calls.
///
/// # Errors
///
/// Returns [`ConnectorError::Http`] if the TLS backend cannot be initialized.
pub fn new_http_client(skip_verify: bool) -> Result<reqwest::Client, ConnectorError> {
    Ok(reqwest::Client::builder()
        .user_agent("compass-connector/0.1")
        .danger_accept_invalid_certs(skip_verify)
        .build()?)
}

pub struct ConnectorClient<D> {
    http: reqwest::Client,
    director: D,
    app_id: String,
    tenant: String,
}

impl<D: DirectorClient> ConnectorClient<D> {
    /// # Errors
    ///
    /// Returns [`ConnectorError::Http`] if the HTTP client cannot be built.
    pub fn new(
        director: D,
        app_id: impl Into<String>,
        tenant: impl Into<String>,
        skip_verify: bool,
    ) -> Result<Self, ConnectorError> {
        Ok(Self {
            http: new_http_client(skip_verify)?,
            director,
            app_id: app_id.into(),
            tenant: tenant.into(),
        })
    }

    /// # Errors
    ///
    /// Returns [`ConnectorError::Http`] if the HTTP client cannot be built.
    pub fn from_config(director: D, config: &ConnectorConfig) -> Result<Self, ConnectorError> {
        Self::new(
            director,
            config.application_id.as_str(),
            config.tenant.as_str(),
            config.skip_verify,
        )
    }

    pub fn tenant(&self) -> &str {
        &self.tenant
    }

    /// # Errors
    ///
    /// Returns whatever the director client fails with.
    pub async fn create_token(&self) -> Result<TokenResponse, ConnectorError> {
        tracing::debug!(app_id = %self.app_id, "requesting one-time token");
        let (url, token) = self.director.get_one_time_token_url(&self.app_id).await?;
        Ok(TokenResponse { url, token })
    }

    /// Fetch signing info from `url`, normally the URL of a one-time token.
    ///
    /// # Errors
    ///
    /// Returns [`ConnectorError::Api`] unless the connector answers `200 OK`.
    pub async fn get_info(&self, url: &str) -> Result<InfoResponse, ConnectorError> {
        tracing::debug!(url, tenant = %self.tenant, "fetching connector info");
        let resp = self
            .http
            .get(url)
            .header(TENANT_HEADER, self.tenant.as_str())
            .header(CONNECTION, HeaderValue::from_static("close"))
            .send()
            .await?;

        http::expect_status(&format!("GET {url}"), resp, StatusCode::OK).await
    }

    /// Submit a base64-encoded CSR to `url`.
    ///
    /// # Errors
    ///
    /// Returns [`ConnectorError::Api`] unless the connector answers
    /// `201 Created`.
    pub async fn create_cert_chain(&self, csr: &str, url: &str) -> Result<CrtResponse, ConnectorError> {
        let body = serde_json::to_vec(&CsrRequest {
            csr: csr.to_string(),
        })
        .map_err(|e| ConnectorError::Parse(e.to_string()))?;

        tracing::debug!(url, "requesting certificate chain");
        let resp = self
            .http
            .post(url)
            .header(CONTENT_TYPE, HeaderValue::from_static("application/json"))
            .header(CONNECTION, HeaderValue::from_static("close"))
            .body(body)
            .send()
            .await?;

        http::expect_status(&format!("POST {url}"), resp, StatusCode::CREATED).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct StaticDirector;

    impl DirectorClient for StaticDirector {
        async fn get_one_time_token_url(
            &self,
            application_id: &str,
        ) -> Result<(String, String), ConnectorError> {
            if application_id.is_empty() {
                return Err(ConnectorError::Director("application id is empty".into()));
            }
            Ok((
                format!("https://connector/info?app={application_id}"),
                "token-123".into(),
            ))
        }
    }

    #[tokio::test]
    async fn create_token_uses_configured_application() {
        let client = ConnectorClient::new(StaticDirector, "app-1", TENANT, false).unwrap();
        let token = client.create_token().await.unwrap();
        assert_eq!(
            token,
            TokenResponse {
                url: "https://connector/info?app=app-1".into(),
                token: "token-123".into(),
            }
        );
    }

    #[tokio::test]
    async fn create_token_propagates_director_error() {
        let client = ConnectorClient::new(StaticDirector, "", TENANT, false).unwrap();
        let err = client.create_token().await.unwrap_err();
        assert!(matches!(err, ConnectorError::Director(_)));
    }

    #[test]
    fn from_config_uses_tenant_and_skip_verify() {
        let config = ConnectorConfig {
            application_id: "app-1".into(),
            skip_verify: true,
            ..ConnectorConfig::default()
        };
        let client = ConnectorClient::from_config(StaticDirector, &config).unwrap();
        assert_eq!(client.tenant(), TENANT);
        assert_eq!(client.app_id, "app-1");
    }
}
