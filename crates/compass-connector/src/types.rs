//! Connector wire types.

use std::fmt;

use serde::{Deserialize, Serialize};

/// One-time token issued by the director for an application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenResponse {
    pub url: String,
    pub token: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CsrRequest {
    pub csr: String,
}

/// Signing details returned by the connector's info endpoint.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InfoResponse {
    pub csr_url: String,
    #[serde(default)]
    pub api: ApiInfo,
    pub certificate: CertificateInfo,
}

/// Endpoints available to an application once it holds a client certificate.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiInfo {
    #[serde(default)]
    pub metadata_url: String,
    #[serde(default)]
    pub events_url: String,
    #[serde(default)]
    pub events_info_url: String,
    #[serde(default)]
    pub info_url: String,
    #[serde(default)]
    pub certificates_url: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CertificateInfo {
    pub subject: String,
    #[serde(default)]
    pub extensions: String,
    #[serde(rename = "key-algorithm")]
    pub key_algorithm: String,
}

/// Base64-encoded PEM certificates issued for a CSR.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CrtResponse {
    #[serde(rename = "crt")]
    pub crt_chain: String,
    pub client_crt: String,
    pub ca_crt: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub code: u16,
    pub error: String,
}

impl fmt::Display for ErrorResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (code {})", self.error, self.code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn info_response_wire_names() {
        let json = r#"{
            "csrUrl": "https://connector/v1/applications/certificates?token=abc",
            "api": {
                "metadataUrl": "https://gateway/metadata",
                "eventsUrl": "https://gateway/events",
                "eventsInfoUrl": "https://gateway/events/info",
                "infoUrl": "https://gateway/info",
                "certificatesUrl": "https://connector/certificates"
            },
            "certificate": {
                "subject": "OU=Test,O=Test,CN=app",
                "extensions": "",
                "key-algorithm": "rsa2048"
            }
        }"#;

        let info: InfoResponse = serde_json::from_str(json).unwrap();
        assert_eq!(info.api.events_info_url, "https://gateway/events/info");
        assert_eq!(info.certificate.key_algorithm, "rsa2048");

        let back = serde_json::to_value(&info).unwrap();
        assert_eq!(back["certificate"]["key-algorithm"], "rsa2048");
        assert_eq!(back["csrUrl"], info.csr_url);
    }

    #[test]
    fn crt_response_wire_names() {
        let crt: CrtResponse =
            serde_json::from_str(r#"{"crt":"chain","clientCrt":"client","caCrt":"ca"}"#).unwrap();
        assert_eq!(crt.crt_chain, "chain");
        assert_eq!(crt.client_crt, "client");
        assert_eq!(crt.ca_crt, "ca");
    }

    #[test]
    fn error_response_display() {
        let err = ErrorResponse {
            code: 403,
            error: "invalid token".into(),
        };
        assert_eq!(err.to_string(), "invalid token (code 403)");
    }
}
