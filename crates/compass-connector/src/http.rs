//! Response handling shared by the connector calls.

use reqwest::StatusCode;
use serde::de::DeserializeOwned;

use crate::error::ConnectorError;
use crate::types::ErrorResponse;

/// Decode `resp` as `T` when it carries `expected`, otherwise turn it into
/// [`ConnectorError::Api`].
pub async fn expect_status<T: DeserializeOwned>(
    request: &str,
    resp: reqwest::Response,
    expected: StatusCode,
) -> Result<T, ConnectorError> {
    if resp.status() != expected {
        return Err(parse_error_response(request, resp).await);
    }
    let body = resp.text().await?;
    serde_json::from_str(&body).map_err(|e| ConnectorError::Parse(e.to_string()))
}

/// Log the exchange and decode the connector's error body.
///
/// `request` describes the call that produced `resp` (method and URL).
pub async fn parse_error_response(request: &str, resp: reqwest::Response) -> ConnectorError {
    let status = resp.status().as_u16();
    let headers = format!("{:?}", resp.headers());
    let body = match resp.text().await {
        Ok(body) => body,
        Err(e) => {
            tracing::warn!(request, status, %e, "failed to read connector response");
            return ConnectorError::Http(e);
        }
    };

    tracing::warn!(
        request,
        status,
        headers = %headers,
        body = %body,
        "unexpected connector response"
    );

    match serde_json::from_str::<ErrorResponse>(&body) {
        Ok(response) => ConnectorError::Api { status, response },
        Err(e) => ConnectorError::Parse(format!("error response ({status}): {e}")),
    }
}
