//! Callable client
//!
//! Sends the request envelope with the caller's ID token and validates the
//! result with the authentication result schema before handing it back.

use reqwest::header::AUTHORIZATION;
use serde_json::{json, Value};

use super::config::ClientConfig;
use crate::functions::facebook::{CHECK_FACEBOOK_AUTHENTICATION, SUBMIT_2FA_CODE};
use crate::models::AuthenticationResult;
use crate::validation::{validate_authentication_result, ValidationError};

#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("invalid callable URL: {0}")]
    Url(#[from] url::ParseError),
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    /// The callable answered with an error envelope
    #[error("{status}: {message}")]
    Callable { status: String, message: String },
    #[error("malformed callable response: {0}")]
    MalformedResponse(String),
    #[error("callable result rejected: {0}")]
    Schema(#[from] ValidationError),
}

impl ClientError {
    /// Whether the callable refused the call for lack of an identity
    #[must_use]
    pub fn is_unauthenticated(&self) -> bool {
        matches!(self, Self::Callable { status, .. } if status == "UNAUTHENTICATED")
    }
}

/// Extract `result` from a callable response body
///
/// # Errors
///
/// Returns [`ClientError::Callable`] for error envelopes and
/// [`ClientError::MalformedResponse`] for bodies that are neither envelope.
pub fn parse_callable_response(http_status: u16, body: &Value) -> Result<Value, ClientError> {
    if let Some(error) = body.get("error") {
        let status = error
            .get("status")
            .and_then(Value::as_str)
            .unwrap_or("INTERNAL")
            .to_string();
        let message = error
            .get("message")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string();
        return Err(ClientError::Callable { status, message });
    }

    match body.get("result") {
        Some(result) if (200..300).contains(&http_status) => Ok(result.clone()),
        Some(_) => Err(ClientError::MalformedResponse(format!(
            "result envelope with HTTP status {http_status}"
        ))),
        None => Err(ClientError::MalformedResponse(
            "missing result envelope".to_string(),
        )),
    }
}

/// Validate a callable result as an [`AuthenticationResult`]
///
/// # Errors
///
/// Returns [`ClientError::Schema`] if the value does not conform.
pub fn decode_authentication_result(result: &Value) -> Result<AuthenticationResult, ClientError> {
    validate_authentication_result(result).map_err(|e| {
        log::error!("Callable returned an invalid authentication result: {e}");
        ClientError::Schema(e)
    })
}

#[derive(Debug, Clone)]
pub struct FunctionsClient {
    http: reqwest::Client,
    config: ClientConfig,
}

impl FunctionsClient {
    #[must_use]
    pub fn new(config: ClientConfig) -> Self {
        Self::with_http_client(reqwest::Client::new(), config)
    }

    #[must_use]
    pub fn with_http_client(http: reqwest::Client, config: ClientConfig) -> Self {
        Self { http, config }
    }

    #[must_use]
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Invoke callable `name` with `data`
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure, an error envelope, or a body
    /// that is not a callable envelope.
    pub async fn call(
        &self,
        name: &str,
        id_token: Option<&str>,
        data: Value,
    ) -> Result<Value, ClientError> {
        let url = self.config.callable_url(name)?;
        log::debug!("Calling {name} at {url}");

        let mut request = self.http.post(url).json(&json!({ "data": data }));
        if let Some(token) = id_token {
            request = request.header(AUTHORIZATION, format!("Bearer {token}"));
        }

        let response = request.send().await?;
        let status = response.status().as_u16();
        let body: Value = response.json().await.map_err(|e| {
            ClientError::MalformedResponse(format!("body is not JSON (HTTP {status}): {e}"))
        })?;

        parse_callable_response(status, &body)
    }

    /// Ask whether the caller's Facebook session is authenticated
    ///
    /// # Errors
    ///
    /// See [`FunctionsClient::call`]; also fails if the result does not validate.
    pub async fn check_facebook_authentication(
        &self,
        id_token: &str,
    ) -> Result<AuthenticationResult, ClientError> {
        let result = self
            .call(CHECK_FACEBOOK_AUTHENTICATION, Some(id_token), Value::Null)
            .await?;
        decode_authentication_result(&result)
    }

    /// Submit the pending 2FA step
    ///
    /// The callable defines no code parameter yet, so none is sent.
    ///
    /// # Errors
    ///
    /// See [`FunctionsClient::call`]; also fails if the result does not validate.
    pub async fn submit_2fa_code(
        &self,
        id_token: &str,
    ) -> Result<AuthenticationResult, ClientError> {
        let result = self
            .call(SUBMIT_2FA_CODE, Some(id_token), Value::Null)
            .await?;
        decode_authentication_result(&result)
    }
}
