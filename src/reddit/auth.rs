// SPDX-License-Identifier: Apache-2.0
// Copyright (C) 2025 Michael Dippery <michael@monkey-robot.com>

//! Application-only OAuth for the Reddit API.
//!
//! Reddit's "client credentials" grant trades an app's client ID and
//! secret for a short-lived bearer token that is then sent with every
//! API request.

use crate::conf::Credentials;
use crate::http::HTTPError;
use crate::reddit::Service;
use log::info;
use reqwest::StatusCode;
use serde::Deserialize;
use std::fmt;
use thiserror::Error;

/// A bearer token for the Reddit API.
#[derive(Clone, PartialEq, Eq)]
pub struct Token(String);

impl Token {
    /// Wraps a raw access token.
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    /// The raw token, suitable for an `Authorization: Bearer` header.
    pub fn secret(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Token(<redacted>)")
    }
}

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
}

/// Exchanges `credentials` for a bearer token.
///
/// Exactly one request is made; there are no retries.
pub async fn fetch_token<S: Service>(
    service: &S,
    credentials: &Credentials,
) -> Result<Token, AuthError> {
    let resp = service.access_token(credentials).await?;
    if resp.status() != StatusCode::OK {
        return Err(AuthError::Status(resp.status()));
    }
    let body: TokenResponse = serde_json::from_str(resp.body())?;
    info!("acquired access token");
    Ok(Token::new(body.access_token))
}

/// An error acquiring a bearer token.
#[derive(Debug, Error)]
pub enum AuthError {
    /// The token request could not be made.
    #[error("Service error: {0}")]
    Service(#[from] HTTPError),

    /// The token endpoint answered with something other than 200 OK.
    #[error("Token endpoint returned HTTP {0}")]
    Status(StatusCode),

    /// The response was not JSON, or had no string `access_token`.
    #[error("Could not parse token response: {0}")]
    Parse(#[from] serde_json::Error),
}
