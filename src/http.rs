// SPDX-License-Identifier: Apache-2.0
// Copyright (C) 2025 Michael Dippery <michael@monkey-robot.com>

//! Services for communicating with APIs using HTTP.

use reqwest::header::HeaderMap;
use reqwest::{Client, ClientBuilder, StatusCode};
use std::time::Duration;
use std::{error, fmt};

/// A general service for making HTTP calls.
///
/// Think of this as a proxy for a remote _service_, even though a
/// _client_ is used to talk to it. A service might not always be remote,
/// such as when the implementation is a deterministic service used for
/// testing.
pub trait HTTPService {
    /// Default HTTP client that can be used to make HTTP requests.
    fn client() -> Client {
        ClientBuilder::new()
            .user_agent(Self::user_agent())
            .timeout(Duration::from_secs(30))
            .build()
            // According to the docs, build() only fails if a TLS backend
            // or DNS resolution cannot be initialized, and both of these
            // are unrecoverable for us.
            .expect("could not create a new HTTP client")
    }

    /// The user agent sent with every request.
    ///
    /// Reddit asks API clients to identify themselves, so this is fixed
    /// rather than derived from the package name.
    fn user_agent() -> String {
        String::from("RedditFetcherCLI")
    }
}

/// A fully-read HTTP response.
///
/// The body is read eagerly so that callers can inspect the status,
/// headers, and body in whatever order suits them, and so that test
/// services can hand back canned responses without a network.
#[derive(Debug)]
pub struct Response {
    status: StatusCode,
    headers: HeaderMap,
    body: String,
}

impl Response {
    /// Creates a response from its parts.
    pub fn new(status: StatusCode, headers: HeaderMap, body: impl Into<String>) -> Self {
        let body = body.into();
        Self {
            status,
            headers,
            body,
        }
    }

    /// Reads a response from the network, consuming its body.
    pub async fn read(response: reqwest::Response) -> HTTPResult<Self> {
        let status = response.status();
        let headers = response.headers().clone();
        let body = response.text().await.map_err(HTTPError::Body)?;
        Ok(Self::new(status, headers, body))
    }

    /// The response's HTTP status code.
    pub fn status(&self) -> StatusCode {
        self.status
    }

    /// The response's headers.
    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    /// The raw response body.
    pub fn body(&self) -> &str {
        &self.body
    }
}

/// The result of an HTTP request.
pub type HTTPResult<T> = Result<T, HTTPError>;

/// Indicates an error has occurred when making an HTTP call.
#[derive(Debug)]
pub enum HTTPError {
    /// An error retrieving the body of a response.
    Body(reqwest::Error),

    /// An error that occurred while making an HTTP request.
    Request(reqwest::Error),

    /// An unsuccessful HTTP status code in an HTTP response.
    Http(StatusCode),
}

impl fmt::Display for HTTPError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HTTPError::Body(err) => write!(f, "Error retrieving body of HTTP response: {err}"),
            HTTPError::Request(err) => write!(f, "Error while making HTTP request: {err}"),
            HTTPError::Http(status) => write!(f, "Request returned HTTP {status}"),
        }
    }
}

impl error::Error for HTTPError {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            HTTPError::Body(err) => Some(err),
            HTTPError::Request(err) => Some(err),
            HTTPError::Http(_) => None,
        }
    }
}
