// SPDX-License-Identifier: Apache-2.0
// Copyright (C) 2025 Michael Dippery <michael@monkey-robot.com>

//! HTTPS connector for the Reddit API.
//!
//! Service structures in this module provide a low-level way to interact
//! with the Reddit API over HTTPS, essentially a specialized HTTPS client
//! specifically for Reddit.

use crate::conf::Credentials;
use crate::http::{HTTPError, HTTPResult, HTTPService, Response};
use crate::reddit::Token;
use log::debug;
use reqwest::{Client, header};

/// Endpoint that exchanges client credentials for a bearer token.
pub const TOKEN_URI: &str = "https://www.reddit.com/api/v1/access_token";

/// Number of posts requested per fetch.
pub const LISTING_LIMIT: u32 = 10;

/// A service for talking to the Reddit API.
///
/// Using this trait, clients can implement different ways of connecting
/// to the Reddit API, such as an actual connector for production code,
/// and a mocked connector for testing purposes.
///
/// Implementations hand back the whole response, whatever its status;
/// deciding what a status means is up to the caller.
pub trait Service {
    /// Sends a client-credentials grant to the token endpoint.
    fn access_token(
        &self,
        credentials: &Credentials,
    ) -> impl Future<Output = HTTPResult<Response>> + Send;

    /// Requests the newest posts in `subreddit`.
    fn new_posts(
        &self,
        subreddit: &str,
        token: &Token,
    ) -> impl Future<Output = HTTPResult<Response>> + Send;
}

impl<S: Service + Sync> Service for &S {
    fn access_token(
        &self,
        credentials: &Credentials,
    ) -> impl Future<Output = HTTPResult<Response>> + Send {
        (**self).access_token(credentials)
    }

    fn new_posts(
        &self,
        subreddit: &str,
        token: &Token,
    ) -> impl Future<Output = HTTPResult<Response>> + Send {
        (**self).new_posts(subreddit, token)
    }
}

/// A service that contacts the Reddit API directly.
#[derive(Debug)]
pub struct RedditService {
    client: Client,
}

impl Default for RedditService {
    /// Creates a new Reddit service.
    fn default() -> Self {
        let client = Self::client();
        Self { client }
    }
}

impl HTTPService for RedditService {}

impl RedditService {
    fn uri(&self, subreddit: &str) -> String {
        format!("https://www.reddit.com/r/{subreddit}/new.json?limit={LISTING_LIMIT}")
    }
}

impl Service for RedditService {
    async fn access_token(&self, credentials: &Credentials) -> HTTPResult<Response> {
        debug!("requesting access token for client {}", credentials.client_id());
        let resp = self
            .client
            .post(TOKEN_URI)
            .basic_auth(credentials.client_id(), Some(credentials.client_secret()))
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body("grant_type=client_credentials")
            .send()
            .await
            .map_err(HTTPError::Request)?;
        Response::read(resp).await
    }

    async fn new_posts(&self, subreddit: &str, token: &Token) -> HTTPResult<Response> {
        let uri = self.uri(subreddit);
        debug!("GET {uri}");
        let resp = self
            .client
            .get(&uri)
            .bearer_auth(token.secret())
            .send()
            .await
            .map_err(HTTPError::Request)?;
        Response::read(resp).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn it_returns_a_uri_for_new_posts() {
        let service = RedditService::default();
        let actual_uri = service.uri("golang");
        let expected_uri = "https://www.reddit.com/r/golang/new.json?limit=10";
        assert_eq!(actual_uri, expected_uri);
    }

    #[test]
    fn it_keeps_the_subreddit_name_as_given() {
        let service = RedditService::default();
        let actual_uri = service.uri("AskHistorians");
        let expected_uri = "https://www.reddit.com/r/AskHistorians/new.json?limit=10";
        assert_eq!(actual_uri, expected_uri);
    }
}
