// SPDX-License-Identifier: Apache-2.0
// Copyright (C) 2025 Michael Dippery <michael@monkey-robot.com>

//! Fetches a subreddit's newest posts and feeds them to a [`Tracker`].

use crate::http::HTTPError;
use crate::ratelimit::RateLimit;
use crate::reddit::{Service, Token};
use crate::stats::Tracker;
use crate::thing::{self, Post};
use log::debug;
use reqwest::StatusCode;
use thiserror::Error;

/// Fetches the newest posts from a single subreddit.
#[derive(Debug)]
pub struct Fetcher<S: Service> {
    service: S,
    subreddit: String,
}

impl<S: Service> Fetcher<S> {
    /// Creates a fetcher for `subreddit` that talks to Reddit through
    /// `service`.
    pub fn new(service: S, subreddit: impl Into<String>) -> Self {
        let subreddit = subreddit.into();
        Self { service, subreddit }
    }

    /// The subreddit being fetched.
    pub fn subreddit(&self) -> &str {
        &self.subreddit
    }

    #[cfg(test)]
    pub(crate) fn service(&self) -> &S {
        &self.service
    }

    /// Makes exactly one request for the subreddit's newest posts.
    ///
    /// Any rate limit headers in the response are recorded in `tracker`,
    /// then the posts are tallied. Returns the number of posts tallied.
    ///
    /// Nothing is tallied if the request fails, if Reddit reports that we
    /// are rate limited, or if any post in the listing cannot be parsed.
    pub async fn fetch(&self, token: &Token, tracker: &Tracker) -> Result<usize, FetchError> {
        let resp = self.service.new_posts(&self.subreddit, token).await?;

        if resp.status() == StatusCode::TOO_MANY_REQUESTS {
            return Err(FetchError::RateLimited);
        }

        let rate_limit = RateLimit::from_headers(resp.headers());
        debug!("rate limit reported: {rate_limit:?}");
        tracker.record_rate_limit(rate_limit);

        if !resp.status().is_success() {
            return Err(HTTPError::Http(resp.status()).into());
        }

        let posts = Post::parse_listing(resp.body())?;
        let count = posts.len();
        tracker.update(posts);
        debug!("tallied {count} posts from r/{}", self.subreddit);
        Ok(count)
    }
}

/// An error during a single fetch.
///
/// None of these are fatal; the next scheduled fetch goes ahead as usual.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Reddit answered 429 Too Many Requests.
    #[error("Rate limit exceeded")]
    RateLimited,

    /// The request failed or returned an unsuccessful status.
    #[error("Service error: {0}")]
    Service(#[from] HTTPError),

    /// The listing could not be parsed.
    #[error("Parse error: {0}")]
    Parse(#[from] thing::Error),
}
