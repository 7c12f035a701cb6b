// SPDX-License-Identifier: Apache-2.0
// Copyright (C) 2025 Michael Dippery <michael@monkey-robot.com>

//! Tracks the rate limit Reddit reports in its response headers.
//!
//! Every response from the Reddit API carries an `X-RateLimit-Remaining`
//! header with the number of requests left in the current window, and an
//! `X-RateLimit-Reset` header with the moment the window resets, as a Unix
//! timestamp.

use crate::clock::{Clock, DateTime, Utc};
use log::warn;
use reqwest::header::HeaderMap;
use std::time::Duration;

/// Header carrying the number of requests left in the current window.
pub const REMAINING_HEADER: &str = "x-ratelimit-remaining";

/// Header carrying the moment the current window resets.
pub const RESET_HEADER: &str = "x-ratelimit-reset";

/// The most recently reported rate limit.
///
/// Both fields are `None` until a response has reported them.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RateLimit {
    remaining: Option<u32>,
    reset_at: Option<DateTime<Utc>>,
}

impl RateLimit {
    /// Creates a rate limit with the given values.
    pub fn new(remaining: Option<u32>, reset_at: Option<DateTime<Utc>>) -> Self {
        Self {
            remaining,
            reset_at,
        }
    }

    /// Reads whichever rate limit headers are present in `headers`.
    ///
    /// Header values that cannot be parsed are logged and treated as
    /// absent.
    pub fn from_headers(headers: &HeaderMap) -> Self {
        let remaining = header_value(headers, REMAINING_HEADER).and_then(parse_remaining);
        let reset_at = header_value(headers, RESET_HEADER).and_then(parse_reset);
        Self::new(remaining, reset_at)
    }

    /// Number of requests left in the current window, if known.
    pub fn remaining(&self) -> Option<u32> {
        self.remaining
    }

    /// When the current window resets, if known.
    pub fn reset_at(&self) -> Option<DateTime<Utc>> {
        self.reset_at
    }

    /// True if Reddit has reported that no requests are left.
    ///
    /// An unknown remaining count is not considered exhausted.
    pub fn is_exhausted(&self) -> bool {
        self.remaining == Some(0)
    }

    /// How long until the current window resets.
    ///
    /// An unknown reset time, or one that has already passed, yields a
    /// zero duration.
    pub fn until_reset<C: Clock>(&self, clock: &C) -> Duration {
        self.reset_at
            .map(|reset_at| clock.until(reset_at))
            .unwrap_or(Duration::ZERO)
    }

    /// Overwrites each field with the corresponding field from `latest`,
    /// if `latest` has it.
    pub fn update(&mut self, latest: RateLimit) {
        if let Some(remaining) = latest.remaining {
            self.remaining = Some(remaining);
        }
        if let Some(reset_at) = latest.reset_at {
            self.reset_at = Some(reset_at);
        }
    }
}

fn header_value<'a>(headers: &'a HeaderMap, name: &str) -> Option<&'a str> {
    let value = headers.get(name)?;
    match value.to_str() {
        Ok(value) => Some(value.trim()),
        Err(err) => {
            warn!("ignoring non-text {name} header: {err}");
            None
        }
    }
}

fn parse_remaining(value: &str) -> Option<u32> {
    // Reddit has been known to send this as "599.0".
    let parsed = value
        .parse::<u32>()
        .ok()
        .or_else(|| value.parse::<f64>().ok().map(|n| n.max(0.0).trunc() as u32));
    if parsed.is_none() {
        warn!("ignoring unparseable {REMAINING_HEADER} header: {value:?}");
    }
    parsed
}

fn parse_reset(value: &str) -> Option<DateTime<Utc>> {
    let parsed = value
        .parse::<i64>()
        .ok()
        .and_then(|secs| DateTime::from_timestamp(secs, 0));
    if parsed.is_none() {
        warn!("ignoring unparseable {RESET_HEADER} header: {value:?}");
    }
    parsed
}
