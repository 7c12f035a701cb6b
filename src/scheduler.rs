// SPDX-License-Identifier: Apache-2.0
// Copyright (C) 2025 Michael Dippery <michael@monkey-robot.com>

//! Paces fetches so that Reddit's rate limit is respected.

use crate::clock::Clock;
use crate::fetch::{FetchError, Fetcher};
use crate::ratelimit::RateLimit;
use crate::reddit::{Service, Token};
use crate::stats::Tracker;
use log::{error, info, warn};
use std::sync::Arc;
use std::time::Duration;
use tokio::time::sleep;

/// Default pause between one fetch and the next.
pub const DEFAULT_PAUSE: Duration = Duration::from_secs(5);

/// What the scheduler should do next.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Step {
    /// Fetch now.
    Fetch,

    /// Wait this long for the rate limit window to reset.
    Wait(Duration),
}

impl Step {
    /// Decides whether to fetch or wait, given the last known `rate_limit`.
    ///
    /// Requests are only held back when Reddit has reported that none are
    /// left, and then only until the reported reset. A reset that is
    /// unknown or already past means fetch now.
    pub fn next<C: Clock>(rate_limit: &RateLimit, clock: &C) -> Self {
        if !rate_limit.is_exhausted() {
            return Step::Fetch;
        }
        let wait = rate_limit.until_reset(clock);
        if wait.is_zero() {
            Step::Fetch
        } else {
            Step::Wait(wait)
        }
    }
}

/// Drives the fetch loop for a single subreddit.
///
/// Fetches never overlap: each one finishes before the scheduler pauses
/// and decides on the next.
#[derive(Debug)]
pub struct Scheduler<S: Service, C: Clock> {
    fetcher: Fetcher<S>,
    token: Token,
    tracker: Arc<Tracker>,
    pause: Duration,
    clock: C,
}

impl<S: Service, C: Clock> Scheduler<S, C> {
    /// Creates a new scheduler.
    ///
    /// `pause` is how long to wait after each fetch before deciding on the
    /// next one.
    pub fn new(
        fetcher: Fetcher<S>,
        token: Token,
        tracker: Arc<Tracker>,
        pause: Duration,
        clock: C,
    ) -> Self {
        Self {
            fetcher,
            token,
            tracker,
            pause,
            clock,
        }
    }

    /// Runs forever.
    pub async fn run(&self) {
        info!("watching r/{}", self.fetcher.subreddit());
        loop {
            self.tick().await;
        }
    }

    /// Runs a single iteration of the loop and returns what it did.
    ///
    /// Either waits out an exhausted rate limit, or fetches once and then
    /// pauses.
    pub async fn tick(&self) -> Step {
        let step = Step::next(&self.tracker.rate_limit(), &self.clock);
        match step {
            Step::Wait(wait) => {
                info!(
                    "rate limit exhausted, waiting {} seconds for it to reset",
                    wait.as_secs()
                );
                sleep(wait).await;
            }
            Step::Fetch => {
                match self.fetcher.fetch(&self.token, &self.tracker).await {
                    Ok(count) => info!("fetched {count} posts from r/{}", self.fetcher.subreddit()),
                    Err(FetchError::RateLimited) => warn!("rate limit exceeded, skipping this fetch"),
                    Err(err) => error!("error fetching r/{}: {err}", self.fetcher.subreddit()),
                }
                sleep(self.pause).await;
            }
        }
        step
    }
}
