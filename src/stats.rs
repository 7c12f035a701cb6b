// SPDX-License-Identifier: Apache-2.0
// Copyright (C) 2025 Michael Dippery <michael@monkey-robot.com>

//! Running statistics over every post seen so far.

use crate::ratelimit::RateLimit;
use crate::thing::Post;
use counter::Counter;
use std::sync::{Mutex, MutexGuard, PoisonError};

/// A pair of author name and number of posts.
pub type AuthorCount = (String, usize);

/// Post counts per author and the most upvoted post.
#[derive(Clone, Debug, Default)]
pub struct Stats {
    counts: Counter<String>,
    top_post: Option<Post>,
}

impl Stats {
    /// Tallies `posts`.
    ///
    /// Each post counts once towards its author. A post only becomes the
    /// top post if it has strictly more upvotes than the current one, so
    /// ties keep whichever post was seen first.
    pub fn update(&mut self, posts: impl IntoIterator<Item = Post>) {
        for post in posts {
            *self.counts.entry(post.author().to_string()).or_insert(0) += 1;

            let is_new_top = self
                .top_post
                .as_ref()
                .is_none_or(|top| post.upvotes() > top.upvotes());
            if is_new_top {
                self.top_post = Some(post);
            }
        }
    }

    /// Number of posts seen from `author`.
    pub fn posts_by(&self, author: &str) -> usize {
        self.counts.get(author).copied().unwrap_or(0)
    }

    /// Total number of posts seen.
    pub fn total_posts(&self) -> usize {
        self.counts.values().sum()
    }

    /// The post with the most upvotes seen so far, if any.
    pub fn top_post(&self) -> Option<&Post> {
        self.top_post.as_ref()
    }

    /// Authors ordered by number of posts, most prolific first.
    ///
    /// Authors with the same number of posts are ordered by name,
    /// ignoring case.
    pub fn top_authors(&self) -> Vec<AuthorCount> {
        self.counts
            .most_common_tiebreaker(|lhs, rhs| Ord::cmp(&lhs.to_lowercase(), &rhs.to_lowercase()))
    }
}

/// A consistent copy of the [`Tracker`]'s state at a single moment.
#[derive(Clone, Debug, Default)]
pub struct Snapshot {
    stats: Stats,
    rate_limit: RateLimit,
}

impl Snapshot {
    /// Post statistics at the time of the snapshot.
    pub fn stats(&self) -> &Stats {
        &self.stats
    }

    /// The rate limit at the time of the snapshot.
    pub fn rate_limit(&self) -> RateLimit {
        self.rate_limit
    }
}

/// Shared, thread-safe home for post statistics and the current rate limit.
///
/// One lock covers everything, so each call is atomic with respect to every
/// other: a [`snapshot`](Tracker::snapshot) never sees half of an
/// [`update`](Tracker::update).
#[derive(Debug, Default)]
pub struct Tracker {
    state: Mutex<Snapshot>,
}

impl Tracker {
    /// Tallies a batch of posts.
    pub fn update(&self, posts: impl IntoIterator<Item = Post>) {
        self.lock().stats.update(posts);
    }

    /// Records the rate limit reported by the latest response.
    ///
    /// Values missing from `latest` are left as they were.
    pub fn record_rate_limit(&self, latest: RateLimit) {
        self.lock().rate_limit.update(latest);
    }

    /// The current rate limit.
    pub fn rate_limit(&self) -> RateLimit {
        self.lock().rate_limit
    }

    /// A consistent copy of the current statistics and rate limit.
    pub fn snapshot(&self) -> Snapshot {
        self.lock().clone()
    }

    fn lock(&self) -> MutexGuard<'_, Snapshot> {
        // A poisoned lock still holds valid counts.
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
