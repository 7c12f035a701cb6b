// SPDX-License-Identifier: Apache-2.0
// Copyright (C) 2025 Michael Dippery <michael@monkey-robot.com>

//! subwatch is a command-line tool that watches a subreddit's newest posts
//! and keeps a running tally of who posts the most and which post has the
//! most upvotes. It polls Reddit every few seconds, backing off whenever
//! Reddit reports that the rate limit has been used up, and prints a
//! summary on a fixed interval.
//!
//! # Examples
//!
//! Watch r/golang, the default:
//!
//! ```bash
//! subwatch
//! ```
//!
//! Watch r/rust, fetching every 2 seconds and printing a summary every
//! 30 seconds:
//!
//! ```bash
//! subwatch rust --interval 2 --print-every 30
//! ```
//!
//! Get usage and help for the tool:
//!
//! ```bash
//! subwatch --help
//! ```
//!
//! # Reddit API Setup
//!
//! subwatch uses application-only OAuth, so you must register an app with
//! Reddit:
//!
//! 1. Create a "script" app at <https://www.reddit.com/prefs/apps>.
//! 2. Copy its client ID (shown under the app's name) and secret.
//! 3. Store them in the `$REDDIT_CLIENT_ID` and `$REDDIT_CLIENT_SECRET`
//!    environment variables:
//!
//!    ```bash
//!    $ export REDDIT_CLIENT_ID='copied client id'
//!    $ export REDDIT_CLIENT_SECRET='copied secret'
//!    ```
//!
//! subwatch exits immediately if either variable is missing or if Reddit
//! refuses the credentials.
//!
//! # License
//!
//! subwatch is licensed under the terms of the [Apache License 2.0]. Please
//! see the LICENSE file accompanying this source code or visit the previous
//! link for more information on licensing.
//!
//! [Apache License 2.0]: https://www.apache.org/licenses/LICENSE-2.0

pub mod cli;
pub mod clock;
pub mod conf;
pub mod fetch;
pub mod http;
pub mod printer;
pub mod ratelimit;
pub mod reddit;
pub mod scheduler;
pub mod stats;
pub mod thing;
pub mod view;

#[cfg(test)]
mod test_utils;
