//! Draws viewable objects into a terminal window.

use crate::clock::Clock;
use crate::ratelimit::RateLimit;
use crate::stats::{Snapshot, Stats};
use crate::thing::Post;
use indoc::formatdoc;
use itertools::Itertools;

/// Marks an item that can be converted into a string for display on a terminal.
pub trait Viewable {
    /// Converts the item into a string for display on a terminal.
    ///
    /// `clock` is used for anything that counts down, such as the time
    /// until the rate limit resets.
    fn view<C: Clock>(&self, clock: &C) -> String;
}

impl Viewable for Post {
    fn view<C: Clock>(&self, _: &C) -> String {
        formatdoc! {"
            Most upvoted post: {}
            Upvotes: {}",
            self.title(),
            self.upvotes(),
        }
    }
}

impl Viewable for Stats {
    fn view<C: Clock>(&self, clock: &C) -> String {
        let top_post = match self.top_post() {
            Some(post) => post.view(clock),
            None => String::from("No posts yet."),
        };
        let authors = self
            .top_authors()
            .into_iter()
            .map(|(author, count)| {
                let noun = if count == 1 { "post" } else { "posts" };
                format!("  {author}: {count} {noun}")
            })
            .join("\n");
        if authors.is_empty() {
            format!("{top_post}\nTop users by post count: none")
        } else {
            format!("{top_post}\nTop users by post count:\n{authors}")
        }
    }
}

impl Viewable for RateLimit {
    fn view<C: Clock>(&self, clock: &C) -> String {
        let countdown = self.reset_at().map(|_| self.until_reset(clock).as_secs());
        match (self.remaining(), countdown) {
            (Some(0), Some(secs)) => {
                format!("Rate limit exceeded. Resume requests in: {secs} seconds")
            }
            (Some(0), None) => String::from("Rate limit exceeded. Please wait for reset."),
            (Some(remaining), Some(secs)) => formatdoc! {"
                Remaining requests: {}
                Rate limit resets in: {} seconds",
                remaining,
                secs,
            },
            (Some(remaining), None) => format!("Remaining requests: {remaining}"),
            (None, _) => String::from("Remaining requests: unknown"),
        }
    }
}

impl Viewable for Snapshot {
    fn view<C: Clock>(&self, clock: &C) -> String {
        format!(
            "{}\n{}",
            self.stats().view(clock),
            self.rate_limit().view(clock)
        )
    }
}
