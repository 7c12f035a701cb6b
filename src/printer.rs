// SPDX-License-Identifier: Apache-2.0
// Copyright (C) 2025 Michael Dippery <michael@monkey-robot.com>

//! Periodically prints a summary of the statistics gathered so far.

use crate::clock::Clock;
use crate::stats::Tracker;
use crate::view::Viewable;
use std::sync::Arc;
use std::time::Duration;
use tokio::time::{self, MissedTickBehavior};

/// Default time between summaries.
pub const DEFAULT_EVERY: Duration = Duration::from_secs(10);

/// Prints a summary on a fixed timer, independently of the fetch loop.
#[derive(Debug)]
pub struct Printer<C: Clock> {
    tracker: Arc<Tracker>,
    every: Duration,
    clock: C,
}

impl<C: Clock> Printer<C> {
    /// Creates a printer that summarizes `tracker` every `every`.
    ///
    /// `every` must be non-zero.
    pub fn new(tracker: Arc<Tracker>, every: Duration, clock: C) -> Self {
        Self {
            tracker,
            every,
            clock,
        }
    }

    /// The summary as it would be printed right now.
    pub fn render(&self) -> String {
        self.tracker.snapshot().view(&self.clock)
    }

    /// Prints a summary to stdout every interval, forever.
    ///
    /// The first summary is printed one full interval after starting.
    pub async fn run(self) {
        self.run_with(|summary| println!("{summary}\n")).await
    }

    /// Hands a summary to `sink` every interval, forever.
    pub async fn run_with<F: FnMut(String)>(self, mut sink: F) {
        let mut ticker = time::interval_at(time::Instant::now() + self.every, self.every);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        loop {
            ticker.tick().await;
            sink(self.render());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ratelimit::RateLimit;
    use crate::test_utils::FrozenClock;
    use crate::thing::Post;
    use std::sync::Mutex;

    #[test]
    fn it_renders_the_latest_snapshot() {
        let tracker = Arc::new(Tracker::default());
        let printer = Printer::new(Arc::clone(&tracker), DEFAULT_EVERY, FrozenClock::default());

        assert!(printer.render().starts_with("No posts yet."));

        tracker.update(vec![Post::new("Hello, gophers", "alice", 7)]);
        tracker.record_rate_limit(RateLimit::new(Some(0), None));

        let rendered = printer.render();
        assert!(rendered.starts_with("Most upvoted post: Hello, gophers"), "{rendered}");
        assert!(rendered.contains("  alice: 1 post"), "{rendered}");
        assert!(rendered.ends_with("Rate limit exceeded. Please wait for reset."), "{rendered}");
    }

    #[tokio::test(start_paused = true)]
    async fn it_waits_a_full_interval_before_the_first_summary() {
        let tracker = Arc::new(Tracker::default());
        let printer = Printer::new(tracker, DEFAULT_EVERY, FrozenClock::default());
        let summaries = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&summaries);
        let handle = tokio::spawn(printer.run_with(move |summary| {
            sink.lock().unwrap().push(summary);
        }));

        time::sleep(DEFAULT_EVERY - Duration::from_millis(1)).await;
        assert!(summaries.lock().unwrap().is_empty());

        time::sleep(Duration::from_millis(2)).await;
        assert_eq!(summaries.lock().unwrap().len(), 1);

        handle.abort();
    }

    #[tokio::test(start_paused = true)]
    async fn it_prints_once_per_interval_with_the_latest_stats() {
        let tracker = Arc::new(Tracker::default());
        let printer = Printer::new(Arc::clone(&tracker), DEFAULT_EVERY, FrozenClock::default());
        let summaries = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&summaries);
        let handle = tokio::spawn(printer.run_with(move |summary| {
            sink.lock().unwrap().push(summary);
        }));

        time::sleep(DEFAULT_EVERY + Duration::from_millis(1)).await;
        tracker.update(vec![Post::new("Hello, gophers", "alice", 7)]);
        time::sleep(DEFAULT_EVERY * 2).await;

        let summaries = summaries.lock().unwrap();
        assert_eq!(summaries.len(), 3);
        assert!(summaries[0].starts_with("No posts yet."), "{}", summaries[0]);
        assert!(summaries[1].starts_with("Most upvoted post: Hello, gophers"), "{}", summaries[1]);
        assert!(summaries[2].contains("  alice: 1 post"), "{}", summaries[2]);

        handle.abort();
    }
}
