//! Drives the command-line program.

use crate::clock::SystemClock;
use crate::conf::Credentials;
use crate::fetch::Fetcher;
use crate::printer::{self, Printer};
use crate::reddit::{AuthError, RedditService, Service, fetch_token};
use crate::scheduler::{self, Scheduler};
use crate::stats::Tracker;
use clap::Parser;
use clap_verbosity_flag::{InfoLevel, Verbosity};
use std::process;
use std::sync::Arc;
use std::time::Duration;

/// Prints `message` and exits the program with `error_code`.
pub fn die(error_code: i32, message: &str) -> ! {
    eprintln!("{message}");
    process::exit(error_code);
}

/// Program configuration.
#[derive(Debug, Parser)]
#[command(version)]
#[command(about = "Watches a subreddit's newest posts and tallies who posts the most", long_about = None)]
pub struct Config {
    #[command(flatten)]
    verbosity: Verbosity<InfoLevel>,

    /// Subreddit to watch, without the leading "r/"
    #[arg(default_value = "golang")]
    subreddit: String,

    /// Seconds to pause between fetches
    #[arg(
        short,
        long,
        value_name = "SECS",
        default_value_t = scheduler::DEFAULT_PAUSE.as_secs(),
        value_parser = clap::value_parser!(u64).range(1..),
    )]
    interval: u64,

    /// Seconds between printed summaries
    #[arg(
        short = 'p',
        long,
        value_name = "SECS",
        default_value_t = printer::DEFAULT_EVERY.as_secs(),
        value_parser = clap::value_parser!(u64).range(1..),
    )]
    print_every: u64,
}

impl Config {
    pub fn verbosity(&self) -> Verbosity<InfoLevel> {
        self.verbosity
    }

    /// The subreddit to watch.
    ///
    /// A leading "r/" or "/r/" is tolerated and stripped.
    pub fn subreddit(&self) -> &str {
        let subreddit = self.subreddit.trim_start_matches('/');
        subreddit.strip_prefix("r/").unwrap_or(subreddit)
    }

    /// Pause between one fetch and the next.
    pub fn interval(&self) -> Duration {
        Duration::from_secs(self.interval)
    }

    /// Time between printed summaries.
    pub fn print_every(&self) -> Duration {
        Duration::from_secs(self.print_every)
    }
}

/// Runs the command-line program until the process is killed.
///
/// Exits early, with a non-zero status, if credentials are missing or an
/// access token cannot be acquired. No posts are fetched in that case.
pub async fn run(config: Config) {
    let credentials = Credentials::from_env()
        .unwrap_or_else(|err| die(1, &format!("could not read Reddit credentials: {err}")));

    if let Err(err) = watch(RedditService::default(), &credentials, &config).await {
        die(1, &format!("error fetching access token: {err}"));
    }
}

/// Acquires a token through `service`, then watches the configured
/// subreddit forever.
///
/// Only returns if the token cannot be acquired, before anything is
/// fetched or printed.
pub async fn watch<S: Service>(
    service: S,
    credentials: &Credentials,
    config: &Config,
) -> Result<(), AuthError> {
    let token = fetch_token(&service, credentials).await?;

    let tracker = Arc::new(Tracker::default());

    let printer = Printer::new(Arc::clone(&tracker), config.print_every(), SystemClock);
    tokio::spawn(printer.run());

    let fetcher = Fetcher::new(service, config.subreddit());
    Scheduler::new(fetcher, token, tracker, config.interval(), SystemClock)
        .run()
        .await;
    Ok(())
}
