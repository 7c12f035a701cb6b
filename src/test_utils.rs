use crate::clock::{Clock, DateTime, Utc};
use crate::conf::Credentials;
use crate::http::{HTTPResult, Response};
use crate::reddit::{Service, Token};
use reqwest::StatusCode;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use std::fs;
use std::sync::atomic::{AtomicUsize, Ordering};

pub fn do_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

pub fn load_data(file: &str) -> String {
    fs::read_to_string(format!("tests/data/{file}.json")).expect("could not find test data")
}

/// Answers every request with canned data from `tests/data`.
///
/// Token requests read `token_<suffix>.json` and listing requests read
/// `new_<suffix>.json`. A missing file is served as an empty body.
#[derive(Debug)]
pub struct TestService<'a> {
    suffix: &'a str,
    status: StatusCode,
    headers: HeaderMap,
    requests: AtomicUsize,
}

impl<'a> TestService<'a> {
    pub fn new(suffix: &'a str) -> Self {
        Self {
            suffix,
            status: StatusCode::OK,
            headers: HeaderMap::new(),
            requests: AtomicUsize::new(0),
        }
    }

    pub fn status(self, status: StatusCode) -> Self {
        Self { status, ..self }
    }

    pub fn header(mut self, name: &str, value: &str) -> Self {
        let name = HeaderName::from_bytes(name.as_bytes()).expect("invalid header name");
        let value = HeaderValue::from_str(value).expect("invalid header value");
        self.headers.insert(name, value);
        self
    }

    /// Number of requests made so far.
    pub fn requests(&self) -> usize {
        self.requests.load(Ordering::SeqCst)
    }

    fn respond(&self, kind: &str) -> HTTPResult<Response> {
        self.requests.fetch_add(1, Ordering::SeqCst);
        let body = fs::read_to_string(format!("tests/data/{kind}_{}.json", self.suffix))
            .unwrap_or_default();
        Ok(Response::new(self.status, self.headers.clone(), body))
    }
}

impl<'a> Service for TestService<'a> {
    async fn access_token(&self, _credentials: &Credentials) -> HTTPResult<Response> {
        self.respond("token")
    }

    async fn new_posts(&self, _subreddit: &str, _token: &Token) -> HTTPResult<Response> {
        self.respond("new")
    }
}

#[derive(Debug)]
pub struct FrozenClock {
    datetime: DateTime<Utc>,
}

impl FrozenClock {
    pub fn new(datetime: DateTime<Utc>) -> Self {
        FrozenClock { datetime }
    }
}

impl Default for FrozenClock {
    fn default() -> Self {
        let datetime = DateTime::parse_from_rfc3339("2024-10-16T10:13:00-07:00")
            .expect("invalid date supplied")
            .with_timezone(&Utc);
        Self::new(datetime)
    }
}

impl Clock for FrozenClock {
    fn now(&self) -> DateTime<Utc> {
        self.datetime
    }
}
