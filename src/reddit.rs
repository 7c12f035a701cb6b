//! Reddit API authentication and services for communicating with Reddit
//! over HTTP.

pub mod auth;
pub mod service;

pub use auth::{AuthError, Token, fetch_token};
pub use service::{RedditService, Service};
