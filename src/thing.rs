//! A "thing" in the Reddit sense.
//!
//! Historically in the Reddit API and its old source code, a "Thing" was
//! any element of the Reddit system: users, posts, comments, etc. This
//! module decodes the one kind of thing we care about, posts, out of the
//! listings the Reddit API returns.

use htmlentity::entity::{self, ICodedDataTrait};
use serde::Deserialize;
use thiserror::Error;

/// A Reddit post.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Post {
    title: String,
    author: String,
    upvotes: i64,
}

impl Post {
    /// Creates a new post.
    pub fn new(title: impl Into<String>, author: impl Into<String>, upvotes: i64) -> Self {
        let title = title.into();
        let author = author.into();
        Self {
            title,
            author,
            upvotes,
        }
    }

    /// Parses the body of a listing response, such as the one returned by
    /// `/r/<subreddit>/new.json`, into a list of posts.
    ///
    /// Parsing is all-or-nothing: if any child of the listing is missing
    /// its title, author, or score, no posts are returned.
    pub fn parse_listing(body: &str) -> Result<Vec<Self>, Error> {
        let listing: Listing = serde_json::from_str(body)?;
        listing
            .data
            .children
            .into_iter()
            .map(|child| Post::from_data(child.data))
            .collect()
    }

    /// The post's title, with HTML entities decoded.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Username of the post's author.
    pub fn author(&self) -> &str {
        &self.author
    }

    /// The post's score. Can be negative.
    pub fn upvotes(&self) -> i64 {
        self.upvotes
    }

    fn from_data(data: PostData) -> Result<Self, Error> {
        let title = data.title.ok_or(Error::MissingField("title"))?;
        let author = data.author.ok_or(Error::MissingField("author"))?;
        // Reddit sometimes sends scores as floats, e.g. 42.0.
        let score = data.score.ok_or(Error::MissingField("score"))?;
        Ok(Post::new(
            convert_html_entities(&title),
            author,
            score.trunc() as i64,
        ))
    }
}

/// An error parsing data from the Reddit API.
#[derive(Debug, Error)]
pub enum Error {
    /// The body was not JSON or did not have the shape of a listing.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A post in the listing was missing a required field.
    #[error("post is missing field: {0}")]
    MissingField(&'static str),
}

#[derive(Debug, Deserialize)]
struct Listing {
    data: ListingData,
}

#[derive(Debug, Deserialize)]
struct ListingData {
    children: Vec<Child>,
}

#[derive(Debug, Deserialize)]
struct Child {
    data: PostData,
}

#[derive(Debug, Deserialize)]
struct PostData {
    title: Option<String>,
    author: Option<String>,
    score: Option<f64>,
}

// Reddit returns "&" as "&amp;", ">" as "&gt;", and so on.
fn convert_html_entities(text: &str) -> String {
    let text = text.trim();
    entity::decode(text.as_bytes())
        .to_string()
        .unwrap_or(text.to_string())
}

#[cfg(test)]
mod tests {
    mod post {
        use super::super::*;

        #[test]
        fn it_returns_its_fields() {
            let post = Post::new("Hello", "alice", -3);
            assert_eq!(post.title(), "Hello");
            assert_eq!(post.author(), "alice");
            assert_eq!(post.upvotes(), -3);
        }
    }

    mod parse_listing {
        use super::super::*;
        use crate::test_utils::load_data;

        #[test]
        fn it_parses_every_child_in_a_listing() {
            let posts = Post::parse_listing(&load_data("new_golang")).unwrap();
            let authors: Vec<_> = posts.iter().map(|post| post.author()).collect();
            assert_eq!(
                authors,
                vec!["alice", "bob", "alice", "carol", "gopher_dan"]
            );
        }

        #[test]
        fn it_truncates_floating_point_scores() {
            let posts = Post::parse_listing(&load_data("new_golang")).unwrap();
            let post = posts
                .iter()
                .find(|post| post.author() == "carol")
                .expect("no post by carol");
            assert_eq!(post.upvotes(), 42);
        }

        #[test]
        fn it_keeps_negative_scores() {
            let posts = Post::parse_listing(&load_data("new_golang")).unwrap();
            let post = posts
                .iter()
                .find(|post| post.author() == "gopher_dan")
                .expect("no post by gopher_dan");
            assert_eq!(post.upvotes(), -2);
        }

        #[test]
        fn it_decodes_html_entities_in_titles() {
            let posts = Post::parse_listing(&load_data("new_golang")).unwrap();
            assert_eq!(posts[1].title(), "Generics & iterators <3");
        }

        #[test]
        fn it_parses_an_empty_listing() {
            let body = r#"{"kind": "Listing", "data": {"children": []}}"#;
            let posts = Post::parse_listing(body).unwrap();
            assert!(posts.is_empty());
        }

        #[test]
        fn it_parses_a_single_float_score() {
            let body = r#"{"data": {"children": [
                {"data": {"title": "t", "author": "a", "score": 42.0}}
            ]}}"#;
            let posts = Post::parse_listing(body).unwrap();
            assert_eq!(posts, vec![Post::new("t", "a", 42)]);
        }

        #[test]
        fn it_rejects_listings_with_missing_fields() {
            let err = Post::parse_listing(&load_data("new_missing_score")).unwrap_err();
            assert!(matches!(err, Error::MissingField("score")), "{err:?}");
        }

        #[test]
        fn it_rejects_null_authors() {
            let body = r#"{"data": {"children": [
                {"data": {"title": "t", "author": null, "score": 1}}
            ]}}"#;
            let err = Post::parse_listing(body).unwrap_err();
            assert!(matches!(err, Error::MissingField("author")), "{err:?}");
        }

        #[test]
        fn it_rejects_fields_of_the_wrong_type() {
            let body = r#"{"data": {"children": [
                {"data": {"title": "t", "author": "a", "score": "lots"}}
            ]}}"#;
            let err = Post::parse_listing(body).unwrap_err();
            assert!(matches!(err, Error::Json(_)), "{err:?}");
        }

        #[test]
        fn it_rejects_bodies_that_are_not_listings() {
            let err = Post::parse_listing(r#"{"error": 404}"#).unwrap_err();
            assert!(matches!(err, Error::Json(_)), "{err:?}");
        }

        #[test]
        fn it_rejects_bodies_that_are_not_json() {
            let err = Post::parse_listing(&load_data("new_html")).unwrap_err();
            assert!(matches!(err, Error::Json(_)), "{err:?}");
        }
    }
}
