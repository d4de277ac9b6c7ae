//! Identifier-keyed, insertion-ordered collection of posts.

use std::collections::HashMap;

use serde::Serialize;

use crate::post::Post;

/// An ordered set of posts keyed by post identifier.
///
/// Adding a post whose identifier is already present replaces the stored
/// post in place: the feed keeps one entry per identifier and the entry keeps
/// its original position. Not internally synchronized; concurrent writers
/// must lock externally.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Feed {
    posts: Vec<Post>,
    #[serde(skip)]
    index: HashMap<String, usize>,
}

impl Feed {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts `post`, or overwrites the post stored under the same identifier.
    pub fn add_post(&mut self, post: Post) -> &mut Self {
        if let Some(&slot) = self.index.get(post.identifier()) {
            tracing::trace!(post_id = post.identifier(), "replacing post already in feed");
            self.posts[slot] = post;
        } else {
            self.index
                .insert(post.identifier().to_string(), self.posts.len());
            self.posts.push(post);
        }
        self
    }

    /// Looks up a post by identifier. A miss is `None`, never an error.
    #[must_use]
    pub fn get_post(&self, identifier: &str) -> Option<&Post> {
        self.index.get(identifier).map(|&slot| &self.posts[slot])
    }

    #[must_use]
    pub fn contains(&self, identifier: &str) -> bool {
        self.index.contains_key(identifier)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.posts.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.posts.is_empty()
    }

    /// Iterates posts in insertion order. Each call starts from the first post.
    pub fn iter(&self) -> std::slice::Iter<'_, Post> {
        self.posts.iter()
    }
}

impl<'a> IntoIterator for &'a Feed {
    type Item = &'a Post;
    type IntoIter = std::slice::Iter<'a, Post>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl IntoIterator for Feed {
    type Item = Post;
    type IntoIter = std::vec::IntoIter<Post>;

    fn into_iter(self) -> Self::IntoIter {
        self.posts.into_iter()
    }
}

impl Extend<Post> for Feed {
    fn extend<I: IntoIterator<Item = Post>>(&mut self, iter: I) {
        for post in iter {
            self.add_post(post);
        }
    }
}

impl FromIterator<Post> for Feed {
    fn from_iter<I: IntoIterator<Item = Post>>(iter: I) -> Self {
        let mut feed = Feed::new();
        feed.extend(iter);
        feed
    }
}

/// A feed together with the resolved parameters that produced it.
#[derive(Debug, Clone, Serialize)]
pub struct ResultSet<P> {
    pub feed: Feed,
    pub parameters: P,
}
