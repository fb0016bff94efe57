use crate::store::ContentStore;

use passerelle_models::blog::Blog;
use passerelle_models::media::{Post, PostKind};
use passerelle_models::EntityId;

/// A search match, tagged with the collection it came from.
#[derive(Clone, Copy, PartialEq, Debug)]
pub enum SearchHit<'a> {
    Post(&'a Post),
    Blog(&'a Blog),
}

impl<'a> SearchHit<'a> {
    pub fn id(&self) -> EntityId {
        match self {
            SearchHit::Post(post) => post.id,
            SearchHit::Blog(blog) => blog.id,
        }
    }

    pub fn author(&self) -> &'a str {
        match self {
            SearchHit::Post(post) => &post.author,
            SearchHit::Blog(blog) => &blog.author,
        }
    }
}

/// Derived, read-only views over the store.
///
/// Borrows the store immutably, never mutates it. Results are lazy and
/// restartable: the same call against an unmutated store replays the same
/// sequence.
#[derive(Clone, Copy)]
pub struct SearchIndex<'a> {
    store: &'a ContentStore,
}

impl<'a> SearchIndex<'a> {
    pub fn new(store: &'a ContentStore) -> Self {
        Self { store }
    }

    /// Posts of one kind, store order preserved.
    pub fn by_kind(&self, kind: PostKind) -> impl Iterator<Item = &'a Post> + 'a {
        self.store
            .posts()
            .iter()
            .filter(move |post| post.kind() == kind)
    }

    /// Posts under one category label, case insensitive, store order.
    pub fn by_category(&self, label: &str) -> impl Iterator<Item = &'a Post> + 'a {
        let label = label.to_lowercase();

        self.store
            .posts()
            .iter()
            .filter(move |post| post.category.to_lowercase() == label)
    }

    /// Case-insensitive substring search over every entity's primary text.
    ///
    /// Posts match on body, caption or poll question; blogs on title or
    /// body. An empty query yields everything, posts first, store order.
    pub fn search(&self, query: &str) -> impl Iterator<Item = SearchHit<'a>> + 'a {
        let query = query.trim().to_lowercase();
        let blog_query = query.clone();

        let posts = self
            .store
            .posts()
            .iter()
            .filter(move |post| matches(post.primary_text(), &query))
            .map(SearchHit::Post);

        let blogs = self
            .store
            .blogs()
            .iter()
            .filter(move |blog| {
                matches(&blog.title, &blog_query) || matches(&blog.body, &blog_query)
            })
            .map(SearchHit::Blog);

        posts.chain(blogs)
    }

    /// The most recently created post satisfying the predicate.
    pub fn pinned<F>(&self, predicate: F) -> Option<&'a Post>
    where
        F: Fn(&Post) -> bool,
    {
        self.store.posts().iter().find(|post| predicate(post))
    }

    /// The latest post, unconditionally.
    pub fn pinned_latest(&self) -> Option<&'a Post> {
        self.pinned(|_| true)
    }
}

fn matches(text: &str, query: &str) -> bool {
    query.is_empty() || text.to_lowercase().contains(query)
}
