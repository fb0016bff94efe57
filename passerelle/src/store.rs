use crate::errors::Error;

use chrono::Utc;

use passerelle_models::blog::Blog;
use passerelle_models::comments::{Comment, Reply};
use passerelle_models::media::{Post, PostPayload};
use passerelle_models::EntityId;

use serde::{Deserialize, Serialize};

use strum::Display;

use tracing::debug;

/// Which collection a like should resolve its target in.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Display)]
pub enum LikeTarget {
    Post,
    Blog,
    Comment,
    Reply,
}

/// Which collection a comment attaches to.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Display)]
pub enum CommentTarget {
    Post,
    Blog,
}

/// Canonical owner of all community content.
///
/// Every mutation goes through here; views and projections only ever
/// borrow immutably. Operations validate before touching any collection,
/// so a failed call leaves the store exactly as it was.
#[derive(Deserialize, Serialize, PartialEq, Clone, Debug, Default)]
pub struct ContentStore {
    /// Most recent first.
    posts: Vec<Post>,

    /// Most recent first.
    blogs: Vec<Blog>,

    /// Last assigned id, shared by every entity kind.
    next_id: EntityId,
}

impl ContentStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn posts(&self) -> &[Post] {
        &self.posts
    }

    pub fn blogs(&self) -> &[Blog] {
        &self.blogs
    }

    pub fn post(&self, id: EntityId) -> Option<&Post> {
        self.posts.iter().find(|post| post.id == id)
    }

    pub fn blog(&self, id: EntityId) -> Option<&Blog> {
        self.blogs.iter().find(|blog| blog.id == id)
    }

    /// Publish a new post, stamped with the current time.
    pub fn create_post(
        &mut self,
        author: impl Into<String>,
        category: impl Into<String>,
        payload: PostPayload,
    ) -> Result<&Post, Error> {
        self.create_post_at(author, category, payload, Utc::now().timestamp())
    }

    /// Publish a new post with an explicit timestamp.
    ///
    /// Used when seeding a session with prior content.
    pub fn create_post_at(
        &mut self,
        author: impl Into<String>,
        category: impl Into<String>,
        payload: PostPayload,
        timestamp: i64,
    ) -> Result<&Post, Error> {
        validate_payload(&payload)?;

        let post = Post {
            id: self.assign_id(),
            author: author.into(),
            timestamp,
            category: category.into(),
            like_count: 0,
            comments: Vec::new(),
            payload,
        };

        debug!(id = post.id, kind = %post.kind(), "post published");

        self.posts.insert(0, post);

        Ok(&self.posts[0])
    }

    /// Publish a new blog, stamped with the current time.
    pub fn create_blog(
        &mut self,
        author: impl Into<String>,
        category: impl Into<String>,
        title: impl Into<String>,
        body: impl Into<String>,
    ) -> Result<&Blog, Error> {
        self.create_blog_at(author, category, title, body, Utc::now().timestamp())
    }

    /// Publish a new blog with an explicit timestamp.
    pub fn create_blog_at(
        &mut self,
        author: impl Into<String>,
        category: impl Into<String>,
        title: impl Into<String>,
        body: impl Into<String>,
        timestamp: i64,
    ) -> Result<&Blog, Error> {
        let title = title.into();
        let body = body.into();

        if !filled(&title) {
            return Err(Error::EmptyTitle);
        }

        if !filled(&body) {
            return Err(Error::EmptyBody);
        }

        let blog = Blog {
            id: self.assign_id(),
            title,
            author: author.into(),
            timestamp,
            category: category.into(),
            body,
            like_count: 0,
            comments: Vec::new(),
        };

        debug!(id = blog.id, "blog published");

        self.blogs.insert(0, blog);

        Ok(&self.blogs[0])
    }

    /// Increment the target's like count by exactly one.
    ///
    /// Not idempotent, there is no unlike. Returns the new count.
    pub fn like(&mut self, target_id: EntityId, target: LikeTarget) -> Result<u64, Error> {
        let count = match target {
            LikeTarget::Post => {
                let post = self
                    .posts
                    .iter_mut()
                    .find(|post| post.id == target_id)
                    .ok_or(Error::PostNotFound)?;

                post.like_count += 1;
                post.like_count
            }
            LikeTarget::Blog => {
                let blog = self
                    .blogs
                    .iter_mut()
                    .find(|blog| blog.id == target_id)
                    .ok_or(Error::BlogNotFound)?;

                blog.like_count += 1;
                blog.like_count
            }
            LikeTarget::Comment => {
                let comment = self.comment_mut(target_id).ok_or(Error::CommentNotFound)?;

                comment.like_count += 1;
                comment.like_count
            }
            LikeTarget::Reply => {
                let reply = self.reply_mut(target_id).ok_or(Error::ReplyNotFound)?;

                reply.like_count += 1;
                reply.like_count
            }
        };

        debug!(id = target_id, target = %target, count, "liked");

        Ok(count)
    }

    /// Append a comment under a post or blog.
    pub fn comment(
        &mut self,
        target_id: EntityId,
        target: CommentTarget,
        author: impl Into<String>,
        body: impl Into<String>,
    ) -> Result<&Comment, Error> {
        let body = body.into();

        if !filled(&body) {
            return Err(Error::EmptyBody);
        }

        // Resolve before assigning an id so a missing target leaves the
        // store untouched, id counter included.
        let index = match target {
            CommentTarget::Post => self
                .posts
                .iter()
                .position(|post| post.id == target_id)
                .ok_or(Error::PostNotFound)?,
            CommentTarget::Blog => self
                .blogs
                .iter()
                .position(|blog| blog.id == target_id)
                .ok_or(Error::BlogNotFound)?,
        };

        let comment = Comment {
            id: self.assign_id(),
            author: author.into(),
            body,
            like_count: 0,
            replies: Vec::new(),
        };

        debug!(id = comment.id, target = %target, target_id, "comment added");

        let comments = match target {
            CommentTarget::Post => &mut self.posts[index].comments,
            CommentTarget::Blog => &mut self.blogs[index].comments,
        };

        let index = comments.len();
        comments.push(comment);

        Ok(&comments[index])
    }

    /// Append a reply to a comment of a post.
    ///
    /// The comment must belong to that post, replies stay one level deep.
    pub fn reply(
        &mut self,
        post_id: EntityId,
        comment_id: EntityId,
        author: impl Into<String>,
        body: impl Into<String>,
    ) -> Result<&Reply, Error> {
        let body = body.into();

        if !filled(&body) {
            return Err(Error::EmptyBody);
        }

        let post_index = self
            .posts
            .iter()
            .position(|post| post.id == post_id)
            .ok_or(Error::PostNotFound)?;

        let comment_index = self.posts[post_index]
            .comments
            .iter()
            .position(|comment| comment.id == comment_id)
            .ok_or(Error::CommentNotFound)?;

        let id = self.assign_id();

        append_reply(
            &mut self.posts[post_index].comments[comment_index],
            id,
            author.into(),
            body,
        )
    }

    /// Append a reply to a comment of a blog.
    pub fn blog_reply(
        &mut self,
        blog_id: EntityId,
        comment_id: EntityId,
        author: impl Into<String>,
        body: impl Into<String>,
    ) -> Result<&Reply, Error> {
        let body = body.into();

        if !filled(&body) {
            return Err(Error::EmptyBody);
        }

        let blog_index = self
            .blogs
            .iter()
            .position(|blog| blog.id == blog_id)
            .ok_or(Error::BlogNotFound)?;

        let comment_index = self.blogs[blog_index]
            .comments
            .iter()
            .position(|comment| comment.id == comment_id)
            .ok_or(Error::CommentNotFound)?;

        let id = self.assign_id();

        append_reply(
            &mut self.blogs[blog_index].comments[comment_index],
            id,
            author.into(),
            body,
        )
    }

    /// Register one vote for an option of a poll post.
    ///
    /// Nothing stops a caller from voting repeatedly. Returns the option's
    /// new vote count.
    pub fn vote(&mut self, poll_post_id: EntityId, option_index: usize) -> Result<u64, Error> {
        let post = self
            .posts
            .iter_mut()
            .find(|post| post.id == poll_post_id)
            .ok_or(Error::PostNotFound)?;

        let options = match &mut post.payload {
            PostPayload::Poll { options, .. } => options,
            _ => return Err(Error::NotAPoll),
        };

        let option = options
            .get_mut(option_index)
            .ok_or(Error::OptionOutOfBounds(option_index))?;

        option.vote_count += 1;

        debug!(id = poll_post_id, option_index, count = option.vote_count, "vote cast");

        Ok(option.vote_count)
    }

    fn assign_id(&mut self) -> EntityId {
        self.next_id += 1;
        self.next_id
    }

    fn comment_mut(&mut self, id: EntityId) -> Option<&mut Comment> {
        self.posts
            .iter_mut()
            .flat_map(|post| post.comments.iter_mut())
            .chain(
                self.blogs
                    .iter_mut()
                    .flat_map(|blog| blog.comments.iter_mut()),
            )
            .find(|comment| comment.id == id)
    }

    fn reply_mut(&mut self, id: EntityId) -> Option<&mut Reply> {
        self.posts
            .iter_mut()
            .flat_map(|post| post.comments.iter_mut())
            .chain(
                self.blogs
                    .iter_mut()
                    .flat_map(|blog| blog.comments.iter_mut()),
            )
            .flat_map(|comment| comment.replies.iter_mut())
            .find(|reply| reply.id == id)
    }
}

fn append_reply(
    comment: &mut Comment,
    id: EntityId,
    author: String,
    body: String,
) -> Result<&Reply, Error> {
    let reply = Reply {
        id,
        author,
        body,
        like_count: 0,
    };

    debug!(id, comment = comment.id, "reply added");

    let index = comment.replies.len();
    comment.replies.push(reply);

    Ok(&comment.replies[index])
}

fn validate_payload(payload: &PostPayload) -> Result<(), Error> {
    match payload {
        PostPayload::Text { body } => {
            if !filled(body) {
                return Err(Error::EmptyBody);
            }
        }
        PostPayload::Video { media, .. } => {
            if !filled(media) {
                return Err(Error::EmptyMediaReference);
            }
        }
        PostPayload::Poll { question, options } => {
            if !filled(question) {
                return Err(Error::EmptyPollQuestion);
            }

            if options.len() < 2 || options.iter().any(|option| !filled(&option.text)) {
                return Err(Error::PollOptions);
            }
        }
    }

    Ok(())
}

/// Whitespace-only counts as empty everywhere.
fn filled(text: &str) -> bool {
    !text.trim().is_empty()
}
