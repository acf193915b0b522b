// src/models/comment.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{
    post::Post,
    user::User,
    validation::{ValidationError, non_empty},
};

/// Deepest allowed reply level. Root comments sit at depth 0.
pub const MAX_REPLY_DEPTH: u32 = 50;

/// A persisted comment.
///
/// `replies` holds direct children and is only populated when the comment
/// comes out of a [`CommentTree`](super::comment_tree::CommentTree).
/// It is never written to storage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Comment {
    id: i64,
    post_id: i64,
    author: User,

    /// The comment being replied to; `None` for root comments.
    parent_id: Option<i64>,

    #[serde(skip)]
    depth: u32,

    text: String,
    created_at: DateTime<Utc>,
    pub(crate) replies: Vec<Comment>,
}

// Long reply chains would otherwise be dropped one stack frame per level.
impl Drop for Comment {
    fn drop(&mut self) {
        let mut pending = std::mem::take(&mut self.replies);
        while let Some(mut comment) = pending.pop() {
            pending.append(&mut comment.replies);
        }
    }
}

impl Comment {
    pub(crate) fn from_parts(
        id: i64,
        post_id: i64,
        author: User,
        parent_id: Option<i64>,
        depth: u32,
        text: String,
        created_at: DateTime<Utc>,
    ) -> Result<Self, ValidationError> {
        Ok(Self {
            id,
            post_id,
            author,
            parent_id,
            depth,
            text: non_empty("text", text)?,
            created_at,
            replies: Vec::new(),
        })
    }

    pub fn id(&self) -> i64 {
        self.id
    }

    pub fn post_id(&self) -> i64 {
        self.post_id
    }

    pub fn author(&self) -> &User {
        &self.author
    }

    pub fn parent_id(&self) -> Option<i64> {
        self.parent_id
    }

    /// Number of ancestors.
    pub fn depth(&self) -> u32 {
        self.depth
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn replies(&self) -> &[Comment] {
        &self.replies
    }

    pub fn is_reply(&self) -> bool {
        self.parent_id.is_some()
    }
}

/// A validated comment that has not been saved yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewComment {
    post_id: i64,
    author: User,
    parent_id: Option<i64>,
    depth: u32,
    text: String,
    created_at: DateTime<Utc>,
}

impl NewComment {
    /// A root comment directly on `post`.
    pub fn for_post(post: &Post, author: &User, text: impl Into<String>) -> Result<Self, ValidationError> {
        Ok(Self {
            post_id: post.id(),
            author: author.clone(),
            parent_id: None,
            depth: 0,
            text: non_empty("text", text)?,
            created_at: Utc::now(),
        })
    }

    /// A reply to `parent`. The post is always the parent's post.
    ///
    /// Fails once the reply would sit deeper than [`MAX_REPLY_DEPTH`].
    pub fn reply_to(parent: &Comment, author: &User, text: impl Into<String>) -> Result<Self, ValidationError> {
        let text = non_empty("text", text)?;
        let depth = parent.depth() + 1;
        if depth > MAX_REPLY_DEPTH {
            return Err(ValidationError::ReplyTooDeep { max: MAX_REPLY_DEPTH });
        }

        Ok(Self {
            post_id: parent.post_id(),
            author: author.clone(),
            parent_id: Some(parent.id()),
            depth,
            text,
            created_at: Utc::now(),
        })
    }

    pub fn post_id(&self) -> i64 {
        self.post_id
    }

    pub fn author(&self) -> &User {
        &self.author
    }

    pub fn parent_id(&self) -> Option<i64> {
        self.parent_id
    }

    pub fn depth(&self) -> u32 {
        self.depth
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

/// DTO for creating a comment or a reply. The text has no length limit.
#[derive(Debug, Deserialize)]
pub struct CreateCommentRequest {
    pub text: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn alice() -> User {
        User::from_parts(1, "alice".to_string(), Utc::now()).unwrap()
    }

    fn post() -> Post {
        Post::from_parts(7, "Title".to_string(), "Body".to_string(), alice(), Utc::now()).unwrap()
    }

    #[test]
    fn root_comment_has_no_parent() {
        let draft = NewComment::for_post(&post(), &alice(), "first").unwrap();
        assert_eq!(draft.post_id(), 7);
        assert_eq!(draft.parent_id(), None);
    }

    #[test]
    fn reply_inherits_post_from_parent() {
        let parent = Comment::from_parts(3, 7, alice(), None, 0, "root".to_string(), Utc::now()).unwrap();
        let draft = NewComment::reply_to(&parent, &alice(), "reply").unwrap();
        assert_eq!(draft.post_id(), 7);
        assert_eq!(draft.parent_id(), Some(3));
        assert_eq!(draft.depth(), 1);
    }

    #[test]
    fn reply_depth_is_capped() {
        let deepest =
            Comment::from_parts(9, 7, alice(), Some(8), MAX_REPLY_DEPTH - 1, "deep".to_string(), Utc::now()).unwrap();
        let last = NewComment::reply_to(&deepest, &alice(), "still fine").unwrap();
        assert_eq!(last.depth(), MAX_REPLY_DEPTH);

        let too_deep =
            Comment::from_parts(10, 7, alice(), Some(9), MAX_REPLY_DEPTH, "deepest".to_string(), Utc::now()).unwrap();
        let err = NewComment::reply_to(&too_deep, &alice(), "one more").unwrap_err();
        assert_eq!(err, ValidationError::ReplyTooDeep { max: MAX_REPLY_DEPTH });
        assert_eq!(err.field(), "parent_id");
    }

    #[test]
    fn empty_text_is_rejected() {
        let err = NewComment::for_post(&post(), &alice(), "").unwrap_err();
        assert_eq!(err.field(), "text");
    }
}
