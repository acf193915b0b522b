// src/models/comment_tree.rs

use std::collections::HashMap;

use serde::Serialize;
use thiserror::Error;

use super::comment::{Comment, MAX_REPLY_DEPTH};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CommentTreeError {
    /// The parent is missing or appears later than the reply.
    #[error("comment {id} replies to comment {parent_id}, which is not an earlier comment of the same post")]
    OrphanReply { id: i64, parent_id: i64 },

    #[error("comment {id} is nested deeper than {max} levels")]
    TooDeep { id: i64, max: u32 },
}

/// The comments of one post arranged as a forest.
///
/// Serializes as the list of root comments, each with nested `replies`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct CommentTree {
    roots: Vec<Comment>,
}

impl CommentTree {
    /// Builds the forest from comments sorted in creation order.
    ///
    /// Every reply's parent must occur earlier in `comments`; since a comment
    /// can only be created after its parent, storage order guarantees this.
    /// No comment may sit deeper than [`MAX_REPLY_DEPTH`], which keeps the
    /// nesting shallow enough to serialize.
    pub fn from_ordered(comments: Vec<Comment>) -> Result<Self, CommentTreeError> {
        let mut index: HashMap<i64, usize> = HashMap::with_capacity(comments.len());
        let mut children: Vec<Vec<usize>> = vec![Vec::new(); comments.len()];
        let mut depths: Vec<u32> = Vec::with_capacity(comments.len());
        let mut root_positions = Vec::new();

        for (position, comment) in comments.iter().enumerate() {
            let depth = match comment.parent_id() {
                Some(parent_id) => {
                    let parent = *index.get(&parent_id).ok_or(CommentTreeError::OrphanReply {
                        id: comment.id(),
                        parent_id,
                    })?;
                    children[parent].push(position);
                    depths[parent] + 1
                }
                None => {
                    root_positions.push(position);
                    0
                }
            };
            if depth > MAX_REPLY_DEPTH {
                return Err(CommentTreeError::TooDeep {
                    id: comment.id(),
                    max: MAX_REPLY_DEPTH,
                });
            }
            depths.push(depth);
            index.insert(comment.id(), position);
        }

        // Children always sit after their parent, so filling back to front
        // finds every child subtree already assembled.
        let mut slots: Vec<Option<Comment>> = comments.into_iter().map(Some).collect();
        for position in (0..slots.len()).rev() {
            let replies: Vec<Comment> = children[position]
                .iter()
                .filter_map(|&child| slots[child].take())
                .collect();
            if let Some(comment) = slots[position].as_mut() {
                comment.replies = replies;
            }
        }

        let roots = root_positions
            .into_iter()
            .filter_map(|position| slots[position].take())
            .collect();

        Ok(Self { roots })
    }

    pub fn roots(&self) -> &[Comment] {
        &self.roots
    }

    /// Every comment exactly once, in creation order regardless of depth.
    pub fn flatten(&self) -> Vec<&Comment> {
        let mut all = Vec::new();
        let mut stack: Vec<&Comment> = self.roots.iter().collect();
        while let Some(comment) = stack.pop() {
            all.push(comment);
            stack.extend(comment.replies());
        }
        all.sort_by_key(|comment| comment.id());
        all
    }

    /// Total number of comments, replies included.
    pub fn len(&self) -> usize {
        let mut count = 0;
        let mut stack: Vec<&Comment> = self.roots.iter().collect();
        while let Some(comment) = stack.pop() {
            count += 1;
            stack.extend(comment.replies());
        }
        count
    }

    pub fn is_empty(&self) -> bool {
        self.roots.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::*;
    use crate::models::user::User;

    fn comment(id: i64, parent_id: Option<i64>) -> Comment {
        let author = User::from_parts(1, "alice".to_string(), Utc::now()).unwrap();
        let depth = u32::from(parent_id.is_some());
        Comment::from_parts(id, 10, author, parent_id, depth, format!("comment {id}"), Utc::now()).unwrap()
    }

    fn chain(len: i64) -> Vec<Comment> {
        (1..=len)
            .map(|id| comment(id, (id > 1).then_some(id - 1)))
            .collect()
    }

    #[test]
    fn empty_input_gives_empty_tree() {
        let tree = CommentTree::from_ordered(Vec::new()).unwrap();
        assert!(tree.is_empty());
        assert_eq!(tree.len(), 0);
        assert!(tree.flatten().is_empty());
    }

    #[test]
    fn chain_nests_each_reply_under_its_parent() {
        let tree =
            CommentTree::from_ordered(vec![comment(1, None), comment(2, Some(1)), comment(3, Some(2))]).unwrap();

        assert_eq!(tree.roots().len(), 1);
        let a = &tree.roots()[0];
        assert_eq!(a.id(), 1);
        assert_eq!(a.replies().len(), 1);
        let b = &a.replies()[0];
        assert_eq!(b.id(), 2);
        assert_eq!(b.replies().len(), 1);
        let c = &b.replies()[0];
        assert_eq!(c.id(), 3);
        assert!(c.replies().is_empty());
    }

    #[test]
    fn siblings_and_roots_keep_creation_order() {
        let tree = CommentTree::from_ordered(vec![
            comment(1, None),
            comment(2, None),
            comment(3, Some(1)),
            comment(4, Some(2)),
            comment(5, Some(1)),
            comment(6, Some(3)),
        ])
        .unwrap();

        let root_ids: Vec<i64> = tree.roots().iter().map(Comment::id).collect();
        assert_eq!(root_ids, vec![1, 2]);

        let first_replies: Vec<i64> = tree.roots()[0].replies().iter().map(Comment::id).collect();
        assert_eq!(first_replies, vec![3, 5]);

        let flat: Vec<i64> = tree.flatten().into_iter().map(Comment::id).collect();
        assert_eq!(flat, vec![1, 2, 3, 4, 5, 6]);
        assert_eq!(tree.len(), 6);
    }

    #[test]
    fn reply_before_parent_is_an_integrity_error() {
        let err = CommentTree::from_ordered(vec![comment(2, Some(3)), comment(3, None)]).unwrap_err();
        assert_eq!(err, CommentTreeError::OrphanReply { id: 2, parent_id: 3 });
    }

    #[test]
    fn reply_to_unknown_comment_is_an_integrity_error() {
        let err = CommentTree::from_ordered(vec![comment(1, None), comment(2, Some(99))]).unwrap_err();
        assert_eq!(err, CommentTreeError::OrphanReply { id: 2, parent_id: 99 });
    }

    #[test]
    fn serializes_as_nested_roots() {
        let tree = CommentTree::from_ordered(vec![comment(1, None), comment(2, Some(1))]).unwrap();
        let json = serde_json::to_value(&tree).unwrap();
        assert_eq!(json.as_array().unwrap().len(), 1);
        assert_eq!(json[0]["id"], 1);
        assert_eq!(json[0]["replies"][0]["id"], 2);
        assert_eq!(json[0]["replies"][0]["parent_id"], 1);
    }

    #[test]
    fn chain_at_the_depth_limit_serializes() {
        let tree = CommentTree::from_ordered(chain(i64::from(MAX_REPLY_DEPTH) + 1)).unwrap();
        assert_eq!(tree.len(), MAX_REPLY_DEPTH as usize + 1);

        let json = serde_json::to_string(&tree).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed[0]["id"], 1);
    }

    #[test]
    fn chain_past_the_depth_limit_is_an_integrity_error() {
        let err = CommentTree::from_ordered(chain(10_000)).unwrap_err();
        let first_too_deep = i64::from(MAX_REPLY_DEPTH) + 2;
        assert_eq!(
            err,
            CommentTreeError::TooDeep {
                id: first_too_deep,
                max: MAX_REPLY_DEPTH
            }
        );
    }

    #[test]
    fn very_deep_chain_is_counted_flattened_and_dropped_without_recursion() {
        let mut node = comment(20_000, Some(19_999));
        for id in (1..20_000).rev() {
            let mut parent = comment(id, (id > 1).then_some(id - 1));
            parent.replies.push(node);
            node = parent;
        }
        let tree = CommentTree { roots: vec![node] };

        assert_eq!(tree.len(), 20_000);
        let flat = tree.flatten();
        assert_eq!(flat.len(), 20_000);
        assert_eq!(flat[19_999].id(), 20_000);
        drop(flat);
        drop(tree);
    }
}
