//! Comment thread reconstruction
//!
//! The backend stores comments as a flat, append-only list per track.
//! A reply is an ordinary comment whose text begins with `@<username>`.
//! The display layer rebuilds a two-level thread (top-level comments
//! plus one level of replies) by scanning for that prefix and matching
//! usernames.

use crate::types::Comment;
use serde::{Deserialize, Serialize};

/// A top-level comment with its attached replies.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommentThread {
    /// The top-level comment
    pub comment: Comment,

    /// Replies addressed to the comment's author, in posting order
    pub replies: Vec<Comment>,
}

/// Encode a reply body using the `@username` convention.
pub fn reply_text(username: &str, body: &str) -> String {
    format!("@{username} {body}")
}

/// Rebuild two-level threads from a flat comment list.
///
/// A comment whose text starts with `@<username>` attaches to the first
/// earlier top-level comment authored by `<username>`. When two
/// top-level comments share an author, replies attach to whichever is
/// found first - an accepted ambiguity of the reply convention, not a
/// defect. Replies that address nobody become top-level comments.
pub fn build_threads(comments: &[Comment]) -> Vec<CommentThread> {
    let mut threads: Vec<CommentThread> = Vec::new();

    for comment in comments {
        if let Some(target) = reply_target(&comment.text) {
            if let Some(thread) = threads.iter_mut().find(|t| t.comment.author == target) {
                thread.replies.push(comment.clone());
                continue;
            }
        }
        threads.push(CommentThread {
            comment: comment.clone(),
            replies: Vec::new(),
        });
    }

    threads
}

/// Extract the addressed username from an `@username ...` body.
fn reply_target(text: &str) -> Option<&str> {
    let rest = text.strip_prefix('@')?;
    let username = rest.split_whitespace().next()?;
    if username.is_empty() {
        None
    } else {
        Some(username)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn comment(id: &str, author: &str, text: &str) -> Comment {
        Comment {
            id: id.to_string(),
            author: author.to_string(),
            text: text.to_string(),
            posted_at: Utc::now(),
        }
    }

    #[test]
    fn plain_comments_stay_top_level() {
        let comments = vec![
            comment("1", "ana", "great beat"),
            comment("2", "ben", "love the drums"),
        ];

        let threads = build_threads(&comments);
        assert_eq!(threads.len(), 2);
        assert!(threads.iter().all(|t| t.replies.is_empty()));
    }

    #[test]
    fn reply_attaches_to_matching_author() {
        let comments = vec![
            comment("1", "ana", "great beat"),
            comment("2", "ben", "@ana agreed, the hats are crazy"),
        ];

        let threads = build_threads(&comments);
        assert_eq!(threads.len(), 1);
        assert_eq!(threads[0].comment.id, "1");
        assert_eq!(threads[0].replies.len(), 1);
        assert_eq!(threads[0].replies[0].id, "2");
    }

    #[test]
    fn duplicate_author_attaches_to_first_match() {
        // Accepted ambiguity: both top-level comments are by "ana", the
        // reply lands on the first one.
        let comments = vec![
            comment("1", "ana", "first"),
            comment("2", "ana", "second"),
            comment("3", "ben", "@ana which one did you mean?"),
        ];

        let threads = build_threads(&comments);
        assert_eq!(threads.len(), 2);
        assert_eq!(threads[0].replies.len(), 1);
        assert!(threads[1].replies.is_empty());
    }

    #[test]
    fn reply_to_unknown_author_becomes_top_level() {
        let comments = vec![comment("1", "ben", "@ghost are you there")];

        let threads = build_threads(&comments);
        assert_eq!(threads.len(), 1);
        assert!(threads[0].replies.is_empty());
    }

    #[test]
    fn reply_text_encodes_prefix() {
        assert_eq!(reply_text("ana", "agreed"), "@ana agreed");
    }

    #[test]
    fn bare_at_sign_is_not_a_reply() {
        let comments = vec![
            comment("1", "ana", "great beat"),
            comment("2", "ben", "@"),
        ];

        let threads = build_threads(&comments);
        assert_eq!(threads.len(), 2);
    }
}
