//! Schema fixture and operation builders.

use graft_core::{Operation, RelationMap, WriteAction};
use serde_json::Value;

/// Relation metadata for the blog-shaped schema used across the test suites:
/// users with posts and a profile, posts with comments, comments with
/// replies and an author.
pub fn blog_relations() -> RelationMap {
    RelationMap::builder()
        .relation("User", "posts", "Post")
        .relation("User", "profile", "Profile")
        .relation("Post", "author", "User")
        .relation("Post", "comments", "Comment")
        .relation("Comment", "author", "User")
        .relation("Comment", "replies", "Comment")
        .relation("Profile", "user", "User")
        .build()
}

/// Build an operation the way call sites hand them to an interception hook.
pub fn test_operation(model: &str, action: WriteAction, args: Value) -> Operation {
    Operation::new(model, action, args)
}
