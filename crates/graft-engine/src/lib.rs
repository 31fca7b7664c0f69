//! Nested write-operation middleware engine.
//!
//! An ORM client accepts a single create or update call whose arguments
//! describe a whole tree of related records (a user together with its posts,
//! each post's comments, each comment's author) and returns the materialized
//! tree in one response. A plain interception hook sees only the root call
//! and the root result. This crate re-invokes one user-supplied
//! [`Middleware`] per nested write: it walks the write-argument tree to
//! discover every nested operation, correlates each with its slice of the
//! already-fetched result, runs the middleware once per present node with a
//! node-scoped [`Next`], and splices the transformed values back into a
//! single response with deterministic structure regardless of per-node
//! timing.
//!
//! ```no_run
//! use std::sync::Arc;
//! use graft_core::{Operation, RelationMap, WriteAction};
//! use graft_engine::{dispatch_fn, middleware_fn, NestedMiddleware};
//! use serde_json::json;
//!
//! # async fn demo() -> graft_core::Result<()> {
//! let relations = RelationMap::builder()
//!     .relation("User", "posts", "Post")
//!     .build();
//!
//! let logged = middleware_fn(|op: Operation, next: graft_engine::Next| async move {
//!     tracing::info!(model = %op.model, action = %op.action, "operation");
//!     next.run(op).await
//! });
//!
//! let engine = NestedMiddleware::new(logged, relations);
//! let dispatcher = Arc::new(dispatch_fn(|_op: Operation| async move {
//!     Ok(json!({ "id": 1 }))
//! }));
//!
//! let op = Operation::new(
//!     "User",
//!     WriteAction::Create,
//!     json!({ "data": { "email": "eve@example.com", "posts": { "create": { "title": "hi" } } } }),
//! );
//! let result = engine.handle(op, dispatcher).await?;
//! # let _ = result;
//! # Ok(())
//! # }
//! ```

mod engine;
mod middleware;
mod slice;
mod walk;

pub use engine::NestedMiddleware;
pub use middleware::{
    dispatch_fn, middleware_fn, Dispatcher, FnDispatcher, FnMiddleware, Middleware, Next,
};
