//! Middleware and dispatcher seams for the nested engine.

use async_trait::async_trait;
use graft_core::{GraftError, Operation};
use serde_json::Value;
use std::future::Future;
use std::sync::Arc;

use crate::engine::{compose, EngineInner, RawSource};

/// A user-supplied interception middleware.
///
/// Invoked exactly once per present node of a composition pass: once for the
/// root call and once for every nested write that came back in the same
/// response. Whatever it returns becomes the node's final value verbatim,
/// substituted into the parent at the node's relation path; returning
/// `Ok(None)` substitutes "nothing" (the parent field is dropped), with no
/// implicit fallback to the composed value.
#[async_trait]
pub trait Middleware: Send + Sync {
    /// Observe and transform one node.
    async fn handle(&self, operation: Operation, next: Next) -> Result<Option<Value>, GraftError>;
}

/// The real operation dispatcher: executes one call against the underlying
/// client and returns its raw result, nested data included.
///
/// Precondition the engine cannot verify: list-shaped nested writes must come
/// back in argument order, since newly created rows carry no identity to
/// correlate by. Every mainstream client preserves that ordering.
#[async_trait]
pub trait Dispatcher: Send + Sync {
    /// Execute the operation and return its raw result.
    async fn dispatch(&self, operation: Operation) -> Result<Value, GraftError>;
}

/// Single-shot handle to the composed value beneath one node.
///
/// Running it drives the node composer: the root node performs the one real
/// dispatcher call, nested nodes resolve against their already-fetched slice.
/// The operation passed to [`Next::run`] is the one used for dispatch and for
/// child discovery, so a middleware may rewrite it before delegating
/// downward. Consuming `self` is what bounds the real dispatcher to at most
/// one invocation per external call.
pub struct Next {
    pub(crate) engine: Arc<EngineInner>,
    pub(crate) source: RawSource,
}

impl Next {
    /// Compose this node's value: resolve the raw source, recursively process
    /// every nested child, and splice the children's final values back in.
    /// Resolves to `None` when the node's relation was not included in the
    /// response.
    pub async fn run(self, operation: Operation) -> Result<Option<Value>, GraftError> {
        compose(self.engine, operation, self.source).await
    }
}

/// [`Middleware`] backed by an async closure.
pub struct FnMiddleware<F>(F);

#[async_trait]
impl<F, Fut> Middleware for FnMiddleware<F>
where
    F: Fn(Operation, Next) -> Fut + Send + Sync,
    Fut: Future<Output = Result<Option<Value>, GraftError>> + Send,
{
    async fn handle(&self, operation: Operation, next: Next) -> Result<Option<Value>, GraftError> {
        (self.0)(operation, next).await
    }
}

/// Adapt an async closure into a [`Middleware`].
pub fn middleware_fn<F, Fut>(f: F) -> FnMiddleware<F>
where
    F: Fn(Operation, Next) -> Fut + Send + Sync,
    Fut: Future<Output = Result<Option<Value>, GraftError>> + Send,
{
    FnMiddleware(f)
}

/// [`Dispatcher`] backed by an async closure.
pub struct FnDispatcher<F>(F);

#[async_trait]
impl<F, Fut> Dispatcher for FnDispatcher<F>
where
    F: Fn(Operation) -> Fut + Send + Sync,
    Fut: Future<Output = Result<Value, GraftError>> + Send,
{
    async fn dispatch(&self, operation: Operation) -> Result<Value, GraftError> {
        (self.0)(operation).await
    }
}

/// Adapt an async closure into a [`Dispatcher`].
pub fn dispatch_fn<F, Fut>(f: F) -> FnDispatcher<F>
where
    F: Fn(Operation) -> Fut + Send + Sync,
    Fut: Future<Output = Result<Value, GraftError>> + Send,
{
    FnDispatcher(f)
}
