//! Node composition and the externally visible nested middleware adapter.
//!
//! One code path serves every depth: the root node and each nested write run
//! the same middleware-invoker/composer pair, differing only in where their
//! raw value comes from (the one real dispatcher call at the root, a slice of
//! the already-fetched response everywhere below).

use futures::future::{self, BoxFuture, FutureExt};
use graft_core::{GraftError, Operation, RelationRegistry};
use serde_json::Value;
use std::sync::Arc;
use tracing::trace;

use crate::middleware::{Dispatcher, Middleware, Next};
use crate::slice::{slice, splice};
use crate::walk::{discover_children, RelationBinding};

/// Shared immutable state for one installed nested middleware.
pub(crate) struct EngineInner {
    pub(crate) middleware: Arc<dyn Middleware>,
    pub(crate) relations: Arc<dyn RelationRegistry>,
}

/// Where a node's unmodified raw value comes from.
pub(crate) enum RawSource {
    /// Root node: the one real dispatcher call.
    Dispatch(Arc<dyn Dispatcher>),
    /// Nested node: slice of the already-fetched response.
    Resolved(Value),
}

/// Run the full node-processing cycle for one node: invoke the middleware
/// exactly once, handing it a [`Next`] that composes this node's subtree.
pub(crate) fn process_node(
    engine: Arc<EngineInner>,
    operation: Operation,
    source: RawSource,
) -> BoxFuture<'static, Result<Option<Value>, GraftError>> {
    async move {
        trace!(model = %operation.model, action = %operation.action, "invoking middleware");
        let middleware = engine.middleware.clone();
        let next = Next { engine, source };
        middleware.handle(operation, next).await
    }
    .boxed()
}

/// Compose one node's value: resolve its raw source, fan out concurrently to
/// every nested child, and splice the children's final values back in behind
/// a per-node barrier.
pub(crate) fn compose(
    engine: Arc<EngineInner>,
    operation: Operation,
    source: RawSource,
) -> BoxFuture<'static, Result<Option<Value>, GraftError>> {
    async move {
        let raw = match source {
            RawSource::Dispatch(dispatcher) => {
                trace!(model = %operation.model, action = %operation.action, "dispatching root operation");
                dispatcher.dispatch(operation.clone()).await?
            }
            RawSource::Resolved(value) => value,
        };

        let children = discover_children(engine.relations.as_ref(), &operation);
        if children.is_empty() {
            return Ok(Some(raw));
        }
        trace!(
            model = %operation.model,
            nested = children.len(),
            "fanning out to nested writes"
        );

        // A to-many relation created from a single-object payload comes back
        // as a list: the node keeps its whole array value, but its children
        // compose against each element independently.
        match raw {
            Value::Array(elements) => {
                let composed = future::try_join_all(
                    elements
                        .into_iter()
                        .map(|element| compose_element(engine.clone(), children.clone(), element)),
                )
                .await?;
                Ok(Some(Value::Array(composed)))
            }
            other => Ok(Some(compose_element(engine, children, other).await?)),
        }
    }
    .boxed()
}

/// Fan out one raw value's children, await them all, and rebuild the value
/// with every surviving child's final value spliced in at its path.
async fn compose_element(
    engine: Arc<EngineInner>,
    children: Vec<RelationBinding>,
    raw: Value,
) -> Result<Value, GraftError> {
    let tasks: Vec<_> = children
        .into_iter()
        .filter_map(|RelationBinding { path, operation }| {
            let Some(child_raw) = slice(&raw, &path) else {
                trace!(model = %operation.model, path = %path, "relation not included, pruning node");
                return None;
            };
            let engine = engine.clone();
            Some(async move {
                let value = process_node(engine, operation, RawSource::Resolved(child_raw)).await?;
                Ok::<_, GraftError>((path, value))
            })
        })
        .collect();

    // Fan-in barrier: every sibling settles before the rebuild below, and
    // each sibling writes to a disjoint path, so completion order never
    // changes the merged structure.
    let settled = future::try_join_all(tasks).await?;

    let mut merged = raw;
    for (path, value) in settled {
        merged = splice(merged, &path, value);
    }
    Ok(merged)
}

/// Wrap a single-level interception middleware so it observes and transforms
/// every nested write produced by one call.
///
/// The handler this produces has the identical external contract as a plain
/// hook, `(operation, dispatcher) -> result`, so call sites stay unaware
/// that nesting support is active. Each call runs one composition pass over
/// a private node tree; concurrent calls share nothing mutable.
pub struct NestedMiddleware {
    inner: Arc<EngineInner>,
}

impl NestedMiddleware {
    /// Install `middleware` over the relation metadata in `relations`.
    pub fn new(
        middleware: impl Middleware + 'static,
        relations: impl RelationRegistry + 'static,
    ) -> Self {
        Self {
            inner: Arc::new(EngineInner {
                middleware: Arc::new(middleware),
                relations: Arc::new(relations),
            }),
        }
    }

    /// Handle one external call.
    ///
    /// The real dispatcher is invoked at most once, no matter how many nested
    /// nodes the arguments imply; a middleware that never calls its `next`
    /// suppresses the dispatch entirely.
    pub async fn handle(
        &self,
        operation: Operation,
        dispatcher: Arc<dyn Dispatcher>,
    ) -> Result<Option<Value>, GraftError> {
        process_node(
            self.inner.clone(),
            operation,
            RawSource::Dispatch(dispatcher),
        )
        .await
    }
}
