//! Failure propagation, dispatch-count guarantees, and the literal
//! substitution of "middleware returned nothing".

#![allow(clippy::unwrap_used)]

use std::sync::Arc;

use graft_core::{GraftError, Operation, WriteAction};
use graft_engine::{middleware_fn, NestedMiddleware, Next};
use graft_testkit::{
    blog_relations, init_tracing, random_email, random_sentence, test_operation,
    FailingDispatcher, StubDispatcher,
};
use serde_json::json;

fn pass_through() -> NestedMiddleware {
    NestedMiddleware::new(
        middleware_fn(|op: Operation, next: Next| async move { next.run(op).await }),
        blog_relations(),
    )
}

#[tokio::test]
async fn dispatcher_failure_rejects_the_whole_pass() {
    init_tracing();
    let engine = pass_through();

    let dispatcher = Arc::new(FailingDispatcher::new("connection reset"));
    let op = test_operation(
        "User",
        WriteAction::Create,
        json!({ "data": { "email": random_email() } }),
    );

    let err = engine.handle(op, dispatcher).await.unwrap_err();

    assert!(matches!(err, GraftError::Dispatch { .. }));
    assert_eq!(err.to_string(), "dispatch failed: connection reset");
}

#[tokio::test]
async fn nested_middleware_failure_rejects_the_whole_pass() {
    init_tracing();
    let engine = NestedMiddleware::new(
        middleware_fn(|op: Operation, next: Next| async move {
            if op.model == "Post" {
                return Err(GraftError::middleware("rejected post"));
            }
            next.run(op).await
        }),
        blog_relations(),
    );

    let email = random_email();
    let title = random_sentence();
    let dispatcher = Arc::new(StubDispatcher::new(json!({
        "id": 1,
        "email": email,
        "posts": [{ "id": 2, "title": title }],
    })));
    let op = test_operation(
        "User",
        WriteAction::Create,
        json!({
            "data": {
                "email": email,
                "posts": { "create": { "title": title } },
            }
        }),
    );

    let err = engine.handle(op, dispatcher.clone()).await.unwrap_err();

    assert!(matches!(err, GraftError::Middleware { .. }));
    assert!(err.to_string().contains("rejected post"));
    // The root dispatch had already happened; the failure surfaced afterwards.
    assert_eq!(dispatcher.call_count().await, 1);
}

#[tokio::test]
async fn skipping_next_suppresses_the_dispatch() {
    init_tracing();
    let engine = NestedMiddleware::new(
        middleware_fn(|_op: Operation, _next: Next| async move {
            Ok(Some(json!({ "cached": true })))
        }),
        blog_relations(),
    );

    let dispatcher = Arc::new(StubDispatcher::new(json!({ "id": 1 })));
    let op = test_operation(
        "User",
        WriteAction::Create,
        json!({ "data": { "email": random_email() } }),
    );

    let result = engine.handle(op, dispatcher.clone()).await.unwrap();

    assert_eq!(result, Some(json!({ "cached": true })));
    assert_eq!(dispatcher.call_count().await, 0);
}

#[tokio::test]
async fn dispatcher_runs_at_most_once_per_call() {
    init_tracing();
    let engine = pass_through();

    let email = random_email();
    let title = random_sentence();
    let bio = random_sentence();
    let dispatcher = Arc::new(StubDispatcher::new(json!({
        "id": 1,
        "email": email,
        "posts": [{ "id": 2, "title": title }],
        "profile": { "id": 3, "bio": bio },
    })));
    let op = test_operation(
        "User",
        WriteAction::Create,
        json!({
            "data": {
                "email": email,
                "posts": { "create": { "title": title } },
                "profile": { "create": { "bio": bio } },
            }
        }),
    );

    let result = engine.handle(op, dispatcher.clone()).await.unwrap();

    assert!(result.is_some());
    assert_eq!(dispatcher.call_count().await, 1);
}

#[tokio::test]
async fn child_returning_nothing_drops_the_relation_field() {
    init_tracing();
    let engine = NestedMiddleware::new(
        middleware_fn(|op: Operation, next: Next| async move {
            let model = op.model.clone();
            let result = next.run(op).await?;
            if model == "Profile" {
                return Ok(None);
            }
            Ok(result)
        }),
        blog_relations(),
    );

    let email = random_email();
    let bio = random_sentence();
    let dispatcher = Arc::new(StubDispatcher::new(json!({
        "id": 1,
        "email": email,
        "profile": { "id": 2, "bio": bio },
    })));
    let op = test_operation(
        "User",
        WriteAction::Create,
        json!({
            "data": {
                "email": email,
                "profile": { "create": { "bio": bio } },
            }
        }),
    );

    let result = engine.handle(op, dispatcher).await.unwrap();

    // "Returned nothing" is substituted verbatim: no profile key at all.
    assert_eq!(result, Some(json!({ "id": 1, "email": email })));
}

#[tokio::test]
async fn child_returning_nothing_nulls_list_elements() {
    init_tracing();
    let engine = NestedMiddleware::new(
        middleware_fn(|op: Operation, next: Next| async move {
            let model = op.model.clone();
            let result = next.run(op).await?;
            if model == "Comment" {
                return Ok(None);
            }
            Ok(result)
        }),
        blog_relations(),
    );

    let title = random_sentence();
    let first = random_sentence();
    let second = random_sentence();
    let dispatcher = Arc::new(StubDispatcher::new(json!({
        "id": 1,
        "title": title,
        "comments": [
            { "id": 2, "content": first },
            { "id": 3, "content": second },
        ],
    })));
    let op = test_operation(
        "Post",
        WriteAction::Create,
        json!({
            "data": {
                "title": title,
                "comments": {
                    "create": [{ "content": first }, { "content": second }]
                },
            }
        }),
    );

    let result = engine.handle(op, dispatcher).await.unwrap();

    assert_eq!(
        result,
        Some(json!({ "id": 1, "title": title, "comments": [null, null] }))
    );
}

#[tokio::test]
async fn middleware_can_rewrite_the_operation_before_dispatch() {
    init_tracing();
    let engine = NestedMiddleware::new(
        middleware_fn(|mut op: Operation, next: Next| async move {
            if op.model == "User" {
                op.args["data"]["email"] = json!("rewritten@example.com");
            }
            next.run(op).await
        }),
        blog_relations(),
    );

    let dispatcher = Arc::new(StubDispatcher::new(json!({ "id": 1 })));
    let op = test_operation(
        "User",
        WriteAction::Create,
        json!({ "data": { "email": random_email() } }),
    );

    engine.handle(op, dispatcher.clone()).await.unwrap();

    let dispatched = dispatcher.calls().await;
    assert_eq!(dispatched.len(), 1);
    assert_eq!(
        dispatched[0].args["data"]["email"],
        json!("rewritten@example.com")
    );
}
