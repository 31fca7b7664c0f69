//! Canned dispatchers for driving the engine without a real client.

use async_trait::async_trait;
use graft_core::{GraftError, Operation};
use graft_engine::Dispatcher;
use serde_json::Value;
use tokio::sync::Mutex;

/// Dispatcher that answers every call with a canned raw result and records
/// the operations it was asked to execute.
pub struct StubDispatcher {
    result: Value,
    calls: Mutex<Vec<Operation>>,
}

impl StubDispatcher {
    /// Answer every dispatch with `result`.
    pub fn new(result: Value) -> Self {
        Self {
            result,
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Number of dispatches so far.
    pub async fn call_count(&self) -> usize {
        self.calls.lock().await.len()
    }

    /// The operations dispatched so far, in call order.
    pub async fn calls(&self) -> Vec<Operation> {
        self.calls.lock().await.clone()
    }
}

#[async_trait]
impl Dispatcher for StubDispatcher {
    async fn dispatch(&self, operation: Operation) -> Result<Value, GraftError> {
        self.calls.lock().await.push(operation);
        Ok(self.result.clone())
    }
}

/// Dispatcher that rejects every call.
pub struct FailingDispatcher {
    message: String,
}

impl FailingDispatcher {
    /// Reject every dispatch with `message`.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

#[async_trait]
impl Dispatcher for FailingDispatcher {
    async fn dispatch(&self, _operation: Operation) -> Result<Value, GraftError> {
        Err(GraftError::dispatch(self.message.clone()))
    }
}
