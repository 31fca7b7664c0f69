//! Unified error type for composition passes.
//!
//! A pass fails as a whole: a dispatcher rejection or a middleware failure at
//! any node propagates up through every fan-in barrier unchanged, and no
//! partial result is ever returned.

/// Boxed error source carried by [`GraftError`] variants.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Convenient result alias for graft operations.
pub type Result<T> = std::result::Result<T, GraftError>;

/// Unified error for a composition pass.
#[derive(Debug, thiserror::Error)]
pub enum GraftError {
    /// The real dispatcher rejected the operation.
    #[error("dispatch failed: {source}")]
    Dispatch {
        /// Underlying dispatcher failure.
        #[source]
        source: BoxError,
    },

    /// A middleware invocation failed at some node of the pass.
    #[error("middleware failed: {source}")]
    Middleware {
        /// Underlying middleware failure.
        #[source]
        source: BoxError,
    },
}

impl GraftError {
    /// Create a dispatch error from any error or message.
    pub fn dispatch(source: impl Into<BoxError>) -> Self {
        Self::Dispatch {
            source: source.into(),
        }
    }

    /// Create a middleware error from any error or message.
    pub fn middleware(source: impl Into<BoxError>) -> Self {
        Self::Middleware {
            source: source.into(),
        }
    }
}
