//! Graft testing infrastructure.
//!
//! Common fixtures shared by the workspace's test suites: the blog-shaped
//! relation schema, operation builders, canned and failing dispatchers,
//! random fixture values, and timing helpers.
//!
//! Add it to a crate's `Cargo.toml` dev-dependencies:
//!
//! ```toml
//! [dev-dependencies]
//! graft-testkit = { workspace = true }
//! ```

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

pub mod dispatchers;
pub mod fixtures;
pub mod logging;
pub mod time;
pub mod values;

pub use dispatchers::{FailingDispatcher, StubDispatcher};
pub use fixtures::{blog_relations, test_operation};
pub use logging::init_tracing;
pub use time::wait;
pub use values::{random_email, random_id, random_sentence};
