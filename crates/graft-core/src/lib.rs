//! Graft core - operation and relation types for the nested middleware engine
//!
//! This crate holds the pure data model the engine is built on: write
//! operations and their action kinds, relation paths addressing slices of a
//! raw result, the relation-metadata interface the write-tree walker
//! consumes, and the unified error type. It contains no engine logic and no
//! async code.

pub mod errors;
pub mod operation;
pub mod path;
pub mod relations;

pub use errors::{BoxError, GraftError, Result};
pub use operation::{Operation, WriteAction};
pub use path::{PathSegment, RelationPath};
pub use relations::{RelationMap, RelationMapBuilder, RelationRegistry};
