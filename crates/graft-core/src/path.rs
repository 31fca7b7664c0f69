//! Relation paths addressing slices of a raw result value.

use std::fmt;

/// One step from a node's raw value toward a nested relation slice.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PathSegment {
    /// Named relation field on a result object.
    Field(String),
    /// Positional element of a list-shaped relation.
    Index(usize),
}

/// Field/index chain from a parent node's raw value to one child slice.
///
/// The write-tree walker produces paths of the two shapes the argument tree
/// can imply: `[Field]` for single-object payloads and `[Field, Index]` for
/// list payloads, where the index binds the payload element to the
/// result-array element in argument order.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct RelationPath(Vec<PathSegment>);

impl RelationPath {
    /// Path to a single-object relation field.
    pub fn field(name: impl Into<String>) -> Self {
        Self(vec![PathSegment::Field(name.into())])
    }

    /// Path to one element of a list-shaped relation field.
    pub fn indexed(name: impl Into<String>, index: usize) -> Self {
        Self(vec![PathSegment::Field(name.into()), PathSegment::Index(index)])
    }

    /// The segments of this path, outermost first.
    pub fn segments(&self) -> &[PathSegment] {
        &self.0
    }
}

impl fmt::Display for RelationPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (position, segment) in self.0.iter().enumerate() {
            match segment {
                PathSegment::Field(name) => {
                    if position > 0 {
                        f.write_str(".")?;
                    }
                    f.write_str(name)?;
                }
                PathSegment::Index(index) => write!(f, "[{index}]")?,
            }
        }
        Ok(())
    }
}
