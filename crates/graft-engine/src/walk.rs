//! Write-argument tree walking: discovery of nested write operations.

use graft_core::{Operation, RelationPath, RelationRegistry, WriteAction};
use serde_json::Value;

/// One nested write discovered inside a parent operation's arguments: the
/// relation path to its result slice plus the child operation itself.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct RelationBinding {
    /// Where the child's slice lives relative to the parent's raw value.
    pub(crate) path: RelationPath,
    /// The nested operation implied by the payload.
    pub(crate) operation: Operation,
}

/// Enumerate the nested writes implied by an operation's arguments.
///
/// Purely a function of the argument tree: a payload field is a nested write
/// when the registry resolves it to a related model and its value is an
/// object keyed by composable action keywords. Linking keywords (`connect`,
/// `disconnect`, `set`, `deleteMany`) reference existing records and are
/// skipped, as is any shape the walker does not recognize. A list payload
/// yields one child per element, in argument order; an empty list yields
/// none.
pub(crate) fn discover_children(
    registry: &dyn RelationRegistry,
    operation: &Operation,
) -> Vec<RelationBinding> {
    let Some(payload) = operation.write_payload() else {
        return Vec::new();
    };

    let mut children = Vec::new();
    for (field, value) in payload {
        let field = field.as_str();
        let Some(related) = registry.related_model(&operation.model, field) else {
            continue;
        };
        let Some(nested) = value.as_object() else {
            continue;
        };
        for action in WriteAction::COMPOSABLE {
            match nested.get(action.keyword()) {
                Some(Value::Array(elements)) => {
                    for (index, element) in elements.iter().enumerate() {
                        children.push(RelationBinding {
                            path: RelationPath::indexed(field, index),
                            operation: Operation::new(related, action, element.clone()),
                        });
                    }
                }
                Some(args) => children.push(RelationBinding {
                    path: RelationPath::field(field),
                    operation: Operation::new(related, action, args.clone()),
                }),
                None => {}
            }
        }
    }
    children
}
