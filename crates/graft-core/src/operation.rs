//! Write-operation descriptors for root and nested calls.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

/// The kind of write a node performs.
///
/// Composable actions produce or modify related records and therefore have a
/// correlated slice in the raw result. Linking actions only reference records
/// that already exist; they carry no result shape of their own and are never
/// composed into nodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum WriteAction {
    /// Create one record, or one record per list element.
    Create,
    /// Update an existing record.
    Update,
    /// Update an existing record or create it.
    Upsert,
    /// Connect an existing record or create it.
    ConnectOrCreate,
    /// Bulk-create records.
    CreateMany,
    /// Bulk-update records.
    UpdateMany,
    /// Delete a related record.
    Delete,
    /// Link an existing record.
    Connect,
    /// Unlink a related record.
    Disconnect,
    /// Replace the set of linked records.
    Set,
    /// Bulk-delete related records.
    DeleteMany,
}

impl WriteAction {
    /// Composable actions in the order nested payload keywords are scanned.
    pub const COMPOSABLE: [WriteAction; 7] = [
        WriteAction::Create,
        WriteAction::Update,
        WriteAction::Upsert,
        WriteAction::ConnectOrCreate,
        WriteAction::CreateMany,
        WriteAction::UpdateMany,
        WriteAction::Delete,
    ];

    /// Keyword used for this action in nested write payloads.
    pub const fn keyword(self) -> &'static str {
        match self {
            Self::Create => "create",
            Self::Update => "update",
            Self::Upsert => "upsert",
            Self::ConnectOrCreate => "connectOrCreate",
            Self::CreateMany => "createMany",
            Self::UpdateMany => "updateMany",
            Self::Delete => "delete",
            Self::Connect => "connect",
            Self::Disconnect => "disconnect",
            Self::Set => "set",
            Self::DeleteMany => "deleteMany",
        }
    }

    /// Parse a nested-write payload keyword.
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        match keyword {
            "create" => Some(Self::Create),
            "update" => Some(Self::Update),
            "upsert" => Some(Self::Upsert),
            "connectOrCreate" => Some(Self::ConnectOrCreate),
            "createMany" => Some(Self::CreateMany),
            "updateMany" => Some(Self::UpdateMany),
            "delete" => Some(Self::Delete),
            "connect" => Some(Self::Connect),
            "disconnect" => Some(Self::Disconnect),
            "set" => Some(Self::Set),
            "deleteMany" => Some(Self::DeleteMany),
            _ => None,
        }
    }

    /// Whether this action produces or modifies related records and so has a
    /// correlated slice in the raw result.
    pub const fn is_composable(self) -> bool {
        matches!(
            self,
            Self::Create
                | Self::Update
                | Self::Upsert
                | Self::ConnectOrCreate
                | Self::CreateMany
                | Self::UpdateMany
                | Self::Delete
        )
    }
}

impl fmt::Display for WriteAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

/// A single write operation: the root call handed to the interception hook,
/// or one nested write discovered inside another operation's arguments.
///
/// Immutable once constructed; the engine builds a fresh descriptor for every
/// node of a composition pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Operation {
    /// Logical model the operation targets.
    pub model: String,
    /// Write kind.
    pub action: WriteAction,
    /// Structured write payload, JSON-shaped.
    pub args: Value,
}

impl Operation {
    /// Build an operation descriptor.
    pub fn new(model: impl Into<String>, action: WriteAction, args: Value) -> Self {
        Self {
            model: model.into(),
            action,
            args,
        }
    }

    /// The payload object holding this operation's relation fields.
    ///
    /// Top-level create/update shapes and nested to-many updates nest it
    /// under a `data` key; nested payloads carry relation fields directly.
    /// `None` when the arguments are not object-shaped at all.
    pub fn write_payload(&self) -> Option<&Map<String, Value>> {
        let args = self.args.as_object()?;
        match args.get("data") {
            Some(Value::Object(data)) => Some(data),
            _ => Some(args),
        }
    }
}
