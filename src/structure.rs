use serde::Deserialize;
use serde_yaml::{Mapping, Value};
use thiserror::Error;

/// Decoded structure document.
///
/// The top level must look like `{root: <mapping>}`; decoding rejects
/// anything else. Shapes below `root` are checked per node during the walk,
/// since YAML mapping keys are untyped until then.
#[derive(Debug, Deserialize)]
pub struct Structure {
    pub root: Mapping,
}

/// The raw bytes were not valid YAML, or the document does not have the
/// expected `{root: <mapping>}` top level.
#[derive(Debug, Error)]
#[error("invalid structure document: {0}")]
pub struct DecodeError(#[from] serde_yaml::Error);

/// Decode raw configuration bytes into a [`Structure`].
pub fn decode(bytes: &[u8]) -> Result<Structure, DecodeError> {
    Ok(serde_yaml::from_slice(bytes)?)
}

/// One level of the decoded tree: a subtree with named children, or a
/// terminal entry with none. Either way the entry becomes a directory.
#[derive(Debug)]
pub enum Node<'a> {
    Subtree(&'a Mapping),
    Leaf,
}

impl<'a> Node<'a> {
    /// Classify a raw value as a tree node. `None` means the value is
    /// neither a nested mapping nor an empty terminal, i.e. a shape
    /// violation the caller must report.
    pub fn classify(value: &'a Value) -> Option<Self> {
        match value {
            Value::Mapping(children) => Some(Node::Subtree(children)),
            Value::Null => Some(Node::Leaf),
            _ => None,
        }
    }
}

/// Name of a YAML value's type, for shape error messages.
pub fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Sequence(_) => "sequence",
        Value::Mapping(_) => "mapping",
        Value::Tagged(_) => "tagged value",
    }
}
