use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HeapError {
    #[error("duplicate heap def for type: {0}")]
    DuplicateHeapDef(String),
    #[error("no heap def registered for type: {0}")]
    UnknownType(String),
}
