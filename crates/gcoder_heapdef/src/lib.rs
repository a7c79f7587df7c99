mod heap_def;
mod registry;

pub use crate::heap_def::{HeapDef, RelateFn, TraverseFn};
pub use crate::registry::HeapDefRegistry;

use gcoder_error::HeapError;
use gcoder_heapsize::line_size;
use gcoder_line::GcodeLine;

/// Builds the descriptor table consulted by the heap inspector: one entry
/// covering [`GcodeLine`], wired to its size-getter. Traverse and relate
/// stay unset for this type.
pub fn gcoder_heapdefs() -> Result<HeapDefRegistry, HeapError> {
    let mut registry = HeapDefRegistry::new();
    registry.register(HeapDef::for_type::<GcodeLine>(line_size::<GcodeLine>))?;
    Ok(registry)
}
