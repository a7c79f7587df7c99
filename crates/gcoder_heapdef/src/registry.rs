use std::any::{Any, TypeId};
use std::collections::HashMap;

use gcoder_error::HeapError;
use log::debug;

use crate::heap_def::HeapDef;

/// Descriptor table mapping record types to their introspection entries.
///
/// Built once at startup and read-only afterwards; entries are `Send + Sync`
/// so the inspector can share a built registry across threads.
#[derive(Default)]
pub struct HeapDefRegistry {
    defs: HashMap<TypeId, HeapDef>,
}

impl HeapDefRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, def: HeapDef) -> Result<(), HeapError> {
        if self.defs.contains_key(&def.type_id()) {
            return Err(HeapError::DuplicateHeapDef(def.type_name().to_string()));
        }
        debug!("registered heap def for {}", def.type_name());
        self.defs.insert(def.type_id(), def);
        Ok(())
    }

    pub fn get(&self, type_id: TypeId) -> Option<&HeapDef> {
        self.defs.get(&type_id)
    }

    /// Footprint of `record`, looked up by its type identity.
    pub fn size_of(&self, record: &dyn Any) -> Result<usize, HeapError> {
        let def = self
            .defs
            .get(&record.type_id())
            .ok_or_else(|| HeapError::UnknownType(format!("{:?}", record.type_id())))?;
        def.size_of(record)
            .ok_or_else(|| HeapError::UnknownType(def.type_name().to_string()))
    }

    pub fn len(&self) -> usize {
        self.defs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.defs.is_empty()
    }
}
