use std::any::{Any, TypeId, type_name};

/// Visits every heap-allocated child a record owns.
pub type TraverseFn = Box<dyn Fn(&dyn Any, &mut dyn FnMut(&dyn Any)) + Send + Sync>;

/// Reports whether a record owns the given child.
pub type RelateFn = Box<dyn Fn(&dyn Any, &dyn Any) -> bool + Send + Sync>;

type SizeFn = Box<dyn Fn(&dyn Any) -> Option<usize> + Send + Sync>;

/// One descriptor-table entry: the introspection callbacks the heap
/// inspector may invoke on records of one type. The size-getter is
/// mandatory, traverse and relate are optional.
pub struct HeapDef {
    flags: u32,
    type_id: TypeId,
    type_name: &'static str,
    size: SizeFn,
    traverse: Option<TraverseFn>,
    relate: Option<RelateFn>,
}

impl HeapDef {
    /// Entry for `T` with the given size-getter, zero flags and no
    /// traverse/relate callbacks.
    pub fn for_type<T: 'static>(size: fn(&T) -> usize) -> Self {
        HeapDef {
            flags: 0,
            type_id: TypeId::of::<T>(),
            type_name: type_name::<T>(),
            size: Box::new(move |record| record.downcast_ref::<T>().map(size)),
            traverse: None,
            relate: None,
        }
    }

    pub fn with_traverse(mut self, traverse: TraverseFn) -> Self {
        self.traverse = Some(traverse);
        self
    }

    pub fn with_relate(mut self, relate: RelateFn) -> Self {
        self.relate = Some(relate);
        self
    }

    pub fn flags(&self) -> u32 {
        self.flags
    }

    pub fn type_id(&self) -> TypeId {
        self.type_id
    }

    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    /// Footprint of `record`, or `None` if it is not of this entry's type.
    pub fn size_of(&self, record: &dyn Any) -> Option<usize> {
        (self.size)(record)
    }

    pub fn traverse(&self) -> Option<&TraverseFn> {
        self.traverse.as_ref()
    }

    pub fn relate(&self) -> Option<&RelateFn> {
        self.relate.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn answer_size(_value: &u32) -> usize {
        42
    }

    #[test]
    fn test_for_type_captures_identity() {
        let def = HeapDef::for_type::<u32>(answer_size);
        assert_eq!(def.flags(), 0);
        assert_eq!(def.type_id(), TypeId::of::<u32>());
        assert!(def.traverse().is_none());
        assert!(def.relate().is_none());
    }

    #[test]
    fn test_size_of_rejects_foreign_types() {
        let def = HeapDef::for_type::<u32>(answer_size);
        assert_eq!(def.size_of(&7u32), Some(42));
        assert_eq!(def.size_of(&"not a u32"), None);
    }
}
