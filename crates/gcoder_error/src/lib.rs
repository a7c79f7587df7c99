mod heap_error;
pub use heap_error::HeapError;
