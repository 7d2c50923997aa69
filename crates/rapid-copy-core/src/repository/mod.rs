//! Repository Layer
//!
//! Persistence abstractions and the generic record store.

mod traits;
mod memory;
mod record_store;


pub use traits::{BackendKind, PersistenceBackend};
pub use memory::MemoryBackend;
pub use record_store::RecordStore;
pub(crate) use record_store::decode_list;
