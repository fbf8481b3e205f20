//! In-memory record store.
//!
//! The store owns the user accounts and attendance records the engine
//! derives from. Persistence is out of scope for this service, so the
//! store keeps everything in process memory and hands out snapshots for
//! derivation.

mod memory;

pub use memory::MemoryStore;
