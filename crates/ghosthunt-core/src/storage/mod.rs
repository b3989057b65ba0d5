//! Persistence.
//!
//! - `ScoreStore` - storage contract for score records
//! - `JsonFileStore`, `MemoryStore` - local implementations
//! - `RemoteSync`, `ReplicatedStore` - optional replication to a remote backend
//! - `ProfileCache` - local player profile
//! - `PersistenceWorker` - background saves with channel-based completion events

mod json_store;
mod memory;
mod profile;
mod remote;
mod replicated;
mod store;
mod worker;

pub use json_store::*;
pub use memory::*;
pub use profile::*;
pub use remote::*;
pub use replicated::*;
pub use store::*;
pub use worker::*;
