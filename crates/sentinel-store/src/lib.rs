//! # sentinel-store
//!
//! Device-scoped persistence for the Sentinel console.
//!
//! ## Modules
//!
//! - `device` — the key-value [`DeviceStore`] trait with file and in-memory
//!   providers
//! - `keys` — the fixed keys of the persisted layout
//! - `accounts` — the registered-account repository over the `users` key
//!
//! The store is shared per device: multiple processes pointed at the same
//! data directory see each other's writes last-write-wins, with no locking
//! across processes. Within one process, mutations are serialized.

pub mod accounts;
pub mod device;
pub mod keys;

pub use accounts::AccountRepository;
pub use device::{DeviceStore, FileStore, MemoryStore};
