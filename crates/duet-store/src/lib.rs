//! Remote hierarchical key-value store boundary.
//!
//! The journal persists its entries in a remote store organized as a tree of
//! named nodes, each holding a JSON value. This crate defines that boundary:
//!
//! - [`StorePath`]: validated slash-joined node paths (the store forbids a
//!   handful of characters inside node names)
//! - [`Snapshot`]: the value of a node at read time, with child iteration
//! - [`StoreClient`]: the async client trait — accepted-not-durable writes,
//!   removals, and one-shot push-style reads via [`ValueListener`]
//! - [`StoreConfig`]: endpoint and credentials, supplied once at bootstrap
//! - [`MemoryStore`]: an in-memory client for tests and local runs
//!
//! The connection lifecycle is owned by the process bootstrap: connect once,
//! share the handle across requests, shut down at exit. Consumers receive a
//! connected handle and never manage the lifecycle themselves.

pub mod client;
pub mod config;
pub mod error;
pub mod memory;
pub mod path;
pub mod probe;
pub mod snapshot;

pub use client::{StoreClient, ValueListener};
pub use config::{Credentials, StoreConfig};
pub use error::StoreError;
pub use memory::MemoryStore;
pub use path::StorePath;
pub use probe::connectivity_probe;
pub use snapshot::Snapshot;
