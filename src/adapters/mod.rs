//! External system integrations.
//!
//! - [`storage`] - object storage gateway (trait-based) and its Google Cloud Storage
//!   implementation
//!
//! Adapters isolate SDK types behind traits so the batch logic can be tested with
//! in-memory implementations.

pub mod storage;
