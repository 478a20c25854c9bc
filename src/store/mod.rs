//! Per-resource state containers
//!
//! [`ResourceState`] is a plain reducer over [`ResourceAction`]s, testable
//! without any I/O. [`ResourceStore`] drives it from API calls: every
//! operation marks the state as loading, calls the resource module, then
//! either applies the result or records a fixed user-facing message. The
//! technical error is only logged.

mod state;
mod resource_store;

pub use state::{ResourceAction, ResourceState};
pub use resource_store::ResourceStore;
