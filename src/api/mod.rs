//! API client module for the task backend.
//!
//! Isolates the HTTP surface of the application in one reqwest-based
//! client so the rest of the code deals in `Task` values and typed
//! errors rather than requests and status codes.

pub mod tasks;

pub use tasks::{ApiError, TaskApi};
