//! # Taskdeck - Task Deck Client
//!
//! A command-line client for a task-management REST API: list, create,
//! complete, and delete tasks against an HTTP backend.
//!
//! ## Features
//!
//! - **Task Management**: Create, toggle, and delete tasks over HTTP
//! - **Filtered Views**: Render the list under `all`, `active`, or `completed`
//! - **Refresh After Write**: Every mutation re-fetches the filtered collection
//! - **Configuration**: Interactive setup for the API base URL
//!
//! ## Usage
//!
//! ```rust,no_run
//! use taskdeck::commands::Cli;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     Cli::menu().await
//! }
//! ```

pub mod api;
pub mod commands;
pub mod libs;
