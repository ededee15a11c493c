//! # Medialog Architecture
//!
//! Medialog is a **UI-agnostic media log library**: a single user's record of the TV shows
//! and movies they have watched, each with a name, year, genre and rating. The interactive
//! terminal session in `main.rs` is one client of this library, not the library itself.
//!
//! ## The Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Prompts, re-prompts, colored output, exit codes          │
//! │  - The ONLY place that knows about stdin/stdout/stderr      │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Owns the store and the in-memory catalog                 │
//! │  - Normalizes raw text inputs, returns CmdResult            │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Add with duplicate detection, search, statistics         │
//! │  - Operates on the Catalog, no I/O                          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - EntryStore trait                                         │
//! │  - FileStore (pipe-delimited text), InMemoryStore (tests)   │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Typed At The Edge
//!
//! Years and ratings are parsed when they enter the program, either through the
//! [`validate`] functions (interactive input) or through [`model::Field`] (text loaded
//! from the data file). A hand-edited file may contain text that does not parse; it is
//! kept verbatim as [`model::Field::Raw`] so that saving writes it back unchanged, and it
//! is skipped by rating statistics.
//!
//! ## Lifecycle
//!
//! The whole collection is loaded once when a session opens and written back wholesale
//! when it ends. There is no incremental persistence.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade, entry point for all operations
//! - [`commands`]: Business logic for each operation
//! - [`catalog`]: The in-memory ordered entry collection
//! - [`store`]: Storage abstraction and implementations
//! - [`model`]: Core data types (`Entry`, `MediaType`, `Field`)
//! - [`validate`]: Constrained integer and choice parsing
//! - [`config`]: Configuration management
//! - [`error`]: Error types

pub mod api;
pub mod catalog;
pub mod commands;
pub mod config;
pub mod error;
pub mod model;
pub mod store;
pub mod validate;
