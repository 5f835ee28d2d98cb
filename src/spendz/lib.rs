//! # Spendz Architecture
//!
//! Spendz is a **personal expense-tracking library** with a CLI client on top.
//! Everything from the API inward works on Rust types and never touches the
//! terminal.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, formats output, handles terminal I/O   │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands                                │
//! │  - Validates raw input into a NewExpense                    │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - One module per operation, returns CmdResult              │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - ExpenseStore: in-memory snapshot, ids, queries           │
//! │  - StorageBackend: FsBackend (JSON file), MemBackend (tests)│
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Data
//!
//! An [`model::Expense`] has an `id`, a positive `amount`, a `category`, an
//! optional `note` and a calendar `date`. Records are created and deleted,
//! never edited. Ids grow monotonically.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade, entry point for all operations
//! - [`commands`]: Business logic for each command
//! - [`store`]: Expense store and storage backends
//! - [`model`]: `Expense` and the validated `NewExpense`
//! - [`config`]: `config.json` and data file resolution
//! - [`error`]: Error types
//! - `cli`: Argument parsing and output for the binary (not part of the lib API)

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod model;
pub mod store;
