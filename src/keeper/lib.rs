//! # Keeper Architecture
//!
//! Keeper is a personal assistant for two small collections: an address
//! book of contacts and a notebook of notes. The library holds all of the
//! behaviour; the `keeper` binary is a thin interactive shell on top.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Reads command lines, prints results, handles Ctrl-C      │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Owns the loaded collections for a session                │
//! │  - Dispatches commands, drives dialogs through a Prompter   │
//! │  - Turns user errors into messages                          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs, parse.rs)                    │
//! │  - Argument disambiguation and business rules               │
//! │  - Operates on AddressBook / NoteBook, returns CmdResult    │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Domain (fields.rs, model.rs, book.rs, notebook.rs)         │
//! │  - Validated field types, Record and Note, the collections  │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - Abstract DataStore trait                                 │
//! │  - FileStore (production), InMemoryStore (testing)          │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Key Principle: No I/O Assumptions in Core
//!
//! From `api.rs` inward, code takes regular Rust values and returns
//! `Result<CmdResult>`. It never prints and never exits. Questions asked in
//! the middle of a command go through [`prompt::Prompter`], so every dialog
//! can be tested with scripted answers.
//!
//! ## Testing Strategy
//!
//! 1. **Domain and commands**: unit tests next to the code. Most of the
//!    testing lives here.
//! 2. **API**: dialog and dispatch tests against `InMemoryStore` with a
//!    `ScriptedPrompter`.
//! 3. **CLI**: `tests/` drives the binary through stdin with `assert_cmd`.
//!
//! ## Module Overview
//!
//! - [`api`]: session facade
//! - [`commands`]: one module per command, plus `CmdResult`
//! - [`parse`]: keyword sections in argument lists
//! - [`fields`], [`model`], [`book`], [`notebook`]: the domain
//! - [`store`]: persistence
//! - [`config`]: `config.json` settings
//! - [`error`]: the crate error type

pub mod api;
pub mod book;
pub mod commands;
pub mod config;
pub mod error;
pub mod fields;
pub mod model;
pub mod notebook;
pub mod parse;
pub mod prompt;
pub mod store;
