//! # Paws & Hearts Architecture
//!
//! Paws & Hearts is a **UI-agnostic pet adoption marketplace library**. The terminal client
//! shipped with it is one way to drive a session; a web or GUI front-end would drive the
//! very same [`session::Session`].
//!
//! Everything lives in memory for a single session: the pets are seeded when the session
//! starts and every change is gone when it ends.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Reads one event per input line, renders the screen      │
//! │  - The ONLY place that knows about stdin/stdout/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                  │ mutations                ▲ reads
//!                  ▼                          │
//! ┌──────────────────────────────┐  ┌──────────────────────────┐
//! │  Session (session.rs)        │  │  Views (views/)          │
//! │  - Owns all mutable state    │──│  - Catalog / Dashboard   │
//! │  - Dispatches to commands    │  │  - Pure projections      │
//! └──────────────────────────────┘  └──────────────────────────┘
//!                  │
//!                  ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Sign-in/out, selection, applications, search            │
//! │  - Operates on SessionState, returns CmdResult              │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! Sign-in is delegated to an [`identity::IdentityProvider`], so the mocked provider can
//! be swapped for a real one without touching the commands.
//!
//! ## Key Principle: No I/O Assumptions in Core
//!
//! From `session.rs` inward, code never writes to stdout/stderr, never exits the process
//! and never assumes a terminal. Diagnostics go through `tracing`; whoever hosts the
//! session decides where they end up.
//!
//! ## Testing Strategy
//!
//! 1. **Commands** (`commands/*.rs`): the business rules, thoroughly unit tested.
//! 2. **Views** (`views/`): given a state, verify what is shown and which actions are enabled.
//! 3. **CLI** (`cli/` + `tests/`): line parsing, rendering, and whole sessions run through
//!    the binary.
//!
//! ## Module Overview
//!
//! - [`session`]: The coordinator, entry point for all state changes
//! - [`commands`]: Business logic for each operation
//! - [`views`]: Catalog and dashboard projections
//! - [`model`]: Core data types (`Pet`, `User`, `AdoptionApplication`)
//! - [`catalog`]: Built-in pets and catalog file loading
//! - [`identity`]: Pluggable sign-in
//! - [`config`]: Configuration file
//! - [`error`]: Error types
//! - `cli`: Line parsing, templated rendering and the event loop for the binary (not part of the lib API)

pub mod catalog;
pub mod commands;
pub mod config;
pub mod error;
pub mod identity;
pub mod model;
pub mod session;
pub mod views;
