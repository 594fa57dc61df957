//! # CLI Layer
//!
//! This module is **one possible UI client** for pawshearts, not the application itself.
//! It is the only place that knows about stdin/stdout, exit codes and terminal styling.
//!
//! For the overall architecture, see the crate-level documentation of the library.
//!
//! ## Sessions on stdin
//!
//! Everything a session holds lives in memory, so the client is a single long-running
//! process: `pawshearts` renders the current screen, then reads stdin one line at a time.
//! Each line is one UI event (`search luna`, `login a@x.com`, `adopt 1`, `apply ...`)
//! and is parsed with clap like a command line of its own; `search` and `apply` keep
//! the rest of their line as typed. After every event that changes state the screen is
//! rendered again, followed by the event's messages.
//!
//! Invalid lines and failed operations print a message; the session keeps going. EOF,
//! `quit` or `exit` end it.
//!
//! ## Structure
//!
//! - `setup`: clap definitions for the process flags and for a single input line
//! - `commands`: startup (config, catalog, session) and the per-line dispatch
//! - `render`: templated, styled output
//! - `styles` / `templates`: the theme and the template sources

pub mod commands;
pub mod render;
pub mod setup;
mod styles;
mod templates;
