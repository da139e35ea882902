//! Blockfall (workspace facade crate).
//!
//! Re-exports the member crates under short names and hosts the pieces only
//! the binary needs: command-line parsing and the event log.

pub mod cli;
pub mod event_log;

pub use blockfall_core as core;
pub use blockfall_input as input;
pub use blockfall_term as term;
pub use blockfall_types as types;
