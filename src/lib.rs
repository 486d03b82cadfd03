//! tui-slide (workspace facade crate).
//!
//! Re-exports the workspace crates under `tui_slide::{core,input,term,types}`
//! and hosts the application glue used by the binary: configuration, the
//! event log and the play session.

pub use tui_slide_core as core;
pub use tui_slide_input as input;
pub use tui_slide_term as term;
pub use tui_slide_types as types;

pub mod config;
pub mod event_log;
pub mod session;
