//! LedgerDesk: a workspace/view state container with a terminal workbench.
//!
//! The crate is split into a headless [`kernel`] (registry, menu, store,
//! session persistence) and an optional `tui` layer that renders the
//! workbench with ratatui. Everything behind the `tui` feature is plumbing;
//! the kernel is where the semantics live.

pub mod kernel;
pub mod logging;

#[cfg(feature = "tui")]
pub mod app;
#[cfg(feature = "tui")]
pub mod tui;
