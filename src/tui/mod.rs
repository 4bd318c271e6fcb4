//! TUI integration layer (crossterm + ratatui).
//!
//! Kept separate from `kernel` so the core stays free of terminal crates and
//! can back other frontends.

pub mod terminal_guard;

pub use terminal_guard::TerminalGuard;
