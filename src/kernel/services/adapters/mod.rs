//! Service adapters: concrete implementations of the ports.

pub mod session;

pub use session::{
    ensure_log_dir, get_log_dir, get_session_dir, FileSessionStore, MemorySessionStore,
    SessionService, ACTIVE_WORKSPACE_KEY, WORKSPACES_KEY,
};
