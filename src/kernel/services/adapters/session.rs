use std::io;
use std::path::PathBuf;

use compact_str::CompactString;
use rustc_hash::FxHashMap;
use serde::de::DeserializeOwned;

use crate::kernel::services::ports::SessionStore;
use crate::kernel::workspace::{Workspace, WorkspaceRegistry};

const APP_DIR: &str = ".ledgerdesk";
const SESSION_DIR: &str = "session";
const LOG_DIR: &str = "logs";

/// Session key holding the serialized workspace list.
pub const WORKSPACES_KEY: &str = "workspaces";
/// Session key holding the id of the active workspace.
pub const ACTIVE_WORKSPACE_KEY: &str = "active_workspace";

/// Directory session entries are persisted under.
///
/// `LEDGERDESK_SESSION_DIR` overrides the default cache location.
pub fn get_session_dir() -> Option<PathBuf> {
    if let Ok(dir) = std::env::var("LEDGERDESK_SESSION_DIR") {
        if !dir.is_empty() {
            return Some(PathBuf::from(dir));
        }
    }
    get_cache_dir().map(|dir| dir.join(APP_DIR).join(SESSION_DIR))
}

pub fn get_log_dir() -> Option<PathBuf> {
    get_cache_dir().map(|dir| dir.join(APP_DIR).join(LOG_DIR))
}

pub fn ensure_log_dir() -> io::Result<PathBuf> {
    let dir = get_log_dir().ok_or_else(|| {
        io::Error::new(io::ErrorKind::NotFound, "could not determine log directory")
    })?;
    std::fs::create_dir_all(&dir)?;
    Ok(dir)
}

fn get_cache_dir() -> Option<PathBuf> {
    #[cfg(target_os = "macos")]
    {
        std::env::var("HOME")
            .ok()
            .map(|home| PathBuf::from(home).join("Library").join("Caches"))
    }
    #[cfg(target_os = "linux")]
    {
        std::env::var("XDG_CACHE_HOME")
            .ok()
            .filter(|dir| !dir.is_empty())
            .map(PathBuf::from)
            .or_else(|| {
                std::env::var("HOME")
                    .ok()
                    .map(|home| PathBuf::from(home).join(".cache"))
            })
    }
    #[cfg(target_os = "windows")]
    {
        std::env::var("LOCALAPPDATA")
            .ok()
            .or_else(|| std::env::var("APPDATA").ok())
            .map(PathBuf::from)
    }
    #[cfg(not(any(target_os = "macos", target_os = "linux", target_os = "windows")))]
    {
        None
    }
}

/// Stores each session entry as `<key>.json` inside one directory.
pub struct FileSessionStore {
    dir: PathBuf,
}

impl FileSessionStore {
    pub fn new(dir: PathBuf) -> Self {
        Self { dir }
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl SessionStore for FileSessionStore {
    fn get(&self, key: &str) -> Option<String> {
        std::fs::read_to_string(self.path_for(key)).ok()
    }

    fn set(&mut self, key: &str, value: &str) -> io::Result<()> {
        if !self.dir.exists() {
            std::fs::create_dir_all(&self.dir)?;
        }
        std::fs::write(self.path_for(key), value)
    }
}

/// In-memory store for tests and for running with persistence disabled.
#[derive(Default)]
pub struct MemorySessionStore {
    entries: FxHashMap<String, String>,
}

impl SessionStore for MemorySessionStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> io::Result<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Saves and restores the workspace registry through a [`SessionStore`].
pub struct SessionService {
    store: Box<dyn SessionStore>,
}

impl SessionService {
    pub fn new(store: Box<dyn SessionStore>) -> Self {
        Self { store }
    }

    pub fn in_memory() -> Self {
        Self::new(Box::<MemorySessionStore>::default())
    }

    /// Picks a store from the environment.
    ///
    /// `LEDGERDESK_DISABLE_SESSION=1` or a missing session directory both
    /// fall back to the in-memory store.
    pub fn from_env() -> Self {
        if std::env::var("LEDGERDESK_DISABLE_SESSION").as_deref() == Ok("1") {
            return Self::in_memory();
        }
        match get_session_dir() {
            Some(dir) => Self::new(Box::new(FileSessionStore::new(dir))),
            None => {
                tracing::warn!("no session directory available, session disabled");
                Self::in_memory()
            }
        }
    }

    /// Best-effort flush of both session keys.
    ///
    /// Failures are logged and swallowed; callers never see them.
    pub fn save(&mut self, registry: &WorkspaceRegistry) {
        self.save_key(WORKSPACES_KEY, registry.workspaces());
        self.save_key(ACTIVE_WORKSPACE_KEY, &registry.active_workspace_id());
    }

    fn save_key<T: serde::Serialize + ?Sized>(&mut self, key: &'static str, value: &T) {
        let serialized = match serde_json::to_string(value) {
            Ok(serialized) => serialized,
            Err(err) => {
                tracing::warn!(key, error = %err, "failed to serialize session entry");
                return;
            }
        };
        if let Err(err) = self.store.set(key, &serialized) {
            tracing::warn!(key, error = %err, "failed to persist session entry");
        }
    }

    /// Rehydrates the registry.
    ///
    /// Missing or malformed entries fall back to empty state; this never
    /// fails.
    pub fn load(&self) -> WorkspaceRegistry {
        let workspaces: Vec<Workspace> = self.load_key(WORKSPACES_KEY).unwrap_or_default();
        let active: Option<CompactString> =
            self.load_key(ACTIVE_WORKSPACE_KEY).unwrap_or_default();
        WorkspaceRegistry::from_parts(workspaces, active)
    }

    fn load_key<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let raw = self.store.get(key)?;
        match serde_json::from_str(&raw) {
            Ok(value) => Some(value),
            Err(err) => {
                tracing::warn!(key, error = %err, "discarding malformed session entry");
                None
            }
        }
    }
}

#[cfg(test)]
#[path = "../../../../tests/unit/kernel/services/adapters/session.rs"]
mod tests;
