//! Two-level workspace registry: feature workspaces, each holding an ordered
//! set of data views with unsaved-form state and dirty tracking.

use compact_str::{format_compact, CompactString};
use serde::{Deserialize, Serialize};
use serde_json::Value;

pub type ViewData = serde_json::Map<String, Value>;

pub const LIST_VIEW_TITLE: &str = "Daftar";
pub const NEW_FORM_VIEW_TITLE: &str = "Data Baru";

pub fn list_view_id(href: &str) -> CompactString {
    format_compact!("{href}-list")
}

pub fn new_form_view_id(href: &str) -> CompactString {
    format_compact!("{href}-new")
}

/// True when `view_id` names an edit form under `href`, i.e. it follows the
/// `{href}-edit-{record_id}` convention with a non-empty record id.
pub fn is_edit_form_view(href: &str, view_id: &str) -> bool {
    view_id
        .strip_prefix(href)
        .and_then(|rest| rest.strip_prefix("-edit-"))
        .is_some_and(|record_id| !record_id.is_empty())
}

/// Navigation intent produced by close operations. The registry never routes
/// by itself; the shell owns the router and applies these.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavTarget {
    Path(CompactString),
    Landing,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct View {
    pub id: CompactString,
    pub title: String,
    pub href: CompactString,
    #[serde(default)]
    pub data: ViewData,
    #[serde(default)]
    pub is_dirty: bool,
}

impl View {
    pub fn new(
        id: impl Into<CompactString>,
        title: impl Into<String>,
        href: impl Into<CompactString>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            href: href.into(),
            data: ViewData::new(),
            is_dirty: false,
        }
    }

    pub fn display_title(&self) -> String {
        if self.is_dirty {
            format!("\u{25cf} {}", self.title)
        } else {
            self.title.clone()
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Workspace {
    pub id: CompactString,
    pub title: String,
    pub href: CompactString,
    #[serde(default)]
    pub views: Vec<View>,
    #[serde(default)]
    pub active_view_id: Option<CompactString>,
}

impl Workspace {
    pub fn new(
        id: impl Into<CompactString>,
        title: impl Into<String>,
        href: impl Into<CompactString>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            href: href.into(),
            views: Vec::new(),
            active_view_id: None,
        }
    }

    pub fn view(&self, id: &str) -> Option<&View> {
        self.views.iter().find(|v| v.id == id)
    }

    pub fn view_mut(&mut self, id: &str) -> Option<&mut View> {
        self.views.iter_mut().find(|v| v.id == id)
    }

    pub fn active_view(&self) -> Option<&View> {
        let id = self.active_view_id.as_deref()?;
        self.view(id)
    }

    pub fn has_dirty_views(&self) -> bool {
        self.views.iter().any(|v| v.is_dirty)
    }

    /// Path the shell should route to when this workspace becomes active:
    /// the active view's href, else the workspace's own href.
    pub fn nav_href(&self) -> &str {
        self.active_view().map_or(self.href.as_str(), |v| &v.href)
    }

    fn view_index(&self, id: &str) -> Option<usize> {
        self.views.iter().position(|v| v.id == id)
    }

    /// Re-establishes the active-view invariant after rehydration: a stale id
    /// degrades to the last view, and an empty workspace to `None`.
    fn restore_active_view(&mut self) {
        let valid = self
            .active_view_id
            .as_deref()
            .is_some_and(|id| self.view_index(id).is_some());
        if !valid {
            self.active_view_id = self.views.last().map(|v| v.id.clone());
        }
    }
}

/// Ordered collection of workspaces plus the active-workspace reference.
///
/// All mutating operations are silent no-ops on unknown ids and report
/// whether anything changed; nothing here panics or returns errors.
#[derive(Debug, Default)]
pub struct WorkspaceRegistry {
    workspaces: Vec<Workspace>,
    active_id: Option<CompactString>,
    revision: u64,
}

impl WorkspaceRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuilds a registry from persisted parts, degrading references that no
    /// longer resolve instead of failing.
    pub fn from_parts(mut workspaces: Vec<Workspace>, active_id: Option<CompactString>) -> Self {
        for workspace in &mut workspaces {
            workspace.restore_active_view();
        }
        let active_id =
            active_id.filter(|id| workspaces.iter().any(|w| w.id == id.as_str()));
        Self {
            workspaces,
            active_id,
            revision: 0,
        }
    }

    pub fn workspaces(&self) -> &[Workspace] {
        &self.workspaces
    }

    pub fn is_empty(&self) -> bool {
        self.workspaces.is_empty()
    }

    pub fn len(&self) -> usize {
        self.workspaces.len()
    }

    pub fn workspace(&self, id: &str) -> Option<&Workspace> {
        self.workspaces.iter().find(|w| w.id == id)
    }

    pub fn workspace_mut(&mut self, id: &str) -> Option<&mut Workspace> {
        self.workspaces.iter_mut().find(|w| w.id == id)
    }

    pub fn active_workspace_id(&self) -> Option<&str> {
        self.active_id.as_deref()
    }

    pub fn active_workspace(&self) -> Option<&Workspace> {
        let id = self.active_id.as_deref()?;
        self.workspace(id)
    }

    /// Active view of the active workspace.
    pub fn active_view(&self) -> Option<&View> {
        self.active_workspace()?.active_view()
    }

    pub fn has_dirty_views(&self) -> bool {
        self.workspaces.iter().any(|w| w.has_dirty_views())
    }

    /// Counter bumped by every mutation that changed registry state. Lets the
    /// persistence layer flush exactly when something is stale.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    fn bump(&mut self) {
        self.revision = self.revision.saturating_add(1);
    }

    fn workspace_index(&self, id: &str) -> Option<usize> {
        self.workspaces.iter().position(|w| w.id == id)
    }

    /// Opens a workspace, deduplicating by id: an existing workspace is
    /// activated as-is, its views untouched.
    pub fn open_workspace(
        &mut self,
        id: impl Into<CompactString>,
        title: impl Into<String>,
        href: impl Into<CompactString>,
    ) -> bool {
        let id = id.into();
        if self.workspace(&id).is_some() {
            return self.set_active_workspace(&id);
        }

        self.workspaces.push(Workspace::new(id.clone(), title, href));
        self.active_id = Some(id);
        self.bump();
        true
    }

    pub fn set_active_workspace(&mut self, id: &str) -> bool {
        if self.workspace(id).is_none() || self.active_id.as_deref() == Some(id) {
            return false;
        }
        self.active_id = Some(CompactString::from(id));
        self.bump();
        true
    }

    /// Closes a workspace. When the closed workspace was active, the
    /// replacement is the nearest left neighbor (clamped to the first
    /// position) and a navigation intent for it is returned; closing the last
    /// workspace yields the landing intent. Closing an inactive workspace
    /// navigates nowhere.
    pub fn close_workspace(&mut self, id: &str) -> (bool, Option<NavTarget>) {
        let Some(index) = self.workspace_index(id) else {
            return (false, None);
        };

        let was_active = self.active_id.as_deref() == Some(id);
        self.workspaces.remove(index);
        self.bump();

        if !was_active {
            return (true, None);
        }

        if self.workspaces.is_empty() {
            self.active_id = None;
            return (true, Some(NavTarget::Landing));
        }

        let replacement = &self.workspaces[index.saturating_sub(1)];
        let target = NavTarget::Path(CompactString::from(replacement.nav_href()));
        self.active_id = Some(replacement.id.clone());
        (true, Some(target))
    }

    /// Opens a view inside a workspace, deduplicating by id: re-opening an
    /// existing view activates it and never touches its stored data.
    pub fn open_view(
        &mut self,
        workspace_id: &str,
        id: impl Into<CompactString>,
        title: impl Into<String>,
        href: impl Into<CompactString>,
        seed: Option<ViewData>,
    ) -> bool {
        let id = id.into();
        let Some(workspace) = self.workspace_mut(workspace_id) else {
            return false;
        };

        if workspace.view(&id).is_some() {
            if workspace.active_view_id.as_deref() == Some(id.as_str()) {
                return false;
            }
            workspace.active_view_id = Some(id);
            self.bump();
            return true;
        }

        let mut view = View::new(id.clone(), title, href);
        if let Some(seed) = seed {
            view.data = seed;
        }
        workspace.views.push(view);
        workspace.active_view_id = Some(id);
        self.bump();
        true
    }

    pub fn set_active_view(&mut self, workspace_id: &str, id: &str) -> bool {
        let Some(workspace) = self.workspace_mut(workspace_id) else {
            return false;
        };
        if workspace.view(id).is_none() || workspace.active_view_id.as_deref() == Some(id) {
            return false;
        }
        workspace.active_view_id = Some(CompactString::from(id));
        self.bump();
        true
    }

    /// Closes a view. When the closed view was active, the last remaining
    /// view takes over (most recently appended, unlike the workspace-level
    /// left-neighbor rule) and a navigation intent for its href is returned;
    /// closing the only view falls back to the owning workspace's href.
    pub fn close_view(&mut self, workspace_id: &str, id: &str) -> (bool, Option<NavTarget>) {
        let Some(workspace) = self.workspace_mut(workspace_id) else {
            return (false, None);
        };
        let Some(index) = workspace.view_index(id) else {
            return (false, None);
        };

        let was_active = workspace.active_view_id.as_deref() == Some(id);
        workspace.views.remove(index);

        let target = if !was_active {
            None
        } else if let Some(last) = workspace.views.last() {
            workspace.active_view_id = Some(last.id.clone());
            Some(NavTarget::Path(last.href.clone()))
        } else {
            workspace.active_view_id = None;
            Some(NavTarget::Path(workspace.href.clone()))
        };

        self.bump();
        (true, target)
    }

    /// Shallow-merges `patch` into the view's data, last write wins per key,
    /// and marks the view dirty unconditionally. Dirtiness tracks "a write
    /// happened", not whether the content differs; an identical payload still
    /// dirties the view.
    pub fn update_view_data(&mut self, workspace_id: &str, view_id: &str, patch: ViewData) -> bool {
        let Some(view) = self
            .workspace_mut(workspace_id)
            .and_then(|w| w.view_mut(view_id))
        else {
            return false;
        };

        for (key, value) in patch {
            view.data.insert(key, value);
        }
        view.is_dirty = true;
        self.bump();
        true
    }

    /// Explicit dirty override for callers that compute dirtiness themselves,
    /// e.g. a form comparing fields against the original record.
    pub fn mark_view_dirty(&mut self, workspace_id: &str, view_id: &str, dirty: bool) -> bool {
        let Some(view) = self
            .workspace_mut(workspace_id)
            .and_then(|w| w.view_mut(view_id))
        else {
            return false;
        };

        if view.is_dirty == dirty {
            return false;
        }
        view.is_dirty = dirty;
        self.bump();
        true
    }
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/workspace.rs"]
mod tests;
