use compact_str::CompactString;
use rustc_hash::FxHashSet;

use super::effect::Effect;
use super::menu::{self, MenuEntry, MenuRow};
use super::workspace::WorkspaceRegistry;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusTarget {
    Sidebar,
    Workbench,
}

#[derive(Debug, Clone)]
pub enum InputDialogKind {
    GotoPath,
    EditField {
        workspace_id: CompactString,
        view_id: CompactString,
    },
}

#[derive(Debug, Clone, Default)]
pub struct InputDialogState {
    pub visible: bool,
    pub kind: Option<InputDialogKind>,
    pub title: String,
    pub text: String,
    pub cursor: usize,
    pub error: Option<String>,
}

impl InputDialogState {
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn open(&mut self, kind: InputDialogKind, title: String, text: String) {
        self.visible = true;
        self.kind = Some(kind);
        self.title = title;
        self.cursor = text.chars().count();
        self.text = text;
        self.error = None;
    }

    // Cursor is a char index; edits map it to a byte offset.
    fn byte_offset(&self) -> usize {
        self.text
            .char_indices()
            .nth(self.cursor)
            .map_or(self.text.len(), |(i, _)| i)
    }

    pub fn insert_char(&mut self, ch: char) -> bool {
        if !self.visible {
            return false;
        }
        let at = self.byte_offset();
        self.text.insert(at, ch);
        self.cursor += 1;
        self.error = None;
        true
    }

    pub fn backspace(&mut self) -> bool {
        if !self.visible || self.cursor == 0 {
            return false;
        }
        self.cursor -= 1;
        let at = self.byte_offset();
        self.text.remove(at);
        self.error = None;
        true
    }

    pub fn cursor_left(&mut self) -> bool {
        if !self.visible || self.cursor == 0 {
            return false;
        }
        self.cursor -= 1;
        true
    }

    pub fn cursor_right(&mut self) -> bool {
        if !self.visible || self.cursor >= self.text.chars().count() {
            return false;
        }
        self.cursor += 1;
        true
    }
}

#[derive(Debug, Clone)]
pub enum PendingAction {
    CloseWorkspace {
        id: CompactString,
    },
    CloseView {
        workspace_id: CompactString,
        id: CompactString,
    },
}

/// Modal prompt shown before a destructive close. The kernel owns all of the
/// user-facing strings so every shell renders the same dialog.
#[derive(Debug, Clone, Default)]
pub struct ConfirmDialogState {
    pub visible: bool,
    pub title: String,
    pub message: String,
    pub confirm_label: String,
    pub on_confirm: Option<PendingAction>,
}

impl ConfirmDialogState {
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn open(&mut self, title: &str, message: &str, confirm_label: &str, action: PendingAction) {
        self.visible = true;
        self.title = title.to_string();
        self.message = message.to_string();
        self.confirm_label = confirm_label.to_string();
        self.on_confirm = Some(action);
    }
}

/// Sidebar over the static menu tree: cached flattened rows, a selection, and
/// the expanded-group set.
#[derive(Debug)]
pub struct SidebarState {
    expanded: FxHashSet<&'static str>,
    pub rows: Vec<MenuRow>,
    pub selected: usize,
    pub view_height: usize,
    pub scroll_offset: usize,
}

impl Default for SidebarState {
    fn default() -> Self {
        let mut state = Self {
            expanded: FxHashSet::default(),
            rows: Vec::new(),
            selected: 0,
            view_height: 10,
            scroll_offset: 0,
        };
        state.refresh_rows();
        state
    }
}

impl SidebarState {
    fn refresh_rows(&mut self) {
        self.rows = menu::flatten_for_view(&self.expanded);
        self.selected = self.selected.min(self.rows.len().saturating_sub(1));
        self.clamp_scroll();
    }

    pub fn selected_entry(&self) -> Option<&'static MenuEntry> {
        self.rows.get(self.selected).map(|row| row.entry)
    }

    pub fn is_expanded(&self, title: &str) -> bool {
        self.expanded.contains(title)
    }

    pub fn set_view_height(&mut self, height: usize) -> bool {
        let height = height.max(1);
        if self.view_height == height {
            return false;
        }
        self.view_height = height;
        self.keep_row_visible(self.selected);
        true
    }

    pub fn move_selection(&mut self, delta: isize) -> bool {
        if self.rows.is_empty() || delta == 0 {
            return false;
        }

        let new_index = if delta < 0 {
            self.selected.saturating_sub((-delta) as usize)
        } else {
            (self.selected + delta as usize).min(self.rows.len() - 1)
        };

        if new_index == self.selected {
            return false;
        }
        self.selected = new_index;
        self.keep_row_visible(new_index);
        true
    }

    /// Enter on a group toggles it; Enter on a leaf asks the shell to route
    /// to its href. The workspace itself is opened by path reconciliation.
    pub fn activate_selected(&mut self) -> (bool, Vec<Effect>) {
        let Some(entry) = self.selected_entry() else {
            return (false, Vec::new());
        };

        if entry.is_group() {
            return (self.toggle_group(entry.title), Vec::new());
        }

        match entry.href {
            Some(href) => (false, vec![Effect::Navigate(CompactString::from(href))]),
            None => (false, Vec::new()),
        }
    }

    pub fn collapse_selected(&mut self) -> bool {
        let Some(entry) = self.selected_entry() else {
            return false;
        };
        if entry.is_group() && self.expanded.remove(entry.title) {
            self.refresh_rows();
            return true;
        }
        false
    }

    fn toggle_group(&mut self, title: &'static str) -> bool {
        if !self.expanded.insert(title) {
            self.expanded.remove(title);
        }
        self.refresh_rows();
        true
    }

    fn clamp_scroll(&mut self) {
        let max_scroll = self.rows.len().saturating_sub(self.view_height.max(1));
        self.scroll_offset = self.scroll_offset.min(max_scroll);
    }

    fn keep_row_visible(&mut self, row_index: usize) {
        let view_height = self.view_height.max(1);
        if row_index < self.scroll_offset {
            self.scroll_offset = row_index;
        } else if row_index >= self.scroll_offset + view_height {
            self.scroll_offset = (row_index + 1).saturating_sub(view_height);
        }
        self.clamp_scroll();
    }
}

#[derive(Debug)]
pub struct UiState {
    pub focus: FocusTarget,
    pub sidebar: SidebarState,
    pub input_dialog: InputDialogState,
    pub confirm_dialog: ConfirmDialogState,
    pub should_quit: bool,
}

impl Default for UiState {
    fn default() -> Self {
        Self {
            focus: FocusTarget::Workbench,
            sidebar: SidebarState::default(),
            input_dialog: InputDialogState::default(),
            confirm_dialog: ConfirmDialogState::default(),
            should_quit: false,
        }
    }
}

#[derive(Debug)]
pub struct AppState {
    pub registry: WorkspaceRegistry,
    pub ui: UiState,
}

impl AppState {
    pub fn new(registry: WorkspaceRegistry) -> Self {
        Self {
            registry,
            ui: UiState::default(),
        }
    }
}
