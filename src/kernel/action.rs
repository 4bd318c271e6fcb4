use compact_str::CompactString;

use crate::kernel::state::{FocusTarget, InputDialogKind};
use crate::kernel::workspace::ViewData;

#[derive(Debug, Clone)]
pub enum Action {
    /// External navigation happened; reconcile the registry against the menu.
    PathChanged {
        path: CompactString,
    },
    OpenWorkspace {
        id: CompactString,
        title: String,
        href: CompactString,
    },
    CloseWorkspace {
        id: CompactString,
    },
    ActivateWorkspace {
        id: CompactString,
    },
    OpenView {
        workspace_id: CompactString,
        id: CompactString,
        title: String,
        href: CompactString,
        seed: Option<ViewData>,
    },
    CloseView {
        workspace_id: CompactString,
        id: CompactString,
    },
    ActivateView {
        workspace_id: CompactString,
        id: CompactString,
    },
    UpdateViewData {
        workspace_id: CompactString,
        view_id: CompactString,
        patch: ViewData,
    },
    MarkViewDirty {
        workspace_id: CompactString,
        view_id: CompactString,
        dirty: bool,
    },
    /// Close requests run a dirty check first and may park behind the
    /// confirm dialog instead of closing immediately.
    RequestCloseWorkspace {
        id: CompactString,
    },
    RequestCloseView {
        workspace_id: CompactString,
        id: CompactString,
    },
    ConfirmDialogAccept,
    ConfirmDialogCancel,
    SetFocus {
        focus: FocusTarget,
    },
    SidebarMoveSelection {
        delta: isize,
    },
    SidebarSetViewHeight {
        height: usize,
    },
    SidebarActivate,
    SidebarCollapse,
    InputDialogOpen {
        kind: InputDialogKind,
        title: String,
        text: String,
    },
    InputDialogInsert(char),
    InputDialogBackspace,
    InputDialogCursorLeft,
    InputDialogCursorRight,
    InputDialogSetError {
        message: String,
    },
    InputDialogClose,
    Quit,
}
