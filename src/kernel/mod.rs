//! Headless application core (state/action/effect).

pub mod action;
pub mod effect;
pub mod form;
pub mod menu;
pub mod services;
pub mod state;
pub mod store;
pub mod workspace;

pub use action::Action;
pub use effect::Effect;
pub use form::FormBinding;
pub use state::{
    AppState, ConfirmDialogState, FocusTarget, InputDialogKind, InputDialogState, PendingAction,
    SidebarState, UiState,
};
pub use store::{DispatchResult, Store};
pub use workspace::{NavTarget, View, ViewData, Workspace, WorkspaceRegistry};
