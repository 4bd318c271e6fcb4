use compact_str::CompactString;

use super::menu::{self, LANDING_PATH};
use super::services::adapters::SessionService;
use super::workspace::{list_view_id, LIST_VIEW_TITLE};
use super::{Action, AppState, Effect, NavTarget, PendingAction, WorkspaceRegistry};

const UNSAVED_CLOSE_TITLE: &str = "Perubahan Belum Disimpan";
const UNSAVED_CLOSE_PROMPT: &str =
    "Tab ini memiliki perubahan yang belum disimpan. Apakah Anda yakin ingin menutupnya?";
const UNSAVED_CLOSE_CONFIRM: &str = "Ya, Tutup";

pub struct DispatchResult {
    pub effects: Vec<Effect>,
    pub state_changed: bool,
}

pub struct Store {
    state: AppState,
    session: SessionService,
    last_saved_revision: u64,
}

impl Store {
    pub fn new(session: SessionService) -> Self {
        Self {
            state: AppState::new(WorkspaceRegistry::new()),
            session,
            last_saved_revision: 0,
        }
    }

    /// Builds a store whose registry is rehydrated from the session before
    /// the first frame.
    pub fn restore(session: SessionService) -> Self {
        let registry = session.load();
        let last_saved_revision = registry.revision();
        Self {
            state: AppState::new(registry),
            session,
            last_saved_revision,
        }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn dispatch(&mut self, action: Action) -> DispatchResult {
        let result = self.reduce(action);
        self.flush_session();
        result
    }

    fn reduce(&mut self, action: Action) -> DispatchResult {
        match action {
            Action::PathChanged { path } => DispatchResult {
                effects: Vec::new(),
                state_changed: self.reconcile_path(&path),
            },
            Action::OpenWorkspace { id, title, href } => DispatchResult {
                effects: Vec::new(),
                state_changed: self.state.registry.open_workspace(id, title, href),
            },
            Action::CloseWorkspace { id } => {
                let (state_changed, target) = self.state.registry.close_workspace(&id);
                DispatchResult {
                    effects: nav_effects(target),
                    state_changed,
                }
            }
            Action::ActivateWorkspace { id } => DispatchResult {
                effects: Vec::new(),
                state_changed: self.state.registry.set_active_workspace(&id),
            },
            Action::OpenView {
                workspace_id,
                id,
                title,
                href,
                seed,
            } => DispatchResult {
                effects: Vec::new(),
                state_changed: self
                    .state
                    .registry
                    .open_view(&workspace_id, id, title, href, seed),
            },
            Action::CloseView { workspace_id, id } => {
                let (state_changed, target) = self.state.registry.close_view(&workspace_id, &id);
                DispatchResult {
                    effects: nav_effects(target),
                    state_changed,
                }
            }
            Action::ActivateView { workspace_id, id } => DispatchResult {
                effects: Vec::new(),
                state_changed: self.state.registry.set_active_view(&workspace_id, &id),
            },
            Action::UpdateViewData {
                workspace_id,
                view_id,
                patch,
            } => DispatchResult {
                effects: Vec::new(),
                state_changed: self
                    .state
                    .registry
                    .update_view_data(&workspace_id, &view_id, patch),
            },
            Action::MarkViewDirty {
                workspace_id,
                view_id,
                dirty,
            } => DispatchResult {
                effects: Vec::new(),
                state_changed: self
                    .state
                    .registry
                    .mark_view_dirty(&workspace_id, &view_id, dirty),
            },
            Action::RequestCloseWorkspace { id } => {
                let Some(workspace) = self.state.registry.workspace(&id) else {
                    return DispatchResult {
                        effects: Vec::new(),
                        state_changed: false,
                    };
                };

                if workspace.has_dirty_views() {
                    self.state.ui.confirm_dialog.open(
                        UNSAVED_CLOSE_TITLE,
                        UNSAVED_CLOSE_PROMPT,
                        UNSAVED_CLOSE_CONFIRM,
                        PendingAction::CloseWorkspace { id },
                    );
                    return DispatchResult {
                        effects: Vec::new(),
                        state_changed: true,
                    };
                }

                let (state_changed, target) = self.state.registry.close_workspace(&id);
                DispatchResult {
                    effects: nav_effects(target),
                    state_changed,
                }
            }
            Action::RequestCloseView { workspace_id, id } => {
                let Some(view) = self
                    .state
                    .registry
                    .workspace(&workspace_id)
                    .and_then(|workspace| workspace.view(&id))
                else {
                    return DispatchResult {
                        effects: Vec::new(),
                        state_changed: false,
                    };
                };

                if view.is_dirty {
                    self.state.ui.confirm_dialog.open(
                        UNSAVED_CLOSE_TITLE,
                        UNSAVED_CLOSE_PROMPT,
                        UNSAVED_CLOSE_CONFIRM,
                        PendingAction::CloseView { workspace_id, id },
                    );
                    return DispatchResult {
                        effects: Vec::new(),
                        state_changed: true,
                    };
                }

                let (state_changed, target) = self.state.registry.close_view(&workspace_id, &id);
                DispatchResult {
                    effects: nav_effects(target),
                    state_changed,
                }
            }
            Action::ConfirmDialogAccept => {
                let Some(pending) = self.state.ui.confirm_dialog.on_confirm.take() else {
                    return DispatchResult {
                        effects: Vec::new(),
                        state_changed: false,
                    };
                };
                self.state.ui.confirm_dialog.reset();

                let (_, target) = match pending {
                    PendingAction::CloseWorkspace { id } => {
                        self.state.registry.close_workspace(&id)
                    }
                    PendingAction::CloseView { workspace_id, id } => {
                        self.state.registry.close_view(&workspace_id, &id)
                    }
                };

                DispatchResult {
                    effects: nav_effects(target),
                    state_changed: true,
                }
            }
            Action::ConfirmDialogCancel => {
                if !self.state.ui.confirm_dialog.visible {
                    return DispatchResult {
                        effects: Vec::new(),
                        state_changed: false,
                    };
                }
                self.state.ui.confirm_dialog.reset();
                DispatchResult {
                    effects: Vec::new(),
                    state_changed: true,
                }
            }
            Action::SetFocus { focus } => {
                let prev = self.state.ui.focus;
                self.state.ui.focus = focus;
                DispatchResult {
                    effects: Vec::new(),
                    state_changed: focus != prev,
                }
            }
            Action::SidebarMoveSelection { delta } => DispatchResult {
                effects: Vec::new(),
                state_changed: self.state.ui.sidebar.move_selection(delta),
            },
            Action::SidebarSetViewHeight { height } => DispatchResult {
                effects: Vec::new(),
                state_changed: self.state.ui.sidebar.set_view_height(height),
            },
            Action::SidebarActivate => {
                let (state_changed, effects) = self.state.ui.sidebar.activate_selected();
                DispatchResult {
                    effects,
                    state_changed,
                }
            }
            Action::SidebarCollapse => DispatchResult {
                effects: Vec::new(),
                state_changed: self.state.ui.sidebar.collapse_selected(),
            },
            Action::InputDialogOpen { kind, title, text } => {
                self.state.ui.input_dialog.open(kind, title, text);
                DispatchResult {
                    effects: Vec::new(),
                    state_changed: true,
                }
            }
            Action::InputDialogInsert(ch) => DispatchResult {
                effects: Vec::new(),
                state_changed: self.state.ui.input_dialog.insert_char(ch),
            },
            Action::InputDialogBackspace => DispatchResult {
                effects: Vec::new(),
                state_changed: self.state.ui.input_dialog.backspace(),
            },
            Action::InputDialogCursorLeft => DispatchResult {
                effects: Vec::new(),
                state_changed: self.state.ui.input_dialog.cursor_left(),
            },
            Action::InputDialogCursorRight => DispatchResult {
                effects: Vec::new(),
                state_changed: self.state.ui.input_dialog.cursor_right(),
            },
            Action::InputDialogSetError { message } => {
                if !self.state.ui.input_dialog.visible {
                    return DispatchResult {
                        effects: Vec::new(),
                        state_changed: false,
                    };
                }
                self.state.ui.input_dialog.error = Some(message);
                DispatchResult {
                    effects: Vec::new(),
                    state_changed: true,
                }
            }
            Action::InputDialogClose => {
                if !self.state.ui.input_dialog.visible {
                    return DispatchResult {
                        effects: Vec::new(),
                        state_changed: false,
                    };
                }
                self.state.ui.input_dialog.reset();
                DispatchResult {
                    effects: Vec::new(),
                    state_changed: true,
                }
            }
            Action::Quit => {
                self.state.ui.should_quit = true;
                DispatchResult {
                    effects: Vec::new(),
                    state_changed: true,
                }
            }
        }
    }

    /// Aligns the registry with an externally driven path change.
    ///
    /// The longest menu prefix of `path` decides the owning workspace. An
    /// existing workspace is activated in place with its views and data
    /// untouched; an unknown one is opened together with its default list
    /// view. Paths outside the menu leave the registry alone.
    fn reconcile_path(&mut self, path: &str) -> bool {
        let Some(entry) = menu::resolve(path) else {
            return false;
        };
        let Some(href) = entry.href else {
            return false;
        };

        let registry = &mut self.state.registry;
        if registry.workspace(href).is_some() {
            return registry.set_active_workspace(href);
        }

        let mut changed = registry.open_workspace(href, entry.title, href);
        changed |= registry.open_view(href, list_view_id(href), LIST_VIEW_TITLE, href, None);
        changed
    }

    /// Saves the registry whenever its revision advanced past the last save.
    fn flush_session(&mut self) {
        let revision = self.state.registry.revision();
        if revision == self.last_saved_revision {
            return;
        }
        self.session.save(&self.state.registry);
        self.last_saved_revision = revision;
    }
}

fn nav_effects(target: Option<NavTarget>) -> Vec<Effect> {
    match target {
        Some(NavTarget::Path(path)) => vec![Effect::Navigate(path)],
        Some(NavTarget::Landing) => vec![Effect::Navigate(CompactString::from(LANDING_PATH))],
        None => Vec::new(),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/store.rs"]
mod tests;
