//! Workbench: the terminal shell around the kernel store.
//!
//! Owns the current path (the router the kernel never touches), feeds key
//! events into the store as actions, applies navigation effects, and renders
//! the whole frame.

use compact_str::{format_compact, CompactString};
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::layout::{Alignment, Constraint, Layout, Margin, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Tabs, Wrap};
use ratatui::Frame;
use serde_json::Value;
use unicode_width::UnicodeWidthStr;

use crate::kernel::menu::{self, LANDING_PATH};
use crate::kernel::workspace::{
    is_edit_form_view, new_form_view_id, LIST_VIEW_TITLE, NEW_FORM_VIEW_TITLE,
};
use crate::kernel::{
    Action, DispatchResult, Effect, FocusTarget, FormBinding, InputDialogKind, Store, ViewData,
};

const HEADER_HEIGHT: u16 = 1;
const STATUS_HEIGHT: u16 = 1;
const TAB_BAR_HEIGHT: u16 = 1;
const SIDEBAR_WIDTH_PERCENT: u16 = 26;
const SIDEBAR_MIN_WIDTH: u16 = 24;

pub struct Workbench {
    store: Store,
    current_path: CompactString,
    form: Option<FormBinding>,
}

impl Workbench {
    pub fn new(store: Store) -> Self {
        let initial = store
            .state()
            .registry
            .active_workspace()
            .map(|workspace| CompactString::from(workspace.nav_href()))
            .unwrap_or_else(|| CompactString::from(LANDING_PATH));

        let mut workbench = Self {
            store,
            current_path: CompactString::default(),
            form: None,
        };
        workbench.navigate(&initial);
        workbench
    }

    pub fn store(&self) -> &Store {
        &self.store
    }

    pub fn current_path(&self) -> &str {
        &self.current_path
    }

    pub fn should_quit(&self) -> bool {
        self.store.state().ui.should_quit
    }

    /// Routes to `path`: records it as the current location and lets the
    /// registry reconcile against it, then applies whatever navigation the
    /// reconciliation asked for in turn.
    pub fn navigate(&mut self, path: &str) {
        self.current_path = CompactString::from(path);
        let result = self.dispatch(Action::PathChanged {
            path: self.current_path.clone(),
        });
        self.apply_effects(result.effects);
    }

    fn dispatch(&mut self, action: Action) -> DispatchResult {
        let result = self.store.dispatch(action);
        self.sync_form();
        result
    }

    fn apply_effects(&mut self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::Navigate(path) => {
                    if path != self.current_path {
                        self.navigate(&path);
                    }
                }
            }
        }
    }

    /// Rebinds the form only when the active view identity changed. Edit
    /// views take their stored record as the clean baseline, so reverting a
    /// field to its loaded value reads as clean again; every other view,
    /// create forms included, binds without a baseline and treats any stored
    /// draft as unsaved input.
    fn sync_form(&mut self) {
        let state = self.store.state();
        let active = state
            .registry
            .active_workspace()
            .and_then(|workspace| workspace.active_view().map(|view| (workspace, view)));

        let Some((workspace, view)) = active else {
            self.form = None;
            return;
        };

        let same = self
            .form
            .as_ref()
            .is_some_and(|form| view.id == form.view_id());
        if same {
            return;
        }

        let mut binding = FormBinding::new(
            workspace.id.clone(),
            view.id.clone(),
            ViewData::new(),
            &view.data,
        );
        if is_edit_form_view(&workspace.href, &view.id) {
            binding = binding.with_baseline(view.data.clone());
        }
        self.form = Some(binding);
    }

    /// Feeds one key event through dialogs, then global keys, then the
    /// focused area. Returns whether anything on screen changed.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        if key.kind == KeyEventKind::Release {
            return false;
        }

        if self.store.state().ui.confirm_dialog.visible {
            return self.handle_confirm_dialog_key(key);
        }
        if self.store.state().ui.input_dialog.visible {
            return self.handle_input_dialog_key(key);
        }

        match (key.code, key.modifiers) {
            (KeyCode::Char('q'), KeyModifiers::CONTROL)
            | (KeyCode::Char('q'), KeyModifiers::NONE) => {
                self.dispatch(Action::Quit).state_changed
            }
            (KeyCode::Tab, _) => {
                let focus = match self.store.state().ui.focus {
                    FocusTarget::Sidebar => FocusTarget::Workbench,
                    FocusTarget::Workbench => FocusTarget::Sidebar,
                };
                self.dispatch(Action::SetFocus { focus }).state_changed
            }
            _ => match self.store.state().ui.focus {
                FocusTarget::Sidebar => self.handle_sidebar_key(key),
                FocusTarget::Workbench => self.handle_workbench_key(key),
            },
        }
    }

    fn handle_confirm_dialog_key(&mut self, key: KeyEvent) -> bool {
        match key.code {
            KeyCode::Enter => {
                let result = self.dispatch(Action::ConfirmDialogAccept);
                self.apply_effects(result.effects);
                result.state_changed
            }
            KeyCode::Esc => self.dispatch(Action::ConfirmDialogCancel).state_changed,
            _ => false,
        }
    }

    fn handle_input_dialog_key(&mut self, key: KeyEvent) -> bool {
        match key.code {
            KeyCode::Enter => self.accept_input_dialog(),
            KeyCode::Esc => self.dispatch(Action::InputDialogClose).state_changed,
            KeyCode::Backspace => self.dispatch(Action::InputDialogBackspace).state_changed,
            KeyCode::Left => self.dispatch(Action::InputDialogCursorLeft).state_changed,
            KeyCode::Right => self.dispatch(Action::InputDialogCursorRight).state_changed,
            KeyCode::Char(ch) => self.dispatch(Action::InputDialogInsert(ch)).state_changed,
            _ => false,
        }
    }

    fn handle_sidebar_key(&mut self, key: KeyEvent) -> bool {
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => self
                .dispatch(Action::SidebarMoveSelection { delta: -1 })
                .state_changed,
            KeyCode::Down | KeyCode::Char('j') => self
                .dispatch(Action::SidebarMoveSelection { delta: 1 })
                .state_changed,
            KeyCode::Left | KeyCode::Char('h') => {
                self.dispatch(Action::SidebarCollapse).state_changed
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                let result = self.dispatch(Action::SidebarActivate);
                let had_effects = !result.effects.is_empty();
                self.apply_effects(result.effects);
                result.state_changed || had_effects
            }
            _ => false,
        }
    }

    fn handle_workbench_key(&mut self, key: KeyEvent) -> bool {
        match key.code {
            KeyCode::Char('[') => self.cycle_workspace(-1),
            KeyCode::Char(']') => self.cycle_workspace(1),
            KeyCode::Char(',') => self.cycle_view(-1),
            KeyCode::Char('.') => self.cycle_view(1),
            KeyCode::Char('n') => self.open_new_form_view(),
            KeyCode::Char('w') => self.request_close_active_view(),
            KeyCode::Char('W') => self.request_close_active_workspace(),
            KeyCode::Char('e') => self.open_edit_field_dialog(),
            KeyCode::Char('g') => self.open_goto_dialog(),
            KeyCode::Char('r') => self.reset_active_form(),
            _ => false,
        }
    }

    /// Mirrors a workspace tab click: activate, then route to its href.
    fn cycle_workspace(&mut self, delta: isize) -> bool {
        let registry = &self.store.state().registry;
        let len = registry.len() as isize;
        if len < 2 {
            return false;
        }

        let current = registry
            .active_workspace_id()
            .and_then(|id| registry.workspaces().iter().position(|w| w.id == id))
            .unwrap_or(0) as isize;
        let next = (current + delta).rem_euclid(len) as usize;
        let workspace = &registry.workspaces()[next];
        let id = workspace.id.clone();
        let href = workspace.href.clone();

        self.dispatch(Action::ActivateWorkspace { id });
        self.navigate(&href);
        true
    }

    fn cycle_view(&mut self, delta: isize) -> bool {
        let state = self.store.state();
        let Some(workspace) = state.registry.active_workspace() else {
            return false;
        };
        let len = workspace.views.len() as isize;
        if len < 2 {
            return false;
        }

        let current = workspace
            .active_view()
            .and_then(|view| workspace.views.iter().position(|v| v.id == view.id))
            .unwrap_or(0) as isize;
        let next = (current + delta).rem_euclid(len) as usize;
        let target = &workspace.views[next];
        let workspace_id = workspace.id.clone();
        let id = target.id.clone();
        let href = target.href.clone();

        self.dispatch(Action::ActivateView { workspace_id, id });
        self.navigate(&href);
        true
    }

    /// Opens the active workspace's "Data Baru" form view and routes to it.
    fn open_new_form_view(&mut self) -> bool {
        let Some(workspace) = self.store.state().registry.active_workspace() else {
            return false;
        };
        let workspace_id = workspace.id.clone();
        let href = workspace.href.clone();
        let view_href = format_compact!("{href}/new");

        self.dispatch(Action::OpenView {
            workspace_id,
            id: new_form_view_id(&href),
            title: NEW_FORM_VIEW_TITLE.to_string(),
            href: view_href.clone(),
            seed: None,
        });
        self.navigate(&view_href);
        true
    }

    fn request_close_active_view(&mut self) -> bool {
        let state = self.store.state();
        let Some(workspace) = state.registry.active_workspace() else {
            return false;
        };
        let Some(view) = workspace.active_view() else {
            return false;
        };
        // The list view has no close affordance; it goes away with its
        // workspace.
        if view.title == LIST_VIEW_TITLE {
            return false;
        }
        let workspace_id = workspace.id.clone();
        let id = view.id.clone();

        let result = self.dispatch(Action::RequestCloseView { workspace_id, id });
        let had_effects = !result.effects.is_empty();
        self.apply_effects(result.effects);
        result.state_changed || had_effects
    }

    fn request_close_active_workspace(&mut self) -> bool {
        let Some(id) = self
            .store
            .state()
            .registry
            .active_workspace_id()
            .map(CompactString::from)
        else {
            return false;
        };

        let result = self.dispatch(Action::RequestCloseWorkspace { id });
        let had_effects = !result.effects.is_empty();
        self.apply_effects(result.effects);
        result.state_changed || had_effects
    }

    fn open_edit_field_dialog(&mut self) -> bool {
        let state = self.store.state();
        let Some(workspace) = state.registry.active_workspace() else {
            return false;
        };
        let Some(view) = workspace.active_view() else {
            return false;
        };
        let kind = InputDialogKind::EditField {
            workspace_id: workspace.id.clone(),
            view_id: view.id.clone(),
        };
        let title = format!("Edit {}", view.title);

        self.dispatch(Action::InputDialogOpen {
            kind,
            title,
            text: String::new(),
        })
        .state_changed
    }

    fn open_goto_dialog(&mut self) -> bool {
        self.dispatch(Action::InputDialogOpen {
            kind: InputDialogKind::GotoPath,
            title: "Go to path".to_string(),
            text: self.current_path.to_string(),
        })
        .state_changed
    }

    fn reset_active_form(&mut self) -> bool {
        let Some(form) = self.form.as_mut() else {
            return false;
        };
        let actions = form.reset();

        let mut changed = false;
        for action in actions {
            changed |= self.dispatch(action).state_changed;
        }
        changed
    }

    /// Enter in the input dialog. Goto routes to the entered path; field
    /// edits parse `key=value` and go through the active form binding.
    fn accept_input_dialog(&mut self) -> bool {
        let dialog = &self.store.state().ui.input_dialog;
        let Some(kind) = dialog.kind.clone() else {
            return false;
        };
        let value = dialog.text.trim().to_string();

        match kind {
            InputDialogKind::GotoPath => {
                if value.is_empty() {
                    return self.set_input_dialog_error("Path must not be empty");
                }
                let path = if value.starts_with('/') {
                    value
                } else {
                    format!("/{value}")
                };
                self.dispatch(Action::InputDialogClose);
                self.navigate(&path);
                true
            }
            InputDialogKind::EditField { view_id, .. } => {
                let Some((key, raw)) = value.split_once('=') else {
                    return self.set_input_dialog_error("Expected key=value");
                };
                let key = key.trim().to_string();
                if key.is_empty() {
                    return self.set_input_dialog_error("Field name must not be empty");
                }
                let raw = raw.trim();
                let parsed = serde_json::from_str::<Value>(raw)
                    .unwrap_or_else(|_| Value::String(raw.to_string()));

                let actions = match self.form.as_mut() {
                    Some(form) if view_id == form.view_id() => form.set_field(key, parsed),
                    _ => Vec::new(),
                };

                self.dispatch(Action::InputDialogClose);
                for action in actions {
                    self.dispatch(action);
                }
                true
            }
        }
    }

    fn set_input_dialog_error(&mut self, message: &str) -> bool {
        self.dispatch(Action::InputDialogSetError {
            message: message.to_string(),
        })
        .state_changed
    }

    pub fn render(&mut self, frame: &mut Frame) {
        let area = frame.area();
        let [header_area, body_area, status_area] = Layout::vertical([
            Constraint::Length(HEADER_HEIGHT),
            Constraint::Min(0),
            Constraint::Length(STATUS_HEIGHT),
        ])
        .areas(area);

        self.render_header(frame, header_area);
        self.render_body(frame, body_area);
        self.render_status(frame, status_area);

        self.render_confirm_dialog(frame, area);
        self.render_input_dialog(frame, area);
        if let Some((x, y)) = self.input_dialog_cursor(area) {
            frame.set_cursor_position((x, y));
        }
    }

    fn render_header(&self, frame: &mut Frame, area: Rect) {
        let header = Paragraph::new(Line::from(vec![
            Span::styled(
                "LedgerDesk",
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("  "),
            Span::styled(
                self.current_path.as_str(),
                Style::default().fg(Color::DarkGray),
            ),
        ]));
        frame.render_widget(header, area);
    }

    fn render_body(&mut self, frame: &mut Frame, area: Rect) {
        if area.width == 0 || area.height == 0 {
            return;
        }

        let [sidebar_area, main_area] = Layout::horizontal([
            Constraint::Length(sidebar_width(area.width)),
            Constraint::Min(0),
        ])
        .areas(area);

        self.render_sidebar(frame, sidebar_area);
        self.render_main(frame, main_area);
    }

    fn render_sidebar(&mut self, frame: &mut Frame, area: Rect) {
        if area.width == 0 || area.height == 0 {
            return;
        }

        self.dispatch(Action::SidebarSetViewHeight {
            height: area.height as usize,
        });

        let state = self.store.state();
        let sidebar = &state.ui.sidebar;
        let focused = state.ui.focus == FocusTarget::Sidebar;
        let active_href = menu::resolve(&self.current_path).and_then(|entry| entry.href);

        let end = (sidebar.scroll_offset + area.height as usize).min(sidebar.rows.len());
        let mut lines = Vec::with_capacity(end - sidebar.scroll_offset);
        for (offset, row) in sidebar.rows[sidebar.scroll_offset..end].iter().enumerate() {
            let index = sidebar.scroll_offset + offset;
            let entry = row.entry;

            let marker = if entry.is_group() {
                if sidebar.is_expanded(entry.title) {
                    "\u{25be} "
                } else {
                    "\u{25b8} "
                }
            } else {
                "  "
            };
            let indent = "  ".repeat(row.depth as usize);

            let mut style = Style::default();
            if entry.href.is_some() && entry.href == active_href {
                style = style.fg(Color::Cyan);
            }
            if index == sidebar.selected {
                style = style.add_modifier(Modifier::BOLD);
                if focused {
                    style = style.bg(Color::DarkGray);
                }
            }

            lines.push(Line::from(Span::styled(
                format!("{indent}{marker}{}", entry.title),
                style,
            )));
        }

        frame.render_widget(
            Paragraph::new(lines).block(Block::default().borders(Borders::RIGHT)),
            area,
        );
    }

    fn render_main(&self, frame: &mut Frame, area: Rect) {
        if area.width == 0 || area.height <= 2 * TAB_BAR_HEIGHT {
            return;
        }

        let [workspace_bar, view_bar, content] = Layout::vertical([
            Constraint::Length(TAB_BAR_HEIGHT),
            Constraint::Length(TAB_BAR_HEIGHT),
            Constraint::Min(0),
        ])
        .areas(area);

        self.render_workspace_bar(frame, workspace_bar);
        self.render_view_bar(frame, view_bar);
        self.render_content(frame, content);
    }

    fn render_workspace_bar(&self, frame: &mut Frame, area: Rect) {
        let registry = &self.store.state().registry;
        if registry.is_empty() {
            frame.render_widget(
                Paragraph::new(Span::styled(
                    " no open workspaces ",
                    Style::default().fg(Color::DarkGray),
                )),
                area,
            );
            return;
        }

        let active_id = registry.active_workspace_id();
        let mut selected = 0;
        let titles: Vec<Line> = registry
            .workspaces()
            .iter()
            .enumerate()
            .map(|(i, workspace)| {
                let active = Some(workspace.id.as_str()) == active_id;
                if active {
                    selected = i;
                }

                // The dirty dot trails a workspace title; view titles carry
                // a leading one via display_title.
                let label = if workspace.has_dirty_views() {
                    format!(" {} \u{25cf} ", workspace.title)
                } else {
                    format!(" {} ", workspace.title)
                };
                let style = if active {
                    Style::default()
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(Color::DarkGray)
                };
                Line::from(Span::styled(label, style))
            })
            .collect();

        let tabs = Tabs::new(titles)
            .select(selected)
            .highlight_style(Style::default().bg(Color::DarkGray));
        frame.render_widget(tabs, area);
    }

    fn render_view_bar(&self, frame: &mut Frame, area: Rect) {
        let registry = &self.store.state().registry;
        let Some(workspace) = registry.active_workspace() else {
            return;
        };
        if workspace.views.is_empty() {
            return;
        }

        let mut selected = 0;
        let titles: Vec<Line> = workspace
            .views
            .iter()
            .enumerate()
            .map(|(i, view)| {
                let active = workspace.active_view_id.as_deref() == Some(view.id.as_str());
                if active {
                    selected = i;
                }

                let style = if active {
                    Style::default()
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(Color::DarkGray)
                };
                Line::from(Span::styled(format!(" {} ", view.display_title()), style))
            })
            .collect();

        let tabs = Tabs::new(titles)
            .select(selected)
            .highlight_style(Style::default().bg(Color::DarkGray));
        frame.render_widget(tabs, area);
    }

    fn render_content(&self, frame: &mut Frame, area: Rect) {
        if area.width == 0 || area.height == 0 {
            return;
        }

        let registry = &self.store.state().registry;
        let Some(workspace) = registry.active_workspace() else {
            let placeholder = Paragraph::new(vec![
                Line::raw(""),
                Line::from(Span::styled(
                    "LedgerDesk",
                    Style::default()
                        .fg(Color::Cyan)
                        .add_modifier(Modifier::BOLD),
                )),
                Line::raw(""),
                Line::raw("Open a menu entry from the sidebar to get started."),
            ])
            .alignment(Alignment::Center);
            frame.render_widget(placeholder, area);
            return;
        };

        let Some(view) = workspace.active_view() else {
            frame.render_widget(
                Paragraph::new(Span::styled(
                    "no open views",
                    Style::default().fg(Color::DarkGray),
                )),
                area,
            );
            return;
        };

        let mut lines = Vec::new();
        lines.push(Line::from(vec![
            Span::styled(
                view.title.as_str(),
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Span::raw("  "),
            Span::styled(view.href.as_str(), Style::default().fg(Color::DarkGray)),
        ]));
        if view.is_dirty {
            lines.push(Line::from(Span::styled(
                "unsaved changes",
                Style::default().fg(Color::Yellow),
            )));
        }
        lines.push(Line::raw(""));

        if view.data.is_empty() {
            lines.push(Line::from(Span::styled(
                "(no form data)",
                Style::default().fg(Color::DarkGray),
            )));
        } else {
            for (key, value) in &view.data {
                lines.push(Line::from(vec![
                    Span::styled(format!("{key}: "), Style::default().fg(Color::Cyan)),
                    Span::raw(value.to_string()),
                ]));
            }
        }

        frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), area);
    }

    fn render_status(&self, frame: &mut Frame, area: Rect) {
        let state = self.store.state();
        let focus = match state.ui.focus {
            FocusTarget::Sidebar => "Sidebar",
            FocusTarget::Workbench => "Workbench",
        };
        let dirty = if state.registry.has_dirty_views() {
            " [+]"
        } else {
            ""
        };

        let status_text = format!(
            "{focus}{dirty} | Tab focus  [ ] workspace  , . view  n new  e edit  r reset  g goto  w/W close  q quit"
        );
        frame.render_widget(
            Paragraph::new(status_text).style(Style::default().fg(Color::DarkGray)),
            area,
        );
    }

    fn render_confirm_dialog(&self, frame: &mut Frame, area: Rect) {
        let dialog = &self.store.state().ui.confirm_dialog;
        if !dialog.visible {
            return;
        }

        let popup_area = centered_rect(60, 7, area);
        if popup_area.width < 20 || popup_area.height < 5 {
            return;
        }

        frame.render_widget(Clear, popup_area);
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Yellow))
            .title(dialog.title.as_str());
        let inner = block.inner(popup_area).inner(Margin::new(1, 0));
        frame.render_widget(block, popup_area);
        if inner.width == 0 || inner.height == 0 {
            return;
        }

        let content = Paragraph::new(vec![
            Line::from(dialog.message.as_str()),
            Line::raw(""),
            Line::from(vec![
                Span::styled("[Enter]", Style::default().fg(Color::Cyan)),
                Span::raw(format!(" {}  ", dialog.confirm_label)),
                Span::styled("[Esc]", Style::default().fg(Color::DarkGray)),
                Span::raw(" Batal"),
            ]),
        ])
        .wrap(Wrap { trim: true });
        frame.render_widget(content, inner);
    }

    fn render_input_dialog(&self, frame: &mut Frame, area: Rect) {
        let dialog = &self.store.state().ui.input_dialog;
        if !dialog.visible {
            return;
        }

        let popup_area = centered_rect(60, 7, area);
        if popup_area.width < 20 || popup_area.height < 5 {
            return;
        }

        frame.render_widget(Clear, popup_area);
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan))
            .title(dialog.title.as_str());
        let inner = block.inner(popup_area).inner(Margin::new(1, 0));
        frame.render_widget(block, popup_area);
        if inner.width == 0 || inner.height == 0 {
            return;
        }

        let mut lines = Vec::new();
        lines.push(Line::from(vec![
            Span::raw("> "),
            Span::raw(dialog.text.as_str()),
        ]));
        if let Some(err) = dialog.error.as_deref() {
            lines.push(Line::from(Span::styled(
                err,
                Style::default().fg(Color::Red),
            )));
        } else {
            lines.push(Line::raw(""));
        }
        lines.push(Line::from(vec![
            Span::styled("[Enter]", Style::default().fg(Color::Cyan)),
            Span::raw(" Apply  "),
            Span::styled("[Esc]", Style::default().fg(Color::DarkGray)),
            Span::raw(" Cancel"),
        ]));

        frame.render_widget(Paragraph::new(lines), inner);
    }

    fn input_dialog_cursor(&self, area: Rect) -> Option<(u16, u16)> {
        let dialog = &self.store.state().ui.input_dialog;
        if !dialog.visible {
            return None;
        }

        let popup_area = centered_rect(60, 7, area);
        if popup_area.width < 20 || popup_area.height < 5 {
            return None;
        }

        let inner_x = popup_area.x.saturating_add(2);
        let inner_y = popup_area.y.saturating_add(1);

        let byte_at = dialog
            .text
            .char_indices()
            .nth(dialog.cursor)
            .map_or(dialog.text.len(), |(i, _)| i);
        let before = dialog.text.get(..byte_at).unwrap_or_default();
        let prefix_w = "> ".width() as u16;

        let x = inner_x
            .saturating_add(prefix_w)
            .saturating_add(before.width() as u16)
            .min(popup_area.x + popup_area.width.saturating_sub(2));
        Some((x, inner_y))
    }
}

fn sidebar_width(available: u16) -> u16 {
    if available == 0 {
        return 0;
    }

    let desired = available
        .saturating_mul(SIDEBAR_WIDTH_PERCENT)
        .saturating_div(100);
    let min_width = SIDEBAR_MIN_WIDTH.min(available);
    let max_width = available.saturating_sub(10).max(min_width);

    desired.max(min_width).min(max_width)
}

fn centered_rect(width_percent: u16, height: u16, area: Rect) -> Rect {
    let width =
        (area.width.saturating_mul(width_percent) / 100).clamp(10.min(area.width), area.width);
    let height = height.clamp(3.min(area.height), area.height);
    let x = area.x + area.width.saturating_sub(width) / 2;
    let y = area.y + area.height.saturating_sub(height) / 2;
    Rect::new(x, y, width, height)
}
