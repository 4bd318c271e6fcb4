//! Binding between an editable form surface and one view's stored payload.

use compact_str::CompactString;
use serde_json::Value;

use super::workspace::ViewData;
use super::Action;

/// Local form state for a single view.
///
/// The binding owns its field map and turns edits into action pairs for the
/// store; it never mutates the registry directly. Without a baseline every
/// edit marks the view dirty (create flavor); with one, dirtiness is the
/// field-by-field difference against the loaded record, so reverting an edit
/// form back to its original values marks it clean again.
pub struct FormBinding {
    workspace_id: CompactString,
    view_id: CompactString,
    fields: ViewData,
    defaults: ViewData,
    baseline: Option<ViewData>,
}

impl FormBinding {
    /// Seeds fields from `defaults`, then overlays whatever the view already
    /// stored so a half-filled form survives a close and reopen.
    pub fn new(
        workspace_id: CompactString,
        view_id: CompactString,
        defaults: ViewData,
        stored: &ViewData,
    ) -> Self {
        let mut fields = defaults.clone();
        for (key, value) in stored {
            fields.insert(key.clone(), value.clone());
        }
        Self {
            workspace_id,
            view_id,
            fields,
            defaults,
            baseline: None,
        }
    }

    pub fn with_baseline(mut self, baseline: ViewData) -> Self {
        self.baseline = Some(baseline);
        self
    }

    pub fn view_id(&self) -> &str {
        &self.view_id
    }

    pub fn fields(&self) -> &ViewData {
        &self.fields
    }

    /// Applies one field edit and emits the sync pair: the whole field map as
    /// a patch (superset of the stored keys, so the merge is a plain write)
    /// plus the dirty mark.
    pub fn set_field(&mut self, key: impl Into<String>, value: Value) -> Vec<Action> {
        self.fields.insert(key.into(), value);

        let dirty = match &self.baseline {
            Some(baseline) => self.fields != *baseline,
            None => true,
        };

        vec![
            Action::UpdateViewData {
                workspace_id: self.workspace_id.clone(),
                view_id: self.view_id.clone(),
                patch: self.fields.clone(),
            },
            Action::MarkViewDirty {
                workspace_id: self.workspace_id.clone(),
                view_id: self.view_id.clone(),
                dirty,
            },
        ]
    }

    /// Restores the defaults locally and marks the view clean.
    ///
    /// The emitted patch is empty: merges cannot remove keys, so whatever the
    /// view already stored stays stored. The explicit clean mark must follow
    /// the merge, which flags the view dirty on its own.
    pub fn reset(&mut self) -> Vec<Action> {
        self.fields = self.defaults.clone();
        vec![
            Action::UpdateViewData {
                workspace_id: self.workspace_id.clone(),
                view_id: self.view_id.clone(),
                patch: ViewData::new(),
            },
            Action::MarkViewDirty {
                workspace_id: self.workspace_id.clone(),
                view_id: self.view_id.clone(),
                dirty: false,
            },
        ]
    }
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/form.rs"]
mod tests;
