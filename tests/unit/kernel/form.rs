use super::*;
use crate::kernel::services::adapters::SessionService;
use crate::kernel::Store;

fn fields(entries: &[(&str, &str)]) -> ViewData {
    let mut map = ViewData::new();
    for (key, value) in entries {
        map.insert(key.to_string(), Value::String(value.to_string()));
    }
    map
}

fn store_with_form_view() -> Store {
    let mut store = Store::new(SessionService::in_memory());
    store.dispatch(Action::OpenWorkspace {
        id: "/a".into(),
        title: "A".into(),
        href: "/a".into(),
    });
    store.dispatch(Action::OpenView {
        workspace_id: "/a".into(),
        id: "/a-new".into(),
        title: "Data Baru".into(),
        href: "/a/new".into(),
        seed: None,
    });
    store
}

#[test]
fn new_binding_overlays_stored_data_on_defaults() {
    let defaults = fields(&[("nama", ""), ("kota", "Solo")]);
    let stored = fields(&[("nama", "Budi")]);

    let binding = FormBinding::new("/a".into(), "/a-new".into(), defaults, &stored);

    assert_eq!(
        binding.fields().get("nama"),
        Some(&Value::String("Budi".to_string()))
    );
    assert_eq!(
        binding.fields().get("kota"),
        Some(&Value::String("Solo".to_string()))
    );
}

#[test]
fn set_field_without_baseline_always_marks_dirty() {
    let stored = ViewData::new();
    let mut binding =
        FormBinding::new("/a".into(), "/a-new".into(), fields(&[("nama", "")]), &stored);

    let actions = binding.set_field("nama", Value::String("Budi".to_string()));

    assert_eq!(actions.len(), 2);
    match &actions[0] {
        Action::UpdateViewData { patch, .. } => {
            assert_eq!(patch.get("nama"), Some(&Value::String("Budi".to_string())));
        }
        other => panic!("expected UpdateViewData, got {other:?}"),
    }
    assert!(matches!(&actions[1], Action::MarkViewDirty { dirty: true, .. }));

    // Even writing the default back counts as an edit.
    let actions = binding.set_field("nama", Value::String(String::new()));
    assert!(matches!(&actions[1], Action::MarkViewDirty { dirty: true, .. }));
}

#[test]
fn set_field_with_baseline_tracks_difference_from_loaded_record() {
    let baseline = fields(&[("nama", "Asli")]);
    let mut binding = FormBinding::new("/a".into(), "/a-edit-7".into(), ViewData::new(), &baseline)
        .with_baseline(baseline);

    let actions = binding.set_field("nama", Value::String("Baru".to_string()));
    assert!(matches!(&actions[1], Action::MarkViewDirty { dirty: true, .. }));

    let actions = binding.set_field("nama", Value::String("Asli".to_string()));
    assert!(matches!(&actions[1], Action::MarkViewDirty { dirty: false, .. }));
}

#[test]
fn set_field_patch_carries_the_whole_field_map() {
    let stored = fields(&[("nama", "Budi"), ("kota", "Solo")]);
    let mut binding = FormBinding::new("/a".into(), "/a-new".into(), ViewData::new(), &stored);

    let actions = binding.set_field("kota", Value::String("Malang".to_string()));

    match &actions[0] {
        Action::UpdateViewData { patch, .. } => {
            assert_eq!(patch.len(), 2);
            assert_eq!(patch.get("nama"), Some(&Value::String("Budi".to_string())));
            assert_eq!(patch.get("kota"), Some(&Value::String("Malang".to_string())));
        }
        other => panic!("expected UpdateViewData, got {other:?}"),
    }
}

#[test]
fn reset_restores_defaults_and_emits_clean_mark() {
    let defaults = fields(&[("nama", "")]);
    let stored = fields(&[("nama", "Budi")]);
    let mut binding = FormBinding::new("/a".into(), "/a-new".into(), defaults, &stored);

    let actions = binding.reset();

    assert_eq!(
        binding.fields().get("nama"),
        Some(&Value::String(String::new()))
    );
    match &actions[0] {
        Action::UpdateViewData { patch, .. } => assert!(patch.is_empty()),
        other => panic!("expected UpdateViewData, got {other:?}"),
    }
    assert!(matches!(&actions[1], Action::MarkViewDirty { dirty: false, .. }));
}

#[test]
fn dispatched_edit_then_reset_leaves_view_clean() {
    let mut store = store_with_form_view();
    let stored = ViewData::new();
    let mut binding =
        FormBinding::new("/a".into(), "/a-new".into(), fields(&[("nama", "")]), &stored);

    for action in binding.set_field("nama", Value::String("Budi".to_string())) {
        store.dispatch(action);
    }
    let view = store.state().registry.active_view().unwrap();
    assert!(view.is_dirty);
    assert_eq!(
        view.data.get("nama"),
        Some(&Value::String("Budi".to_string()))
    );

    for action in binding.reset() {
        store.dispatch(action);
    }
    let view = store.state().registry.active_view().unwrap();
    assert!(!view.is_dirty);
    // The merge cannot remove keys; only the dirty flag is rolled back.
    assert_eq!(
        view.data.get("nama"),
        Some(&Value::String("Budi".to_string()))
    );
}
