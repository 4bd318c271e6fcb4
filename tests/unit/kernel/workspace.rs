use super::*;

fn registry_with(hrefs: &[&str]) -> WorkspaceRegistry {
    let mut registry = WorkspaceRegistry::new();
    for href in hrefs {
        registry.open_workspace(*href, *href, *href);
    }
    registry
}

fn data(entries: &[(&str, &str)]) -> ViewData {
    let mut map = ViewData::new();
    for (key, value) in entries {
        map.insert(key.to_string(), Value::String(value.to_string()));
    }
    map
}

#[test]
fn open_workspace_appends_in_order_and_activates() {
    let registry = registry_with(&["/a", "/b", "/c"]);

    let ids: Vec<&str> = registry.workspaces().iter().map(|w| w.id.as_str()).collect();
    assert_eq!(ids, ["/a", "/b", "/c"]);
    assert_eq!(registry.active_workspace_id(), Some("/c"));
}

#[test]
fn reopening_workspace_activates_without_resetting_views() {
    let mut registry = registry_with(&["/a", "/b"]);
    registry.open_view("/a", "/a-list", "Daftar", "/a", None);
    registry.update_view_data("/a", "/a-list", data(&[("nama", "Budi")]));

    assert!(registry.open_workspace("/a", "changed title", "/a"));

    let workspace = registry.workspace("/a").unwrap();
    assert_eq!(registry.active_workspace_id(), Some("/a"));
    assert_eq!(workspace.title, "/a");
    assert_eq!(workspace.views.len(), 1);
    assert_eq!(
        workspace.views[0].data.get("nama"),
        Some(&Value::String("Budi".to_string()))
    );
}

#[test]
fn reopening_active_workspace_reports_no_change() {
    let mut registry = registry_with(&["/a"]);
    let revision = registry.revision();

    assert!(!registry.open_workspace("/a", "A", "/a"));
    assert_eq!(registry.revision(), revision);
}

#[test]
fn close_active_workspace_activates_left_neighbor() {
    let mut registry = registry_with(&["/a", "/b", "/c"]);

    let (changed, target) = registry.close_workspace("/c");

    assert!(changed);
    assert_eq!(target, Some(NavTarget::Path("/b".into())));
    assert_eq!(registry.active_workspace_id(), Some("/b"));
    assert_eq!(registry.len(), 2);
}

#[test]
fn close_first_active_workspace_falls_back_to_new_first() {
    let mut registry = registry_with(&["/a", "/b"]);
    registry.set_active_workspace("/a");

    let (changed, target) = registry.close_workspace("/a");

    assert!(changed);
    assert_eq!(target, Some(NavTarget::Path("/b".into())));
    assert_eq!(registry.active_workspace_id(), Some("/b"));
}

#[test]
fn close_inactive_workspace_navigates_nowhere() {
    let mut registry = registry_with(&["/a", "/b"]);

    let (changed, target) = registry.close_workspace("/a");

    assert!(changed);
    assert_eq!(target, None);
    assert_eq!(registry.active_workspace_id(), Some("/b"));
}

#[test]
fn closing_last_workspace_yields_landing_intent() {
    let mut registry = registry_with(&["/a"]);

    let (changed, target) = registry.close_workspace("/a");

    assert!(changed);
    assert_eq!(target, Some(NavTarget::Landing));
    assert!(registry.is_empty());
    assert_eq!(registry.active_workspace_id(), None);
}

#[test]
fn close_unknown_workspace_is_a_silent_noop() {
    let mut registry = registry_with(&["/a"]);
    let revision = registry.revision();

    let (changed, target) = registry.close_workspace("/missing");

    assert!(!changed);
    assert_eq!(target, None);
    assert_eq!(registry.revision(), revision);
}

#[test]
fn nav_target_follows_replacement_active_view() {
    let mut registry = registry_with(&["/a", "/b"]);
    registry.open_view("/a", "/a-edit-7", "Edit: 7", "/a/7", None);

    let (_, target) = registry.close_workspace("/b");

    assert_eq!(target, Some(NavTarget::Path("/a/7".into())));
}

#[test]
fn open_view_seeds_data_clean() {
    let mut registry = registry_with(&["/a"]);

    registry.open_view(
        "/a",
        "/a-edit-7",
        "Edit: Budi",
        "/a/7",
        Some(data(&[("nama", "Budi")])),
    );

    let view = registry.active_view().unwrap();
    assert_eq!(view.id, "/a-edit-7");
    assert_eq!(
        view.data.get("nama"),
        Some(&Value::String("Budi".to_string()))
    );
    assert!(!view.is_dirty);
}

#[test]
fn reopening_view_activates_and_preserves_stored_data() {
    let mut registry = registry_with(&["/a"]);
    registry.open_view("/a", "/a-new", "Data Baru", "/a/new", None);
    registry.update_view_data("/a", "/a-new", data(&[("nama", "Asli")]));
    registry.open_view("/a", "/a-list", "Daftar", "/a", None);

    assert!(registry.open_view(
        "/a",
        "/a-new",
        "other title",
        "/a/other",
        Some(data(&[("nama", "Lain")])),
    ));

    let view = registry.active_view().unwrap();
    assert_eq!(view.id, "/a-new");
    assert_eq!(view.title, "Data Baru");
    assert_eq!(view.href, "/a/new");
    assert_eq!(
        view.data.get("nama"),
        Some(&Value::String("Asli".to_string()))
    );
}

#[test]
fn reopening_active_view_reports_no_change() {
    let mut registry = registry_with(&["/a"]);
    registry.open_view("/a", "/a-list", "Daftar", "/a", None);
    let revision = registry.revision();

    assert!(!registry.open_view("/a", "/a-list", "Daftar", "/a", None));
    assert_eq!(registry.revision(), revision);
}

#[test]
fn close_active_view_activates_last_remaining() {
    let mut registry = registry_with(&["/a"]);
    registry.open_view("/a", "v1", "One", "/a/1", None);
    registry.open_view("/a", "v2", "Two", "/a/2", None);
    registry.open_view("/a", "v3", "Three", "/a/3", None);
    registry.set_active_view("/a", "v2");

    let (changed, target) = registry.close_view("/a", "v2");

    assert!(changed);
    assert_eq!(target, Some(NavTarget::Path("/a/3".into())));
    let workspace = registry.workspace("/a").unwrap();
    assert_eq!(workspace.active_view_id.as_deref(), Some("v3"));
    assert_eq!(workspace.views.len(), 2);
}

#[test]
fn closing_only_view_falls_back_to_workspace_href() {
    let mut registry = registry_with(&["/a"]);
    registry.open_view("/a", "v1", "One", "/a/1", None);

    let (changed, target) = registry.close_view("/a", "v1");

    assert!(changed);
    assert_eq!(target, Some(NavTarget::Path("/a".into())));
    let workspace = registry.workspace("/a").unwrap();
    assert!(workspace.views.is_empty());
    assert_eq!(workspace.active_view_id, None);
}

#[test]
fn close_inactive_view_keeps_active_view() {
    let mut registry = registry_with(&["/a"]);
    registry.open_view("/a", "v1", "One", "/a/1", None);
    registry.open_view("/a", "v2", "Two", "/a/2", None);

    let (changed, target) = registry.close_view("/a", "v1");

    assert!(changed);
    assert_eq!(target, None);
    let workspace = registry.workspace("/a").unwrap();
    assert_eq!(workspace.active_view_id.as_deref(), Some("v2"));
}

#[test]
fn update_view_data_merges_per_key() {
    let mut registry = registry_with(&["/a"]);
    registry.open_view("/a", "v1", "One", "/a/1", None);
    registry.update_view_data("/a", "v1", data(&[("nama", "Budi"), ("kota", "Solo")]));

    registry.update_view_data("/a", "v1", data(&[("nama", "Ani")]));

    let view = registry.active_view().unwrap();
    assert_eq!(
        view.data.get("nama"),
        Some(&Value::String("Ani".to_string()))
    );
    assert_eq!(
        view.data.get("kota"),
        Some(&Value::String("Solo".to_string()))
    );
}

#[test]
fn identical_patch_still_marks_dirty() {
    let mut registry = registry_with(&["/a"]);
    registry.open_view("/a", "v1", "One", "/a/1", None);
    registry.update_view_data("/a", "v1", data(&[("nama", "Budi")]));
    registry.mark_view_dirty("/a", "v1", false);

    assert!(registry.update_view_data("/a", "v1", data(&[("nama", "Budi")])));
    assert!(registry.active_view().unwrap().is_dirty);
}

#[test]
fn mark_view_dirty_reports_change_only_on_transition() {
    let mut registry = registry_with(&["/a"]);
    registry.open_view("/a", "v1", "One", "/a/1", None);

    assert!(registry.mark_view_dirty("/a", "v1", true));
    assert!(!registry.mark_view_dirty("/a", "v1", true));
    assert!(registry.mark_view_dirty("/a", "v1", false));
    assert!(!registry.active_view().unwrap().is_dirty);
}

#[test]
fn update_on_unknown_view_is_a_silent_noop() {
    let mut registry = registry_with(&["/a"]);
    let revision = registry.revision();

    assert!(!registry.update_view_data("/a", "missing", data(&[("k", "v")])));
    assert!(!registry.mark_view_dirty("/missing", "v1", true));
    assert_eq!(registry.revision(), revision);
}

#[test]
fn has_dirty_views_sees_any_workspace() {
    let mut registry = registry_with(&["/a", "/b"]);
    registry.open_view("/a", "v1", "One", "/a/1", None);
    assert!(!registry.has_dirty_views());

    registry.update_view_data("/a", "v1", data(&[("k", "v")]));
    assert!(registry.has_dirty_views());
    assert!(registry.workspace("/a").unwrap().has_dirty_views());
    assert!(!registry.workspace("/b").unwrap().has_dirty_views());
}

#[test]
fn nav_href_prefers_active_view() {
    let mut registry = registry_with(&["/a"]);
    assert_eq!(registry.workspace("/a").unwrap().nav_href(), "/a");

    registry.open_view("/a", "v1", "One", "/a/1", None);
    assert_eq!(registry.workspace("/a").unwrap().nav_href(), "/a/1");
}

#[test]
fn from_parts_degrades_stale_references() {
    let mut stale_view = Workspace::new("/a", "A", "/a");
    stale_view.views.push(View::new("v1", "One", "/a/1"));
    stale_view.views.push(View::new("v2", "Two", "/a/2"));
    stale_view.active_view_id = Some("gone".into());

    let mut empty = Workspace::new("/b", "B", "/b");
    empty.active_view_id = Some("also-gone".into());

    let registry = WorkspaceRegistry::from_parts(vec![stale_view, empty], Some("/missing".into()));

    assert_eq!(registry.active_workspace_id(), None);
    assert_eq!(
        registry.workspace("/a").unwrap().active_view_id.as_deref(),
        Some("v2")
    );
    assert_eq!(registry.workspace("/b").unwrap().active_view_id, None);
}

#[test]
fn from_parts_keeps_valid_references() {
    let mut workspace = Workspace::new("/a", "A", "/a");
    workspace.views.push(View::new("v1", "One", "/a/1"));
    workspace.active_view_id = Some("v1".into());

    let registry = WorkspaceRegistry::from_parts(vec![workspace], Some("/a".into()));

    assert_eq!(registry.active_workspace_id(), Some("/a"));
    assert_eq!(registry.active_view().unwrap().id, "v1");
}

#[test]
fn revision_advances_only_on_change() {
    let mut registry = WorkspaceRegistry::new();
    assert_eq!(registry.revision(), 0);

    registry.open_workspace("/a", "A", "/a");
    let after_open = registry.revision();
    assert!(after_open > 0);

    registry.set_active_workspace("/a");
    registry.close_workspace("/missing");
    registry.set_active_view("/a", "missing");
    assert_eq!(registry.revision(), after_open);

    registry.open_view("/a", "v1", "One", "/a/1", None);
    assert!(registry.revision() > after_open);
}

#[test]
fn display_title_prefixes_dirty_marker() {
    let mut view = View::new("v1", "Data Baru", "/a/new");
    assert_eq!(view.display_title(), "Data Baru");

    view.is_dirty = true;
    assert_eq!(view.display_title(), "\u{25cf} Data Baru");
}

#[test]
fn view_id_helpers_follow_href_conventions() {
    assert_eq!(list_view_id("/dashboard/sales/faktur"), "/dashboard/sales/faktur-list");
    assert_eq!(new_form_view_id("/dashboard/sales/faktur"), "/dashboard/sales/faktur-new");
}

#[test]
fn edit_form_detection_requires_href_and_record_id() {
    let href = "/dashboard/sales/faktur";
    assert!(is_edit_form_view(href, "/dashboard/sales/faktur-edit-42"));

    assert!(!is_edit_form_view(href, "/dashboard/sales/faktur-list"));
    assert!(!is_edit_form_view(href, "/dashboard/sales/faktur-new"));
    assert!(!is_edit_form_view(href, "/dashboard/sales/faktur-edit-"));
    assert!(!is_edit_form_view("/dashboard/sales", "/dashboard/sales/faktur-edit-42"));
}
