use super::*;

#[test]
fn resolve_matches_exact_hrefs() {
    let cases = [
        ("/dashboard", "Dashboard"),
        ("/dashboard/company", "Perusahaan"),
        ("/dashboard/sales/faktur", "Faktur"),
        ("/dashboard/inventory/units", "Satuan Barang"),
        ("/dashboard/settings", "Pengaturan"),
    ];

    for (path, expected) in cases {
        let entry = resolve(path).unwrap();
        assert_eq!(entry.title, expected, "path {path}");
    }
}

#[test]
fn resolve_picks_longest_prefix() {
    // "/dashboard" also matches; the deeper entry must win.
    let entry = resolve("/dashboard/sales/faktur/42/edit").unwrap();
    assert_eq!(entry.title, "Faktur");

    let entry = resolve("/dashboard/sales/faktur/new").unwrap();
    assert_eq!(entry.title, "Faktur");
}

#[test]
fn resolve_falls_back_to_shorter_prefix_for_unlisted_subpaths() {
    let entry = resolve("/dashboard/unknown-section").unwrap();
    assert_eq!(entry.title, "Dashboard");
}

#[test]
fn resolve_requires_segment_boundaries() {
    // "/dashboard/companyX" must not match "/dashboard/company".
    let entry = resolve("/dashboard/companyX").unwrap();
    assert_eq!(entry.title, "Dashboard");

    assert!(resolve("/dash").is_none());
    assert!(resolve("/elsewhere").is_none());
    assert!(resolve("").is_none());
}

#[test]
fn resolve_ignores_trailing_slashes() {
    let entry = resolve("/dashboard/company/").unwrap();
    assert_eq!(entry.title, "Perusahaan");

    let entry = resolve("/dashboard/sales/faktur///").unwrap();
    assert_eq!(entry.title, "Faktur");
}

#[test]
fn landing_path_resolves_to_dashboard() {
    let entry = resolve(LANDING_PATH).unwrap();
    assert_eq!(entry.title, "Dashboard");
    assert_eq!(entry.href, Some(LANDING_PATH));
}

#[test]
fn groups_have_no_href() {
    for entry in MENU {
        if entry.is_group() {
            assert_eq!(entry.href, None, "group {}", entry.title);
            assert!(!entry.children.is_empty());
        } else {
            assert!(entry.href.is_some(), "leaf {}", entry.title);
        }
    }
}

#[test]
fn flatten_descends_only_into_expanded_groups() {
    let collapsed = flatten_for_view(&FxHashSet::default());
    assert_eq!(collapsed.len(), MENU.len());
    assert!(collapsed.iter().all(|row| row.depth == 0));

    let mut expanded = FxHashSet::default();
    expanded.insert("Penjualan");
    let rows = flatten_for_view(&expanded);
    assert_eq!(rows.len(), MENU.len() + 8);

    let sales_index = rows
        .iter()
        .position(|row| row.entry.title == "Penjualan")
        .unwrap();
    assert_eq!(rows[sales_index + 1].entry.title, "Penawaran");
    assert_eq!(rows[sales_index + 1].depth, 1);
    assert_eq!(rows[sales_index + 8].entry.title, "Pelanggan");
}

#[test]
fn all_menu_hrefs_resolve_to_their_own_entry() {
    fn check(entries: &'static [MenuEntry]) {
        for entry in entries {
            if let Some(href) = entry.href {
                let resolved = resolve(href).unwrap();
                assert_eq!(resolved.title, entry.title, "href {href}");
            }
            check(entry.children);
        }
    }
    check(MENU);
}
