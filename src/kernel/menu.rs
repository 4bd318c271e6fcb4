//! Static navigation menu: the route table workspaces are reconciled against.

use rustc_hash::FxHashSet;

/// Default route when no workspace is left to show.
pub const LANDING_PATH: &str = "/dashboard";

#[derive(Debug)]
pub struct MenuEntry {
    pub title: &'static str,
    pub href: Option<&'static str>,
    pub children: &'static [MenuEntry],
}

impl MenuEntry {
    pub fn is_group(&self) -> bool {
        !self.children.is_empty()
    }
}

const fn leaf(title: &'static str, href: &'static str) -> MenuEntry {
    MenuEntry {
        title,
        href: Some(href),
        children: &[],
    }
}

const fn group(title: &'static str, children: &'static [MenuEntry]) -> MenuEntry {
    MenuEntry {
        title,
        href: None,
        children,
    }
}

pub static MENU: &[MenuEntry] = &[
    leaf("Dashboard", "/dashboard"),
    leaf("Perusahaan", "/dashboard/company"),
    group(
        "Buku Besar",
        &[
            leaf("Akun Perkiraan", "/dashboard/masters/akun-perkiraan"),
            leaf("Pencatatan Beban", "/dashboard/general-ledger/expense"),
            leaf("Pencatatan Gaji", "/dashboard/general-ledger/salary"),
            leaf("Jurnal Umum", "/dashboard/general-ledger/journal"),
            leaf("Histori Akun", "/dashboard/general-ledger/history"),
            leaf("Log Aktivitas Jurnal", "/dashboard/general-ledger/log"),
            leaf("Anggaran", "/dashboard/general-ledger/budget"),
        ],
    ),
    group(
        "Penjualan",
        &[
            leaf("Penawaran", "/dashboard/sales/penawaran"),
            leaf("Pesanan Penjualan", "/dashboard/sales/pesanan"),
            leaf("Pengiriman", "/dashboard/sales/pengiriman"),
            leaf("Uang Muka", "/dashboard/sales/uang-muka"),
            leaf("Faktur", "/dashboard/sales/faktur"),
            leaf("Penerimaan", "/dashboard/sales/penerimaan"),
            leaf("Retur", "/dashboard/sales/retur"),
            leaf("Pelanggan", "/dashboard/sales/pelanggan"),
        ],
    ),
    group(
        "Pembelian",
        &[
            leaf("Pesanan Pembelian", "/dashboard/purchases/orders"),
            leaf("Tagihan", "/dashboard/purchases/bills"),
        ],
    ),
    group(
        "Persediaan",
        &[
            leaf("Permintaan Barang", "/dashboard/inventory/item-requests"),
            leaf("Pemindahan Barang", "/dashboard/inventory/item-transfers"),
            leaf("Penyesuaian Persediaan", "/dashboard/inventory/adjustments"),
            leaf("Perintah Stok Opname", "/dashboard/inventory/stock-opname-orders"),
            leaf("Hasil Stok Opname", "/dashboard/inventory/stock-opname-results"),
            leaf("Barang & Jasa", "/dashboard/inventory/items"),
            leaf("Gudang", "/dashboard/inventory/warehouses"),
            leaf("Satuan Barang", "/dashboard/inventory/units"),
            leaf("Kategori Barang", "/dashboard/inventory/categories"),
            leaf("Merek Barang", "/dashboard/inventory/brands"),
            leaf("Barang per Gudang", "/dashboard/inventory/items-per-warehouse"),
            leaf("Barang Stok Minimum", "/dashboard/inventory/minimum-stock"),
        ],
    ),
    group(
        "Laporan",
        &[
            leaf("Neraca Saldo", "/dashboard/reports/trial-balance"),
            leaf("Neraca", "/dashboard/reports/balance-sheet"),
            leaf("Laba Rugi", "/dashboard/reports/income-statement"),
        ],
    ),
    leaf("Pengaturan", "/dashboard/settings"),
];

/// Resolves a path to the menu entry with the longest matching href prefix,
/// on path-segment boundaries: `/x/new` and `/x/edit/7` resolve to the `/x`
/// entry, `/xy` does not.
pub fn resolve(path: &str) -> Option<&'static MenuEntry> {
    let trimmed = path.trim_end_matches('/');
    let path = if trimmed.is_empty() { path } else { trimmed };

    let mut best: Option<(&'static MenuEntry, usize)> = None;
    collect_best(MENU, path, &mut best);
    best.map(|(entry, _)| entry)
}

fn collect_best(
    entries: &'static [MenuEntry],
    path: &str,
    best: &mut Option<(&'static MenuEntry, usize)>,
) {
    for entry in entries {
        if let Some(href) = entry.href {
            if matches_prefix(path, href) && best.is_none_or(|(_, len)| href.len() > len) {
                *best = Some((entry, href.len()));
            }
        }
        collect_best(entry.children, path, best);
    }
}

fn matches_prefix(path: &str, href: &str) -> bool {
    path == href || (path.starts_with(href) && path.as_bytes().get(href.len()) == Some(&b'/'))
}

#[derive(Debug, Clone, Copy)]
pub struct MenuRow {
    pub entry: &'static MenuEntry,
    pub depth: u8,
}

/// Flattens the tree into sidebar rows, descending only into expanded groups.
/// Groups are keyed by title; they carry no href of their own.
pub fn flatten_for_view(expanded: &FxHashSet<&'static str>) -> Vec<MenuRow> {
    fn push_rows(
        entries: &'static [MenuEntry],
        depth: u8,
        expanded: &FxHashSet<&'static str>,
        rows: &mut Vec<MenuRow>,
    ) {
        for entry in entries {
            rows.push(MenuRow { entry, depth });
            if entry.is_group() && expanded.contains(entry.title) {
                push_rows(entry.children, depth + 1, expanded, rows);
            }
        }
    }

    let mut rows = Vec::with_capacity(MENU.len());
    push_rows(MENU, 0, expanded, &mut rows);
    rows
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/menu.rs"]
mod tests;
