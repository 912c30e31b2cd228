//! Plain-text rendering of the ledger view, handed to the host for printing

use weighmaster_domain::service::group_thousands;
use weighmaster_domain::LedgerEntry;

/// Placeholder for an empty check number
pub const NO_CHECK: &str = "--";

/// Shown when a view has no rows
pub const NO_MATCHES: &str = "No entries match the search criteria.";

/// Render rows in ledger column order.
///
/// `search` is echoed in the heading when a filter is active.
pub fn render_view(entries: &[&LedgerEntry], total: usize, search: Option<&str>) -> String {
    let mut out = String::new();
    out.push_str("CARAVAN WEIGHT LEDGER\n");
    match search {
        Some(term) => out.push_str(&format!(
            "{} of {} entries matching \"{}\"\n",
            entries.len(),
            total,
            term
        )),
        None => out.push_str(&format!("{} total entries\n", total)),
    }
    out.push('\n');

    out.push_str(&format!(
        "{:<14} {:>10} {:<10} {:>10} {:>10} {:>10} {:<12}\n",
        "PLATE", "GROSS", "DATE", "TARE", "NET", "PRICE", "CHECK"
    ));
    out.push_str(&"-".repeat(82));
    out.push('\n');

    if entries.is_empty() {
        out.push_str(NO_MATCHES);
        out.push('\n');
        return out;
    }

    for entry in entries {
        let check = if entry.check_number().is_empty() {
            NO_CHECK
        } else {
            entry.check_number()
        };
        out.push_str(&format!(
            "{:<14} {:>10} {:<10} {:>10} {:>10} {:>10} {:<12}\n",
            entry.plate_number().to_uppercase(),
            group_thousands(entry.gross_weight()),
            entry.date().to_string(),
            group_thousands(entry.tare_weight()),
            group_thousands(entry.net_weight()),
            group_thousands(entry.price()),
            check.to_uppercase(),
        ));
    }
    out
}
