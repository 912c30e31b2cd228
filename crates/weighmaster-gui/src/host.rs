//! Host facilities behind the Print and Reload buttons

use std::path::{Path, PathBuf};

/// Toolbar actions handed to the host
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostAction {
    Print,
    Reload,
}

/// Save the rendered print view to a text file chosen in a save dialog.
///
/// `Ok(None)` when the dialog was cancelled.
pub fn save_print_view(text: &str) -> std::io::Result<Option<PathBuf>> {
    let Some(path) = rfd::FileDialog::new()
        .set_title("Print ledger view")
        .set_file_name("weight-ledger.txt")
        .add_filter("Text", &["txt"])
        .save_file()
    else {
        return Ok(None);
    };
    write_print_view(&path, text)?;
    Ok(Some(path))
}

fn write_print_view(path: &Path, text: &str) -> std::io::Result<()> {
    std::fs::write(path, text)
}
