pub mod check;
pub mod list;
pub mod play;
pub mod tools;

use std::path::Path;

use rj_content::DirectoryProvider;

/// Open a content directory, failing early if it does not exist.
fn open_dir(dir: &Path) -> Result<DirectoryProvider, String> {
    if !dir.is_dir() {
        return Err(format!("content directory not found: {}", dir.display()));
    }
    Ok(DirectoryProvider::new(dir))
}

/// Shorten `text` to at most `max` characters, marking the cut with `...`.
fn truncate(text: &str, max: usize) -> String {
    if text.is_empty() {
        return "—".to_string();
    }
    if text.chars().count() <= max {
        return text.to_string();
    }
    let cut: String = text.chars().take(max.saturating_sub(3)).collect();
    format!("{cut}...")
}
