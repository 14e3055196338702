pub mod memory;
pub mod traits;

// Re-export collaborator traits for convenient access
pub use memory::{MemoryPageExtractor, MemorySearchService};
pub use traits::{DeclaredTypes, NoDeclaredTypes, PageExtractor, PageFragments, PageSelectors, SearchService};

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Read a prototype or rule file as UTF-8 text.
pub fn read_file(path: &Path) -> Result<String> {
    fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))
}

/// Write `content` to `path`, creating missing parent directories first.
pub fn write_file(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent().filter(|dir| !dir.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }
    fs::write(path, content).with_context(|| format!("Failed to write {}", path.display()))
}
