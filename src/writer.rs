//! Writer – persists a [`Page`] as a pretty-printed JSON document.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{ForgeError, Result};
use crate::page::Page;

/// Write `page` to `path`, creating parent directories as needed and
/// replacing any existing file. Returns the path written.
pub fn write_page(page: &Page, path: impl AsRef<Path>) -> Result<PathBuf> {
    let path = path.as_ref();

    // create_dir_all treats an existing directory as success.
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(|e| ForgeError::io(parent, e))?;
        }
    }

    let json = page.to_json()?;
    fs::write(path, json).map_err(|e| ForgeError::io(path, e))?;

    log::info!("Wrote {} page to '{}'", page.kind().as_str(), path.display());
    Ok(path.to_path_buf())
}
