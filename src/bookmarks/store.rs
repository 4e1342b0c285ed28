// SPDX-License-Identifier: MPL-2.0
//! Bookmark files on disk.
//!
//! Each document gets `<data dir>/bookmarks/<document file name>.bookmarks`.

use super::BookmarkList;
use crate::app::paths;
use crate::error::Result;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

const EXTENSION: &str = "bookmarks";

#[derive(Debug, Clone)]
pub struct BookmarkStore {
    dir: PathBuf,
    file: PathBuf,
}

impl BookmarkStore {
    /// Store for `document` inside the application data directory.
    pub fn for_document(document: &Path, data_dir: Option<PathBuf>) -> Option<Self> {
        paths::get_bookmarks_dir_with_override(data_dir).map(|dir| Self::in_dir(dir, document))
    }

    /// Store for `document` inside an explicit bookmarks directory.
    pub fn in_dir(dir: PathBuf, document: &Path) -> Self {
        let mut name = document
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_else(|| "document".into());
        name.push(".");
        name.push(EXTENSION);
        let file = dir.join(name);
        Self { dir, file }
    }

    pub fn file_path(&self) -> &Path {
        &self.file
    }

    /// Reads the bookmarks, returning an empty list if the file does not exist.
    pub fn load(&self) -> Result<BookmarkList> {
        match fs::read_to_string(&self.file) {
            Ok(contents) => Ok(BookmarkList::parse(&contents)),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(BookmarkList::new()),
            Err(err) => Err(err.into()),
        }
    }

    /// Rewrites the whole file.
    pub fn save(&self, list: &BookmarkList) -> Result<()> {
        fs::create_dir_all(&self.dir)?;
        fs::write(&self.file, list.to_file_string())?;
        log::debug!("Wrote {} bookmark(s) to {}", list.len(), self.file.display());
        Ok(())
    }

    /// Deletes this document's bookmarks.
    pub fn clear_current(&self) -> Result<()> {
        match fs::remove_file(&self.file) {
            Ok(()) => {
                log::info!("Cleared bookmarks in {}", self.file.display());
                Ok(())
            }
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(()),
            Err(err) => Err(err.into()),
        }
    }

    /// Deletes every bookmark file next to this one. Returns how many were removed.
    pub fn clear_all(&self) -> Result<usize> {
        clear_dir(&self.dir)
    }
}

/// Deletes every `.bookmarks` file in `dir`.
pub fn clear_dir(dir: &Path) -> Result<usize> {
    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(err) if err.kind() == ErrorKind::NotFound => return Ok(0),
        Err(err) => return Err(err.into()),
    };

    let mut removed = 0;
    for entry in entries {
        let path = entry?.path();
        if path.is_file() && path.extension().is_some_and(|ext| ext == EXTENSION) {
            fs::remove_file(&path)?;
            removed += 1;
        }
    }
    log::info!("Cleared {} bookmark file(s) in {}", removed, dir.display());
    Ok(removed)
}
