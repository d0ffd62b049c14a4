//! TTF discovery under a fonts folder.
//!
//! Walks a directory tree collecting `.ttf` files, and resolves a
//! requested font by its file stem (case-insensitive). Thin filesystem
//! glue; the interesting work starts once a file is loaded.

use std::path::{Path, PathBuf};

use crate::error::BitsmithError;

/// Recursively collect every `.ttf` file under `root`, sorted by path so
/// batch runs process fonts in a stable order.
pub fn find_ttf_files(root: &Path) -> Result<Vec<PathBuf>, BitsmithError> {
    if !root.exists() {
        return Err(BitsmithError::Font(format!(
            "font folder {} does not exist",
            root.display()
        )));
    }
    let mut files = Vec::new();
    walk(root, &mut files)?;
    files.sort();
    Ok(files)
}

fn walk(dir: &Path, files: &mut Vec<PathBuf>) -> Result<(), BitsmithError> {
    for entry in std::fs::read_dir(dir)? {
        let path = entry?.path();
        if path.is_dir() {
            walk(&path, files)?;
        } else if path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("ttf"))
        {
            files.push(path);
        }
    }
    Ok(())
}

/// Find a font by file stem among the discovered files.
pub fn find_by_name<'a>(files: &'a [PathBuf], name: &str) -> Option<&'a PathBuf> {
    files.iter().find(|path| {
        path.file_stem()
            .is_some_and(|stem| stem.to_string_lossy().eq_ignore_ascii_case(name))
    })
}
