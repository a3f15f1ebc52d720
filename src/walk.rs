//! Input discovery: expand CLI paths into scan units

use std::path::{Path, PathBuf};

use ignore::WalkBuilder;

use crate::config::ScanConfig;
use crate::error::{Result, ScanError};
use crate::session::SourceUnit;

/// Files under `root` with a configured extension, sorted by path
///
/// `.gitignore` rules are respected, symlinks are not followed, and any
/// directory named in `exclude_dirs` is skipped entirely.
pub fn collect_files(root: &Path, config: &ScanConfig) -> Vec<PathBuf> {
    let exclude_dirs = config.exclude_dirs.clone();

    let mut builder = WalkBuilder::new(root);
    builder.git_ignore(true);
    builder.git_global(true);
    builder.git_exclude(true);
    builder.follow_links(false);
    builder.hidden(true);
    builder.filter_entry(move |entry| {
        let is_dir = entry.file_type().is_some_and(|ft| ft.is_dir());
        !(is_dir
            && entry.depth() > 0
            && exclude_dirs
                .iter()
                .any(|d| entry.file_name().to_str() == Some(d.as_str())))
    });

    let mut files: Vec<PathBuf> = builder
        .build()
        .filter_map(|entry| match entry {
            Ok(entry) => Some(entry),
            Err(e) => {
                tracing::warn!("Skipping unreadable entry: {}", e);
                None
            }
        })
        .filter(|entry| entry.file_type().is_some_and(|ft| ft.is_file()))
        .map(|entry| entry.into_path())
        .filter(|path| {
            path.extension()
                .and_then(|e| e.to_str())
                .is_some_and(|ext| config.should_scan_extension(ext))
        })
        .collect();

    files.sort();
    files
}

/// Units for a list of files and directories
///
/// A named file must exist and have a recognised extension; directories are
/// walked with [`collect_files`].
pub fn collect_units(paths: &[PathBuf], config: &ScanConfig) -> Result<Vec<SourceUnit>> {
    let mut units = Vec::new();

    for path in paths {
        if path.is_dir() {
            let files = collect_files(path, config);
            tracing::debug!("{}: {} files to scan", path.display(), files.len());
            for file in files {
                match SourceUnit::from_path(&file) {
                    Ok(unit) => units.push(unit),
                    Err(e) => tracing::debug!("Skipping {}: {}", file.display(), e),
                }
            }
        } else if path.exists() {
            units.push(SourceUnit::from_path(path)?);
        } else {
            return Err(ScanError::FileNotFound {
                path: path.display().to_string(),
            });
        }
    }

    Ok(units)
}
