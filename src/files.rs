//! One-time enumeration of the files to watch
//!
//! The set is computed once at startup and never refreshed. Files created
//! later are not picked up.

use crate::error::{Result, WatcherError};
use ignore::WalkBuilder;
use std::path::{Path, PathBuf};
use tracing::debug;

/// The fixed, ordered set of paths handed to the trigger
#[derive(Debug, Clone)]
pub struct WatchedFiles {
	root: PathBuf,
	paths: Vec<PathBuf>,
}

impl WatchedFiles {
	pub fn root(&self) -> &Path {
		&self.root
	}

	pub fn paths(&self) -> &[PathBuf] {
		&self.paths
	}

	pub fn iter(&self) -> impl Iterator<Item = &PathBuf> {
		self.paths.iter()
	}

	pub fn len(&self) -> usize {
		self.paths.len()
	}

	pub fn is_empty(&self) -> bool {
		self.paths.is_empty()
	}

	pub fn contains(&self, path: &Path) -> bool {
		self.paths.iter().any(|p| p == path)
	}
}

/// Recursively list the files under `root`
///
/// An entry is skipped when its first path segment below `root` matches one
/// of `excluded_dirs`. Deeper segments with the same names are kept. No
/// ignore files are consulted and hidden files are included.
pub fn enumerate(root: &Path, excluded_dirs: &[String]) -> Result<WatchedFiles> {
	if !root.is_dir() {
		return Err(WatcherError::InvalidPath { path: root.to_string_lossy().to_string() });
	}

	let excluded = excluded_dirs.to_vec();
	let walker = WalkBuilder::new(root)
		.standard_filters(false)
		.follow_links(false)
		.sort_by_file_name(|a, b| a.cmp(b))
		.filter_entry(move |entry| {
			if entry.depth() != 1 {
				return true;
			}
			let name = entry.file_name().to_string_lossy();
			!excluded.iter().any(|d| d.as_str() == name.as_ref())
		})
		.build();

	let mut paths = Vec::new();
	for entry in walker {
		let entry = entry?;
		let Some(file_type) = entry.file_type() else {
			continue;
		};

		// Symlinks count when they resolve to a regular file
		let is_file = file_type.is_file() || (file_type.is_symlink() && entry.path().is_file());
		if is_file {
			paths.push(entry.into_path());
		}
	}

	debug!("Enumerated {} files under {:?}", paths.len(), root);

	Ok(WatchedFiles { root: root.to_path_buf(), paths })
}
