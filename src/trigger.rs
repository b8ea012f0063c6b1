use crate::error::{Result, WatcherError};
use crate::events::{ChangeEvent, EventType};
use crate::files::WatchedFiles;
use notify::{Config, Event, RecommendedWatcher, RecursiveMode, Watcher};
use std::collections::{BTreeSet, HashSet};
use std::future::Future;
use std::path::{Path, PathBuf};
use tokio::sync::mpsc as tokio_mpsc;
use tracing::{debug, info};

/// Something the loop can block on until a watched file changes
pub trait Trigger {
	/// Start a fresh wait. Changes seen before this call are forgotten.
	fn arm(&mut self) -> Result<()>;

	/// Resolve with the first change since the last `arm`
	fn wait(&mut self) -> impl Future<Output = Result<ChangeEvent>> + Send;
}

/// Write-close trigger backed by the platform's notify watcher
///
/// Watches the parent directory of every file rather than the files
/// themselves. Editors that save by renaming a temporary file over the
/// original swap the inode; a directory watch keeps seeing the path.
pub struct NotifyTrigger {
	// Dropping the watcher unregisters every path
	_watcher: RecommendedWatcher,
	receiver: tokio_mpsc::UnboundedReceiver<notify::Result<Event>>,
	watched: HashSet<PathBuf>,
}

impl NotifyTrigger {
	/// Register a non-recursive watch on each directory holding a file in the set
	pub fn new(files: &WatchedFiles) -> Result<Self> {
		if files.is_empty() {
			return Err(WatcherError::NoFilesToWatch { root: files.root().to_path_buf() });
		}

		let watched = files.iter().map(|path| watch_key(path)).collect::<Result<HashSet<_>>>()?;
		let dirs: BTreeSet<&Path> = watched.iter().filter_map(|path| path.parent()).collect();

		let (tx, rx) = tokio_mpsc::unbounded_channel();

		let mut watcher = RecommendedWatcher::new(
			move |result: notify::Result<Event>| {
				// The receiver only goes away when the trigger is dropped
				let _ = tx.send(result);
			},
			Config::default(),
		)?;

		for dir in &dirs {
			watcher.watch(dir, RecursiveMode::NonRecursive)?;
		}

		// A directory watch only sees the link itself; watch through it too
		for path in watched.iter().filter(|path| path.is_symlink()) {
			watcher.watch(path, RecursiveMode::NonRecursive)?;
		}

		info!("Watching {} files in {} directories under {:?}", watched.len(), dirs.len(), files.root());

		Ok(Self { _watcher: watcher, receiver: rx, watched })
	}
}

/// The path notify reports for `path`: canonical directory, file name kept
///
/// The name is not resolved, so a symlinked file keeps its own path.
fn watch_key(path: &Path) -> Result<PathBuf> {
	let parent = match path.parent() {
		Some(parent) if !parent.as_os_str().is_empty() => parent,
		_ => Path::new("."),
	};
	let name = path.file_name().ok_or_else(|| WatcherError::InvalidPath {
		path: path.to_string_lossy().to_string(),
	})?;
	Ok(std::fs::canonicalize(parent)?.join(name))
}

impl Trigger for NotifyTrigger {
	fn arm(&mut self) -> Result<()> {
		let mut dropped = 0usize;
		while let Ok(result) = self.receiver.try_recv() {
			result?;
			dropped += 1;
		}
		if dropped > 0 {
			debug!("Discarded {} stale events", dropped);
		}
		Ok(())
	}

	async fn wait(&mut self) -> Result<ChangeEvent> {
		loop {
			let event = self.receiver.recv().await.ok_or(WatcherError::TriggerClosed)??;
			let event_type = EventType::from(event.kind);

			if !event_type.is_trigger() {
				debug!("Ignoring {:?} on {:?}", event_type, event.paths);
				continue;
			}

			// Siblings in a watched directory are not part of the set
			match event.paths.into_iter().find(|path| self.watched.contains(path)) {
				Some(path) => return Ok(ChangeEvent::new(event_type, path)),
				None => continue,
			}
		}
	}
}
