//! Common test utilities for the rerun-watch integration tests

#![allow(dead_code)]

use std::path::Path;
use std::time::{Duration, Instant};
use tempfile::TempDir;

/// Create a temporary directory for testing
pub fn setup_temp_dir() -> TempDir {
	TempDir::new().expect("Failed to create temp directory")
}

/// Create a test file with content, parents included
pub fn create_test_file(path: &Path, content: &str) -> std::io::Result<()> {
	if let Some(parent) = path.parent() {
		std::fs::create_dir_all(parent)?;
	}
	std::fs::write(path, content)
}

/// Lines currently in `path`, or none if it does not exist yet
pub fn read_lines(path: &Path) -> Vec<String> {
	std::fs::read_to_string(path).map(|s| s.lines().map(str::to_string).collect()).unwrap_or_default()
}

/// Poll until `path` holds at least `count` lines or the timeout passes
pub async fn wait_for_lines(path: &Path, count: usize, timeout: Duration) -> Vec<String> {
	let start = Instant::now();
	loop {
		let lines = read_lines(path);
		if lines.len() >= count || start.elapsed() > timeout {
			return lines;
		}
		tokio::time::sleep(Duration::from_millis(20)).await;
	}
}

/// Give the watcher backend time to deliver anything in flight
pub async fn wait_for_events() {
	tokio::time::sleep(Duration::from_millis(300)).await;
}
