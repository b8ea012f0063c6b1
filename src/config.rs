use crate::error::{Result, WatcherError};
use std::path::PathBuf;

/// Directory names skipped when they sit directly under the watch root
pub const DEFAULT_EXCLUDED_DIRS: &[&str] = &["obj", "bin", ".git", ".mypy_cache"];

/// The command to re-run, kept exactly as it was given on the command line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandLine {
	program: String,
	args: Vec<String>,
}

impl CommandLine {
	/// Build from a raw argument vector. The first element is the program.
	pub fn new(argv: Vec<String>) -> Result<Self> {
		let mut argv = argv.into_iter();
		let program = argv.next().ok_or(WatcherError::EmptyCommand)?;
		Ok(Self { program, args: argv.collect() })
	}

	pub fn program(&self) -> &str {
		&self.program
	}

	pub fn args(&self) -> &[String] {
		&self.args
	}

	/// The full argument vector, program first
	pub fn as_argv(&self) -> Vec<String> {
		std::iter::once(self.program.clone()).chain(self.args.iter().cloned()).collect()
	}
}

/// Configuration for one watch session
#[derive(Debug, Clone)]
pub struct WatchConfig {
	/// Directory whose files are enumerated at startup
	pub root: PathBuf,
	/// Top-level directory names left out of the watched set
	pub excluded_dirs: Vec<String>,
	pub command: CommandLine,
}

impl WatchConfig {
	/// Watch the current directory with the default exclusions
	pub fn new(command: CommandLine) -> Self {
		Self {
			root: PathBuf::from("."),
			excluded_dirs: DEFAULT_EXCLUDED_DIRS.iter().map(|d| d.to_string()).collect(),
			command,
		}
	}

	pub fn with_root(mut self, root: impl Into<PathBuf>) -> Self {
		self.root = root.into();
		self
	}

	/// Validate the configuration and return errors if invalid
	pub fn validate(&self) -> Result<()> {
		if !self.root.is_dir() {
			return Err(WatcherError::InvalidPath { path: self.root.to_string_lossy().to_string() });
		}

		// Exclusions match a single path segment, so a separator can never match
		if let Some(bad) = self.excluded_dirs.iter().find(|d| d.is_empty() || d.contains(['/', '\\'])) {
			return Err(WatcherError::InvalidPath { path: bad.clone() });
		}

		Ok(())
	}
}
