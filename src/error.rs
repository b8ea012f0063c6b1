use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while building or running the watch loop
///
/// None of these are retried. Anything that reaches `main` ends the process.
#[derive(Error, Debug)]
pub enum WatcherError {
	#[error("IO error: {0}")]
	Io(#[from] std::io::Error),

	#[error("Notify error: {0}")]
	Notify(#[from] notify::Error),

	#[error("Directory walk error: {0}")]
	Walk(#[from] ignore::Error),

	#[error("Invalid path: {path}")]
	InvalidPath { path: String },

	#[error("No command given; usage: watch <command> [args...]")]
	EmptyCommand,

	#[error("No files to watch under {}", root.display())]
	NoFilesToWatch { root: PathBuf },

	#[error("Failed to start command '{program}': {source}")]
	Spawn {
		program: String,
		#[source]
		source: std::io::Error,
	},

	#[error("Event channel closed while waiting for a change")]
	TriggerClosed,
}

impl WatcherError {
	/// Get error category for logging
	pub fn category(&self) -> &'static str {
		match self {
			WatcherError::Io(_) => "io",
			WatcherError::Notify(_) => "notify",
			WatcherError::Walk(_) => "walk",
			WatcherError::InvalidPath { .. } => "configuration",
			WatcherError::EmptyCommand => "configuration",
			WatcherError::NoFilesToWatch { .. } => "configuration",
			WatcherError::Spawn { .. } => "command",
			WatcherError::TriggerClosed => "channel",
		}
	}

	pub fn spawn(program: &str, source: std::io::Error) -> Self {
		WatcherError::Spawn { program: program.to_string(), source }
	}
}

pub type Result<T> = std::result::Result<T, WatcherError>;
