use chrono::{DateTime, Utc};
use notify::event::{AccessKind, AccessMode, ModifyKind, RenameMode};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum EventType {
	WriteClose, // Closed after being opened for writing
	Write,
	Replace, // Another file renamed onto this path
	Create,
	Remove,
	Other(String),
}

impl From<notify::EventKind> for EventType {
	fn from(kind: notify::EventKind) -> Self {
		match kind {
			notify::EventKind::Access(AccessKind::Close(AccessMode::Write)) => EventType::WriteClose,
			notify::EventKind::Access(_) => EventType::Other("Access".to_string()),
			notify::EventKind::Modify(ModifyKind::Name(RenameMode::To | RenameMode::Any)) => {
				EventType::Replace
			}
			notify::EventKind::Modify(ModifyKind::Name(_)) => EventType::Other("Rename".to_string()),
			// Windows reports content changes as Modify(Any)
			notify::EventKind::Modify(ModifyKind::Data(_) | ModifyKind::Any) => EventType::Write,
			notify::EventKind::Modify(ModifyKind::Metadata(_)) => EventType::Other("Metadata".to_string()),
			notify::EventKind::Create(_) => EventType::Create,
			notify::EventKind::Remove(_) => EventType::Remove,
			notify::EventKind::Other => EventType::Other("Unknown".to_string()),
			_ => EventType::Other(format!("{kind:?}")),
		}
	}
}

impl EventType {
	/// Whether this kind of event ends a wait
	///
	/// Backends without close notifications only report data modifications,
	/// so those stand in for write-close there. A rename onto the path is an
	/// editor's atomic save and counts everywhere.
	pub fn is_trigger(&self) -> bool {
		if cfg!(target_os = "linux") {
			matches!(self, EventType::WriteClose | EventType::Replace)
		} else {
			matches!(self, EventType::WriteClose | EventType::Write | EventType::Replace)
		}
	}
}

/// The event that released a wait
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChangeEvent {
	pub event_type: EventType,
	pub path: PathBuf,
	pub timestamp: DateTime<Utc>,
}

impl ChangeEvent {
	pub fn new(event_type: EventType, path: PathBuf) -> Self {
		Self { event_type, path, timestamp: Utc::now() }
	}

	pub fn to_json(&self) -> serde_json::Result<String> {
		serde_json::to_string(self)
	}
}
