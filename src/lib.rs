pub mod cli;
pub mod config;
mod error;
mod events;
pub mod files;
mod runner;
mod screen;
mod trigger;
mod watch_loop;

pub use cli::Cli;
pub use config::{CommandLine, WatchConfig, DEFAULT_EXCLUDED_DIRS};
pub use error::{Result, WatcherError};
pub use events::{ChangeEvent, EventType};
pub use files::WatchedFiles;
pub use runner::{CommandRunner, ProcessRunner};
pub use screen::{Screen, TerminalScreen};
pub use trigger::{NotifyTrigger, Trigger};
pub use watch_loop::{Iteration, WatchLoop};
