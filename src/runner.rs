use crate::config::CommandLine;
use crate::error::{Result, WatcherError};
use std::future::Future;
use std::process::{ExitStatus, Stdio};
use tracing::debug;

/// Runs the user's command once, to completion
pub trait CommandRunner {
	fn run(&mut self) -> impl Future<Output = Result<ExitStatus>> + Send;
}

/// Spawns the command as a child process sharing this terminal
///
/// No shell is involved and arguments are passed through untouched.
#[derive(Debug, Clone)]
pub struct ProcessRunner {
	command: CommandLine,
}

impl ProcessRunner {
	pub fn new(command: CommandLine) -> Self {
		Self { command }
	}
}

impl CommandRunner for ProcessRunner {
	async fn run(&mut self) -> Result<ExitStatus> {
		debug!("Running {:?}", self.command.as_argv());

		let status = tokio::process::Command::new(self.command.program())
			.args(self.command.args())
			.stdin(Stdio::inherit())
			.stdout(Stdio::inherit())
			.stderr(Stdio::inherit())
			.kill_on_drop(true)
			.status()
			.await
			.map_err(|e| WatcherError::spawn(self.command.program(), e))?;

		Ok(status)
	}
}
