//! The edit → save → rerun loop
//!
//! Each iteration arms the trigger, clears the screen, runs the command and
//! then blocks until a watched file is closed after writing. Arming happens
//! before the command starts, so the command runs once at startup and any
//! write made while it runs releases the next wait immediately.

use crate::error::Result;
use crate::events::ChangeEvent;
use crate::runner::CommandRunner;
use crate::screen::Screen;
use crate::trigger::Trigger;
use std::convert::Infallible;
use std::process::ExitStatus;
use tracing::{debug, info};

/// Outcome of one pass through the loop
#[derive(Debug, Clone)]
pub struct Iteration {
	pub status: ExitStatus,
	pub change: ChangeEvent,
}

pub struct WatchLoop<T, R, S> {
	trigger: T,
	runner: R,
	screen: S,
	iterations: u64,
}

impl<T, R, S> WatchLoop<T, R, S>
where
	T: Trigger + Send,
	R: CommandRunner + Send,
	S: Screen + Send,
{
	pub fn new(trigger: T, runner: R, screen: S) -> Self {
		Self { trigger, runner, screen, iterations: 0 }
	}

	/// Number of completed passes
	pub fn iterations(&self) -> u64 {
		self.iterations
	}

	/// Arm, clear, run, then wait for the change that ends this pass
	pub async fn run_once(&mut self) -> Result<Iteration> {
		self.trigger.arm()?;
		self.screen.clear()?;

		let status = self.runner.run().await?;
		if status.success() {
			debug!("Command finished: {}", status);
		} else {
			// Not an error: the next save reruns it
			info!("Command exited with {}", status);
		}

		let change = self.trigger.wait().await?;
		debug!("Change detected: {:?} on {}", change.event_type, change.path.display());
		if let Ok(json) = change.to_json() {
			debug!("Event JSON: {}", json);
		}

		self.iterations += 1;
		Ok(Iteration { status, change })
	}

	/// Loop forever; only an error ends it
	pub async fn run(&mut self) -> Result<Infallible> {
		loop {
			self.run_once().await?;
		}
	}
}
