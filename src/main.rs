use clap::Parser;
use rerun_watch::{files, Cli, NotifyTrigger, ProcessRunner, TerminalScreen, WatchLoop};
use std::convert::Infallible;
use tracing::{error, info, Level};

async fn watch(cli: Cli) -> rerun_watch::Result<Infallible> {
	let config = cli.into_config()?;
	config.validate()?;

	let watched = files::enumerate(&config.root, &config.excluded_dirs)?;
	let trigger = NotifyTrigger::new(&watched)?;
	let runner = ProcessRunner::new(config.command);
	let mut watch_loop = WatchLoop::new(trigger, runner, TerminalScreen::stdout());

	watch_loop.run().await
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
	let cli = Cli::parse();

	// Logs go to stderr so they never mix with the command's stdout
	let level = if cli.verbose {
		Level::DEBUG
	} else {
		Level::INFO
	};
	tracing_subscriber::fmt().with_max_level(level).with_writer(std::io::stderr).init();

	tokio::select! {
		result = watch(cli) => {
			let e = match result {
				Ok(never) => match never {},
				Err(e) => e,
			};
			error!(category = e.category(), "Watcher stopped: {}", e);
			return Err(e.into());
		}
		signal = tokio::signal::ctrl_c() => {
			signal?;
			info!("Shutting down watcher...");
		}
	}

	Ok(())
}
