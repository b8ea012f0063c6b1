use crate::config::{CommandLine, WatchConfig};
use crate::error::Result;
use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "watch")]
#[command(about = "Clear the screen and re-run a command whenever a file here is saved")]
pub struct Cli {
	/// Enable verbose logging
	#[arg(short, long)]
	pub verbose: bool,

	/// Command to run, followed by its arguments (passed through verbatim)
	#[arg(required = true, trailing_var_arg = true, allow_hyphen_values = true, value_name = "COMMAND")]
	pub command: Vec<String>,
}

impl Cli {
	/// Watch configuration for the current directory
	pub fn into_config(self) -> Result<WatchConfig> {
		let command = CommandLine::new(self.command)?;
		Ok(WatchConfig::new(command))
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use clap::error::ErrorKind;

	fn parse(args: &[&str]) -> std::result::Result<Cli, clap::Error> {
		Cli::try_parse_from(std::iter::once("watch").chain(args.iter().copied()))
	}

	#[test]
	fn test_command_is_taken_verbatim() {
		let cli = parse(&["cargo", "test", "--release", "-v", "--", "--nocapture"]).unwrap();

		assert!(!cli.verbose);
		assert_eq!(cli.command, vec!["cargo", "test", "--release", "-v", "--", "--nocapture"]);
	}

	#[test]
	fn test_verbose_before_command() {
		let cli = parse(&["--verbose", "make", "check"]).unwrap();

		assert!(cli.verbose);
		assert_eq!(cli.command, vec!["make", "check"]);
	}

	#[test]
	fn test_double_dash_separates_command() {
		let cli = parse(&["--", "-weird-program", "--flag"]).unwrap();

		assert!(!cli.verbose);
		assert_eq!(cli.command, vec!["-weird-program", "--flag"]);
	}

	#[test]
	fn test_missing_command_is_a_usage_error() {
		let err = parse(&[]).unwrap_err();
		assert_eq!(err.kind(), ErrorKind::MissingRequiredArgument);

		let err = parse(&["-v"]).unwrap_err();
		assert_eq!(err.kind(), ErrorKind::MissingRequiredArgument);
	}

	#[test]
	fn test_into_config() {
		let config = parse(&["pytest", "-x"]).unwrap().into_config().unwrap();

		assert_eq!(config.command.program(), "pytest");
		assert_eq!(config.command.args(), &["-x".to_string()][..]);
		assert_eq!(config.root, std::path::PathBuf::from("."));
	}
}
