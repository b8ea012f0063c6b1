use crate::error::Result;
use crossterm::cursor::MoveTo;
use crossterm::execute;
use crossterm::terminal::{Clear, ClearType};
use std::io::{self, Write};

/// The display cleared before every run
pub trait Screen {
	fn clear(&mut self) -> Result<()>;
}

/// Clears a real terminal, scrollback included
pub struct TerminalScreen<W: Write> {
	out: W,
}

impl TerminalScreen<io::Stdout> {
	pub fn stdout() -> Self {
		Self { out: io::stdout() }
	}
}

impl<W: Write> TerminalScreen<W> {
	pub fn new(out: W) -> Self {
		Self { out }
	}

	pub fn into_inner(self) -> W {
		self.out
	}
}

impl<W: Write> Screen for TerminalScreen<W> {
	fn clear(&mut self) -> Result<()> {
		execute!(self.out, Clear(ClearType::All), Clear(ClearType::Purge), MoveTo(0, 0))?;
		Ok(())
	}
}
