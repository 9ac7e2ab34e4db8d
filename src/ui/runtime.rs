//! Application runtime and event loop.

use std::io::stdout;
use std::time::Duration;

use anyhow::Result;
use ratatui::DefaultTerminal;
use ratatui::crossterm::event::{
	self, DisableBracketedPaste, DisableMouseCapture, EnableBracketedPaste, EnableMouseCapture,
	Event, KeyEventKind,
};
use ratatui::crossterm::execute;

use super::App;
use crate::ui::outcome::BrowseOutcome;

const POLL_INTERVAL: Duration = Duration::from_millis(50);

impl<'a> App<'a> {
	/// Take over the terminal and run until the user leaves.
	pub fn run(&mut self) -> Result<BrowseOutcome> {
		let mut terminal = ratatui::init();
		let setup = terminal
			.clear()
			.map_err(anyhow::Error::from)
			.and_then(|()| {
				execute!(stdout(), EnableMouseCapture, EnableBracketedPaste).map_err(Into::into)
			});

		let result = setup.and_then(|()| self.event_loop(&mut terminal));

		let teardown = execute!(stdout(), DisableBracketedPaste, DisableMouseCapture);
		ratatui::restore();
		let outcome = result?;
		teardown?;
		Ok(outcome)
	}

	fn event_loop(&mut self, terminal: &mut DefaultTerminal) -> Result<BrowseOutcome> {
		tracing::info!(games = self.controller.catalog().len(), "browser started");
		loop {
			terminal.draw(|frame| self.draw(frame))?;

			if !event::poll(POLL_INTERVAL)? {
				continue;
			}
			match event::read()? {
				Event::Key(key) if key.kind == KeyEventKind::Press => {
					if let Some(outcome) = self.handle_key(key) {
						tracing::info!(query = %outcome.query, "browser closed");
						return Ok(outcome);
					}
				}
				Event::Mouse(mouse) => self.handle_mouse(mouse),
				Event::Paste(text) => self.handle_paste(&text),
				_ => {}
			}
		}
	}
}
