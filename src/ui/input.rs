//! Single-line search field backed by `tui-textarea`.

use ratatui::Frame;
use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::layout::Rect;
use ratatui::style::Style;
use tui_textarea::{CursorMove, TextArea};

/// Text input for the search term.
///
/// Only ever holds one line: keys that would insert a line break are
/// swallowed before they reach the text area.
pub struct SearchInput<'a> {
	textarea: TextArea<'a>,
}

impl<'a> SearchInput<'a> {
	#[must_use]
	pub fn new(initial: impl Into<String>) -> Self {
		let mut textarea = TextArea::new(vec![initial.into()]);
		textarea.set_cursor_line_style(Style::default());
		textarea.move_cursor(CursorMove::End);
		Self { textarea }
	}

	/// Current text.
	#[must_use]
	pub fn text(&self) -> &str {
		self.textarea
			.lines()
			.first()
			.map(String::as_str)
			.unwrap_or("")
	}

	/// Feed a key to the field. Returns `true` when the text changed.
	pub fn input(&mut self, key: KeyEvent) -> bool {
		if inserts_line_break(&key) {
			return false;
		}

		let before = self.text().to_owned();
		self.textarea.input(key);
		self.text() != before
	}

	/// Insert pasted text at the cursor, flattening line breaks into spaces.
	/// Returns `true` when the text changed.
	pub fn paste(&mut self, text: &str) -> bool {
		let flattened: String = text
			.chars()
			.filter(|&ch| ch != '\r')
			.map(|ch| if ch == '\n' { ' ' } else { ch })
			.collect();
		if flattened.is_empty() {
			return false;
		}
		self.textarea.insert_str(flattened)
	}

	pub fn set_style(&mut self, style: Style) {
		self.textarea.set_style(style);
	}

	pub fn render_textarea(&self, frame: &mut Frame, area: Rect) {
		frame.render_widget(&self.textarea, area);
	}
}

fn inserts_line_break(key: &KeyEvent) -> bool {
	match key.code {
		KeyCode::Enter => true,
		KeyCode::Char('m' | 'j') => key.modifiers.contains(KeyModifiers::CONTROL),
		_ => false,
	}
}
