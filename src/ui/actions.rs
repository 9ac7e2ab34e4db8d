use ratatui::crossterm::event::{
	KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

use super::App;
use crate::controller::Command;
use crate::ui::components::point_in_rect;
use crate::ui::outcome::BrowseOutcome;

impl<'a> App<'a> {
	/// Handle a key press. Returns the outcome once the user leaves.
	pub fn handle_key(&mut self, key: KeyEvent) -> Option<BrowseOutcome> {
		if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
			return Some(self.outcome());
		}

		if self.controller.overlay_visible() {
			if matches!(
				key.code,
				KeyCode::Esc | KeyCode::Enter | KeyCode::Char('q') | KeyCode::Backspace
			) {
				self.dispatch(Command::CloseOverlay);
			}
			return None;
		}

		let len = self.controller.visible_list().len();
		match key.code {
			KeyCode::Esc => return Some(self.outcome()),
			KeyCode::Enter => {
				if let Some(game) = self.highlighted_game() {
					self.dispatch(Command::SelectGame(game));
				}
			}
			KeyCode::Up => self.results.move_cursor(-1, len),
			KeyCode::Down => self.results.move_cursor(1, len),
			KeyCode::PageUp => {
				let page = self.results.page_rows() as isize;
				self.results.move_cursor(-page, len);
			}
			KeyCode::PageDown => {
				let page = self.results.page_rows() as isize;
				self.results.move_cursor(page, len);
			}
			KeyCode::Home => self.results.first(len),
			KeyCode::End => self.results.last(len),
			_ => {
				if self.search_input.input(key) {
					self.sync_search_term();
				}
			}
		}
		None
	}

	/// Handle text pasted into the terminal.
	pub fn handle_paste(&mut self, text: &str) {
		if self.controller.overlay_visible() {
			return;
		}
		if self.search_input.paste(text) {
			self.sync_search_term();
		}
	}

	pub fn handle_mouse(&mut self, mouse: MouseEvent) {
		if self.controller.overlay_visible() {
			if let MouseEventKind::Down(MouseButton::Left) = mouse.kind
				&& let Some(areas) = self.overlay_areas
			{
				let on_close = point_in_rect(mouse.column, mouse.row, areas.close);
				let on_backdrop = !point_in_rect(mouse.column, mouse.row, areas.popup);
				if on_close || on_backdrop {
					self.dispatch(Command::CloseOverlay);
				}
			}
			return;
		}

		let in_results = self
			.results
			.area
			.is_some_and(|area| point_in_rect(mouse.column, mouse.row, area));
		let len = self.controller.visible_list().len();
		match mouse.kind {
			MouseEventKind::ScrollUp if in_results => self.results.move_cursor(-1, len),
			MouseEventKind::ScrollDown if in_results => self.results.move_cursor(1, len),
			MouseEventKind::Down(MouseButton::Left) => {
				if let Some(index) = self.results.row_at(mouse.column, mouse.row, len) {
					self.results.table_state.select(Some(index));
					let games = self.controller.visible_list();
					self.dispatch(Command::SelectGame(games[index]));
				}
			}
			_ => {}
		}
	}

	fn sync_search_term(&mut self) {
		let text = self.search_input.text().to_string();
		self.dispatch(Command::SetSearchTerm(text));
	}
}
