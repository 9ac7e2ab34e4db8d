//! Cursor and scroll state for the game list.

use ratatui::layout::Rect;
use ratatui::widgets::{ScrollbarState, TableState};

use crate::ui::components::tables::TABLE_HEADER_ROWS;

/// Keyboard cursor, scroll offset and last drawn area of the game list.
///
/// The list itself is not stored here; callers pass its length in so the
/// cursor always agrees with what the controller currently shows.
#[derive(Debug, Default)]
pub struct ResultsState {
	pub table_state: TableState,
	pub scrollbar_state: ScrollbarState,
	/// Screen area of the bordered list from the last frame.
	pub area: Option<Rect>,
}

impl ResultsState {
	/// Cursor row, if any.
	#[must_use]
	pub fn cursor(&self) -> Option<usize> {
		self.table_state.selected()
	}

	/// Put the cursor back on the first row and scroll to the top.
	pub fn reset(&mut self, len: usize) {
		self.table_state = TableState::default();
		if len > 0 {
			self.table_state.select(Some(0));
		}
	}

	/// Keep the cursor inside a list of `len` rows.
	pub fn ensure_cursor(&mut self, len: usize) {
		match self.table_state.selected() {
			_ if len == 0 => self.table_state.select(None),
			None => self.table_state.select(Some(0)),
			Some(selected) if selected >= len => self.table_state.select(Some(len - 1)),
			Some(_) => {}
		}
	}

	/// Move the cursor by `delta` rows, clamping at both ends.
	pub fn move_cursor(&mut self, delta: isize, len: usize) {
		if len == 0 {
			self.table_state.select(None);
			return;
		}
		let current = self.table_state.selected().unwrap_or(0);
		let next = current.saturating_add_signed(delta).min(len - 1);
		self.table_state.select(Some(next));
	}

	pub fn first(&mut self, len: usize) {
		self.table_state.select((len > 0).then_some(0));
	}

	pub fn last(&mut self, len: usize) {
		self.table_state.select(len.checked_sub(1));
	}

	/// Rows of list content that fit in the last drawn area.
	#[must_use]
	pub fn page_rows(&self) -> usize {
		self.area
			.map(|area| (area.height.saturating_sub(2) as usize).saturating_sub(TABLE_HEADER_ROWS))
			.unwrap_or(1)
			.max(1)
	}

	/// Map a screen row to a list row, if the point is on a drawn game row.
	#[must_use]
	pub fn row_at(&self, column: u16, row: u16, len: usize) -> Option<usize> {
		let area = self.area?;
		if column <= area.x || column >= area.right().saturating_sub(1) {
			return None;
		}

		// Inside the border the header and its separator come first.
		let inner_y = area.y.saturating_add(1);
		let inner_height = area.height.saturating_sub(2);
		let body_start = inner_y.saturating_add(TABLE_HEADER_ROWS as u16);
		let body_end = inner_y.saturating_add(inner_height);
		if row < body_start || row >= body_end {
			return None;
		}

		let index = self
			.table_state
			.offset()
			.saturating_add((row - body_start) as usize);
		(index < len).then_some(index)
	}

	/// Sync the scrollbar with `len` rows shown in a viewport `viewport_height`
	/// rows tall (header included).
	pub fn update_scrollbar(&mut self, len: usize, viewport_height: usize) {
		let rows = viewport_height.saturating_sub(TABLE_HEADER_ROWS);
		if len == 0 || rows == 0 || len <= rows {
			*self.table_state.offset_mut() = 0;
			self.scrollbar_state = ScrollbarState::default();
			return;
		}

		let max_offset = len - rows;
		let mut offset = self.table_state.offset().min(max_offset);
		if let Some(selected) = self.table_state.selected() {
			if selected < offset {
				offset = selected;
			} else if selected >= offset + rows {
				offset = selected + 1 - rows;
			}
		}
		*self.table_state.offset_mut() = offset;

		self.scrollbar_state = ScrollbarState::new(max_offset + 1)
			.viewport_content_length(rows)
			.position(offset);
	}
}
