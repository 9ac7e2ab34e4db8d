use ratatui::Frame;
use ratatui::layout::{Constraint, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Cell, HighlightSpacing, Paragraph, Row, Table};

use crate::catalog::Game;
use crate::search::match_range;
use crate::ui::components::scrollbar::render_scrollbar;
use crate::ui::components::thumbnail::ImageLoader;
use crate::ui::results::ResultsState;
use crate::ui::style::Theme;

pub const HIGHLIGHT_SYMBOL: &str = "▶ ";
pub const TABLE_COLUMN_SPACING: u16 = 1;
/// Header row + separator height inside the table's viewport.
pub const TABLE_HEADER_ROWS: usize = 2;

const HEADERS: [&str; 4] = ["Name", "Image", "Genre - Platform", "Rating"];

fn column_widths() -> [Constraint; 4] {
	[
		Constraint::Fill(2),
		Constraint::Fill(1),
		Constraint::Fill(2),
		Constraint::Length(14),
	]
}

/// Everything the game table needs for one frame.
pub struct GameTable<'a> {
	pub games: &'a [&'a Game],
	pub search_term: &'a str,
	pub title: &'a str,
	pub empty_label: &'a str,
	pub images: &'a dyn ImageLoader,
	pub theme: &'a Theme,
}

/// Render the bordered game list, or the empty-state message when nothing
/// matches.
pub fn render_game_table(
	frame: &mut Frame,
	area: Rect,
	state: &mut ResultsState,
	table: GameTable<'_>,
) {
	state.area = Some(area);

	let block = Block::default()
		.borders(Borders::ALL)
		.border_set(ratatui::symbols::border::ROUNDED)
		.border_style(table.theme.border_style())
		.title(table.title.to_string());
	let inner = block.inner(area);
	frame.render_widget(block, area);

	if table.games.is_empty() {
		render_empty(frame, inner, table.empty_label, table.theme);
		state.ensure_cursor(0);
		return;
	}

	let len = table.games.len();
	state.ensure_cursor(len);
	let viewport_height = inner.height as usize;
	state.update_scrollbar(len, viewport_height);
	let needs_scrollbar = len > viewport_height.saturating_sub(TABLE_HEADER_ROWS)
		&& viewport_height > TABLE_HEADER_ROWS;

	let table_area = if needs_scrollbar {
		render_scrollbar(frame, inner, &mut state.scrollbar_state, table.theme)
	} else {
		inner
	};

	let header = Row::new(HEADERS.map(Cell::from))
		.style(table.theme.header_style())
		.height(1)
		.bottom_margin(1);
	let rows = table
		.games
		.iter()
		.map(|game| game_row(game, table.search_term, table.images, table.theme));

	let widget = Table::new(rows, column_widths())
		.header(header)
		.column_spacing(TABLE_COLUMN_SPACING)
		.highlight_spacing(HighlightSpacing::WhenSelected)
		.row_highlight_style(table.theme.row_highlight_style())
		.highlight_symbol(HIGHLIGHT_SYMBOL);
	frame.render_stateful_widget(widget, table_area, &mut state.table_state);

	render_header_separator(frame, table_area, table.theme);
}

fn game_row<'a>(
	game: &'a Game,
	search_term: &str,
	images: &dyn ImageLoader,
	theme: &Theme,
) -> Row<'a> {
	Row::new([
		Cell::from(highlighted_name(&game.name, search_term, theme)),
		Cell::from(images.load(&game.image).caption()),
		Cell::from(game.genre_and_platform()),
		Cell::from(game.rating.as_str()),
	])
}

/// Split `name` so the first case-insensitive match of `term` is styled.
#[must_use]
pub fn highlighted_name<'a>(name: &'a str, term: &str, theme: &Theme) -> Line<'a> {
	let Some(range) = match_range(name, term) else {
		return Line::from(name);
	};

	let byte_at = |char_idx: usize| {
		name.char_indices()
			.nth(char_idx)
			.map_or(name.len(), |(byte, _)| byte)
	};
	let (start, end) = (byte_at(range.start), byte_at(range.end));

	Line::from(vec![
		Span::raw(&name[..start]),
		Span::styled(&name[start..end], theme.highlight_style()),
		Span::raw(&name[end..]),
	])
}

fn render_empty(frame: &mut Frame, area: Rect, label: &str, theme: &Theme) {
	if area.height == 0 {
		return;
	}
	let message_area = Rect {
		y: area.y + area.height.saturating_sub(1) / 2,
		height: 1,
		..area
	};
	let message = Paragraph::new(label)
		.alignment(ratatui::layout::Alignment::Center)
		.style(theme.empty_style());
	frame.render_widget(message, message_area);
}

fn render_header_separator(frame: &mut Frame, area: Rect, theme: &Theme) {
	if area.height <= 1 || area.width <= 2 {
		return;
	}
	let line = Line::from(vec![
		Span::raw(" "),
		Span::styled("─".repeat(area.width as usize - 2), theme.border_style()),
		Span::raw(" "),
	]);
	let separator = Rect {
		y: area.y + 1,
		height: 1,
		..area
	};
	frame.render_widget(Paragraph::new(line), separator);
}
