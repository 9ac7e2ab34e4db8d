use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::ui::input::SearchInput;
use crate::ui::style::Theme;

/// Prompt drawn before the search input.
pub const PROMPT: &str = "› ";

/// Argument bundle for rendering the header.
pub struct HeaderContext<'a, 'input> {
	pub title: &'a str,
	pub search_input: &'a SearchInput<'input>,
	pub placeholder: &'a str,
	/// Right-aligned status, e.g. how many games are visible.
	pub status: &'a str,
	pub theme: &'a Theme,
}

/// Rows the header occupies: title then search input.
pub const HEADER_HEIGHT: u16 = 2;

/// Render the title row and the search row.
pub fn render_header(frame: &mut Frame, area: Rect, header: HeaderContext<'_, '_>) {
	let [title_area, input_row] =
		Layout::vertical([Constraint::Length(1), Constraint::Length(1)]).areas(area);

	let title = Paragraph::new(header.title)
		.alignment(Alignment::Center)
		.style(header.theme.header_style());
	frame.render_widget(title, title_area);

	let prompt_width = PROMPT.chars().count() as u16;
	let [prompt_area, input_area] =
		Layout::horizontal([Constraint::Length(prompt_width), Constraint::Fill(1)])
			.areas(input_row);
	frame.render_widget(
		Span::styled(PROMPT, header.theme.header_style()),
		prompt_area,
	);

	header.search_input.render_textarea(frame, input_area);
	if header.search_input.text().is_empty() {
		render_placeholder(frame, input_area, header.placeholder, header.theme);
	}
	render_status(frame, input_area, header.status, header.theme);
}

fn render_placeholder(frame: &mut Frame, area: Rect, text: &str, theme: &Theme) {
	if area.width == 0 || area.height == 0 || text.is_empty() {
		return;
	}
	// Leave the first cell to the text area's cursor.
	let start = area.left().saturating_add(1);
	let width = area.width.saturating_sub(1);
	frame.buffer_mut().set_line(
		start,
		area.top(),
		&Line::from(Span::styled(text, theme.empty_style())),
		width,
	);
}

fn render_status(frame: &mut Frame, area: Rect, status: &str, theme: &Theme) {
	if area.width == 0 || area.height == 0 || status.is_empty() {
		return;
	}

	let line = Line::from(Span::styled(status, theme.empty_style()));
	let line_width = line.width() as u16;
	let buffer = frame.buffer_mut();
	let row = area.top();

	let mut start_x = area.right().saturating_sub(line_width);
	let last_used = (area.left()..area.right())
		.rev()
		.find(|&x| buffer.cell((x, row)).is_some_and(|cell| !cell.symbol().trim().is_empty()));
	if let Some(last_x) = last_used {
		start_x = start_x.max(last_x.saturating_add(3));
	}
	if start_x >= area.right() {
		return;
	}

	buffer.set_line(start_x, row, &line, area.right() - start_x);
}
