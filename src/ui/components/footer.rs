use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::text::Line;
use ratatui::widgets::Paragraph;

use crate::ui::config::UiLabels;
use crate::ui::style::Theme;

/// Rows the footer occupies.
pub const FOOTER_HEIGHT: u16 = UiLabels::FOOTER_LINES as u16;

/// Render the static attribution lines, centred.
pub fn render_footer(
	frame: &mut Frame,
	area: Rect,
	lines: [&str; UiLabels::FOOTER_LINES],
	theme: &Theme,
) {
	let text: Vec<Line> = lines.into_iter().map(Line::from).collect();
	let footer = Paragraph::new(text)
		.alignment(Alignment::Center)
		.style(theme.empty_style());
	frame.render_widget(footer, area);
}
