use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Flex, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use unicode_width::UnicodeWidthStr;

use crate::catalog::Game;
use crate::ui::components::thumbnail::ImageLoader;
use crate::ui::style::Theme;

/// Screen areas of the last drawn overlay, used for mouse hit testing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OverlayAreas {
	pub popup: Rect,
	pub close: Rect,
}

/// Detail lines in display order, without the dismiss control.
#[must_use]
pub fn detail_lines(game: &Game, images: &dyn ImageLoader) -> Vec<String> {
	vec![
		images.load(&game.image).caption(),
		String::new(),
		format!("Platform: {}", game.platform),
		format!("Genre: {}", game.genre),
		format!("Developer: {}", game.developer),
		format!("Release Date: {}", game.release_date),
		format!("Rating: {} - Score: {}", game.rating, game.rating_score),
	]
}

/// Draw the overlay centred over `area`. It grows to the whole area when the
/// terminal is too small to leave a margin.
pub fn render_overlay(
	frame: &mut Frame,
	area: Rect,
	game: &Game,
	close_label: &str,
	images: &dyn ImageLoader,
	theme: &Theme,
) -> OverlayAreas {
	let lines = detail_lines(game, images);
	let button = format!("[ {close_label} ]");

	let content_width = lines
		.iter()
		.map(|line| line.width())
		.chain([button.width(), game.name.width()])
		.max()
		.unwrap_or(0) as u16;
	// Borders plus one column of padding on each side.
	let width = content_width.saturating_add(4).max(area.width / 5 * 3);
	// Borders, blank spacer row and button row.
	let height = (lines.len() as u16).saturating_add(4);
	let popup = centered(area, width, height);

	frame.render_widget(Clear, popup);
	let block = Block::default()
		.borders(Borders::ALL)
		.border_set(ratatui::symbols::border::ROUNDED)
		.border_style(theme.border_style())
		.title(Line::from(Span::styled(format!(" {} ", game.name), theme.header_style())))
		.title_alignment(Alignment::Center);
	let inner = block.inner(popup);
	frame.render_widget(block, popup);

	let [details_area, _, button_row] = Layout::vertical([
		Constraint::Length(lines.len() as u16),
		Constraint::Fill(1),
		Constraint::Length(1),
	])
	.areas(inner);

	let details = Paragraph::new(lines.into_iter().map(Line::from).collect::<Vec<_>>())
		.alignment(Alignment::Center);
	frame.render_widget(details, details_area);

	let [close] = Layout::horizontal([Constraint::Length(button.width() as u16)])
		.flex(Flex::Center)
		.areas(button_row);
	frame.render_widget(Span::styled(button, theme.button_style()), close);

	OverlayAreas { popup, close }
}

fn centered(area: Rect, width: u16, height: u16) -> Rect {
	let [row] = Layout::vertical([Constraint::Length(height.min(area.height))])
		.flex(Flex::Center)
		.areas(area);
	let [popup] = Layout::horizontal([Constraint::Length(width.min(area.width))])
		.flex(Flex::Center)
		.areas(row);
	popup
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::ui::components::thumbnail::FileNameImageLoader;

	#[test]
	fn detail_lines_cover_every_field() {
		let game = Game::new(4, "Hades")
			.with_platform("PC")
			.with_genre("Roguelike")
			.with_developer("Supergiant Games")
			.with_release_date("2020-09-17")
			.with_rating("T", 9.3)
			.with_image("images/hades.jpg");
		let lines = detail_lines(&game, &FileNameImageLoader::default());
		insta::assert_snapshot!(lines.join("\n"), @r"
		▣ hades.jpg

		Platform: PC
		Genre: Roguelike
		Developer: Supergiant Games
		Release Date: 2020-09-17
		Rating: T - Score: 9.3
		");
	}

	#[test]
	fn centered_shrinks_to_fit() {
		let area = Rect::new(0, 0, 20, 6);
		assert_eq!(centered(area, 40, 10), area);
		assert_eq!(centered(area, 10, 2), Rect::new(5, 2, 10, 2));
	}
}
