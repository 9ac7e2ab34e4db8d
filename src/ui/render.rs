use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Margin};

use super::App;
use crate::ui::components::{
	FOOTER_HEIGHT, GameTable, HEADER_HEIGHT, HeaderContext, render_footer, render_game_table,
	render_header, render_overlay,
};

impl<'a> App<'a> {
	/// Draw one frame from the current controller state.
	pub fn draw(&mut self, frame: &mut Frame) {
		let area = frame.area().inner(Margin {
			vertical: 0,
			horizontal: 1,
		});
		let [header_area, body_area, footer_area] = Layout::vertical([
			Constraint::Length(HEADER_HEIGHT),
			Constraint::Min(1),
			Constraint::Length(FOOTER_HEIGHT),
		])
		.areas(area);

		let visible = self.controller.visible_list();
		let theme = self.style.theme;
		self.search_input.set_style(theme.prompt_style());

		let status = format!("{}/{}", visible.len(), self.controller.catalog().len());
		render_header(frame, header_area, HeaderContext {
			title: &self.labels.title,
			search_input: &self.search_input,
			placeholder: &self.labels.placeholder,
			status: &status,
			theme: &theme,
		});

		render_game_table(frame, body_area, &mut self.results, GameTable {
			games: &visible,
			search_term: self.controller.search_term(),
			title: &self.labels.list_title,
			empty_label: &self.labels.empty_label,
			images: self.images.as_ref(),
			theme: &theme,
		});

		render_footer(frame, footer_area, self.labels.footer_lines(), &theme);

		let full = frame.area();
		self.overlay_areas = self.controller.overlay_game().map(|game| {
			render_overlay(
				frame,
				full,
				game,
				&self.labels.close_label,
				self.images.as_ref(),
				&theme,
			)
		});
	}
}
