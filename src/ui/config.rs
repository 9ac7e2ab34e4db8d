/// Text shown around the browser that never changes while it runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UiLabels {
	/// Header title above the search input.
	pub title: String,
	/// Dimmed text shown in the empty search input.
	pub placeholder: String,
	/// Title of the bordered game list.
	pub list_title: String,
	/// Message shown when no game matches.
	pub empty_label: String,
	/// Label of the overlay's dismiss control.
	pub close_label: String,
	footer: Vec<String>,
}

impl Default for UiLabels {
	fn default() -> Self {
		Self {
			title: "Game App".to_string(),
			placeholder: "Search for a game...".to_string(),
			list_title: "Games".to_string(),
			empty_label: "No games found".to_string(),
			close_label: "Close".to_string(),
			footer: vec!["Desenvolvido por Eduardo".to_string(), "Versão 1.0".to_string()],
		}
	}
}

impl UiLabels {
	/// Number of attribution lines the footer reserves.
	pub const FOOTER_LINES: usize = 2;

	/// Replace the footer text. Only the first two lines are shown; missing
	/// lines render blank.
	pub fn set_footer<I, S>(&mut self, lines: I)
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		self.footer = lines
			.into_iter()
			.map(Into::into)
			.take(Self::FOOTER_LINES)
			.collect();
	}

	#[must_use]
	pub fn footer_lines(&self) -> [&str; Self::FOOTER_LINES] {
		let line = |idx: usize| self.footer.get(idx).map(String::as_str).unwrap_or("");
		[line(0), line(1)]
	}
}
