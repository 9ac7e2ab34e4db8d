use crate::catalog::{Catalog, Game};
use crate::controller::{Command, Controller};
use crate::ui::components::{FileNameImageLoader, ImageLoader, OverlayAreas};
use crate::ui::config::UiLabels;
use crate::ui::input::SearchInput;
use crate::ui::outcome::BrowseOutcome;
use crate::ui::results::ResultsState;
use crate::ui::style::{StyleConfig, Theme};

/// Terminal front end over a [`Controller`].
///
/// Everything here besides the controller is rendering state: the text
/// buffer of the search field, the table cursor and the hit areas of the
/// previous frame.
pub struct App<'a> {
	pub(crate) controller: Controller<'a>,
	pub(crate) search_input: SearchInput<'a>,
	pub(crate) labels: UiLabels,
	pub(crate) style: StyleConfig,
	pub(crate) images: Box<dyn ImageLoader + 'a>,
	pub(crate) results: ResultsState,
	pub(crate) overlay_areas: Option<OverlayAreas>,
	last_opened: Option<&'a Game>,
}

impl<'a> App<'a> {
	#[must_use]
	pub fn new(catalog: &'a Catalog) -> Self {
		let controller = Controller::new(catalog);
		let mut results = ResultsState::default();
		results.reset(catalog.len());
		Self {
			controller,
			search_input: SearchInput::new(""),
			labels: UiLabels::default(),
			style: StyleConfig::default(),
			images: Box::new(FileNameImageLoader::default()),
			results,
			overlay_areas: None,
			last_opened: None,
		}
	}

	/// Start with `query` in the search field and applied to the list.
	pub fn set_initial_query(&mut self, query: impl Into<String>) {
		let query = query.into();
		self.search_input = SearchInput::new(query.clone());
		self.dispatch(Command::SetSearchTerm(query));
	}

	pub fn set_labels(&mut self, labels: UiLabels) {
		self.labels = labels;
	}

	pub fn set_theme(&mut self, theme: Theme) {
		self.style = StyleConfig::with_theme(theme);
	}

	pub fn set_image_loader(&mut self, images: impl ImageLoader + 'a) {
		self.images = Box::new(images);
	}

	#[must_use]
	pub fn controller(&self) -> &Controller<'a> {
		&self.controller
	}

	#[must_use]
	pub fn theme(&self) -> &Theme {
		&self.style.theme
	}

	/// Game under the table cursor.
	#[must_use]
	pub fn highlighted_game(&self) -> Option<&'a Game> {
		let index = self.results.cursor()?;
		self.controller.visible_list().get(index).copied()
	}

	/// Apply one controller operation and keep rendering state in step
	/// with it.
	pub(crate) fn dispatch(&mut self, command: Command<'a>) {
		let term_changed = matches!(command, Command::SetSearchTerm(_));
		if let Command::SelectGame(game) = command {
			self.last_opened = Some(game);
		}
		if matches!(command, Command::CloseOverlay) {
			self.overlay_areas = None;
		}

		self.controller.apply(command);

		if term_changed {
			let len = self.controller.visible_list().len();
			self.results.reset(len);
		}
	}

	pub(crate) fn outcome(&self) -> BrowseOutcome {
		BrowseOutcome {
			query: self.controller.search_term().to_string(),
			last_opened: self.last_opened.cloned(),
		}
	}
}
