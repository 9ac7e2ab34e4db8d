use anyhow::Result;

use super::App;
use crate::catalog::Catalog;
use crate::ui::components::ImageLoader;
use crate::ui::config::UiLabels;
use crate::ui::outcome::BrowseOutcome;
use crate::ui::style::{Theme, by_name};

/// Configures the browser before it takes over the terminal.
pub struct Browser<'a> {
	catalog: &'a Catalog,
	labels: UiLabels,
	initial_query: String,
	theme: Option<Theme>,
	images: Option<Box<dyn ImageLoader + 'a>>,
}

impl<'a> Browser<'a> {
	#[must_use]
	pub fn new(catalog: &'a Catalog) -> Self {
		Self {
			catalog,
			labels: UiLabels::default(),
			initial_query: String::new(),
			theme: None,
			images: None,
		}
	}

	#[must_use]
	pub fn with_title(mut self, title: impl Into<String>) -> Self {
		self.labels.title = title.into();
		self
	}

	#[must_use]
	pub fn with_labels(mut self, labels: UiLabels) -> Self {
		self.labels = labels;
		self
	}

	#[must_use]
	pub fn with_initial_query(mut self, query: impl Into<String>) -> Self {
		self.initial_query = query.into();
		self
	}

	/// Use a built-in theme. Unknown names keep the current theme.
	#[must_use]
	pub fn with_theme_name(mut self, name: &str) -> Self {
		if let Some(theme) = by_name(name) {
			self.theme = Some(theme);
		}
		self
	}

	#[must_use]
	pub fn with_theme(mut self, theme: Theme) -> Self {
		self.theme = Some(theme);
		self
	}

	#[must_use]
	pub fn with_image_loader(mut self, images: impl ImageLoader + 'a) -> Self {
		self.images = Some(Box::new(images));
		self
	}

	/// Build the [`App`] without running it.
	#[must_use]
	pub fn build(self) -> App<'a> {
		let mut app = App::new(self.catalog);
		app.set_labels(self.labels);
		if let Some(theme) = self.theme {
			app.set_theme(theme);
		}
		if let Some(images) = self.images {
			app.images = images;
		}
		if !self.initial_query.is_empty() {
			app.set_initial_query(self.initial_query);
		}
		app
	}

	/// Run the interactive browser with the configured options.
	pub fn run(self) -> Result<BrowseOutcome> {
		self.build().run()
	}
}
