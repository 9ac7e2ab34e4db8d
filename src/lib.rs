//! Browse a read-only game catalog with live, case-insensitive name search.
//!
//! The crate is split the way data flows: [`catalog`] loads the immutable
//! list of games, [`controller`] owns the search text and selection and
//! derives the visible list through [`search`], and [`ui`] draws that state
//! in the terminal and turns input back into controller commands.

pub mod app_dirs;
pub mod catalog;
pub mod controller;
pub mod logging;
pub mod search;
pub mod ui;

pub use catalog::{Catalog, CatalogError, CatalogOrigin, Game, GameId};
pub use controller::{Command, Controller};
pub use ui::components::{FileNameImageLoader, ImageLoader, Thumbnail};
pub use ui::style::{Theme, builtin_themes, default_theme};
pub use ui::{App, BrowseOutcome, Browser, UiLabels};
