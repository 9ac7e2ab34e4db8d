//! Interactive terminal UI for browsing the catalog.
//!
//! The [`builder`] module exposes the public-facing [`Browser`] builder. The
//! remaining submodules implement the event loop, rendering pipeline, input
//! handling, and the widgets and themes that draw the screen. All state
//! changes go through the [`Controller`](crate::controller::Controller); the
//! UI only keeps what the terminal needs to draw it.

mod actions;
mod builder;
pub mod components;
mod config;
pub mod input;
mod outcome;
mod render;
mod results;
mod runtime;
mod state;
pub mod style;

#[cfg(test)]
mod tests;

pub use builder::Browser;
pub use config::UiLabels;
pub use outcome::BrowseOutcome;
pub use results::ResultsState;
pub use state::App;
