mod cli;
mod settings;

use anyhow::{Context, Result};
use cli::{OutputFormat, parse_cli, print_list, print_outcome};
use gamecat::{Browser, Catalog, Controller, FileNameImageLoader, logging};
use settings::ResolvedConfig;

fn main() -> Result<()> {
	let cli = parse_cli();

	if cli.list_themes {
		for name in gamecat::ui::style::names() {
			println!("{name}");
		}
		return Ok(());
	}

	let resolved = settings::load(&cli)?;

	if cli.print_config {
		resolved.print_summary();
	}

	match logging::initialize(&resolved.logging) {
		Ok(path) => tracing::info!(log_file = %path.display(), "logging initialised"),
		Err(err) => eprintln!("warning: logging disabled: {err:#}"),
	}

	let catalog = load_catalog(&resolved)?;
	tracing::info!(
		games = catalog.len(),
		origin = %catalog.origin(),
		theme = %resolved.theme_name,
		config_files = resolved.files.len(),
		"catalog loaded"
	);

	if cli.list {
		let controller = Controller::with_search_term(&catalog, resolved.initial_query.as_str());
		return print_list(&controller.visible_list(), cli.output);
	}

	run_browser(cli.output, &catalog, resolved)
}

fn load_catalog(settings: &ResolvedConfig) -> Result<Catalog> {
	match &settings.catalog_path {
		Some(path) => Catalog::from_path(path)
			.with_context(|| format!("failed to load catalog from {}", path.display())),
		None => Catalog::bundled().context("failed to load the bundled catalog"),
	}
}

/// Run the interactive browser and print how it ended in the chosen format.
fn run_browser(format: OutputFormat, catalog: &Catalog, settings: ResolvedConfig) -> Result<()> {
	let outcome = Browser::new(catalog)
		.with_labels(settings.labels)
		.with_theme(settings.theme)
		.with_initial_query(settings.initial_query)
		.with_image_loader(FileNameImageLoader::new(settings.image_root))
		.run()?;

	print_outcome(&outcome, format)
}
