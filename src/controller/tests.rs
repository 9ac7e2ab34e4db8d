use super::*;

fn catalog() -> Catalog {
	Catalog::from_games(vec![
		Game::new(1, "Zelda").with_genre("Adventure"),
		Game::new(2, "Mario").with_genre("Platformer"),
		Game::new(3, "Elden Ring").with_genre("Action RPG"),
	])
	.expect("catalog")
}

fn visible_names<'a>(controller: &Controller<'a>) -> Vec<&'a str> {
	controller
		.visible_list()
		.into_iter()
		.map(|game| game.name.as_str())
		.collect()
}

#[test]
fn starts_with_everything_visible_and_nothing_selected() {
	let catalog = catalog();
	let controller = Controller::new(&catalog);

	assert_eq!(controller.search_term(), "");
	assert_eq!(visible_names(&controller), ["Elden Ring", "Mario", "Zelda"]);
	assert!(controller.selected_game().is_none());
	assert!(!controller.overlay_visible());
}

#[test]
fn search_term_filters_and_sorts() {
	let catalog = catalog();
	let mut controller = Controller::new(&catalog);

	controller.set_search_term("e");
	assert_eq!(visible_names(&controller), ["Elden Ring", "Zelda"]);

	controller.set_search_term("xyz");
	assert!(controller.visible_list().is_empty());

	controller.set_search_term("");
	assert_eq!(controller.visible_list().len(), catalog.len());
}

#[test]
fn select_then_close_keeps_search_term() {
	let catalog = catalog();
	let mut controller = Controller::new(&catalog);
	controller.set_search_term("zel");

	let zelda = controller.visible_list()[0];
	controller.select_game(zelda);
	assert_eq!(controller.selected_game(), Some(zelda));
	assert!(controller.overlay_visible());
	assert_eq!(controller.overlay_game(), Some(zelda));

	controller.close_overlay();
	assert!(controller.selected_game().is_none());
	assert!(!controller.overlay_visible());
	assert!(controller.overlay_game().is_none());
	assert_eq!(controller.search_term(), "zel");
}

#[test]
fn selecting_a_game_outside_the_catalog_is_allowed() {
	let stranger = Game::new(404, "Not In Catalog").with_platform("Unknown");
	let catalog = catalog();
	let mut controller = Controller::new(&catalog);

	controller.select_game(&stranger);
	assert_eq!(controller.selected_game().map(|game| game.id), Some(404));
	assert!(controller.overlay_visible());
	assert_eq!(controller.visible_list().len(), 3);
}

#[test]
fn reselecting_replaces_the_previous_game() {
	let catalog = catalog();
	let mut controller = Controller::new(&catalog);
	let mario = catalog.get(2).unwrap();
	let zelda = catalog.get(1).unwrap();

	controller.select_game(mario);
	controller.select_game(zelda);
	assert_eq!(controller.selected_game(), Some(zelda));
}

#[test]
fn close_without_selection_is_harmless() {
	let catalog = catalog();
	let mut controller = Controller::with_search_term(&catalog, "mar");

	controller.close_overlay();
	assert!(!controller.overlay_visible());
	assert_eq!(visible_names(&controller), ["Mario"]);
}

#[test]
fn commands_map_onto_operations() {
	let catalog = catalog();
	let mut controller = Controller::new(&catalog);
	let elden = catalog.get(3).unwrap();

	controller.apply(Command::SetSearchTerm("ring".into()));
	assert_eq!(visible_names(&controller), ["Elden Ring"]);

	controller.apply(Command::SelectGame(elden));
	assert_eq!(controller.overlay_game(), Some(elden));

	controller.apply(Command::CloseOverlay);
	assert!(controller.overlay_game().is_none());
	assert_eq!(controller.search_term(), "ring");
}
