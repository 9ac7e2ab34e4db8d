use ratatui::Terminal;
use ratatui::backend::TestBackend;
use ratatui::buffer::Buffer;
use ratatui::crossterm::event::{
	KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

use super::{App, Browser};
use crate::catalog::{Catalog, Game};

fn catalog() -> Catalog {
	Catalog::from_games(vec![
		Game::new(1, "Zelda").with_genre("Adventure").with_platform("Switch"),
		Game::new(2, "Mario").with_genre("Platformer").with_platform("Switch"),
		Game::new(3, "Elden Ring")
			.with_genre("Action RPG")
			.with_platform("PC")
			.with_developer("FromSoftware")
			.with_release_date("2022-02-25")
			.with_rating("M", 9.5),
	])
	.expect("valid catalog")
}

fn key(code: KeyCode) -> KeyEvent {
	KeyEvent::new(code, KeyModifiers::NONE)
}

fn click(column: u16, row: u16) -> MouseEvent {
	MouseEvent {
		kind: MouseEventKind::Down(MouseButton::Left),
		column,
		row,
		modifiers: KeyModifiers::NONE,
	}
}

fn type_text(app: &mut App<'_>, text: &str) {
	for ch in text.chars() {
		assert!(app.handle_key(key(KeyCode::Char(ch))).is_none());
	}
}

fn render(app: &mut App<'_>) -> String {
	let mut terminal = Terminal::new(TestBackend::new(80, 20)).expect("terminal");
	terminal.draw(|frame| app.draw(frame)).expect("draw frame");
	buffer_to_string(terminal.backend().buffer())
}

fn buffer_to_string(buf: &Buffer) -> String {
	let mut lines = Vec::new();
	for y in 0..buf.area.height {
		let mut line = String::new();
		for x in 0..buf.area.width {
			line.push_str(buf[(x, y)].symbol());
		}
		lines.push(line);
	}
	lines.join("\n")
}

fn visible_names(app: &App<'_>) -> Vec<String> {
	app.controller()
		.visible_list()
		.iter()
		.map(|game| game.name.clone())
		.collect()
}

#[test]
fn renders_header_list_and_footer() {
	let catalog = catalog();
	let mut app = App::new(&catalog);
	let screen = render(&mut app);

	assert!(screen.contains("Game App"));
	assert!(screen.contains("Search for a game..."));
	assert!(screen.contains("3/3"));
	assert!(screen.contains("Genre - Platform"));
	assert!(screen.contains("Action RPG - PC"));
	assert!(screen.contains("Desenvolvido por Eduardo"));
	assert!(screen.contains("Versão 1.0"));

	let elden = screen.find("Elden Ring").expect("elden row");
	let mario = screen.find("Mario").expect("mario row");
	let zelda = screen.find("Zelda").expect("zelda row");
	assert!(elden < mario && mario < zelda);
}

#[test]
fn typing_filters_and_resets_cursor() {
	let catalog = catalog();
	let mut app = App::new(&catalog);
	app.handle_key(key(KeyCode::Down));
	assert_eq!(app.results.cursor(), Some(1));

	type_text(&mut app, "E");
	assert_eq!(app.controller().search_term(), "E");
	assert_eq!(visible_names(&app), ["Elden Ring", "Zelda"]);
	assert_eq!(app.results.cursor(), Some(0));

	let screen = render(&mut app);
	assert!(screen.contains("2/3"));
	assert!(!screen.contains("Mario"));
}

#[test]
fn unmatched_query_shows_empty_state() {
	let catalog = catalog();
	let mut app = App::new(&catalog);
	type_text(&mut app, "xyz");

	assert!(app.controller().visible_list().is_empty());
	assert!(render(&mut app).contains("No games found"));
	assert!(app.handle_key(key(KeyCode::Enter)).is_none());
	assert!(!app.controller().overlay_visible());
}

#[test]
fn enter_opens_overlay_and_q_closes_it() {
	let catalog = catalog();
	let mut app = App::new(&catalog);
	type_text(&mut app, "e");

	app.handle_key(key(KeyCode::Enter));
	let opened = app.controller().overlay_game().expect("overlay open");
	assert_eq!(opened.name, "Elden Ring");

	let screen = render(&mut app);
	assert!(screen.contains("Developer: FromSoftware"));
	assert!(screen.contains("Release Date: 2022-02-25"));
	assert!(screen.contains("Rating: M - Score: 9.5"));
	assert!(screen.contains("[ Close ]"));

	app.handle_key(key(KeyCode::Char('q')));
	assert!(!app.controller().overlay_visible());
	assert!(app.controller().selected_game().is_none());
	assert_eq!(app.controller().search_term(), "e");
	assert!(!render(&mut app).contains("[ Close ]"));
}

#[test]
fn overlay_swallows_typing() {
	let catalog = catalog();
	let mut app = App::new(&catalog);
	app.handle_key(key(KeyCode::Enter));
	app.handle_key(key(KeyCode::Char('z')));
	app.handle_paste("zelda");

	assert!(app.controller().overlay_visible());
	assert_eq!(app.controller().search_term(), "");
}

#[test]
fn backspace_and_escape_close_the_overlay() {
	let catalog = catalog();
	let mut app = App::new(&catalog);
	type_text(&mut app, "ma");

	app.handle_key(key(KeyCode::Enter));
	app.handle_key(key(KeyCode::Backspace));
	assert!(!app.controller().overlay_visible());
	assert_eq!(app.controller().search_term(), "ma");

	app.handle_key(key(KeyCode::Enter));
	assert!(app.handle_key(key(KeyCode::Esc)).is_none());
	assert!(!app.controller().overlay_visible());
}

#[test]
fn clicking_a_row_opens_that_game() {
	let catalog = catalog();
	let mut app = App::new(&catalog);
	render(&mut app);

	// Rows start below the border, the column header and its separator.
	let list = app.results.area.expect("list drawn");
	app.handle_mouse(click(list.x + 4, list.y + 4));

	assert_eq!(app.controller().overlay_game().map(|g| g.id), Some(2));
	assert_eq!(app.results.cursor(), Some(1));
}

#[test]
fn clicking_the_header_row_does_nothing() {
	let catalog = catalog();
	let mut app = App::new(&catalog);
	render(&mut app);

	let list = app.results.area.expect("list drawn");
	app.handle_mouse(click(list.x + 4, list.y + 1));
	assert!(!app.controller().overlay_visible());
}

#[test]
fn close_button_and_backdrop_dismiss_the_overlay() {
	let catalog = catalog();
	let mut app = App::new(&catalog);

	app.handle_key(key(KeyCode::Enter));
	render(&mut app);
	let areas = app.overlay_areas.expect("overlay drawn");

	// Clicks inside the popup but away from the button keep it open.
	app.handle_mouse(click(areas.popup.x + 1, areas.popup.y + 1));
	assert!(app.controller().overlay_visible());

	app.handle_mouse(click(areas.close.x, areas.close.y));
	assert!(!app.controller().overlay_visible());

	app.handle_key(key(KeyCode::Enter));
	render(&mut app);
	app.handle_mouse(click(0, 0));
	assert!(!app.controller().overlay_visible());
}

#[test]
fn navigation_keys_only_move_the_cursor() {
	let catalog = catalog();
	let mut app = App::new(&catalog);
	render(&mut app);

	app.handle_key(key(KeyCode::End));
	assert_eq!(app.results.cursor(), Some(2));
	app.handle_key(key(KeyCode::Up));
	assert_eq!(app.results.cursor(), Some(1));
	app.handle_key(key(KeyCode::Home));
	assert_eq!(app.results.cursor(), Some(0));
	app.handle_key(key(KeyCode::PageDown));
	assert_eq!(app.results.cursor(), Some(2));

	assert_eq!(app.controller().search_term(), "");
	assert!(!app.controller().overlay_visible());
	assert_eq!(app.highlighted_game().map(|g| g.name.as_str()), Some("Zelda"));
}

#[test]
fn paste_updates_the_search_term() {
	let catalog = catalog();
	let mut app = App::new(&catalog);
	app.handle_paste("ring\n");

	assert_eq!(app.controller().search_term(), "ring ");
	assert!(app.controller().visible_list().is_empty());
}

#[test]
fn escape_returns_the_outcome() {
	let catalog = catalog();
	let mut app = App::new(&catalog);
	type_text(&mut app, "zel");
	app.handle_key(key(KeyCode::Enter));
	app.handle_key(key(KeyCode::Esc));

	let outcome = app.handle_key(key(KeyCode::Esc)).expect("quit");
	assert_eq!(outcome.query, "zel");
	assert_eq!(outcome.last_opened.map(|g| g.id), Some(1));
}

#[test]
fn ctrl_c_quits_even_with_overlay_open() {
	let catalog = catalog();
	let mut app = App::new(&catalog);
	app.handle_key(key(KeyCode::Enter));

	let quit = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
	let outcome = app.handle_key(quit).expect("quit");
	assert_eq!(outcome.query, "");
	assert_eq!(outcome.last_opened.map(|g| g.id), Some(3));
}

#[test]
fn builder_applies_title_query_and_theme() {
	let catalog = catalog();
	let mut app = Browser::new(&catalog)
		.with_title("Arcade")
		.with_initial_query("ELDEN")
		.with_theme_name("paper")
		.build();

	assert_eq!(visible_names(&app), ["Elden Ring"]);
	assert_eq!(app.theme(), &crate::ui::style::by_name("paper").expect("paper"));
	let screen = render(&mut app);
	assert!(screen.contains("Arcade"));
	assert!(screen.contains("ELDEN"));
	assert!(!screen.contains("Search for a game..."));
}
