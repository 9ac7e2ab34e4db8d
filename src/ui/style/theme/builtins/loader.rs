use anyhow::{Context, Result, bail};
use include_dir::{Dir, File};
use ratatui::style::{Color, Modifier, Style};
use serde::Deserialize;

use crate::ui::style::theme::types::{Theme, ThemeRegistration};

pub(super) struct BuiltinThemes {
	pub(super) registrations: Vec<ThemeRegistration>,
	pub(super) default_theme: Theme,
}

#[derive(Debug, Deserialize)]
struct ThemeDocument {
	name: String,
	#[serde(default)]
	aliases: Vec<String>,
	#[serde(default)]
	default: bool,
	styles: ThemeStyles,
}

#[derive(Debug, Deserialize)]
struct ThemeStyles {
	header: StyleSpec,
	row_highlight: StyleSpec,
	prompt: StyleSpec,
	empty: StyleSpec,
	highlight: StyleSpec,
	/// Falls back to `row_highlight` when absent.
	#[serde(default)]
	button: Option<StyleSpec>,
}

impl ThemeStyles {
	fn into_theme(self) -> Result<Theme> {
		let row_highlight = self.row_highlight.to_style().context("styles.row_highlight")?;
		let button = match self.button {
			Some(spec) => spec.to_style().context("styles.button")?,
			None => row_highlight,
		};

		Ok(Theme {
			header: self.header.to_style().context("styles.header")?,
			row_highlight,
			prompt: self.prompt.to_style().context("styles.prompt")?,
			empty: self.empty.to_style().context("styles.empty")?,
			highlight: self.highlight.to_style().context("styles.highlight")?,
			button,
		})
	}
}

#[derive(Debug, Default, Deserialize)]
struct StyleSpec {
	#[serde(default)]
	fg: Option<String>,
	#[serde(default)]
	bg: Option<String>,
	#[serde(default)]
	modifiers: Vec<String>,
}

impl StyleSpec {
	fn to_style(&self) -> Result<Style> {
		let mut style = Style::new();
		if let Some(fg) = &self.fg {
			style = style.fg(parse_color(fg).with_context(|| format!("foreground `{fg}`"))?);
		}
		if let Some(bg) = &self.bg {
			style = style.bg(parse_color(bg).with_context(|| format!("background `{bg}`"))?);
		}
		for modifier in &self.modifiers {
			style = style.add_modifier(parse_modifier(modifier)?);
		}
		Ok(style)
	}
}

pub(super) fn load_builtin_themes(dir: &Dir) -> Result<BuiltinThemes> {
	let mut files: Vec<&File> = dir.files().collect();
	files.sort_by(|a, b| a.path().cmp(b.path()));

	let mut registrations = Vec::with_capacity(files.len());
	let mut default_theme: Option<(Theme, String)> = None;

	for file in files {
		let (registration, is_default) = parse_theme_file(file)?;
		if is_default {
			if let Some((_, existing)) = &default_theme {
				bail!(
					"themes `{existing}` and `{}` are both marked as default",
					registration.name
				);
			}
			default_theme = Some((registration.theme, registration.name.clone()));
		}
		registrations.push(registration);
	}

	let Some(first) = registrations.first() else {
		bail!("no built-in theme definitions were found");
	};
	let default_theme = default_theme.map_or(first.theme, |(theme, _)| theme);

	Ok(BuiltinThemes {
		registrations,
		default_theme,
	})
}

fn parse_theme_file(file: &File) -> Result<(ThemeRegistration, bool)> {
	let path = file.path();
	let contents = file
		.contents_utf8()
		.with_context(|| format!("{} is not valid UTF-8", path.display()))?;
	let document: ThemeDocument = toml::from_str(contents)
		.with_context(|| format!("failed to parse theme definition {}", path.display()))?;
	parse_theme_document(document).with_context(|| format!("in theme file {}", path.display()))
}

fn parse_theme_document(document: ThemeDocument) -> Result<(ThemeRegistration, bool)> {
	let theme = document.styles.into_theme()?;
	let registration = document
		.aliases
		.iter()
		.map(|alias| alias.trim())
		.filter(|alias| !alias.is_empty())
		.fold(ThemeRegistration::new(document.name, theme), |reg, alias| {
			reg.alias(alias)
		});
	Ok((registration, document.default))
}

fn parse_color(input: &str) -> Result<Color> {
	let value = input.trim();

	if let Some(hex) = value.strip_prefix('#') {
		if hex.len() != 6 {
			bail!("hex colours must have six digits");
		}
		let channel = |range: std::ops::Range<usize>| {
			u8::from_str_radix(&hex[range], 16).with_context(|| format!("invalid hex colour `#{hex}`"))
		};
		return Ok(Color::Rgb(channel(0..2)?, channel(2..4)?, channel(4..6)?));
	}

	if let Ok(index) = value.parse::<u8>() {
		return Ok(Color::Indexed(index));
	}

	let color = match normalise_key(value).as_str() {
		"reset" | "default" => Color::Reset,
		"black" => Color::Black,
		"red" => Color::Red,
		"green" => Color::Green,
		"yellow" => Color::Yellow,
		"blue" => Color::Blue,
		"magenta" => Color::Magenta,
		"cyan" => Color::Cyan,
		"gray" | "grey" => Color::Gray,
		"dark_gray" | "dark_grey" => Color::DarkGray,
		"light_red" => Color::LightRed,
		"light_green" => Color::LightGreen,
		"light_yellow" => Color::LightYellow,
		"light_blue" => Color::LightBlue,
		"light_magenta" => Color::LightMagenta,
		"light_cyan" => Color::LightCyan,
		"white" => Color::White,
		other => bail!("unknown colour `{other}`"),
	};
	Ok(color)
}

fn parse_modifier(input: &str) -> Result<Modifier> {
	let modifier = match normalise_key(input).as_str() {
		"bold" => Modifier::BOLD,
		"dim" => Modifier::DIM,
		"italic" => Modifier::ITALIC,
		"underline" | "underlined" => Modifier::UNDERLINED,
		"reversed" | "reverse" => Modifier::REVERSED,
		"crossed_out" | "strikethrough" => Modifier::CROSSED_OUT,
		other => bail!("unknown modifier `{other}`"),
	};
	Ok(modifier)
}

fn normalise_key(value: &str) -> String {
	value
		.trim()
		.to_ascii_lowercase()
		.replace(['-', ' '], "_")
}
