mod builtins;
mod types;

use std::collections::{BTreeMap, HashMap};
use std::sync::OnceLock;

pub use builtins::default_theme;
pub use types::{Theme, ThemeRegistration};

impl Default for Theme {
	fn default() -> Self {
		default_theme()
	}
}

/// Lookup table over the built-in registrations, keyed by normalised name.
struct ThemeRegistry {
	canonical: BTreeMap<String, &'static ThemeRegistration>,
	aliases: HashMap<String, String>,
}

impl ThemeRegistry {
	fn build(registrations: &'static [ThemeRegistration]) -> Self {
		let mut canonical = BTreeMap::new();
		let mut aliases = HashMap::new();
		for registration in registrations {
			let key = normalize_name(&registration.name);
			for alias in &registration.aliases {
				aliases
					.entry(normalize_name(alias))
					.or_insert_with(|| key.clone());
			}
			canonical.insert(key, registration);
		}
		Self { canonical, aliases }
	}

	fn get(&self, name: &str) -> Option<Theme> {
		let key = normalize_name(name);
		let key = if self.canonical.contains_key(&key) {
			key
		} else {
			self.aliases.get(&key)?.clone()
		};
		self.canonical
			.get(&key)
			.map(|registration| registration.theme)
	}
}

fn registry() -> &'static ThemeRegistry {
	static REGISTRY: OnceLock<ThemeRegistry> = OnceLock::new();
	REGISTRY.get_or_init(|| ThemeRegistry::build(builtins::registrations()))
}

fn normalize_name(name: &str) -> String {
	name.trim().to_ascii_lowercase()
}

/// Every bundled theme, in file order.
#[must_use]
pub fn builtin_themes() -> &'static [ThemeRegistration] {
	builtins::registrations()
}

/// Resolve a theme by name or alias, ignoring case.
#[must_use]
pub fn by_name(name: &str) -> Option<Theme> {
	registry().get(name)
}

/// Canonical theme names, sorted.
#[must_use]
pub fn names() -> Vec<&'static str> {
	registry()
		.canonical
		.values()
		.map(|registration| registration.name.as_str())
		.collect()
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn builtins_include_a_default() {
		assert!(!builtin_themes().is_empty());
		assert_eq!(by_name("slate"), Some(default_theme()));
	}

	#[test]
	fn aliases_resolve_case_insensitively() {
		assert_eq!(by_name("LIGHT"), by_name("paper"));
		assert_eq!(by_name(" default "), Some(default_theme()));
		assert!(by_name("unknown").is_none());
	}

	#[test]
	fn names_are_sorted() {
		assert_eq!(names(), ["paper", "slate", "terminal"]);
	}
}
