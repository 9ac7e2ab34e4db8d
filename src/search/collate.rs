//! Root-locale collation for game names.
//!
//! Names are ordered by the CLDR root collation at tertiary strength with
//! non-ignorable punctuation, the same order a root-locale `localeCompare`
//! produces.

use std::cmp::Ordering;

use icu_collator::{Collator, CollatorBorrowed};

/// Root-locale collator over compiled-in CLDR data.
pub struct NameCollator {
	inner: CollatorBorrowed<'static>,
}

impl NameCollator {
	/// # Panics
	///
	/// Panics if the compiled-in root collation data cannot be loaded, which
	/// only happens with a broken build of `icu_collator`.
	#[must_use]
	pub fn root() -> Self {
		let inner = Collator::try_new(Default::default(), Default::default())
			.expect("root collation data is compiled in");
		Self { inner }
	}

	#[must_use]
	pub fn compare(&self, a: &str, b: &str) -> Ordering {
		self.inner.compare(a, b)
	}
}

/// Compare two strings in root-locale collation order.
#[must_use]
pub fn compare(a: &str, b: &str) -> Ordering {
	NameCollator::root().compare(a, b)
}
