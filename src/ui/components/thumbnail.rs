use std::path::{Path, PathBuf};

/// What an image reference resolved to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Thumbnail {
	/// The image is available; `label` names it.
	Ready { label: String },
	/// The reference is empty or points at nothing.
	Missing,
}

impl Thumbnail {
	/// Text drawn in the image slot.
	#[must_use]
	pub fn caption(&self) -> String {
		match self {
			Self::Ready { label } => format!("▣ {label}"),
			Self::Missing => "▢ no image".to_string(),
		}
	}
}

/// Resolves a game's `image` reference for display.
///
/// Failures are expressed as [`Thumbnail::Missing`] and never propagate.
pub trait ImageLoader {
	fn load(&self, reference: &str) -> Thumbnail;
}

/// Labels images by file name and, given a root directory, checks that local
/// references exist.
#[derive(Debug, Clone, Default)]
pub struct FileNameImageLoader {
	root: Option<PathBuf>,
}

impl FileNameImageLoader {
	#[must_use]
	pub fn new(root: Option<PathBuf>) -> Self {
		Self { root }
	}
}

impl ImageLoader for FileNameImageLoader {
	fn load(&self, reference: &str) -> Thumbnail {
		let reference = reference.trim();
		if reference.is_empty() {
			return Thumbnail::Missing;
		}

		if let Some((_, rest)) = reference.split_once("://") {
			let path = rest.split(['?', '#']).next().unwrap_or(rest);
			return match path.rsplit('/').find(|segment| !segment.is_empty()) {
				Some(name) => Thumbnail::Ready {
					label: name.to_string(),
				},
				None => Thumbnail::Missing,
			};
		}

		let path = Path::new(reference);
		if let Some(root) = &self.root
			&& !root.join(path).exists()
		{
			return Thumbnail::Missing;
		}

		match path.file_name().and_then(|name| name.to_str()) {
			Some(name) => Thumbnail::Ready {
				label: name.to_string(),
			},
			None => Thumbnail::Missing,
		}
	}
}
