use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;
use std::fs;
use std::path::Path;
use tracing::info;

mod content;
mod error;

pub use content::ContentGlob;
pub use error::{ConfigError, Result};

/// Dark-mode activation strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DarkMode {
	Media,
	Class,
	Selector,
}

impl DarkMode {
	pub const fn as_str(self) -> &'static str {
		match self {
			Self::Media => "media",
			Self::Class => "class",
			Self::Selector => "selector",
		}
	}
}

impl Default for DarkMode {
	// the framework default when the key is absent
	fn default() -> Self {
		Self::Media
	}
}

impl fmt::Display for DarkMode {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}", self.as_str())
	}
}

/// Theme extension point. Empty unless the design deviates from stock.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Theme {
	#[serde(default)]
	pub extend: Map<String, Value>,
}

/// The utility-class framework configuration record.
///
/// Only declares what external build tooling reads: scan targets, the
/// dark-mode strategy, theme extensions and plugins. No behavior lives here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TailwindConfig {
	pub content: Vec<ContentGlob>,
	#[serde(default)]
	pub dark_mode: DarkMode,
	#[serde(default)]
	pub theme: Theme,
	#[serde(default)]
	pub plugins: Vec<String>,
}

impl TailwindConfig {
	/// The record as shipped: scan svelte/html sources under `src`, toggle
	/// dark mode via a root class, stock theme, no plugins.
	pub fn svelte_preset() -> Self {
		Self {
			content: vec!["./src/**/*.{svelte,html}".parse().expect("preset glob is well-formed")],
			dark_mode: DarkMode::Class,
			theme: Theme::default(),
			plugins: Vec::new(),
		}
	}

	pub fn from_json_str(raw: &str) -> Result<Self> {
		Ok(serde_json::from_str(raw)?)
	}

	/// Read the JSON form of the record from disk.
	pub fn load(path: impl AsRef<Path>) -> Result<Self> {
		let path = path.as_ref();

		let raw = fs::read_to_string(path).map_err(|source| ConfigError::Io {
			path: path.to_path_buf(),
			source,
		})?;

		let config = Self::from_json_str(&raw)?;
		info!(path = %path.display(), globs = config.content.len(), "loaded tailwind config");

		Ok(config)
	}

	/// Enforce what the frontend relies on: class-based dark mode and scan
	/// coverage of both `.svelte` and `.html` sources.
	pub fn validate(&self) -> Result<()> {
		if self.dark_mode != DarkMode::Class {
			return Err(ConfigError::UnsupportedDarkMode(self.dark_mode.to_string()));
		}

		for required in ["svelte", "html"] {
			if !self.content.iter().any(|glob| glob.covers_extension(required)) {
				return Err(ConfigError::ContentCoverage(required.to_string()));
			}
		}

		Ok(())
	}
}

impl Default for TailwindConfig {
	fn default() -> Self {
		Self::svelte_preset()
	}
}
