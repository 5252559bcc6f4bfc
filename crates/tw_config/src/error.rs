use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ConfigError>;

#[derive(Debug, Error)]
pub enum ConfigError {
	#[error("failed to read {}", path.display())]
	Io {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},

	#[error(transparent)]
	Parse(#[from] serde_json::Error),

	#[error("invalid content glob \"{pattern}\": {reason}")]
	BadGlob { pattern: String, reason: String },

	#[error("darkMode must be \"class\", got \"{0}\"")]
	UnsupportedDarkMode(String),

	#[error("content globs do not cover .{0} files")]
	ContentCoverage(String),
}
