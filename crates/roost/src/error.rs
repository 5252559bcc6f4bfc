use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, StoreError>;

#[derive(Debug, Error)]
pub enum StoreError {
	#[error("widget directory not found: {}", .0.display())]
	MissingDir(PathBuf),

	#[error("failed to read {}", path.display())]
	Io {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},

	#[error("failed to parse widget file {}", path.display())]
	Json {
		path: PathBuf,
		#[source]
		source: serde_json::Error,
	},

	#[error("failed to parse widget file {}", path.display())]
	Toml {
		path: PathBuf,
		#[source]
		source: toml::de::Error,
	},

	#[error("duplicate widget id: {0}")]
	DuplicateId(String),
}
