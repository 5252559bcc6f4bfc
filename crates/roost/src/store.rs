use crate::error::{Result, StoreError};
use crate::widget::Widget;
use std::collections::HashMap;
use std::ffi::OsStr;
use std::fs;
use std::path::Path;
use tracing::{info, warn};

/// Widget definitions loaded from a config directory, keyed by widget id.
#[derive(Debug, Clone, Default)]
pub struct WidgetStore {
	widgets: HashMap<String, Widget>,
}

impl WidgetStore {
	/// Read every `*.json` and `*.toml` definition under `dir`.
	///
	/// An empty directory yields an empty store; a missing directory is an
	/// error. Files with other extensions are skipped. Two files declaring
	/// the same widget id are an error rather than a last-one-wins.
	pub fn load_dir(dir: impl AsRef<Path>) -> Result<Self> {
		let dir = dir.as_ref();

		if !dir.is_dir() {
			return Err(StoreError::MissingDir(dir.to_path_buf()));
		}

		let entries = fs::read_dir(dir).map_err(|source| StoreError::Io {
			path: dir.to_path_buf(),
			source,
		})?;

		let mut widgets: HashMap<String, Widget> = HashMap::new();

		for entry in entries {
			let entry = entry.map_err(|source| StoreError::Io {
				path: dir.to_path_buf(),
				source,
			})?;
			let path = entry.path();

			if !path.is_file() {
				continue;
			}

			let widget = match path.extension().and_then(OsStr::to_str) {
				Some("json") => {
					let raw = Self::read(&path)?;
					serde_json::from_str::<Widget>(&raw).map_err(|source| StoreError::Json { path: path.clone(), source })?
				}
				Some("toml") => {
					let raw = Self::read(&path)?;
					toml::from_str::<Widget>(&raw).map_err(|source| StoreError::Toml { path: path.clone(), source })?
				}
				_ => {
					warn!(path = %path.display(), "skipping non-widget file");
					continue;
				}
			};

			if widgets.contains_key(&widget.id) {
				return Err(StoreError::DuplicateId(widget.id));
			}

			info!(id = %widget.id, path = %path.display(), "loaded widget definition");
			widgets.insert(widget.id.clone(), widget);
		}

		Ok(Self { widgets })
	}

	fn read(path: &Path) -> Result<String> {
		fs::read_to_string(path).map_err(|source| StoreError::Io {
			path: path.to_path_buf(),
			source,
		})
	}

	pub fn get(&self, widget_id: &str) -> Option<&Widget> {
		self.widgets.get(widget_id)
	}

	pub fn iter(&self) -> impl Iterator<Item = &Widget> {
		self.widgets.values()
	}

	pub fn len(&self) -> usize {
		self.widgets.len()
	}

	pub fn is_empty(&self) -> bool {
		self.widgets.is_empty()
	}
}
