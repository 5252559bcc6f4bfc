use serde::{Deserialize, Serialize};

/// One entry of an app-launcher widget.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct LauncherEntry {
	pub name: String,
	pub icon: String,
	pub path: String,
	#[serde(default)]
	pub args: Vec<String>,
	#[serde(default)]
	pub terminal: bool,
	pub category: String,
}
