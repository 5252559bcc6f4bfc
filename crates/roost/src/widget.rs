use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
	Horizontal,
	Vertical,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum WidgetTheme {
	Normal,
	/// Restyles itself from the accent color of the media events it renders.
	Dynamic,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct WidgetAppearance {
	pub theme: Option<WidgetTheme>,
	pub background_color: Option<String>,
	pub opacity: Option<f32>,
	pub border_size: Option<u32>,
	pub border_color: Option<String>,
	pub border_radius: Option<u32>,
	pub padding: Option<u32>,
	pub fontscale: Option<f32>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct WidgetProperty {
	pub title: Option<String>,
	pub icon: Option<String>,
	pub hidden: Option<bool>,
	pub resizable: Option<bool>,
	pub draggable: Option<bool>,
	pub position: Option<(u32, u32)>,
	pub size: Option<(u32, u32)>,
	pub orientation: Option<Orientation>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum WidgetType {
	DateTime,
	Weather,
	MediaPlayerControls,
	AppLauncher,
	Custom,
}

/// One widget definition file, as read from the config directory.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Widget {
	pub id: String,
	pub description: String,
	pub widget_type: WidgetType,
	pub property: WidgetProperty,
	pub appearance: WidgetAppearance,
	pub children: Option<Vec<Widget>>,
}
