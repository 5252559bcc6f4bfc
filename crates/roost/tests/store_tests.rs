#[cfg(test)]
mod tests {
	use pretty_assertions::assert_eq;
	use roost::{Orientation, StoreError, WidgetStore, WidgetTheme, WidgetType};
	use std::fs;
	use std::path::Path;
	use tempfile::tempdir;

	// Helper to drop a fixture file into the widget dir
	fn write_file(dir: &Path, name: &str, contents: &str) {
		fs::write(dir.join(name), contents).unwrap();
	}

	fn media_widget_json(id: &str) -> String {
		format!(
			r##"{{
				"id": "{}",
				"description": "Media controls on the desktop",
				"widget_type": "MediaPlayerControls",
				"property": {{
					"resizable": false,
					"position": [40, 600],
					"orientation": "Horizontal"
				}},
				"appearance": {{
					"theme": "Dynamic",
					"background_color": "#101014",
					"opacity": 0.85
				}}
			}}"##,
			id
		)
	}

	const CLOCK_WIDGET_TOML: &str = r#"
id = "clock"
description = "Desktop clock"
widget_type = "DateTime"

[property]
position = [100, 200]
orientation = "Vertical"

[appearance]
theme = "Normal"
padding = 8
"#;

	#[test]
	fn test_loads_json_and_toml_definitions() {
		let dir = tempdir().unwrap();
		write_file(dir.path(), "media.json", &media_widget_json("media-main"));
		write_file(dir.path(), "clock.toml", CLOCK_WIDGET_TOML);

		let store = WidgetStore::load_dir(dir.path()).unwrap();

		assert_eq!(store.len(), 2);

		let media = store.get("media-main").unwrap();
		assert_eq!(media.widget_type, WidgetType::MediaPlayerControls);
		assert_eq!(media.property.position, Some((40, 600)));
		assert_eq!(media.property.orientation, Some(Orientation::Horizontal));
		assert_eq!(media.appearance.theme, Some(WidgetTheme::Dynamic));
		assert_eq!(media.appearance.background_color.as_deref(), Some("#101014"));
		assert!(media.children.is_none());

		let clock = store.get("clock").unwrap();
		assert_eq!(clock.widget_type, WidgetType::DateTime);
		assert_eq!(clock.property.orientation, Some(Orientation::Vertical));
		assert_eq!(clock.appearance.padding, Some(8));
	}

	#[test]
	fn test_empty_dir_is_an_empty_store() {
		let dir = tempdir().unwrap();

		let store = WidgetStore::load_dir(dir.path()).unwrap();

		assert!(store.is_empty());
		assert!(store.get("anything").is_none());
	}

	#[test]
	fn test_missing_dir_errors() {
		let dir = tempdir().unwrap();
		let missing = dir.path().join("nope");

		match WidgetStore::load_dir(&missing) {
			Err(StoreError::MissingDir(path)) => assert_eq!(path, missing),
			other => panic!("Expected MissingDir, got {:?}", other),
		}
	}

	#[test]
	fn test_foreign_extensions_are_skipped() {
		let dir = tempdir().unwrap();
		write_file(dir.path(), "media.json", &media_widget_json("media-main"));
		write_file(dir.path(), "notes.txt", "not a widget");
		write_file(dir.path(), "widgets.bak", "{}");

		let store = WidgetStore::load_dir(dir.path()).unwrap();

		assert_eq!(store.len(), 1);
	}

	#[test]
	fn test_duplicate_ids_error() {
		let dir = tempdir().unwrap();
		write_file(dir.path(), "a.json", &media_widget_json("media-main"));
		write_file(dir.path(), "b.json", &media_widget_json("media-main"));

		match WidgetStore::load_dir(dir.path()) {
			Err(StoreError::DuplicateId(id)) => assert_eq!(id, "media-main"),
			other => panic!("Expected DuplicateId, got {:?}", other),
		}
	}

	#[test]
	fn test_unparsable_file_errors_with_its_path() {
		let dir = tempdir().unwrap();
		write_file(dir.path(), "broken.json", "{ definitely not json");

		match WidgetStore::load_dir(dir.path()) {
			Err(StoreError::Json { path, .. }) => assert!(path.ends_with("broken.json")),
			other => panic!("Expected Json parse error, got {:?}", other),
		}
	}

	#[test]
	fn test_nested_children_round_trip() {
		let dir = tempdir().unwrap();
		write_file(
			dir.path(),
			"bar.json",
			r#"{
				"id": "bar",
				"description": "A widget bar",
				"widget_type": "Custom",
				"property": {},
				"appearance": {},
				"children": [{
					"id": "bar-clock",
					"description": "Clock slot",
					"widget_type": "DateTime",
					"property": {},
					"appearance": {}
				}]
			}"#,
		);

		let store = WidgetStore::load_dir(dir.path()).unwrap();
		let bar = store.get("bar").unwrap();
		let children = bar.children.as_ref().unwrap();

		assert_eq!(children.len(), 1);
		assert_eq!(children[0].id, "bar-clock");
	}
}
