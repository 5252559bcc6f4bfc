use widget_events::{MediaControlPayload, MediaControlV1, MediaStatus, Rgb, StatusCode, WidgetEvent};

fn main() -> Result<(), Box<dyn std::error::Error>> {
	tracing_subscriber::fmt().with_env_filter(tracing_subscriber::EnvFilter::from_default_env()).init();

	// 1. A first-generation payload, the shape older producers still emit
	let v1 = MediaControlV1 {
		artist: "Nils Frahm".to_string(),
		duration: 312,
		media_status: MediaStatus::Playing,
		position: 45,
		status_code: StatusCode::OK,
		thumbnail: String::new(),
		title: "Says".to_string(),
	};

	// 2. Upgrade it and wrap both generations in envelopes
	let v2 = v1.clone().upgrade("Spotify.exe", Rgb::from_hex("#1ed760")?);

	for event in [WidgetEvent::media_control(v1), WidgetEvent::media_control(v2)] {
		tracing::info!(id = %event.id(), "emitting {}", event.event_name());
		println!("{}", serde_json::to_string_pretty(&event)?);
	}

	// 3. Decode a legacy document that predates the schema tag
	let legacy = serde_json::json!({
		"artist": "Kai Engel",
		"duration": 247,
		"media_status": "Paused",
		"position": 63,
		"status_code": 200,
		"thumbnail": "",
		"title": "Snowfall",
	});

	let classified = MediaControlPayload::from_json_value(&legacy)?;
	println!("legacy document classified as {:?}", classified.media_status());

	Ok(())
}
