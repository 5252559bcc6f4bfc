use serde::{Deserialize, Serialize};

mod color;
mod event_id;
mod media_control;
mod media_status;

pub use color::Rgb;
pub use event_id::EventId;
pub use media_control::{MediaControlPayload, MediaControlV1, MediaControlV2, StatusCode};
pub use media_status::MediaStatus;

/// Envelope for everything a widget backend emits to its webviews.
///
/// The `event` field on the wire is the variant name and nothing else, so a
/// consumer can dispatch on it without trusting the payload to agree.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "event")]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "ts", derive(ts_rs::TS))]
#[cfg_attr(feature = "ts", ts(export))]
pub enum WidgetEvent {
	MediaControl { id: EventId, payload: MediaControlPayload },
}

impl WidgetEvent {
	/// Build a media-control envelope with a freshly allocated id.
	pub fn media_control(payload: impl Into<MediaControlPayload>) -> Self {
		Self::MediaControl {
			id: EventId::new(),
			payload: payload.into(),
		}
	}

	/// The wire value of the `event` discriminant.
	pub fn event_name(&self) -> &'static str {
		match self {
			Self::MediaControl { .. } => "mediaControl",
		}
	}

	pub fn id(&self) -> EventId {
		match self {
			Self::MediaControl { id, .. } => *id,
		}
	}
}

impl From<MediaControlV1> for WidgetEvent {
	fn from(payload: MediaControlV1) -> Self {
		Self::media_control(payload)
	}
}

impl From<MediaControlV2> for WidgetEvent {
	fn from(payload: MediaControlV2) -> Self {
		Self::media_control(payload)
	}
}
