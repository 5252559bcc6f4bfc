use super::{MediaStatus, Rgb};
use crate::error::EventError;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Outcome code the backend stamps on every media payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
#[cfg_attr(feature = "ts", derive(ts_rs::TS))]
#[cfg_attr(feature = "ts", ts(export))]
pub struct StatusCode(u16);

impl StatusCode {
	/// A live session was observed.
	pub const OK: Self = Self(200);
	/// No media session exists right now.
	pub const NO_MEDIA: Self = Self(402);

	pub const fn new(raw: u16) -> Self {
		Self(raw)
	}

	pub const fn as_u16(self) -> u16 {
		self.0
	}

	pub const fn is_ok(self) -> bool {
		self.0 == 200
	}
}

/// First generation of the media payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts", derive(ts_rs::TS))]
#[cfg_attr(feature = "ts", ts(export))]
pub struct MediaControlV1 {
	pub artist: String,
	pub duration: i64,
	pub media_status: MediaStatus,
	pub position: i64,
	pub status_code: StatusCode,
	pub thumbnail: String,
	pub title: String,
}

impl MediaControlV1 {
	/// Fallback payload when no session exists; the session error text
	/// travels in `title`, matching what consumers already render.
	pub fn no_media(reason: impl Into<String>) -> Self {
		Self {
			artist: String::new(),
			duration: 0,
			media_status: MediaStatus::Closed,
			position: 0,
			status_code: StatusCode::NO_MEDIA,
			thumbnail: String::new(),
			title: reason.into(),
		}
	}

	/// Additive upgrade into the second generation. The v1 `duration` was
	/// measured from the timeline origin, so it becomes `end_time` with a
	/// zero `start_time`.
	pub fn upgrade(self, app_id: impl Into<String>, main_color: Rgb) -> MediaControlV2 {
		MediaControlV2 {
			artist: self.artist,
			start_time: 0,
			end_time: self.duration,
			media_status: self.media_status,
			position: self.position,
			status_code: self.status_code,
			thumbnail: self.thumbnail,
			title: self.title,
			app_id: app_id.into(),
			main_color,
		}
	}
}

/// Second generation: explicit timeline bounds, source app id and an accent
/// color sampled from the artwork.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts", derive(ts_rs::TS))]
#[cfg_attr(feature = "ts", ts(export))]
pub struct MediaControlV2 {
	pub artist: String,
	pub start_time: i64,
	pub end_time: i64,
	pub media_status: MediaStatus,
	pub position: i64,
	pub status_code: StatusCode,
	pub thumbnail: String,
	pub title: String,
	pub app_id: String,
	pub main_color: Rgb,
}

impl MediaControlV2 {
	pub fn no_media(reason: impl Into<String>) -> Self {
		Self {
			artist: String::new(),
			start_time: 0,
			end_time: 0,
			media_status: MediaStatus::Closed,
			position: 0,
			status_code: StatusCode::NO_MEDIA,
			thumbnail: String::new(),
			title: reason.into(),
			app_id: String::new(),
			main_color: Rgb::new(0, 0, 0),
		}
	}
}

/// Media payload with an explicit schema discriminant.
///
/// Two generations of this shape used to share a single declaration file and
/// whichever loaded last won. The `schema` tag makes the generation part of
/// the document instead of an accident of load order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "schema")]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "ts", derive(ts_rs::TS))]
#[cfg_attr(feature = "ts", ts(export))]
pub enum MediaControlPayload {
	V1(MediaControlV1),
	V2(MediaControlV2),
}

// Field names that exist in exactly one generation. `duration` marks v1;
// the rest mark v2.
const V1_MARKERS: [&str; 1] = ["duration"];
const V2_MARKERS: [&str; 4] = ["start_time", "end_time", "app_id", "main_color"];

impl MediaControlPayload {
	pub const fn media_status(&self) -> MediaStatus {
		match self {
			Self::V1(p) => p.media_status,
			Self::V2(p) => p.media_status,
		}
	}

	pub const fn status_code(&self) -> StatusCode {
		match self {
			Self::V1(p) => p.status_code,
			Self::V2(p) => p.status_code,
		}
	}

	pub fn title(&self) -> &str {
		match self {
			Self::V1(p) => &p.title,
			Self::V2(p) => &p.title,
		}
	}

	pub fn artist(&self) -> &str {
		match self {
			Self::V1(p) => &p.artist,
			Self::V2(p) => &p.artist,
		}
	}

	pub const fn position(&self) -> i64 {
		match self {
			Self::V1(p) => p.position,
			Self::V2(p) => p.position,
		}
	}

	/// Track length in seconds regardless of generation.
	pub const fn duration(&self) -> i64 {
		match self {
			Self::V1(p) => p.duration,
			Self::V2(p) => p.end_time - p.start_time,
		}
	}

	/// Decode a payload document, tagged or not.
	///
	/// Documents carrying a `schema` field decode directly; anything else
	/// goes through the legacy classifier.
	pub fn from_json_value(value: &Value) -> Result<Self, EventError> {
		let obj = value.as_object().ok_or(EventError::PayloadNotAnObject)?;

		if obj.contains_key("schema") {
			return Ok(serde_json::from_value(value.clone())?);
		}

		Self::from_legacy_value(value)
	}

	/// Classify an untagged document by the fields only one generation has.
	///
	/// Markers from both generations, or from neither, are an error: the
	/// producer and this contract disagree and guessing would reintroduce
	/// the silent-override failure this type exists to remove.
	pub fn from_legacy_value(value: &Value) -> Result<Self, EventError> {
		let obj = value.as_object().ok_or(EventError::PayloadNotAnObject)?;

		let found: Vec<&str> = V1_MARKERS
			.iter()
			.chain(V2_MARKERS.iter())
			.copied()
			.filter(|marker| obj.contains_key(*marker))
			.collect();

		let has_v1 = found.iter().any(|m| V1_MARKERS.contains(m));
		let has_v2 = found.iter().any(|m| V2_MARKERS.contains(m));

		match (has_v1, has_v2) {
			(true, true) => Err(EventError::ConflictingSchemaMarkers(found.join(", "))),
			(true, false) => Ok(Self::V1(serde_json::from_value(value.clone())?)),
			(false, true) => Ok(Self::V2(serde_json::from_value(value.clone())?)),
			(false, false) => Err(EventError::MissingSchemaMarkers),
		}
	}
}

impl From<MediaControlV1> for MediaControlPayload {
	fn from(payload: MediaControlV1) -> Self {
		Self::V1(payload)
	}
}

impl From<MediaControlV2> for MediaControlPayload {
	fn from(payload: MediaControlV2) -> Self {
		Self::V2(payload)
	}
}
