use crate::error::EventError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Playback state of the observed media session.
///
/// A closed label set: the wire value is the variant name verbatim, and an
/// unknown label is an error rather than a default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "ts", derive(ts_rs::TS))]
#[cfg_attr(feature = "ts", ts(export))]
pub enum MediaStatus {
	Closed,
	Opened,
	Changing,
	Stopped,
	Playing,
	Paused,
}

impl MediaStatus {
	pub const ALL: [Self; 6] = [Self::Closed, Self::Opened, Self::Changing, Self::Stopped, Self::Playing, Self::Paused];

	pub const fn as_str(self) -> &'static str {
		match self {
			Self::Closed => "Closed",
			Self::Opened => "Opened",
			Self::Changing => "Changing",
			Self::Stopped => "Stopped",
			Self::Playing => "Playing",
			Self::Paused => "Paused",
		}
	}

	/// `Closed` doubles as the fallback when no session exists at all.
	pub const fn session_exists(self) -> bool {
		!matches!(self, Self::Closed)
	}
}

impl fmt::Display for MediaStatus {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}", self.as_str())
	}
}

impl FromStr for MediaStatus {
	type Err = EventError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s {
			"Closed" => Ok(Self::Closed),
			"Opened" => Ok(Self::Opened),
			"Changing" => Ok(Self::Changing),
			"Stopped" => Ok(Self::Stopped),
			"Playing" => Ok(Self::Playing),
			"Paused" => Ok(Self::Paused),
			_ => Err(EventError::UnknownStatus(s.to_string())),
		}
	}
}
