use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

/// Producer-side envelope id.
///
/// Serialized as a bare integer; the display form carries an `evt-` prefix
/// for log lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "ts", derive(ts_rs::TS))]
#[cfg_attr(feature = "ts", ts(export))]
pub struct EventId(u64);

impl EventId {
	pub fn new() -> Self {
		static COUNTER: AtomicU64 = AtomicU64::new(1);
		Self(COUNTER.fetch_add(1, Ordering::Relaxed))
	}

	// Return the raw ID
	pub fn as_u64(&self) -> u64 {
		self.0
	}

	pub const fn from_u64(raw: u64) -> Self {
		Self(raw)
	}

	// Parse from the display form (useful for log scraping)
	pub fn from_str(s: &str) -> Option<Self> {
		s.strip_prefix("evt-").and_then(|n| n.parse::<u64>().ok()).map(Self)
	}
}

impl Default for EventId {
	fn default() -> Self {
		Self::new()
	}
}

impl fmt::Display for EventId {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "evt-{}", self.0)
	}
}
