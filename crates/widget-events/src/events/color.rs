use crate::error::EventError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Accent color extracted from session artwork.
///
/// Exactly three components, 0..=255 each; the wire form is a plain
/// `[r, g, b]` array. Widget appearance records carry colors as `#rrggbb`
/// strings, hence the hex helpers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
#[cfg_attr(feature = "ts", derive(ts_rs::TS))]
#[cfg_attr(feature = "ts", ts(export))]
pub struct Rgb([u8; 3]);

impl Rgb {
	pub const fn new(r: u8, g: u8, b: u8) -> Self {
		Self([r, g, b])
	}

	pub const fn r(self) -> u8 {
		self.0[0]
	}

	pub const fn g(self) -> u8 {
		self.0[1]
	}

	pub const fn b(self) -> u8 {
		self.0[2]
	}

	pub const fn components(self) -> [u8; 3] {
		self.0
	}

	pub fn to_hex(self) -> String {
		format!("#{:02x}{:02x}{:02x}", self.0[0], self.0[1], self.0[2])
	}

	/// Accepts `#rrggbb` or `rrggbb`.
	pub fn from_hex(s: &str) -> Result<Self, EventError> {
		let digits = s.strip_prefix('#').unwrap_or(s);

		if digits.len() != 6 || !digits.is_ascii() {
			return Err(EventError::InvalidColor(s.to_string()));
		}

		let component = |range: std::ops::Range<usize>| u8::from_str_radix(&digits[range], 16).map_err(|_| EventError::InvalidColor(s.to_string()));

		Ok(Self([component(0..2)?, component(2..4)?, component(4..6)?]))
	}
}

impl From<[u8; 3]> for Rgb {
	fn from(components: [u8; 3]) -> Self {
		Self(components)
	}
}

impl From<Rgb> for [u8; 3] {
	fn from(color: Rgb) -> Self {
		color.0
	}
}

impl fmt::Display for Rgb {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}", self.to_hex())
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use pretty_assertions::assert_eq;

	#[test]
	fn test_wire_form_is_component_array() {
		let json = serde_json::to_string(&Rgb::new(30, 215, 96)).unwrap();

		assert_eq!(json, "[30,215,96]");
		assert_eq!(serde_json::from_str::<Rgb>("[30,215,96]").unwrap(), Rgb::new(30, 215, 96));
	}

	#[test]
	fn test_wire_rejects_wrong_arity() {
		assert!(serde_json::from_str::<Rgb>("[30,215]").is_err());
		assert!(serde_json::from_str::<Rgb>("[30,215,96,255]").is_err());
	}

	#[test]
	fn test_wire_rejects_out_of_range_components() {
		assert!(serde_json::from_str::<Rgb>("[30,215,256]").is_err());
		assert!(serde_json::from_str::<Rgb>("[-1,0,0]").is_err());
	}

	#[test]
	fn test_hex_round_trip() {
		let color = Rgb::new(0x1e, 0xd7, 0x60);

		assert_eq!(color.to_hex(), "#1ed760");
		assert_eq!(Rgb::from_hex("#1ed760").unwrap(), color);
		assert_eq!(Rgb::from_hex("1ed760").unwrap(), color);
	}

	#[test]
	fn test_hex_rejects_garbage() {
		for bad in ["#1ed76", "#1ed7601", "#1ed76g", "", "#"] {
			assert!(Rgb::from_hex(bad).is_err(), "Expected error for input: {}", bad);
		}
	}
}
