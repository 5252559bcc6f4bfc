//! TypeScript declarations for the widget event contract.
//!
//! The frontend used to hand-mirror these shapes, which is how two
//! incompatible copies of the media payload ended up in one declaration
//! file. Running this crate's tests regenerates `bindings/` from the Rust
//! types instead.

pub use widget_events::{EventId, MediaControlPayload, MediaControlV1, MediaControlV2, MediaStatus, Rgb, StatusCode, WidgetEvent};
