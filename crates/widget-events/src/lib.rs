pub mod events;

mod error;

pub use error::{EventError, Result};
pub use events::{EventId, MediaControlPayload, MediaControlV1, MediaControlV2, MediaStatus, Rgb, StatusCode, WidgetEvent};
