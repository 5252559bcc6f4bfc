use thiserror::Error;

pub type Result<T> = std::result::Result<T, EventError>;

#[derive(Debug, Error)]
pub enum EventError {
	#[error("unknown media status: {0}")]
	UnknownStatus(String),

	#[error("unknown event name: {0}")]
	UnknownEvent(String),

	#[error("payload is not a JSON object")]
	PayloadNotAnObject,

	#[error("payload carries markers of both schema generations: {0}")]
	ConflictingSchemaMarkers(String),

	#[error("payload carries no recognizable schema markers")]
	MissingSchemaMarkers,

	#[error("invalid color literal: {0}")]
	InvalidColor(String),

	#[error(transparent)]
	Json(#[from] serde_json::Error),
}

impl EventError {
	/// True when re-reading the document after a producer upgrade could succeed.
	pub fn is_schema_mismatch(&self) -> bool {
		matches!(self, Self::ConflictingSchemaMarkers(_) | Self::MissingSchemaMarkers)
	}
}
