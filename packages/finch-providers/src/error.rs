pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
	#[error("Embedding provider request failed: {message}")]
	Unavailable { message: String },
	#[error("Embedding provider response malformed: {message}")]
	Malformed { message: String },
}
