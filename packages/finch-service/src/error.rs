pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Pipeline failures, split by stage and by whether the dependency failed to
/// answer or answered with something unusable.
#[derive(Debug)]
pub enum Error {
	EmbeddingUnavailable { message: String },
	EmbeddingMalformed { message: String },
	RetrievalUnavailable { message: String },
	RetrievalMalformed { message: String },
}

impl std::fmt::Display for Error {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			Self::EmbeddingUnavailable { message } => {
				write!(f, "Embedding service unavailable: {message}")
			},
			Self::EmbeddingMalformed { message } => {
				write!(f, "Embedding response malformed: {message}")
			},
			Self::RetrievalUnavailable { message } => {
				write!(f, "Search backend unavailable: {message}")
			},
			Self::RetrievalMalformed { message } => {
				write!(f, "Search backend returned malformed data: {message}")
			},
		}
	}
}

impl std::error::Error for Error {}

impl From<finch_providers::Error> for Error {
	fn from(err: finch_providers::Error) -> Self {
		match err {
			finch_providers::Error::Unavailable { message } =>
				Self::EmbeddingUnavailable { message },
			finch_providers::Error::Malformed { message } => Self::EmbeddingMalformed { message },
		}
	}
}

impl From<finch_storage::Error> for Error {
	fn from(err: finch_storage::Error) -> Self {
		match err {
			finch_storage::Error::Sqlx(err) => match &err {
				sqlx::Error::ColumnDecode { .. }
				| sqlx::Error::ColumnNotFound(_)
				| sqlx::Error::Decode(_)
				| sqlx::Error::TypeNotFound { .. } =>
					Self::RetrievalMalformed { message: err.to_string() },
				_ => Self::RetrievalUnavailable { message: err.to_string() },
			},
			finch_storage::Error::InvalidArgument(message) =>
				Self::RetrievalMalformed { message },
		}
	}
}
