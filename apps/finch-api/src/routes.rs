use axum::{
	Json, Router,
	extract::State,
	http::StatusCode,
	response::{IntoResponse, Response},
	routing::{get, post},
};
use serde::Serialize;

use finch_service::{Error as ServiceError, SearchRankRequest, SearchRankResponse};

use crate::state::AppState;

pub fn router(state: AppState) -> Router {
	Router::new()
		.route("/health", get(health))
		.route("/search/rank", post(search_rank))
		.with_state(state)
}

async fn health() -> StatusCode {
	StatusCode::OK
}

async fn search_rank(
	State(state): State<AppState>,
	Json(payload): Json<SearchRankRequest>,
) -> Result<Json<SearchRankResponse>, ApiError> {
	let response = state.service.hybrid_search(&payload).await?;

	Ok(Json(response))
}

#[derive(Debug, Serialize)]
struct ErrorBody {
	detail: String,
}

#[derive(Debug)]
pub struct ApiError {
	status: StatusCode,
	detail: String,
}

// The full error stays in the server log; callers only see which stage gave
// out.
impl From<ServiceError> for ApiError {
	fn from(err: ServiceError) -> Self {
		tracing::error!(error = %err, "Search pipeline failed.");

		let detail = match &err {
			ServiceError::EmbeddingUnavailable { .. } => "Embedding service unavailable.",
			ServiceError::EmbeddingMalformed { .. } => {
				"Embedding service returned an invalid response."
			},
			ServiceError::RetrievalUnavailable { .. } => "Search backend unavailable.",
			ServiceError::RetrievalMalformed { .. } => "Search backend returned invalid data.",
		};

		Self { status: StatusCode::INTERNAL_SERVER_ERROR, detail: detail.to_string() }
	}
}

impl IntoResponse for ApiError {
	fn into_response(self) -> Response {
		(self.status, Json(ErrorBody { detail: self.detail })).into_response()
	}
}
