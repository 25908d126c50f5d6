pub mod fusion;

use serde::{Deserialize, Serialize};

use finch_domain::RankedResult;
use finch_storage::reports;

use crate::{Error, Result, SearchService};

#[derive(Debug, Clone, Deserialize)]
pub struct SearchRankRequest {
	pub input_text: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct SearchRankResponse {
	pub results: Vec<RankedResult>,
}

impl SearchService {
	/// Runs the full pipeline for one query: keyword extraction, query
	/// embedding, concurrent dual-channel retrieval, then weighted fusion.
	pub async fn hybrid_search(&self, request: &SearchRankRequest) -> Result<SearchRankResponse> {
		let keywords = self.keywords.extract(&request.input_text);
		let query_vec =
			self.providers.embedding.embed(&self.cfg.embedding, &request.input_text).await?;
		let limit = self.cfg.search.vector_limit;
		let ts_config = self.cfg.storage.postgres.text_search_config.as_str();
		let (vector_hits, text_hits) = tokio::try_join!(
			async {
				reports::vector_search(&self.db, &query_vec, limit).await.map_err(Error::from)
			},
			async {
				// Some queries leave no keywords after filtering; the text
				// channel then contributes nothing instead of erroring.
				if keywords.is_empty() {
					return Ok(Vec::new());
				}

				reports::text_search(&self.db, ts_config, &keywords).await.map_err(Error::from)
			},
		)?;

		tracing::debug!(
			keyword_count = keywords.len(),
			vector_hits = vector_hits.len(),
			text_hits = text_hits.len(),
			"Collected ranking candidates."
		);

		let options = fusion::FusionOptions {
			vector_weight: self.cfg.search.vector_weight,
			text_weight: self.cfg.search.text_weight,
			similarity_threshold: self.cfg.search.similarity_threshold,
		};
		let results = fusion::fuse(vector_hits, text_hits, &options);

		Ok(SearchRankResponse { results })
	}
}
