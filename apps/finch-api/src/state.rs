use std::sync::Arc;

use finch_domain::keywords::KeywordExtractor;
use finch_service::SearchService;
use finch_storage::db::Db;

#[derive(Clone)]
pub struct AppState {
	pub service: Arc<SearchService>,
}
impl AppState {
	pub async fn new(config: finch_config::Config) -> color_eyre::Result<Self> {
		let db = Db::connect(&config.storage.postgres).await?;

		db.ensure_schema(config.embedding.dimensions).await?;

		let keywords = KeywordExtractor::from_files(
			&config.segmentation.stopwords_file,
			config.segmentation.user_dict_file.as_deref(),
		)?;
		let service = SearchService::new(config, db, keywords);

		Ok(Self { service: Arc::new(service) })
	}
}
