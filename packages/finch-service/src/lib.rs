pub mod search;

mod error;

use std::{future::Future, pin::Pin, sync::Arc};

pub use error::{Error, Result};
pub use search::{SearchRankRequest, SearchRankResponse};

use finch_config::Config;
use finch_domain::keywords::KeywordExtractor;
use finch_providers::embedding;
use finch_storage::db::Db;

pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

pub trait EmbeddingProvider
where
	Self: Send + Sync,
{
	fn embed<'a>(
		&'a self,
		cfg: &'a finch_config::Embedding,
		text: &'a str,
	) -> BoxFuture<'a, finch_providers::Result<Vec<f32>>>;
}

#[derive(Clone)]
pub struct Providers {
	pub embedding: Arc<dyn EmbeddingProvider>,
}

pub struct SearchService {
	pub cfg: Config,
	pub db: Db,
	pub keywords: KeywordExtractor,
	pub providers: Providers,
}

struct DefaultProviders;

impl EmbeddingProvider for DefaultProviders {
	fn embed<'a>(
		&'a self,
		cfg: &'a finch_config::Embedding,
		text: &'a str,
	) -> BoxFuture<'a, finch_providers::Result<Vec<f32>>> {
		Box::pin(embedding::embed(cfg, text))
	}
}

impl Providers {
	pub fn new(embedding: Arc<dyn EmbeddingProvider>) -> Self {
		Self { embedding }
	}
}

impl Default for Providers {
	fn default() -> Self {
		Self { embedding: Arc::new(DefaultProviders) }
	}
}

impl SearchService {
	pub fn new(cfg: Config, db: Db, keywords: KeywordExtractor) -> Self {
		Self { cfg, db, keywords, providers: Providers::default() }
	}

	pub fn with_providers(
		cfg: Config,
		db: Db,
		keywords: KeywordExtractor,
		providers: Providers,
	) -> Self {
		Self { cfg, db, keywords, providers }
	}
}
