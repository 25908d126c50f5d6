use std::path::PathBuf;

use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct Config {
	pub service: Service,
	pub storage: Storage,
	pub embedding: Embedding,
	#[serde(default)]
	pub search: Search,
	pub segmentation: Segmentation,
}

#[derive(Debug, Deserialize)]
pub struct Service {
	pub http_bind: String,
	pub log_level: String,
}

#[derive(Debug, Deserialize)]
pub struct Storage {
	pub postgres: Postgres,
}

#[derive(Debug, Deserialize)]
pub struct Postgres {
	pub dsn: String,
	pub pool_max_conns: u32,
	/// Text-search configuration used for the full-text channel. Deployments
	/// with a CJK parser installed set e.g. "chinese".
	#[serde(default = "default_text_search_config")]
	pub text_search_config: String,
}

#[derive(Debug, Deserialize)]
pub struct Embedding {
	pub api_base: String,
	pub path: String,
	pub model: String,
	pub dimensions: u32,
	#[serde(default = "default_timeout_ms")]
	pub timeout_ms: u64,
	pub api_key: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct Search {
	pub vector_weight: f32,
	pub text_weight: f32,
	pub similarity_threshold: f32,
	pub vector_limit: u32,
}
impl Default for Search {
	fn default() -> Self {
		Self {
			vector_weight: 0.6,
			text_weight: 0.4,
			similarity_threshold: 0.6,
			vector_limit: 100,
		}
	}
}

#[derive(Debug, Deserialize)]
pub struct Segmentation {
	pub stopwords_file: PathBuf,
	pub user_dict_file: Option<PathBuf>,
}

fn default_text_search_config() -> String {
	"simple".to_string()
}

fn default_timeout_ms() -> u64 {
	10_000
}
