mod error;
mod types;

pub use error::{Error, Result};
pub use types::{Config, Embedding, Postgres, Search, Segmentation, Service, Storage};

use std::{fs, path::Path};

pub fn load(path: &Path) -> Result<Config> {
	let raw = fs::read_to_string(path)
		.map_err(|err| Error::ReadConfig { path: path.to_path_buf(), source: err })?;

	let mut cfg: Config = toml::from_str(&raw)
		.map_err(|err| Error::ParseConfig { path: path.to_path_buf(), source: err })?;

	normalize(&mut cfg);

	validate(&cfg)?;

	Ok(cfg)
}

pub fn validate(cfg: &Config) -> Result<()> {
	if cfg.service.http_bind.trim().is_empty() {
		return Err(Error::Validation {
			message: "service.http_bind must be non-empty.".to_string(),
		});
	}
	if cfg.service.log_level.trim().is_empty() {
		return Err(Error::Validation {
			message: "service.log_level must be non-empty.".to_string(),
		});
	}
	if cfg.storage.postgres.dsn.trim().is_empty() {
		return Err(Error::Validation {
			message: "storage.postgres.dsn must be non-empty.".to_string(),
		});
	}
	if cfg.storage.postgres.pool_max_conns == 0 {
		return Err(Error::Validation {
			message: "storage.postgres.pool_max_conns must be greater than zero.".to_string(),
		});
	}
	if cfg.storage.postgres.text_search_config.trim().is_empty() {
		return Err(Error::Validation {
			message: "storage.postgres.text_search_config must be non-empty.".to_string(),
		});
	}
	if cfg.embedding.api_base.trim().is_empty() {
		return Err(Error::Validation {
			message: "embedding.api_base must be non-empty.".to_string(),
		});
	}
	if cfg.embedding.path.trim().is_empty() {
		return Err(Error::Validation { message: "embedding.path must be non-empty.".to_string() });
	}
	if cfg.embedding.model.trim().is_empty() {
		return Err(Error::Validation { message: "embedding.model must be non-empty.".to_string() });
	}
	if cfg.embedding.dimensions == 0 {
		return Err(Error::Validation {
			message: "embedding.dimensions must be greater than zero.".to_string(),
		});
	}
	if cfg.embedding.timeout_ms == 0 {
		return Err(Error::Validation {
			message: "embedding.timeout_ms must be greater than zero.".to_string(),
		});
	}

	for (label, weight) in [
		("search.vector_weight", cfg.search.vector_weight),
		("search.text_weight", cfg.search.text_weight),
	] {
		if !weight.is_finite() {
			return Err(Error::Validation {
				message: format!("{label} must be a finite number."),
			});
		}
		if !(0.0..=1.0).contains(&weight) {
			return Err(Error::Validation {
				message: format!("{label} must be in the range 0.0-1.0."),
			});
		}
	}

	if !cfg.search.similarity_threshold.is_finite() {
		return Err(Error::Validation {
			message: "search.similarity_threshold must be a finite number.".to_string(),
		});
	}
	if cfg.search.similarity_threshold < 0.0 {
		return Err(Error::Validation {
			message: "search.similarity_threshold must be zero or greater.".to_string(),
		});
	}
	if cfg.search.vector_limit == 0 {
		return Err(Error::Validation {
			message: "search.vector_limit must be greater than zero.".to_string(),
		});
	}
	if cfg.segmentation.stopwords_file.as_os_str().is_empty() {
		return Err(Error::Validation {
			message: "segmentation.stopwords_file must be non-empty.".to_string(),
		});
	}

	Ok(())
}

fn normalize(cfg: &mut Config) {
	if cfg.embedding.api_key.as_deref().map(|key| key.trim().is_empty()).unwrap_or(false) {
		cfg.embedding.api_key = None;
	}
	if cfg
		.segmentation
		.user_dict_file
		.as_deref()
		.map(|path| path.as_os_str().is_empty())
		.unwrap_or(false)
	{
		cfg.segmentation.user_dict_file = None;
	}
}
