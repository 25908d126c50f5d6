use std::{
	env, fs,
	path::PathBuf,
	sync::atomic::{AtomicU64, Ordering},
	time::{SystemTime, UNIX_EPOCH},
};

use toml::Value;

use finch_config::{Config, Error};

const SAMPLE_CONFIG_TOML: &str = include_str!("fixtures/sample_config.toml");

static COUNTER: AtomicU64 = AtomicU64::new(0);

fn write_temp_config(contents: &str) -> PathBuf {
	let nanos = SystemTime::now()
		.duration_since(UNIX_EPOCH)
		.expect("System clock before epoch.")
		.subsec_nanos();
	let id = COUNTER.fetch_add(1, Ordering::SeqCst);
	let path =
		env::temp_dir().join(format!("finch_config_{}_{nanos}_{id}.toml", std::process::id()));

	fs::write(&path, contents).expect("Failed to write temp config.");

	path
}

fn load(contents: &str) -> finch_config::Result<Config> {
	let path = write_temp_config(contents);
	let result = finch_config::load(&path);
	let _ = fs::remove_file(&path);

	result
}

fn sample_with<F>(mutate: F) -> String
where
	F: FnOnce(&mut toml::Table),
{
	let mut value: Value =
		toml::from_str(SAMPLE_CONFIG_TOML).expect("Failed to parse sample config.");
	let root = value.as_table_mut().expect("Sample config must be a table.");

	mutate(root);

	toml::to_string(&value).expect("Failed to render sample config.")
}

fn postgres_mut(root: &mut toml::Table) -> &mut toml::Table {
	root.get_mut("storage")
		.and_then(Value::as_table_mut)
		.expect("Sample config must include [storage].")
		.get_mut("postgres")
		.and_then(Value::as_table_mut)
		.expect("Sample config must include [storage.postgres].")
}

fn section_mut<'a>(root: &'a mut toml::Table, name: &str) -> &'a mut toml::Table {
	root.get_mut(name)
		.and_then(Value::as_table_mut)
		.unwrap_or_else(|| panic!("Sample config must include [{name}]."))
}

fn expect_validation_message(result: finch_config::Result<Config>, expected: &str) {
	match result {
		Err(Error::Validation { message }) => assert_eq!(message, expected),
		other => panic!("Expected a validation error, got {other:?}."),
	}
}

#[test]
fn loads_sample_config() {
	let cfg = load(SAMPLE_CONFIG_TOML).expect("Failed to load sample config.");

	assert_eq!(cfg.service.http_bind, "127.0.0.1:8000");
	assert_eq!(cfg.storage.postgres.pool_max_conns, 4);
	assert_eq!(cfg.embedding.model, "BAAI/bge-m3");
	assert_eq!(cfg.embedding.dimensions, 512);
	assert_eq!(cfg.embedding.api_key, None);
	assert_eq!(cfg.search.vector_weight, 0.6);
	assert_eq!(cfg.segmentation.user_dict_file, None);
}

#[test]
fn defaults_apply_when_tunables_are_omitted() {
	let toml = sample_with(|root| {
		root.remove("search");
		postgres_mut(root).remove("text_search_config");
		section_mut(root, "embedding").remove("timeout_ms");
	});
	let cfg = load(&toml).expect("Failed to load config with omitted tunables.");

	assert_eq!(cfg.search.vector_weight, 0.6);
	assert_eq!(cfg.search.text_weight, 0.4);
	assert_eq!(cfg.search.similarity_threshold, 0.6);
	assert_eq!(cfg.search.vector_limit, 100);
	assert_eq!(cfg.storage.postgres.text_search_config, "simple");
	assert_eq!(cfg.embedding.timeout_ms, 10_000);
}

#[test]
fn rejects_empty_http_bind() {
	let toml = sample_with(|root| {
		section_mut(root, "service").insert("http_bind".to_string(), Value::String(String::new()));
	});

	expect_validation_message(load(&toml), "service.http_bind must be non-empty.");
}

#[test]
fn rejects_empty_dsn() {
	let toml = sample_with(|root| {
		postgres_mut(root).insert("dsn".to_string(), Value::String(String::new()));
	});

	expect_validation_message(load(&toml), "storage.postgres.dsn must be non-empty.");
}

#[test]
fn rejects_zero_pool_max_conns() {
	let toml = sample_with(|root| {
		postgres_mut(root).insert("pool_max_conns".to_string(), Value::Integer(0));
	});

	expect_validation_message(
		load(&toml),
		"storage.postgres.pool_max_conns must be greater than zero.",
	);
}

#[test]
fn rejects_empty_text_search_config() {
	let toml = sample_with(|root| {
		postgres_mut(root).insert("text_search_config".to_string(), Value::String(String::new()));
	});

	expect_validation_message(
		load(&toml),
		"storage.postgres.text_search_config must be non-empty.",
	);
}

#[test]
fn rejects_empty_model() {
	let toml = sample_with(|root| {
		section_mut(root, "embedding").insert("model".to_string(), Value::String(String::new()));
	});

	expect_validation_message(load(&toml), "embedding.model must be non-empty.");
}

#[test]
fn rejects_zero_dimensions() {
	let toml = sample_with(|root| {
		section_mut(root, "embedding").insert("dimensions".to_string(), Value::Integer(0));
	});

	expect_validation_message(load(&toml), "embedding.dimensions must be greater than zero.");
}

#[test]
fn rejects_zero_timeout() {
	let toml = sample_with(|root| {
		section_mut(root, "embedding").insert("timeout_ms".to_string(), Value::Integer(0));
	});

	expect_validation_message(load(&toml), "embedding.timeout_ms must be greater than zero.");
}

#[test]
fn rejects_out_of_range_weight() {
	let toml = sample_with(|root| {
		section_mut(root, "search").insert("vector_weight".to_string(), Value::Float(1.5));
	});

	expect_validation_message(load(&toml), "search.vector_weight must be in the range 0.0-1.0.");
}

#[test]
fn rejects_non_finite_weight() {
	let toml = sample_with(|root| {
		section_mut(root, "search")
			.insert("text_weight".to_string(), Value::Float(f64::INFINITY));
	});

	expect_validation_message(load(&toml), "search.text_weight must be a finite number.");
}

#[test]
fn rejects_negative_threshold() {
	let toml = sample_with(|root| {
		section_mut(root, "search").insert("similarity_threshold".to_string(), Value::Float(-0.1));
	});

	expect_validation_message(load(&toml), "search.similarity_threshold must be zero or greater.");
}

#[test]
fn rejects_zero_vector_limit() {
	let toml = sample_with(|root| {
		section_mut(root, "search").insert("vector_limit".to_string(), Value::Integer(0));
	});

	expect_validation_message(load(&toml), "search.vector_limit must be greater than zero.");
}

#[test]
fn rejects_empty_stopwords_file() {
	let toml = sample_with(|root| {
		section_mut(root, "segmentation")
			.insert("stopwords_file".to_string(), Value::String(String::new()));
	});

	expect_validation_message(load(&toml), "segmentation.stopwords_file must be non-empty.");
}

#[test]
fn blank_api_key_normalizes_to_none() {
	let toml = sample_with(|root| {
		section_mut(root, "embedding").insert("api_key".to_string(), Value::String("  ".to_string()));
	});
	let cfg = load(&toml).expect("Failed to load config with blank api_key.");

	assert_eq!(cfg.embedding.api_key, None);
}

#[test]
fn missing_file_is_a_read_error() {
	let path = env::temp_dir().join("finch_config_missing_file.toml");
	let _ = fs::remove_file(&path);

	match finch_config::load(&path) {
		Err(Error::ReadConfig { .. }) => {},
		other => panic!("Expected a read error, got {other:?}."),
	}
}

#[test]
fn malformed_toml_is_a_parse_error() {
	match load("service = [broken") {
		Err(Error::ParseConfig { .. }) => {},
		other => panic!("Expected a parse error, got {other:?}."),
	}
}
