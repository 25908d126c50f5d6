use std::time::Duration;

use reqwest::Client;
use serde_json::Value;

use crate::{Error, Result};

/// Requests one embedding vector for `text`. A single attempt with the
/// configured timeout; retry policy belongs to the caller.
pub async fn embed(cfg: &finch_config::Embedding, text: &str) -> Result<Vec<f32>> {
	let client = Client::builder()
		.timeout(Duration::from_millis(cfg.timeout_ms))
		.build()
		.map_err(|err| Error::Unavailable { message: err.to_string() })?;
	let url = format!("{}{}", cfg.api_base, cfg.path);
	let body = serde_json::json!({
		"model": cfg.model,
		"input": text,
	});
	let mut request = client.post(url).json(&body);

	if let Some(key) = cfg.api_key.as_deref() {
		request = request.bearer_auth(key);
	}

	let res =
		request.send().await.map_err(|err| Error::Unavailable { message: err.to_string() })?;
	let json: Value = res
		.error_for_status()
		.map_err(|err| Error::Unavailable { message: err.to_string() })?
		.json()
		.await
		.map_err(|err| Error::Malformed { message: err.to_string() })?;
	let vector = parse_embedding_response(&json)?;

	if vector.len() != cfg.dimensions as usize {
		return Err(Error::Malformed {
			message: format!("Expected {} dimensions, got {}.", cfg.dimensions, vector.len()),
		});
	}

	Ok(vector)
}

/// Accepts the flat `{"embeddings": [...]}` shape, the batched
/// `{"embeddings": [[...]]}` shape, and the `{"data": [{"embedding": [...]}]}`
/// shape, in that order.
fn parse_embedding_response(json: &Value) -> Result<Vec<f32>> {
	if let Some(values) = json.get("embeddings").and_then(Value::as_array) {
		if let Some(first) = values.first().and_then(Value::as_array) {
			return collect_numbers(first);
		}

		return collect_numbers(values);
	}
	if let Some(embedding) = json
		.get("data")
		.and_then(Value::as_array)
		.and_then(|items| items.first())
		.and_then(|item| item.get("embedding"))
		.and_then(Value::as_array)
	{
		return collect_numbers(embedding);
	}

	Err(Error::Malformed { message: "Response lacks an embedding array.".to_string() })
}

fn collect_numbers(values: &[Value]) -> Result<Vec<f32>> {
	let mut vec = Vec::with_capacity(values.len());

	for value in values {
		let number = value.as_f64().ok_or_else(|| Error::Malformed {
			message: "Embedding value must be numeric.".to_string(),
		})?;

		vec.push(number as f32);
	}

	Ok(vec)
}
