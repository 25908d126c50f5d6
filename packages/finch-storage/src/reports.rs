use sqlx::query_as;

use crate::{Error, Result, db::Db, models::ReportHit};

const VECTOR_SEARCH_SQL: &str = "\
WITH latest_statements AS (
	SELECT stock_code, MAX(report_date) AS latest_date
	FROM financial_statements
	GROUP BY stock_code
)
SELECT
	r.report_id,
	r.stock_code,
	r.title,
	r.institution,
	r.publish_date,
	r.rating,
	r.summary,
	c.company_name,
	c.industry,
	c.exchange_market,
	f.report_date AS statement_date,
	f.net_profit,
	f.debt_ratio,
	f.net_profit_growth_percent,
	(1 - (r.embedding <=> $1::text::vector))::real AS score
FROM research_reports r
JOIN company_profiles c ON c.stock_code = r.stock_code
LEFT JOIN latest_statements ls ON ls.stock_code = r.stock_code
LEFT JOIN financial_statements f
	ON f.stock_code = r.stock_code AND f.report_date = ls.latest_date
WHERE r.embedding IS NOT NULL
ORDER BY r.embedding <=> $1::text::vector
LIMIT $2";

const TEXT_SEARCH_SQL: &str = "\
WITH latest_statements AS (
	SELECT stock_code, MAX(report_date) AS latest_date
	FROM financial_statements
	GROUP BY stock_code
)
SELECT
	r.report_id,
	r.stock_code,
	r.title,
	r.institution,
	r.publish_date,
	r.rating,
	r.summary,
	c.company_name,
	c.industry,
	c.exchange_market,
	f.report_date AS statement_date,
	f.net_profit,
	f.debt_ratio,
	f.net_profit_growth_percent,
	ts_rank_cd(
		to_tsvector($1::regconfig, r.summary || ' ' || c.company_name || ' ' || c.industry),
		to_tsquery($1::regconfig, $2)
	)::real AS score
FROM research_reports r
JOIN company_profiles c ON c.stock_code = r.stock_code
LEFT JOIN latest_statements ls ON ls.stock_code = r.stock_code
LEFT JOIN financial_statements f
	ON f.stock_code = r.stock_code AND f.report_date = ls.latest_date
WHERE to_tsvector($1::regconfig, r.summary || ' ' || c.company_name || ' ' || c.industry)
	@@ to_tsquery($1::regconfig, $2)";

/// Top-K reports by vector similarity to `query_vec`, joined with company
/// data and the latest financial statement per stock code. Reports without an
/// embedding never participate.
pub async fn vector_search(db: &Db, query_vec: &[f32], limit: u32) -> Result<Vec<ReportHit>> {
	let vec_text = vector_to_pg(query_vec);
	let hits = query_as::<_, ReportHit>(VECTOR_SEARCH_SQL)
		.bind(vec_text.as_str())
		.bind(limit as i64)
		.fetch_all(&db.pool)
		.await?;

	Ok(hits)
}

/// Reports whose searchable text matches every keyword as a prefix, ranked
/// with ts_rank_cd over that text. Same join shape as the vector query.
pub async fn text_search(db: &Db, ts_config: &str, keywords: &[String]) -> Result<Vec<ReportHit>> {
	if keywords.is_empty() {
		return Err(Error::InvalidArgument(
			"Text search requires at least one keyword.".to_string(),
		));
	}

	let tsquery = build_tsquery(keywords);
	let hits = query_as::<_, ReportHit>(TEXT_SEARCH_SQL)
		.bind(ts_config)
		.bind(tsquery.as_str())
		.fetch_all(&db.pool)
		.await?;

	Ok(hits)
}

// Keywords come out of the extractor as Han ideographs and ASCII alphanumerics
// only, so quoting each term is safe.
fn build_tsquery(keywords: &[String]) -> String {
	keywords.iter().map(|kw| format!("'{kw}':*")).collect::<Vec<_>>().join(" & ")
}

pub fn vector_to_pg(vec: &[f32]) -> String {
	let mut out = String::with_capacity(vec.len() * 8);

	out.push('[');

	for (i, value) in vec.iter().enumerate() {
		if i > 0 {
			out.push(',');
		}
		out.push_str(&value.to_string());
	}

	out.push(']');

	out
}
