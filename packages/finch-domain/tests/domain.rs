use std::collections::HashSet;

use time::macros::date;

use finch_domain::{
	CompanyInfo, FinancialSnapshot, RankedResult, Report, keywords::KeywordExtractor,
};

fn stopwords(words: &[&str]) -> HashSet<String> {
	words.iter().map(|word| word.to_string()).collect()
}

#[test]
fn empty_and_blank_input_yield_no_keywords() {
	let extractor = KeywordExtractor::new(HashSet::new(), &[]);

	assert!(extractor.extract("").is_empty());
	assert!(extractor.extract("   ").is_empty());
	assert!(extractor.extract("\t\n").is_empty());
}

#[test]
fn punctuation_only_input_yields_no_keywords() {
	let extractor = KeywordExtractor::new(HashSet::new(), &[]);

	assert!(extractor.extract("！？。，,.!?").is_empty());
}

#[test]
fn latin_tokens_pass_length_and_stopword_filters() {
	let extractor = KeywordExtractor::new(stopwords(&["bank"]), &[]);

	assert_eq!(extractor.extract("bank earnings"), vec!["earnings".to_string()]);
	assert!(extractor.extract("x y z").is_empty());
}

#[test]
fn keywords_are_deduplicated_in_first_seen_order() {
	let extractor = KeywordExtractor::new(HashSet::new(), &[]);

	assert_eq!(
		extractor.extract("earnings report earnings"),
		vec!["earnings".to_string(), "report".to_string()]
	);
}

#[test]
fn mixed_cjk_and_latin_segments() {
	let extractor = KeywordExtractor::new(HashSet::new(), &[]);

	assert_eq!(extractor.extract("5G！！网络"), vec!["5G".to_string(), "网络".to_string()]);
}

#[test]
fn cjk_stopwords_are_dropped() {
	let extractor = KeywordExtractor::new(stopwords(&["网络"]), &[]);
	let keywords = extractor.extract("5G网络前景");

	assert!(keywords.contains(&"5G".to_string()));
	assert!(!keywords.contains(&"网络".to_string()));
}

#[test]
fn user_dictionary_keeps_compound_terms_whole() {
	let extractor = KeywordExtractor::new(HashSet::new(), &["通信设备".to_string()]);
	let keywords = extractor.extract("通信设备前景");

	assert!(keywords.contains(&"通信设备".to_string()));
}

#[test]
fn ranked_result_serializes_dates_and_optional_snapshot() {
	let result = RankedResult {
		report: Report {
			report_id: 42,
			stock_code: "600519".to_string(),
			title: "White spirits outlook".to_string(),
			institution: "Example Securities".to_string(),
			publish_date: date!(2024 - 03 - 15),
			rating: "Buy".to_string(),
			summary: "Margins hold up.".to_string(),
			similarity_score: 0.74,
		},
		company_info: CompanyInfo {
			company_name: "Example Co".to_string(),
			industry: "Beverages".to_string(),
			exchange_market: "SSE".to_string(),
		},
		financial_info: None,
	};
	let value = serde_json::to_value(&result).expect("Failed to serialize result.");

	assert_eq!(value["report"]["publish_date"], "2024-03-15");
	assert_eq!(value["report"]["report_id"], 42);
	assert!(value["financial_info"].is_null());
}

#[test]
fn financial_snapshot_roundtrips_through_json() {
	let snapshot = FinancialSnapshot {
		report_date: date!(2023 - 12 - 31),
		net_profit: Some(1_250_000.0),
		debt_ratio: Some(0.42),
		net_profit_growth_percent: None,
	};
	let value = serde_json::to_value(&snapshot).expect("Failed to serialize snapshot.");

	assert_eq!(value["report_date"], "2023-12-31");

	let parsed: FinancialSnapshot =
		serde_json::from_value(value).expect("Failed to deserialize snapshot.");

	assert_eq!(parsed.report_date, date!(2023 - 12 - 31));
	assert_eq!(parsed.net_profit, Some(1_250_000.0));
	assert_eq!(parsed.net_profit_growth_percent, None);
}
