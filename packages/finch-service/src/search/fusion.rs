use std::{cmp::Ordering, collections::HashMap};

use finch_domain::{CompanyInfo, FinancialSnapshot, RankedResult, Report};
use finch_storage::models::ReportHit;

pub struct FusionOptions {
	pub vector_weight: f32,
	pub text_weight: f32,
	pub similarity_threshold: f32,
}

/// Merges both retrieval channels into one ranked list.
///
/// Rows are grouped by report id before any scoring, so a report found by
/// both channels scores once with both contributions. A channel that never
/// saw the report contributes zero. Reports whose combined score falls below
/// the threshold are dropped; ties break by older publish date, then report
/// id, so a given corpus always ranks the same way.
pub fn fuse(
	vector_hits: Vec<ReportHit>,
	text_hits: Vec<ReportHit>,
	options: &FusionOptions,
) -> Vec<RankedResult> {
	#[derive(Debug)]
	struct MergedCandidate {
		hit: ReportHit,
		vector_score: Option<f32>,
		text_score: Option<f32>,
	}

	let mut by_report: HashMap<i64, MergedCandidate> = HashMap::new();

	for hit in vector_hits {
		let score = hit.score;

		match by_report.get_mut(&hit.report_id) {
			Some(existing) => {
				let entry = existing.vector_score.get_or_insert(score);

				*entry = (*entry).max(score);
			},
			None => {
				by_report.insert(
					hit.report_id,
					MergedCandidate { hit, vector_score: Some(score), text_score: None },
				);
			},
		}
	}
	for hit in text_hits {
		let score = hit.score;

		match by_report.get_mut(&hit.report_id) {
			Some(existing) => {
				let entry = existing.text_score.get_or_insert(score);

				*entry = (*entry).max(score);
			},
			None => {
				by_report.insert(
					hit.report_id,
					MergedCandidate { hit, vector_score: None, text_score: Some(score) },
				);
			},
		}
	}

	if by_report.is_empty() {
		return Vec::new();
	}

	let mut ranked = Vec::new();

	for merged in by_report.into_values() {
		let vector_score = merged.vector_score.unwrap_or(0.0);
		let text_score = merged.text_score.unwrap_or(0.0);
		let combined =
			options.vector_weight * vector_score + options.text_weight * text_score;

		if combined < options.similarity_threshold {
			continue;
		}

		ranked.push(into_ranked(merged.hit, combined));
	}

	ranked.sort_by(|left, right| {
		cmp_f32_desc(left.report.similarity_score, right.report.similarity_score)
			.then_with(|| left.report.publish_date.cmp(&right.report.publish_date))
			.then_with(|| left.report.report_id.cmp(&right.report.report_id))
	});

	ranked
}

fn into_ranked(hit: ReportHit, combined: f32) -> RankedResult {
	let financial_info = hit.statement_date.map(|report_date| FinancialSnapshot {
		report_date,
		net_profit: hit.net_profit,
		debt_ratio: hit.debt_ratio,
		net_profit_growth_percent: hit.net_profit_growth_percent,
	});

	RankedResult {
		report: Report {
			report_id: hit.report_id,
			stock_code: hit.stock_code,
			title: hit.title,
			institution: hit.institution,
			publish_date: hit.publish_date,
			rating: hit.rating,
			summary: hit.summary,
			similarity_score: combined,
		},
		company_info: CompanyInfo {
			company_name: hit.company_name,
			industry: hit.industry,
			exchange_market: hit.exchange_market,
		},
		financial_info,
	}
}

pub fn cmp_f32_desc(a: f32, b: f32) -> Ordering {
	match (a.is_nan(), b.is_nan()) {
		(true, true) => Ordering::Equal,
		(true, false) => Ordering::Greater,
		(false, true) => Ordering::Less,
		(false, false) => b.partial_cmp(&a).unwrap_or(Ordering::Equal),
	}
}
