use time::Date;

/// A research report as stored, plus the score the ranking pipeline exposes.
///
/// `similarity_score` carries a raw channel score at the retrieval boundary and
/// is rebound to the combined score during fusion. The stored record itself is
/// never mutated.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct Report {
	pub report_id: i64,
	pub stock_code: String,
	pub title: String,
	pub institution: String,
	#[serde(with = "crate::date_serde")]
	pub publish_date: Date,
	pub rating: String,
	pub summary: String,
	pub similarity_score: f32,
}

/// Reference data for a stock code. One per code.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct CompanyInfo {
	pub company_name: String,
	pub industry: String,
	pub exchange_market: String,
}

/// The most recent financial statement for a stock code. Absent when the
/// company has never filed one.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct FinancialSnapshot {
	#[serde(with = "crate::date_serde")]
	pub report_date: Date,
	pub net_profit: Option<f64>,
	pub debt_ratio: Option<f64>,
	pub net_profit_growth_percent: Option<f64>,
}

/// One ranked output row: the report with its combined score, joined reference
/// data, and the latest financial snapshot when one exists.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct RankedResult {
	pub report: Report,
	pub company_info: CompanyInfo,
	pub financial_info: Option<FinancialSnapshot>,
}
