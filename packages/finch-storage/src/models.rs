use time::Date;

/// One row from either retrieval channel: the report, its joined reference
/// data, and the channel's raw score.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct ReportHit {
	pub report_id: i64,
	pub stock_code: String,
	pub title: String,
	pub institution: String,
	pub publish_date: Date,
	pub rating: String,
	pub summary: String,
	pub company_name: String,
	pub industry: String,
	pub exchange_market: String,
	pub statement_date: Option<Date>,
	pub net_profit: Option<f64>,
	pub debt_ratio: Option<f64>,
	pub net_profit_growth_percent: Option<f64>,
	pub score: f32,
}
