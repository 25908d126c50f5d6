pub mod date_serde;
pub mod keywords;

mod model;

pub use model::{CompanyInfo, FinancialSnapshot, RankedResult, Report};
