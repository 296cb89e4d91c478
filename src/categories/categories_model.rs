use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::period::DateRange;
use crate::transactions::TransactionType;

use super::selection::TopSelection;

/// Pre-grouped category totals supplied by the gateway.
///
/// Fixed row schema: id, name, color, total, count, min, max and the total for
/// the immediately preceding equal-length period.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryTotalsRow {
    pub category_id: String,
    pub name: String,
    pub color: Option<String>,
    pub total: Decimal,
    pub count: i64,
    pub min: Decimal,
    pub max: Decimal,
    pub previous_total: Decimal,
}

/// Month-keyed totals for chart series, "YYYY-MM" keys
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyTotalRow {
    pub month: String,
    pub total: Decimal,
}

/// Caller-supplied rollup filters
#[derive(Debug, Clone, Default)]
pub struct RollupQuery {
    pub category_ids: Option<Vec<String>>,
    /// `None` rolls up income and expense together
    pub transaction_type: Option<TransactionType>,
    pub selection: Option<TopSelection>,
}

/// Derived per-category metrics for one period
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryRollup {
    pub category_id: String,
    pub name: String,
    pub color: Option<String>,
    pub total: Decimal,
    pub transaction_count: i64,
    pub average: Decimal,
    pub min: Decimal,
    pub max: Decimal,
    pub percentage_of_total: f64,
    pub previous_total: Decimal,
    pub variance_percentage: f64,
}

/// Full rollup response for one period
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RollupSummary {
    pub period: DateRange,
    pub grand_total: Decimal,
    pub categories: Vec<CategoryRollup>,
    pub by_month: HashMap<String, Decimal>,
}
