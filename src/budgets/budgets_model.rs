use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Domain model representing a budget with its category envelopes
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Budget {
    pub id: String,
    pub name: String,
    pub period_start: NaiveDate,
    pub period_end: NaiveDate,
    pub total_amount: Decimal,
    pub is_active: bool,
    pub categories: Vec<BudgetCategory>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BudgetCategory {
    pub id: String,
    pub category_id: String,
    pub name: String,
    pub assigned_amount: Decimal,
    pub spent_amount: Decimal,
}

/// Spend classification of one budget category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum BudgetCategoryStatus {
    Normal,
    Warning,
    Exceeded,
}

/// Derived utilization figures per budget category
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BudgetCategoryUtilization {
    pub id: String,
    pub category_id: String,
    pub name: String,
    pub assigned_amount: Decimal,
    pub spent_amount: Decimal,
    pub remaining_amount: Decimal,
    pub spent_percentage: f64,
    pub status: BudgetCategoryStatus,
}

/// Utilization of one budget across all its categories
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BudgetUtilization {
    pub budget_id: String,
    pub name: String,
    pub period_start: NaiveDate,
    pub period_end: NaiveDate,
    pub total_amount: Decimal,
    pub executed_amount: Decimal,
    pub execution_percentage: f64,
    pub categories: Vec<BudgetCategoryUtilization>,
}

/// One category's new assigned amount produced by a redistribution.
///
/// The full vector for a budget is written through the gateway in a single
/// transactional call; readers never observe a partial redistribution.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryAssignment {
    pub budget_category_id: String,
    pub assigned_amount: Decimal,
}
