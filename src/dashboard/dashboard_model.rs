use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::period::DateRange;

/// Top-level KPI numbers surfaced on the dashboard.
///
/// `total_balance` is period-independent; every other monetary figure is
/// scoped to the resolved period echoed back in `period`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSummary {
    pub period: DateRange,
    pub total_balance: Decimal,
    pub period_income: Decimal,
    pub period_expense: Decimal,
    pub period_net: Decimal,
    pub transaction_count: i64,
    pub active_goal_count: i64,
    pub average_goal_progress: f64,
    pub budget_total: Decimal,
    pub budget_executed: Decimal,
    pub budget_execution_percentage: f64,
}
