use serde::{Deserialize, Serialize};

use crate::accounts::PortfolioOverview;
use crate::budgets::BudgetUtilization;
use crate::categories::RollupSummary;
use crate::dashboard::DashboardSummary;
use crate::goals::GoalStatistics;
use crate::period::DateRange;
use crate::recurring::RecurringSchedule;

/// Multi-section report joined from the independent aggregators.
///
/// Composition is all-or-nothing: a report is only produced when every
/// section succeeded.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExecutiveReport {
    pub period: DateRange,
    pub dashboard: DashboardSummary,
    pub top_expense_categories: RollupSummary,
    pub goal_statistics: GoalStatistics,
    pub budgets: Vec<BudgetUtilization>,
    pub portfolio: PortfolioOverview,
    pub upcoming_recurring: Vec<RecurringSchedule>,
}
