use super::dashboard_model::DashboardSummary;
use super::dashboard_traits::DashboardServiceTrait;
use crate::accounts::AccountRepositoryTrait;
use crate::budgets::BudgetRepositoryTrait;
use crate::constants::DISPLAY_DECIMAL_PRECISION;
use crate::goals::{GoalRepositoryTrait, GoalStatus};
use crate::metrics::{clamp_percentage, percentage_to_f64, safe_divide, safe_percentage};
use crate::period::DateRange;
use crate::transactions::TransactionRepositoryTrait;
use crate::Result;

use chrono::Utc;
use log::debug;
use rust_decimal::Decimal;
use std::sync::Arc;

pub struct DashboardService {
    transaction_repository: Arc<dyn TransactionRepositoryTrait>,
    account_repository: Arc<dyn AccountRepositoryTrait>,
    goal_repository: Arc<dyn GoalRepositoryTrait>,
    budget_repository: Arc<dyn BudgetRepositoryTrait>,
}

impl DashboardService {
    pub fn new(
        transaction_repository: Arc<dyn TransactionRepositoryTrait>,
        account_repository: Arc<dyn AccountRepositoryTrait>,
        goal_repository: Arc<dyn GoalRepositoryTrait>,
        budget_repository: Arc<dyn BudgetRepositoryTrait>,
    ) -> Self {
        DashboardService {
            transaction_repository,
            account_repository,
            goal_repository,
            budget_repository,
        }
    }
}

#[async_trait::async_trait]
impl DashboardServiceTrait for DashboardService {
    async fn get_summary(
        &self,
        user_id: &str,
        range: Option<DateRange>,
    ) -> Result<DashboardSummary> {
        let range = DateRange::resolve(range, Utc::now().naive_utc().date());
        debug!(
            "Computing dashboard summary for period {} to {}",
            range.start, range.end
        );

        let (totals, accounts, active_goals, budgets) = tokio::try_join!(
            self.transaction_repository.get_period_totals(user_id, &range),
            self.account_repository.get_active_accounts(user_id),
            self.goal_repository.get_goals(user_id, Some(GoalStatus::Active)),
            self.budget_repository.get_budgets(user_id, true),
        )?;

        let total_balance: Decimal = accounts.iter().map(|a| a.balance).sum();

        let progress_sum: Decimal = active_goals
            .iter()
            .map(|g| clamp_percentage(safe_percentage(g.current_amount, g.target_amount)))
            .sum();
        let average_goal_progress =
            safe_divide(progress_sum, Decimal::from(active_goals.len() as i64));

        let budget_total: Decimal = budgets.iter().map(|b| b.total_amount).sum();
        let budget_executed: Decimal = budgets
            .iter()
            .flat_map(|b| b.categories.iter())
            .map(|c| c.spent_amount)
            .sum();

        Ok(DashboardSummary {
            period: range,
            total_balance: total_balance.round_dp(DISPLAY_DECIMAL_PRECISION),
            period_income: totals.income.round_dp(DISPLAY_DECIMAL_PRECISION),
            period_expense: totals.expense.round_dp(DISPLAY_DECIMAL_PRECISION),
            period_net: (totals.income - totals.expense).round_dp(DISPLAY_DECIMAL_PRECISION),
            transaction_count: totals.transaction_count,
            active_goal_count: active_goals.len() as i64,
            average_goal_progress: percentage_to_f64(average_goal_progress),
            budget_total: budget_total.round_dp(DISPLAY_DECIMAL_PRECISION),
            budget_executed: budget_executed.round_dp(DISPLAY_DECIMAL_PRECISION),
            budget_execution_percentage: percentage_to_f64(safe_percentage(
                budget_executed,
                budget_total,
            )),
        })
    }
}
