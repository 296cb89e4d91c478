use super::reports_model::ExecutiveReport;
use super::reports_traits::ReportServiceTrait;
use crate::accounts::AccountTrendServiceTrait;
use crate::budgets::BudgetServiceTrait;
use crate::categories::{CategoryRollupServiceTrait, RollupQuery, TopSelection};
use crate::constants::DEFAULT_TOP_CATEGORIES;
use crate::dashboard::DashboardServiceTrait;
use crate::goals::GoalForecastServiceTrait;
use crate::period::DateRange;
use crate::recurring::{RecurringScheduleServiceTrait, ScheduleState};
use crate::transactions::TransactionType;
use crate::Result;

use chrono::Utc;
use log::debug;
use std::sync::Arc;

pub struct ReportService {
    dashboard_service: Arc<dyn DashboardServiceTrait>,
    rollup_service: Arc<dyn CategoryRollupServiceTrait>,
    goal_service: Arc<dyn GoalForecastServiceTrait>,
    budget_service: Arc<dyn BudgetServiceTrait>,
    trend_service: Arc<dyn AccountTrendServiceTrait>,
    recurring_service: Arc<dyn RecurringScheduleServiceTrait>,
}

impl ReportService {
    pub fn new(
        dashboard_service: Arc<dyn DashboardServiceTrait>,
        rollup_service: Arc<dyn CategoryRollupServiceTrait>,
        goal_service: Arc<dyn GoalForecastServiceTrait>,
        budget_service: Arc<dyn BudgetServiceTrait>,
        trend_service: Arc<dyn AccountTrendServiceTrait>,
        recurring_service: Arc<dyn RecurringScheduleServiceTrait>,
    ) -> Self {
        ReportService {
            dashboard_service,
            rollup_service,
            goal_service,
            budget_service,
            trend_service,
            recurring_service,
        }
    }
}

#[async_trait::async_trait]
impl ReportServiceTrait for ReportService {
    /// Fans out to the independent aggregators concurrently and joins the
    /// sections fail-fast: the first section error aborts the whole report.
    /// Dropping the returned future cancels all in-flight section work, which
    /// is how callers abandon a report request.
    async fn get_executive_report(
        &self,
        user_id: &str,
        range: Option<DateRange>,
    ) -> Result<ExecutiveReport> {
        let range = DateRange::resolve(range, Utc::now().naive_utc().date());
        debug!(
            "Composing executive report for period {} to {}",
            range.start, range.end
        );

        let expense_rollup = RollupQuery {
            transaction_type: Some(TransactionType::Expense),
            selection: Some(TopSelection::top(DEFAULT_TOP_CATEGORIES)),
            ..Default::default()
        };

        let (dashboard, top_expense_categories, goal_statistics, budgets, portfolio, schedules) =
            tokio::try_join!(
                self.dashboard_service.get_summary(user_id, Some(range)),
                self.rollup_service
                    .get_rollup(user_id, Some(range), expense_rollup),
                self.goal_service.get_statistics(user_id),
                self.budget_service.get_utilizations(user_id),
                self.trend_service.get_portfolio_overview(user_id, Some(range)),
                self.recurring_service.get_schedules(user_id),
            )?;

        let mut upcoming_recurring: Vec<_> = schedules
            .into_iter()
            .filter(|s| s.state != ScheduleState::Finished)
            .collect();
        upcoming_recurring.sort_by_key(|s| s.next_execution);

        Ok(ExecutiveReport {
            period: range,
            dashboard,
            top_expense_categories,
            goal_statistics,
            budgets,
            portfolio,
            upcoming_recurring,
        })
    }
}
