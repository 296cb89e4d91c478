use super::goals_model::{Goal, GoalForecast, GoalStatistics, GoalStatus, GoalUrgency};
use super::goals_traits::{GoalForecastServiceTrait, GoalRepositoryTrait};
use crate::constants::{DISPLAY_DECIMAL_PRECISION, GOAL_NEAR_DUE_DAYS};
use crate::metrics::{clamp_percentage, percentage_to_f64, safe_divide, safe_percentage};
use crate::Result;

use chrono::{NaiveDate, Utc};
use log::debug;
use rust_decimal::Decimal;
use std::sync::Arc;

pub struct GoalForecastService {
    goal_repository: Arc<dyn GoalRepositoryTrait>,
}

impl GoalForecastService {
    pub fn new(goal_repository: Arc<dyn GoalRepositoryTrait>) -> Self {
        GoalForecastService { goal_repository }
    }
}

/// Derives the forecast figures for one goal as of `today`.
///
/// Progress is clamped to [0, 100] and a zero target yields zero progress.
/// Overdue and near due can never hold at the same time: a past deadline
/// leaves no positive days remaining.
pub fn forecast_goal(goal: &Goal, today: NaiveDate) -> GoalForecast {
    let progress = clamp_percentage(safe_percentage(goal.current_amount, goal.target_amount));
    let remaining = (goal.target_amount - goal.current_amount).max(Decimal::ZERO);

    let days_remaining = goal.deadline.map(|deadline| (deadline - today).num_days());

    let required_daily_saving = match days_remaining {
        Some(days) if days > 0 => safe_divide(remaining, Decimal::from(days)),
        _ => Decimal::ZERO,
    };

    let is_overdue = goal
        .deadline
        .map(|deadline| deadline < today && !goal.is_completed())
        .unwrap_or(false);
    let is_near_due = days_remaining
        .map(|days| days > 0 && days <= GOAL_NEAR_DUE_DAYS)
        .unwrap_or(false);

    let urgency = if is_overdue {
        GoalUrgency::Overdue
    } else if is_near_due {
        GoalUrgency::NearDue
    } else {
        GoalUrgency::Normal
    };

    GoalForecast {
        goal_id: goal.id.clone(),
        name: goal.name.clone(),
        status: goal.status,
        target_amount: goal.target_amount,
        current_amount: goal.current_amount,
        progress_percentage: percentage_to_f64(progress),
        remaining_amount: remaining,
        deadline: goal.deadline,
        days_remaining,
        required_daily_saving: required_daily_saving.round_dp(DISPLAY_DECIMAL_PRECISION),
        is_overdue,
        is_near_due,
        urgency,
    }
}

#[async_trait::async_trait]
impl GoalForecastServiceTrait for GoalForecastService {
    async fn get_forecasts(
        &self,
        user_id: &str,
        status: Option<GoalStatus>,
    ) -> Result<Vec<GoalForecast>> {
        let today = Utc::now().naive_utc().date();
        let goals = self.goal_repository.get_goals(user_id, status).await?;
        Ok(goals.iter().map(|g| forecast_goal(g, today)).collect())
    }

    async fn get_forecast(&self, user_id: &str, goal_id: &str) -> Result<GoalForecast> {
        let today = Utc::now().naive_utc().date();
        let mut goal = self
            .goal_repository
            .get_goal(user_id, goal_id)
            .await?
            .ok_or_else(|| crate::Error::NotFound(format!("Goal {}", goal_id)))?;

        // The accumulated amount is recalculated from the contribution trail
        // on demand rather than trusted from a cached column.
        let contributions = self.goal_repository.get_contributions(goal_id).await?;
        goal.current_amount = contributions.iter().map(|c| c.amount).sum();
        debug!(
            "Recalculated goal {} from {} contributions",
            goal_id,
            contributions.len()
        );

        Ok(forecast_goal(&goal, today))
    }

    async fn get_statistics(&self, user_id: &str) -> Result<GoalStatistics> {
        let today = Utc::now().naive_utc().date();
        let goals = self.goal_repository.get_goals(user_id, None).await?;

        let mut stats = GoalStatistics {
            total_count: goals.len() as i64,
            active_count: 0,
            completed_count: 0,
            paused_count: 0,
            near_due_count: 0,
            total_target: Decimal::ZERO,
            total_accumulated: Decimal::ZERO,
            total_remaining: Decimal::ZERO,
            average_progress: 0.0,
            completion_percentage: 0.0,
            accumulated_percentage: 0.0,
        };

        let mut progress_sum = Decimal::ZERO;
        for goal in &goals {
            match goal.status {
                GoalStatus::Active => stats.active_count += 1,
                GoalStatus::Completed => stats.completed_count += 1,
                GoalStatus::Paused => stats.paused_count += 1,
            }

            let forecast = forecast_goal(goal, today);
            if forecast.is_near_due {
                stats.near_due_count += 1;
            }

            stats.total_target += goal.target_amount;
            stats.total_accumulated += goal.current_amount;
            stats.total_remaining += forecast.remaining_amount;
            progress_sum += clamp_percentage(safe_percentage(
                goal.current_amount,
                goal.target_amount,
            ));
        }

        stats.average_progress = percentage_to_f64(safe_divide(
            progress_sum,
            Decimal::from(stats.total_count),
        ));
        stats.completion_percentage = percentage_to_f64(safe_percentage(
            Decimal::from(stats.completed_count),
            Decimal::from(stats.total_count),
        ));
        stats.accumulated_percentage = percentage_to_f64(safe_percentage(
            stats.total_accumulated,
            stats.total_target,
        ));

        Ok(stats)
    }
}
