use super::recurring_model::{
    Frequency, Interval, RecurringRule, RecurringSchedule, ScheduleState,
};
use super::recurring_traits::{RecurringRepositoryTrait, RecurringScheduleServiceTrait};
use crate::Result;

use chrono::{Datelike, Duration, Months, NaiveDate, Utc};
use log::debug;
use std::sync::Arc;

/// Smallest occurrence `start + k * interval` that is not before `today`;
/// `start` itself when `today` has not reached it yet.
///
/// Month-granular frequencies step with calendar months, so a rule starting
/// on the 31st lands on the last day of shorter months.
pub fn next_occurrence(frequency: Frequency, start: NaiveDate, today: NaiveDate) -> NaiveDate {
    if today <= start {
        return start;
    }

    match frequency.interval() {
        Interval::Days(step) => {
            let elapsed = (today - start).num_days();
            let k = (elapsed + step - 1) / step;
            start + Duration::days(k * step)
        }
        Interval::Months(step) => {
            let elapsed_months =
                (today.year() - start.year()) as i64 * 12 + today.month() as i64
                    - start.month() as i64;
            let mut k = (elapsed_months / step as i64).saturating_sub(1).max(0) as u32;
            loop {
                let candidate = start
                    .checked_add_months(Months::new(k * step))
                    .unwrap_or(start);
                if candidate >= today {
                    return candidate;
                }
                k += 1;
            }
        }
    }
}

/// Computes the lifecycle state and next execution of one rule as of `today`.
///
/// The computed date always lies within `[start, end]` while the rule is
/// alive; once it would pass `end`, or the rule is deactivated, the state is
/// `Finished` and no date is reported.
pub fn schedule_rule(rule: &RecurringRule, today: NaiveDate) -> RecurringSchedule {
    let (next_execution, state) = if !rule.is_active {
        (None, ScheduleState::Finished)
    } else {
        let next = next_occurrence(rule.frequency, rule.start_date, today);
        match rule.end_date {
            Some(end) if next > end => (None, ScheduleState::Finished),
            _ => {
                let materialized = rule.last_materialized == Some(next);
                if next <= today && !materialized {
                    (Some(next), ScheduleState::Pending)
                } else {
                    (Some(next), ScheduleState::Scheduled)
                }
            }
        }
    };

    RecurringSchedule {
        rule_id: rule.id.clone(),
        description: rule.description.clone(),
        amount: rule.amount,
        transaction_type: rule.transaction_type,
        frequency: rule.frequency,
        next_execution,
        state,
    }
}

pub struct RecurringScheduleService {
    recurring_repository: Arc<dyn RecurringRepositoryTrait>,
}

impl RecurringScheduleService {
    pub fn new(recurring_repository: Arc<dyn RecurringRepositoryTrait>) -> Self {
        RecurringScheduleService {
            recurring_repository,
        }
    }
}

#[async_trait::async_trait]
impl RecurringScheduleServiceTrait for RecurringScheduleService {
    async fn get_schedules(&self, user_id: &str) -> Result<Vec<RecurringSchedule>> {
        let today = Utc::now().naive_utc().date();
        let rules = self.recurring_repository.get_rules(user_id).await?;
        Ok(rules.iter().map(|rule| schedule_rule(rule, today)).collect())
    }

    async fn advance_after_materialization(
        &self,
        user_id: &str,
        rule_id: &str,
        materialized_date: NaiveDate,
    ) -> Result<RecurringSchedule> {
        let mut rule = self
            .recurring_repository
            .get_rule(user_id, rule_id)
            .await?
            .ok_or_else(|| crate::Error::NotFound(format!("Recurring rule {}", rule_id)))?;

        rule.last_materialized = Some(materialized_date);
        let day_after = materialized_date + Duration::days(1);
        let schedule = schedule_rule(&rule, day_after);

        debug!(
            "Advancing rule {} after materialization on {}: next {:?}",
            rule_id, materialized_date, schedule.next_execution
        );
        self.recurring_repository
            .update_next_execution(rule_id, schedule.next_execution)
            .await?;

        Ok(schedule)
    }
}
