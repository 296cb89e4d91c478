use super::recurring_model::{RecurringRule, RecurringSchedule};
use crate::Result;
use chrono::NaiveDate;

/// Trait defining the contract for recurring rule retrieval and write-back
#[async_trait::async_trait]
pub trait RecurringRepositoryTrait: Send + Sync {
    async fn get_rules(&self, user_id: &str) -> Result<Vec<RecurringRule>>;

    async fn get_rule(&self, user_id: &str, rule_id: &str) -> Result<Option<RecurringRule>>;

    /// Stores the advanced next-execution date, or deactivates the rule when
    /// `next_execution` is `None` (the schedule ran past its end date).
    async fn update_next_execution(
        &self,
        rule_id: &str,
        next_execution: Option<NaiveDate>,
    ) -> Result<()>;
}

/// Trait defining the contract for the recurring transaction scheduler
#[async_trait::async_trait]
pub trait RecurringScheduleServiceTrait: Send + Sync {
    async fn get_schedules(&self, user_id: &str) -> Result<Vec<RecurringSchedule>>;

    /// Advances a rule after the external batch materialized a transaction
    /// for `materialized_date`, persisting the new next-execution date.
    async fn advance_after_materialization(
        &self,
        user_id: &str,
        rule_id: &str,
        materialized_date: NaiveDate,
    ) -> Result<RecurringSchedule>;
}
