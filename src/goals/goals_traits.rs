use super::goals_model::{Contribution, Goal, GoalForecast, GoalStatistics, GoalStatus};
use crate::Result;

/// Trait defining the contract for goal row retrieval
#[async_trait::async_trait]
pub trait GoalRepositoryTrait: Send + Sync {
    async fn get_goals(&self, user_id: &str, status: Option<GoalStatus>) -> Result<Vec<Goal>>;
    async fn get_goal(&self, user_id: &str, goal_id: &str) -> Result<Option<Goal>>;
    async fn get_contributions(&self, goal_id: &str) -> Result<Vec<Contribution>>;
}

/// Trait defining the contract for the goal forecast engine
#[async_trait::async_trait]
pub trait GoalForecastServiceTrait: Send + Sync {
    async fn get_forecasts(
        &self,
        user_id: &str,
        status: Option<GoalStatus>,
    ) -> Result<Vec<GoalForecast>>;

    async fn get_forecast(&self, user_id: &str, goal_id: &str) -> Result<GoalForecast>;

    async fn get_statistics(&self, user_id: &str) -> Result<GoalStatistics>;
}
