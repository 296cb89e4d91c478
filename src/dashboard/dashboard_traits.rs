use super::dashboard_model::DashboardSummary;
use crate::period::DateRange;
use crate::Result;

/// Trait defining the contract for the dashboard KPI aggregator
#[async_trait::async_trait]
pub trait DashboardServiceTrait: Send + Sync {
    async fn get_summary(
        &self,
        user_id: &str,
        range: Option<DateRange>,
    ) -> Result<DashboardSummary>;
}
