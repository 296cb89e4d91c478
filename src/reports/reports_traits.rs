use super::reports_model::ExecutiveReport;
use crate::period::DateRange;
use crate::Result;

/// Trait defining the contract for the report composer
#[async_trait::async_trait]
pub trait ReportServiceTrait: Send + Sync {
    async fn get_executive_report(
        &self,
        user_id: &str,
        range: Option<DateRange>,
    ) -> Result<ExecutiveReport>;
}
