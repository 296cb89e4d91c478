use super::categories_model::{CategoryTotalsRow, MonthlyTotalRow, RollupQuery, RollupSummary};
use crate::period::DateRange;
use crate::transactions::TransactionType;
use crate::Result;

/// Trait defining the contract for category row retrieval
#[async_trait::async_trait]
pub trait CategoryRepositoryTrait: Send + Sync {
    /// Pre-grouped per-category totals for `range`, with each row also
    /// carrying the category total for `previous_range` (the immediately
    /// preceding equal-length period, computed by the caller).
    async fn get_category_totals(
        &self,
        user_id: &str,
        range: &DateRange,
        previous_range: &DateRange,
        category_ids: Option<&[String]>,
        transaction_type: Option<TransactionType>,
    ) -> Result<Vec<CategoryTotalsRow>>;

    /// Month-keyed totals across the period for chart series.
    async fn get_monthly_totals(
        &self,
        user_id: &str,
        range: &DateRange,
        transaction_type: Option<TransactionType>,
    ) -> Result<Vec<MonthlyTotalRow>>;
}

/// Trait defining the contract for the category rollup engine
#[async_trait::async_trait]
pub trait CategoryRollupServiceTrait: Send + Sync {
    async fn get_rollup(
        &self,
        user_id: &str,
        range: Option<DateRange>,
        query: RollupQuery,
    ) -> Result<RollupSummary>;
}
