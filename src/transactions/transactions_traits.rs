use super::transactions_model::{PeriodTotals, Transaction};
use crate::period::DateRange;
use crate::Result;

/// Trait defining the contract for transaction row retrieval.
///
/// Implemented by the Data Access Gateway; totals arrive pre-aggregated by
/// the stored procedures it fronts.
#[async_trait::async_trait]
pub trait TransactionRepositoryTrait: Send + Sync {
    /// Income/expense totals and transaction count for one user and period.
    async fn get_period_totals(&self, user_id: &str, range: &DateRange) -> Result<PeriodTotals>;

    /// Transactions linked to one category within a period.
    ///
    /// Used by the budget spent-amount recomputation, which re-sums the
    /// expense rows itself.
    async fn get_category_transactions(
        &self,
        user_id: &str,
        category_id: &str,
        range: &DateRange,
    ) -> Result<Vec<Transaction>>;
}
