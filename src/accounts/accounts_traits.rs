use super::accounts_model::{Account, AccountBalanceRow, PortfolioOverview};
use crate::period::DateRange;
use crate::Result;

/// Trait defining the contract for account row retrieval
#[async_trait::async_trait]
pub trait AccountRepositoryTrait: Send + Sync {
    async fn get_active_accounts(&self, user_id: &str) -> Result<Vec<Account>>;

    /// Balance rows carrying the period-start balance for trend analysis.
    async fn get_balance_rows(
        &self,
        user_id: &str,
        range: &DateRange,
    ) -> Result<Vec<AccountBalanceRow>>;
}

/// Trait defining the contract for the account balance trend engine
#[async_trait::async_trait]
pub trait AccountTrendServiceTrait: Send + Sync {
    async fn get_portfolio_overview(
        &self,
        user_id: &str,
        range: Option<DateRange>,
    ) -> Result<PortfolioOverview>;
}
