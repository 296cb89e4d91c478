use super::accounts_model::{AccountTrend, PortfolioOverview, Trend};
use super::accounts_traits::{AccountRepositoryTrait, AccountTrendServiceTrait};
use crate::metrics::{percentage_to_f64, variance_percentage};
use crate::period::DateRange;
use crate::Result;

use chrono::Utc;
use log::debug;
use rust_decimal::Decimal;
use std::sync::Arc;

pub struct AccountTrendService {
    account_repository: Arc<dyn AccountRepositoryTrait>,
}

impl AccountTrendService {
    pub fn new(account_repository: Arc<dyn AccountRepositoryTrait>) -> Self {
        AccountTrendService { account_repository }
    }
}

#[async_trait::async_trait]
impl AccountTrendServiceTrait for AccountTrendService {
    async fn get_portfolio_overview(
        &self,
        user_id: &str,
        range: Option<DateRange>,
    ) -> Result<PortfolioOverview> {
        let range = DateRange::resolve(range, Utc::now().naive_utc().date());
        debug!(
            "Computing portfolio overview for period {} to {}",
            range.start, range.end
        );

        let rows = self.account_repository.get_balance_rows(user_id, &range).await?;

        let mut net_worth = Decimal::ZERO;
        let mut total_period_movement = Decimal::ZERO;
        let mut accounts = Vec::with_capacity(rows.len());

        for row in rows {
            let period_variance = row.current_balance - row.period_start_balance;
            let variance_pct =
                variance_percentage(row.current_balance, row.period_start_balance);

            net_worth += row.current_balance;
            total_period_movement += period_variance;

            accounts.push(AccountTrend {
                account_id: row.account_id,
                name: row.name,
                currency: row.currency,
                current_balance: row.current_balance,
                period_start_balance: row.period_start_balance,
                period_variance,
                variance_percentage: percentage_to_f64(variance_pct),
                trend: Trend::from_variance(period_variance),
            });
        }

        Ok(PortfolioOverview {
            net_worth,
            total_period_movement,
            accounts,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::accounts::accounts_model::{Account, AccountBalanceRow};
    use crate::errors::DataSourceError;
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;

    struct MockAccountRepository {
        rows: Vec<AccountBalanceRow>,
        fail: bool,
    }

    #[async_trait::async_trait]
    impl AccountRepositoryTrait for MockAccountRepository {
        async fn get_active_accounts(&self, _user_id: &str) -> Result<Vec<Account>> {
            Ok(Vec::new())
        }

        async fn get_balance_rows(
            &self,
            _user_id: &str,
            _range: &DateRange,
        ) -> Result<Vec<AccountBalanceRow>> {
            if self.fail {
                return Err(DataSourceError::Unavailable("connection lost".to_string()).into());
            }
            Ok(self.rows.clone())
        }
    }

    fn row(id: &str, current: Decimal, start: Decimal) -> AccountBalanceRow {
        AccountBalanceRow {
            account_id: id.to_string(),
            name: format!("Account {}", id),
            currency: "EUR".to_string(),
            current_balance: current,
            period_start_balance: start,
        }
    }

    fn test_range() -> Option<DateRange> {
        Some(
            DateRange::new(
                NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
                NaiveDate::from_ymd_opt(2024, 3, 31).unwrap(),
            )
            .unwrap(),
        )
    }

    #[tokio::test]
    async fn classifies_trends_and_guards_zero_start_balance() {
        let repo = MockAccountRepository {
            rows: vec![
                row("a", dec!(500), dec!(0)),
                row("b", dec!(900), dec!(1000)),
                row("c", dec!(250), dec!(250)),
            ],
            fail: false,
        };
        let service = AccountTrendService::new(Arc::new(repo));

        let overview = service.get_portfolio_overview("user-1", test_range()).await.unwrap();

        let a = &overview.accounts[0];
        assert_eq!(a.trend, Trend::Positive);
        assert_eq!(a.variance_percentage, 0.0);
        assert_eq!(a.period_variance, dec!(500));

        let b = &overview.accounts[1];
        assert_eq!(b.trend, Trend::Negative);
        assert_eq!(b.variance_percentage, -10.0);

        let c = &overview.accounts[2];
        assert_eq!(c.trend, Trend::Stable);
        assert_eq!(c.period_variance, dec!(0));
    }

    #[tokio::test]
    async fn portfolio_totals_are_summed_over_all_accounts() {
        let repo = MockAccountRepository {
            rows: vec![row("a", dec!(100), dec!(50)), row("b", dec!(-40), dec!(-10))],
            fail: false,
        };
        let service = AccountTrendService::new(Arc::new(repo));

        let overview = service.get_portfolio_overview("user-1", test_range()).await.unwrap();
        assert_eq!(overview.net_worth, dec!(60));
        assert_eq!(overview.total_period_movement, dec!(20));
    }

    #[tokio::test]
    async fn gateway_failure_is_surfaced_not_zeroed() {
        let repo = MockAccountRepository { rows: vec![], fail: true };
        let service = AccountTrendService::new(Arc::new(repo));

        let result = service.get_portfolio_overview("user-1", test_range()).await;
        assert!(matches!(result, Err(crate::Error::DataSource(_))));
    }
}
