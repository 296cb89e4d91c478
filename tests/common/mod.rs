use async_trait::async_trait;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use centavo_core::accounts::{Account, AccountBalanceRow, AccountRepositoryTrait};
use centavo_core::budgets::{Budget, BudgetCategory, BudgetRepositoryTrait, CategoryAssignment};
use centavo_core::categories::{CategoryRepositoryTrait, CategoryTotalsRow, MonthlyTotalRow};
use centavo_core::goals::{Contribution, Goal, GoalRepositoryTrait, GoalStatus};
use centavo_core::recurring::{Frequency, RecurringRepositoryTrait, RecurringRule};
use centavo_core::transactions::{
    PeriodTotals, Transaction, TransactionRepositoryTrait, TransactionType,
};
use centavo_core::{DateRange, Result};

pub const TEST_USER: &str = "user-1";

pub fn march_2024() -> DateRange {
    DateRange::new(
        NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
        NaiveDate::from_ymd_opt(2024, 3, 31).unwrap(),
    )
    .unwrap()
}

/// In-memory stand-in for the Data Access Gateway, shared by the
/// integration tests.
#[derive(Default)]
pub struct InMemoryGateway {
    pub period_totals: PeriodTotals,
    pub transactions: Vec<Transaction>,
    pub accounts: Vec<Account>,
    pub balance_rows: Vec<AccountBalanceRow>,
    pub category_rows: Vec<CategoryTotalsRow>,
    pub monthly_rows: Vec<MonthlyTotalRow>,
    pub goals: Vec<Goal>,
    pub contributions: Vec<Contribution>,
    pub budgets: Vec<Budget>,
    pub rules: Vec<RecurringRule>,
}

#[async_trait]
impl TransactionRepositoryTrait for InMemoryGateway {
    async fn get_period_totals(&self, _user_id: &str, _range: &DateRange) -> Result<PeriodTotals> {
        Ok(self.period_totals.clone())
    }

    async fn get_category_transactions(
        &self,
        _user_id: &str,
        category_id: &str,
        range: &DateRange,
    ) -> Result<Vec<Transaction>> {
        Ok(self
            .transactions
            .iter()
            .filter(|t| t.category_id.as_deref() == Some(category_id))
            .filter(|t| range.contains(t.date.date()))
            .cloned()
            .collect())
    }
}

#[async_trait]
impl AccountRepositoryTrait for InMemoryGateway {
    async fn get_active_accounts(&self, _user_id: &str) -> Result<Vec<Account>> {
        Ok(self.accounts.iter().filter(|a| a.is_active).cloned().collect())
    }

    async fn get_balance_rows(
        &self,
        _user_id: &str,
        _range: &DateRange,
    ) -> Result<Vec<AccountBalanceRow>> {
        Ok(self.balance_rows.clone())
    }
}

#[async_trait]
impl CategoryRepositoryTrait for InMemoryGateway {
    async fn get_category_totals(
        &self,
        _user_id: &str,
        _range: &DateRange,
        _previous_range: &DateRange,
        category_ids: Option<&[String]>,
        _transaction_type: Option<TransactionType>,
    ) -> Result<Vec<CategoryTotalsRow>> {
        Ok(match category_ids {
            Some(ids) => self
                .category_rows
                .iter()
                .filter(|r| ids.contains(&r.category_id))
                .cloned()
                .collect(),
            None => self.category_rows.clone(),
        })
    }

    async fn get_monthly_totals(
        &self,
        _user_id: &str,
        _range: &DateRange,
        _transaction_type: Option<TransactionType>,
    ) -> Result<Vec<MonthlyTotalRow>> {
        Ok(self.monthly_rows.clone())
    }
}

#[async_trait]
impl GoalRepositoryTrait for InMemoryGateway {
    async fn get_goals(&self, _user_id: &str, status: Option<GoalStatus>) -> Result<Vec<Goal>> {
        Ok(self
            .goals
            .iter()
            .filter(|g| status.map(|s| g.status == s).unwrap_or(true))
            .cloned()
            .collect())
    }

    async fn get_goal(&self, _user_id: &str, goal_id: &str) -> Result<Option<Goal>> {
        Ok(self.goals.iter().find(|g| g.id == goal_id).cloned())
    }

    async fn get_contributions(&self, goal_id: &str) -> Result<Vec<Contribution>> {
        Ok(self
            .contributions
            .iter()
            .filter(|c| c.goal_id == goal_id)
            .cloned()
            .collect())
    }
}

#[async_trait]
impl BudgetRepositoryTrait for InMemoryGateway {
    async fn get_budgets(&self, _user_id: &str, only_active: bool) -> Result<Vec<Budget>> {
        Ok(self
            .budgets
            .iter()
            .filter(|b| !only_active || b.is_active)
            .cloned()
            .collect())
    }

    async fn get_budget(&self, _user_id: &str, budget_id: &str) -> Result<Option<Budget>> {
        Ok(self.budgets.iter().find(|b| b.id == budget_id).cloned())
    }

    async fn apply_assignments(
        &self,
        _budget_id: &str,
        _new_total: Decimal,
        _assignments: &[CategoryAssignment],
    ) -> Result<()> {
        Ok(())
    }

    async fn update_spent_amount(&self, _budget_category_id: &str, _spent: Decimal) -> Result<()> {
        Ok(())
    }
}

#[async_trait]
impl RecurringRepositoryTrait for InMemoryGateway {
    async fn get_rules(&self, _user_id: &str) -> Result<Vec<RecurringRule>> {
        Ok(self.rules.clone())
    }

    async fn get_rule(&self, _user_id: &str, rule_id: &str) -> Result<Option<RecurringRule>> {
        Ok(self.rules.iter().find(|r| r.id == rule_id).cloned())
    }

    async fn update_next_execution(
        &self,
        _rule_id: &str,
        _next_execution: Option<NaiveDate>,
    ) -> Result<()> {
        Ok(())
    }
}

/// A small but fully populated household: two accounts, three expense
/// categories, two goals, one budget and one recurring rule.
pub fn seeded_gateway() -> InMemoryGateway {
    let category_row = |id: &str, name: &str, total: Decimal, count: i64| CategoryTotalsRow {
        category_id: id.to_string(),
        name: name.to_string(),
        color: None,
        total,
        count,
        min: total,
        max: total,
        previous_total: Decimal::ZERO,
    };

    let expense = |id: &str, category: &str, amount: Decimal, day: u32| Transaction {
        id: id.to_string(),
        account_id: "a1".to_string(),
        category_id: Some(category.to_string()),
        amount,
        transaction_type: TransactionType::Expense,
        date: NaiveDate::from_ymd_opt(2024, 3, day)
            .unwrap()
            .and_hms_opt(10, 0, 0)
            .unwrap(),
        is_reconciled: true,
    };

    InMemoryGateway {
        period_totals: PeriodTotals {
            income: dec!(3200),
            expense: dec!(2100),
            transaction_count: 37,
        },
        transactions: vec![
            expense("t1", "c1", dec!(250), 5),
            expense("t2", "c1", dec!(140), 19),
        ],
        accounts: vec![
            Account {
                id: "a1".to_string(),
                name: "Checking".to_string(),
                account_type: "CHECKING".to_string(),
                currency: "EUR".to_string(),
                balance: dec!(2500),
                is_active: true,
            },
            Account {
                id: "a2".to_string(),
                name: "Savings".to_string(),
                account_type: "SAVINGS".to_string(),
                currency: "EUR".to_string(),
                balance: dec!(7500),
                is_active: true,
            },
        ],
        balance_rows: vec![
            AccountBalanceRow {
                account_id: "a1".to_string(),
                name: "Checking".to_string(),
                currency: "EUR".to_string(),
                current_balance: dec!(2500),
                period_start_balance: dec!(2000),
            },
            AccountBalanceRow {
                account_id: "a2".to_string(),
                name: "Savings".to_string(),
                currency: "EUR".to_string(),
                current_balance: dec!(7500),
                period_start_balance: dec!(7500),
            },
        ],
        category_rows: vec![
            category_row("c1", "Groceries", dec!(100), 4),
            category_row("c2", "Rent", dec!(200), 1),
            category_row("c3", "Leisure", dec!(200), 6),
        ],
        monthly_rows: vec![MonthlyTotalRow {
            month: "2024-03".to_string(),
            total: dec!(500),
        }],
        goals: vec![
            Goal {
                id: "g1".to_string(),
                name: "Emergency fund".to_string(),
                target_amount: dec!(5000),
                current_amount: dec!(2500),
                deadline: NaiveDate::from_ymd_opt(2024, 12, 31),
                status: GoalStatus::Active,
            },
            Goal {
                id: "g2".to_string(),
                name: "New bike".to_string(),
                target_amount: dec!(800),
                current_amount: dec!(800),
                deadline: None,
                status: GoalStatus::Completed,
            },
        ],
        contributions: vec![],
        budgets: vec![Budget {
            id: "b1".to_string(),
            name: "March budget".to_string(),
            period_start: NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
            period_end: NaiveDate::from_ymd_opt(2024, 3, 31).unwrap(),
            total_amount: dec!(2400),
            is_active: true,
            categories: vec![
                BudgetCategory {
                    id: "bc1".to_string(),
                    category_id: "c1".to_string(),
                    name: "Groceries".to_string(),
                    assigned_amount: dec!(400),
                    spent_amount: dec!(390),
                },
                BudgetCategory {
                    id: "bc2".to_string(),
                    category_id: "c2".to_string(),
                    name: "Rent".to_string(),
                    assigned_amount: dec!(2000),
                    spent_amount: dec!(810),
                },
            ],
        }],
        rules: vec![RecurringRule {
            id: "r1".to_string(),
            description: "Internet".to_string(),
            account_id: "a1".to_string(),
            category_id: Some("c3".to_string()),
            transaction_type: TransactionType::Expense,
            amount: dec!(40),
            frequency: Frequency::Monthly,
            start_date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            end_date: None,
            is_active: true,
            last_materialized: Some(NaiveDate::from_ymd_opt(2024, 3, 1).unwrap()),
        }],
    }
}
