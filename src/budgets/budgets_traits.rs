use super::budgets_model::{Budget, BudgetUtilization, CategoryAssignment};
use crate::Result;
use rust_decimal::Decimal;

/// Trait defining the contract for budget row retrieval and write-back
#[async_trait::async_trait]
pub trait BudgetRepositoryTrait: Send + Sync {
    async fn get_budgets(&self, user_id: &str, only_active: bool) -> Result<Vec<Budget>>;

    async fn get_budget(&self, user_id: &str, budget_id: &str) -> Result<Option<Budget>>;

    /// Writes a new total and the complete assignment vector for one budget.
    ///
    /// The gateway must apply this under a single transaction scoped to the
    /// budget: either every category is updated or none is.
    async fn apply_assignments(
        &self,
        budget_id: &str,
        new_total: Decimal,
        assignments: &[CategoryAssignment],
    ) -> Result<()>;

    /// Overwrites the cached spent total of one budget category.
    async fn update_spent_amount(&self, budget_category_id: &str, spent: Decimal) -> Result<()>;
}

/// Trait defining the contract for the budget utilization engine
#[async_trait::async_trait]
pub trait BudgetServiceTrait: Send + Sync {
    async fn get_utilizations(&self, user_id: &str) -> Result<Vec<BudgetUtilization>>;

    async fn get_utilization(&self, user_id: &str, budget_id: &str) -> Result<BudgetUtilization>;

    /// Recomputes every category's assigned amount for a new budget total,
    /// preserving relative weights, and applies the result atomically.
    async fn redistribute(
        &self,
        user_id: &str,
        budget_id: &str,
        new_total: Option<Decimal>,
    ) -> Result<Vec<CategoryAssignment>>;

    /// Re-sums the expense transactions linked to one budget category within
    /// the budget period and writes the total back.
    ///
    /// Invoked by the embedding application after any linked transaction is
    /// created, updated or deleted; never triggered from inside this engine.
    async fn recompute_spent(
        &self,
        user_id: &str,
        budget_id: &str,
        budget_category_id: &str,
    ) -> Result<Decimal>;
}
