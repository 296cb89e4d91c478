use super::budgets_model::{
    Budget, BudgetCategory, BudgetCategoryStatus, BudgetCategoryUtilization, BudgetUtilization,
    CategoryAssignment,
};
use super::budgets_traits::{BudgetRepositoryTrait, BudgetServiceTrait};
use crate::constants::{BUDGET_WARNING_THRESHOLD, DISPLAY_DECIMAL_PRECISION};
use crate::metrics::{percentage_to_f64, safe_percentage};
use crate::period::DateRange;
use crate::transactions::{TransactionRepositoryTrait, TransactionType};
use crate::Result;

use log::{debug, warn};
use num_traits::Zero;
use rust_decimal::Decimal;
use std::sync::Arc;

pub struct BudgetService {
    budget_repository: Arc<dyn BudgetRepositoryTrait>,
    transaction_repository: Arc<dyn TransactionRepositoryTrait>,
}

impl BudgetService {
    pub fn new(
        budget_repository: Arc<dyn BudgetRepositoryTrait>,
        transaction_repository: Arc<dyn TransactionRepositoryTrait>,
    ) -> Self {
        BudgetService {
            budget_repository,
            transaction_repository,
        }
    }

    async fn load_budget(&self, user_id: &str, budget_id: &str) -> Result<Budget> {
        self.budget_repository
            .get_budget(user_id, budget_id)
            .await?
            .ok_or_else(|| crate::Error::NotFound(format!("Budget {}", budget_id)))
    }
}

fn classify_category(category: &BudgetCategory) -> (Decimal, BudgetCategoryStatus) {
    let spent_pct = safe_percentage(category.spent_amount, category.assigned_amount);
    let status = if category.spent_amount > category.assigned_amount {
        BudgetCategoryStatus::Exceeded
    } else if spent_pct >= BUDGET_WARNING_THRESHOLD {
        BudgetCategoryStatus::Warning
    } else {
        BudgetCategoryStatus::Normal
    };
    (spent_pct, status)
}

fn utilization_of(budget: &Budget) -> BudgetUtilization {
    let assigned_sum: Decimal = budget.categories.iter().map(|c| c.assigned_amount).sum();
    if assigned_sum > budget.total_amount {
        warn!(
            "Budget {} assigns {} over its total of {}",
            budget.id, assigned_sum, budget.total_amount
        );
    }

    let executed_amount: Decimal = budget.categories.iter().map(|c| c.spent_amount).sum();

    let categories = budget
        .categories
        .iter()
        .map(|category| {
            let (spent_pct, status) = classify_category(category);
            BudgetCategoryUtilization {
                id: category.id.clone(),
                category_id: category.category_id.clone(),
                name: category.name.clone(),
                assigned_amount: category.assigned_amount,
                spent_amount: category.spent_amount,
                remaining_amount: category.assigned_amount - category.spent_amount,
                spent_percentage: percentage_to_f64(spent_pct),
                status,
            }
        })
        .collect();

    BudgetUtilization {
        budget_id: budget.id.clone(),
        name: budget.name.clone(),
        period_start: budget.period_start,
        period_end: budget.period_end,
        total_amount: budget.total_amount,
        executed_amount: executed_amount.round_dp(DISPLAY_DECIMAL_PRECISION),
        execution_percentage: percentage_to_f64(safe_percentage(
            executed_amount,
            budget.total_amount,
        )),
        categories,
    }
}

/// Recomputes each category's assigned amount for `new_total`, preserving the
/// relative weight each category had in the old assignments. A zero current
/// total splits the new total evenly. The last share absorbs the rounding
/// residue so the assignments always sum exactly to the new total.
fn redistribute_assignments(
    categories: &[BudgetCategory],
    new_total: Decimal,
) -> Vec<CategoryAssignment> {
    if categories.is_empty() {
        return Vec::new();
    }

    let current_total: Decimal = categories.iter().map(|c| c.assigned_amount).sum();
    let count = Decimal::from(categories.len() as i64);

    let mut assignments = Vec::with_capacity(categories.len());
    let mut allocated = Decimal::ZERO;

    for (index, category) in categories.iter().enumerate() {
        let amount = if index == categories.len() - 1 {
            new_total - allocated
        } else if current_total.is_zero() {
            (new_total / count).round_dp(DISPLAY_DECIMAL_PRECISION)
        } else {
            (new_total * category.assigned_amount / current_total)
                .round_dp(DISPLAY_DECIMAL_PRECISION)
        };
        allocated += amount;
        assignments.push(CategoryAssignment {
            budget_category_id: category.id.clone(),
            assigned_amount: amount,
        });
    }

    assignments
}

#[async_trait::async_trait]
impl BudgetServiceTrait for BudgetService {
    async fn get_utilizations(&self, user_id: &str) -> Result<Vec<BudgetUtilization>> {
        let budgets = self.budget_repository.get_budgets(user_id, true).await?;
        Ok(budgets.iter().map(utilization_of).collect())
    }

    async fn get_utilization(&self, user_id: &str, budget_id: &str) -> Result<BudgetUtilization> {
        let budget = self.load_budget(user_id, budget_id).await?;
        Ok(utilization_of(&budget))
    }

    async fn redistribute(
        &self,
        user_id: &str,
        budget_id: &str,
        new_total: Option<Decimal>,
    ) -> Result<Vec<CategoryAssignment>> {
        let budget = self.load_budget(user_id, budget_id).await?;
        let new_total = new_total.unwrap_or(budget.total_amount);

        let assignments = redistribute_assignments(&budget.categories, new_total);
        debug!(
            "Redistributing budget {} to total {} across {} categories",
            budget_id,
            new_total,
            assignments.len()
        );

        self.budget_repository
            .apply_assignments(budget_id, new_total, &assignments)
            .await?;

        Ok(assignments)
    }

    async fn recompute_spent(
        &self,
        user_id: &str,
        budget_id: &str,
        budget_category_id: &str,
    ) -> Result<Decimal> {
        let budget = self.load_budget(user_id, budget_id).await?;
        let category = budget
            .categories
            .iter()
            .find(|c| c.id == budget_category_id)
            .ok_or_else(|| {
                crate::Error::NotFound(format!("Budget category {}", budget_category_id))
            })?;

        let period = DateRange::new(budget.period_start, budget.period_end)?;
        let transactions = self
            .transaction_repository
            .get_category_transactions(user_id, &category.category_id, &period)
            .await?;
        let spent: Decimal = transactions
            .iter()
            .filter(|t| t.transaction_type == TransactionType::Expense)
            .map(|t| t.amount)
            .sum();

        self.budget_repository
            .update_spent_amount(budget_category_id, spent)
            .await?;

        Ok(spent)
    }
}
