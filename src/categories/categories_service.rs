use super::categories_model::{CategoryRollup, RollupQuery, RollupSummary};
use super::categories_traits::{CategoryRepositoryTrait, CategoryRollupServiceTrait};
use super::selection::TopSelection;
use crate::constants::DISPLAY_DECIMAL_PRECISION;
use crate::errors::ValidationError;
use crate::metrics::{percentage_to_f64, safe_divide, safe_percentage, variance_percentage};
use crate::period::DateRange;
use crate::transactions::TransactionType;
use crate::Result;

use chrono::Utc;
use log::debug;
use rust_decimal::Decimal;
use std::collections::HashMap;
use std::sync::Arc;

pub struct CategoryRollupService {
    category_repository: Arc<dyn CategoryRepositoryTrait>,
}

impl CategoryRollupService {
    pub fn new(category_repository: Arc<dyn CategoryRepositoryTrait>) -> Self {
        CategoryRollupService {
            category_repository,
        }
    }
}

#[async_trait::async_trait]
impl CategoryRollupServiceTrait for CategoryRollupService {
    async fn get_rollup(
        &self,
        user_id: &str,
        range: Option<DateRange>,
        query: RollupQuery,
    ) -> Result<RollupSummary> {
        if query.transaction_type == Some(TransactionType::Transfer) {
            return Err(ValidationError::UnknownFilterValue {
                filter: "transactionType".to_string(),
                value: TransactionType::Transfer.to_string(),
            }
            .into());
        }

        let range = DateRange::resolve(range, Utc::now().naive_utc().date());
        debug!(
            "Computing category rollup for period {} to {}",
            range.start, range.end
        );

        let rows = self
            .category_repository
            .get_category_totals(
                user_id,
                &range,
                &range.preceding(),
                query.category_ids.as_deref(),
                query.transaction_type,
            )
            .await?;

        let grand_total: Decimal = rows.iter().map(|r| r.total).sum();

        let mut categories: Vec<CategoryRollup> = rows
            .into_iter()
            .map(|row| {
                let average = safe_divide(row.total, Decimal::from(row.count));
                let percentage = safe_percentage(row.total, grand_total);
                let variance = variance_percentage(row.total, row.previous_total);

                CategoryRollup {
                    category_id: row.category_id,
                    name: row.name,
                    color: row.color,
                    total: row.total.round_dp(DISPLAY_DECIMAL_PRECISION),
                    transaction_count: row.count,
                    average: average.round_dp(DISPLAY_DECIMAL_PRECISION),
                    min: row.min,
                    max: row.max,
                    percentage_of_total: percentage_to_f64(percentage),
                    previous_total: row.previous_total,
                    variance_percentage: percentage_to_f64(variance),
                }
            })
            .collect();

        query
            .selection
            .unwrap_or_else(TopSelection::all)
            .apply(&mut categories);

        let monthly = self
            .category_repository
            .get_monthly_totals(user_id, &range, query.transaction_type)
            .await?;
        let by_month: HashMap<String, Decimal> = monthly
            .into_iter()
            .map(|row| (row.month, row.total.round_dp(DISPLAY_DECIMAL_PRECISION)))
            .collect();

        Ok(RollupSummary {
            period: range,
            grand_total: grand_total.round_dp(DISPLAY_DECIMAL_PRECISION),
            categories,
            by_month,
        })
    }
}
