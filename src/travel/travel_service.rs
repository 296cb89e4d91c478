use super::travel_model::TripSummary;
use super::travel_traits::{TravelExpenseServiceTrait, TravelRepositoryTrait};
use crate::constants::DISPLAY_DECIMAL_PRECISION;
use crate::metrics::safe_divide;
use crate::Result;

use log::debug;
use rust_decimal::Decimal;
use std::collections::HashMap;
use std::sync::Arc;

pub struct TravelExpenseService {
    travel_repository: Arc<dyn TravelRepositoryTrait>,
}

impl TravelExpenseService {
    pub fn new(travel_repository: Arc<dyn TravelRepositoryTrait>) -> Self {
        TravelExpenseService { travel_repository }
    }
}

#[async_trait::async_trait]
impl TravelExpenseServiceTrait for TravelExpenseService {
    async fn get_trip_summary(&self, user_id: &str, trip_id: &str) -> Result<TripSummary> {
        let trip = self
            .travel_repository
            .get_trip(user_id, trip_id)
            .await?
            .ok_or_else(|| crate::Error::NotFound(format!("Trip {}", trip_id)))?;

        let expenses = self
            .travel_repository
            .get_trip_expenses(user_id, trip_id)
            .await?;
        debug!("Summarizing {} expenses for trip {}", expenses.len(), trip_id);

        let mut total_local = Decimal::ZERO;
        let mut by_currency: HashMap<String, Decimal> = HashMap::new();

        for expense in &expenses {
            total_local += expense.local_amount();
            *by_currency
                .entry(expense.currency.clone())
                .or_insert(Decimal::ZERO) += expense.amount;
        }

        let average_local = safe_divide(total_local, Decimal::from(expenses.len() as i64));

        Ok(TripSummary {
            trip_id: trip.id,
            name: trip.name,
            expense_count: expenses.len() as i64,
            total_local: total_local.round_dp(DISPLAY_DECIMAL_PRECISION),
            average_local: average_local.round_dp(DISPLAY_DECIMAL_PRECISION),
            by_currency,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::travel::travel_model::{TravelExpense, TravelTrip};
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;

    struct MockTravelRepository {
        trip: Option<TravelTrip>,
        expenses: Vec<TravelExpense>,
    }

    #[async_trait::async_trait]
    impl TravelRepositoryTrait for MockTravelRepository {
        async fn get_trip(&self, _user_id: &str, _trip_id: &str) -> Result<Option<TravelTrip>> {
            Ok(self.trip.clone())
        }

        async fn get_trip_expenses(
            &self,
            _user_id: &str,
            _trip_id: &str,
        ) -> Result<Vec<TravelExpense>> {
            Ok(self.expenses.clone())
        }
    }

    fn trip() -> TravelTrip {
        TravelTrip {
            id: "t1".to_string(),
            name: "Lisbon".to_string(),
            start_date: NaiveDate::from_ymd_opt(2024, 4, 1).unwrap(),
            end_date: None,
        }
    }

    fn expense(id: &str, amount: Decimal, currency: &str, rate: Decimal) -> TravelExpense {
        TravelExpense {
            id: id.to_string(),
            trip_id: "t1".to_string(),
            description: None,
            amount,
            currency: currency.to_string(),
            exchange_rate: rate,
            date: NaiveDate::from_ymd_opt(2024, 4, 2).unwrap(),
        }
    }

    #[tokio::test]
    async fn trip_totals_use_derived_local_amounts() {
        let repo = MockTravelRepository {
            trip: Some(trip()),
            expenses: vec![
                expense("e1", dec!(100), "USD", dec!(0.9)),
                expense("e2", dec!(50), "USD", dec!(0.9)),
                expense("e3", dec!(2000), "JPY", dec!(0.006)),
            ],
        };
        let service = TravelExpenseService::new(Arc::new(repo));

        let summary = service.get_trip_summary("user-1", "t1").await.unwrap();
        // 90 + 45 + 12
        assert_eq!(summary.total_local, dec!(147));
        assert_eq!(summary.expense_count, 3);
        assert_eq!(summary.average_local, dec!(49));
        assert_eq!(summary.by_currency.get("USD"), Some(&dec!(150)));
        assert_eq!(summary.by_currency.get("JPY"), Some(&dec!(2000)));
    }

    #[tokio::test]
    async fn empty_trip_has_zero_average() {
        let repo = MockTravelRepository { trip: Some(trip()), expenses: vec![] };
        let service = TravelExpenseService::new(Arc::new(repo));

        let summary = service.get_trip_summary("user-1", "t1").await.unwrap();
        assert_eq!(summary.total_local, dec!(0));
        assert_eq!(summary.average_local, dec!(0));
    }

    #[tokio::test]
    async fn unknown_trip_is_not_found() {
        let repo = MockTravelRepository { trip: None, expenses: vec![] };
        let service = TravelExpenseService::new(Arc::new(repo));

        let result = service.get_trip_summary("user-1", "t1").await;
        assert!(matches!(result, Err(crate::Error::NotFound(_))));
    }
}
