use super::travel_model::{TravelExpense, TravelTrip, TripSummary};
use crate::Result;

/// Trait defining the contract for travel expense row retrieval
#[async_trait::async_trait]
pub trait TravelRepositoryTrait: Send + Sync {
    async fn get_trip(&self, user_id: &str, trip_id: &str) -> Result<Option<TravelTrip>>;
    async fn get_trip_expenses(&self, user_id: &str, trip_id: &str) -> Result<Vec<TravelExpense>>;
}

/// Trait defining the contract for travel expense aggregation
#[async_trait::async_trait]
pub trait TravelExpenseServiceTrait: Send + Sync {
    async fn get_trip_summary(&self, user_id: &str, trip_id: &str) -> Result<TripSummary>;
}
