pub mod travel_model;
pub mod travel_service;
pub mod travel_traits;

pub use travel_model::{TravelExpense, TravelTrip, TripSummary};
pub use travel_service::TravelExpenseService;
pub use travel_traits::{TravelExpenseServiceTrait, TravelRepositoryTrait};
