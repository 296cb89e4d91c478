pub mod goals_model;
pub mod goals_service;
pub mod goals_traits;

pub use goals_model::{Contribution, Goal, GoalForecast, GoalStatistics, GoalStatus, GoalUrgency};
pub use goals_service::GoalForecastService;
pub use goals_traits::{GoalForecastServiceTrait, GoalRepositoryTrait};
