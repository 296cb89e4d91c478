pub mod dashboard_model;
pub mod dashboard_service;
pub mod dashboard_traits;

pub use dashboard_model::DashboardSummary;
pub use dashboard_service::DashboardService;
pub use dashboard_traits::DashboardServiceTrait;
