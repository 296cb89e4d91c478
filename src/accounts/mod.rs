pub mod accounts_model;
pub mod accounts_service;
pub mod accounts_traits;

pub use accounts_model::{Account, AccountBalanceRow, AccountTrend, PortfolioOverview, Trend};
pub use accounts_service::AccountTrendService;
pub use accounts_traits::{AccountRepositoryTrait, AccountTrendServiceTrait};
