pub mod categories_model;
pub mod categories_service;
pub mod categories_traits;
pub mod selection;

pub use categories_model::{
    CategoryRollup, CategoryTotalsRow, MonthlyTotalRow, RollupQuery, RollupSummary,
};
pub use categories_service::CategoryRollupService;
pub use categories_traits::{CategoryRepositoryTrait, CategoryRollupServiceTrait};
pub use selection::TopSelection;
