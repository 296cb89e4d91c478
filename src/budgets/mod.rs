pub mod budgets_model;
pub mod budgets_service;
pub mod budgets_traits;

pub use budgets_model::{
    Budget, BudgetCategory, BudgetCategoryStatus, BudgetCategoryUtilization, BudgetUtilization,
    CategoryAssignment,
};
pub use budgets_service::BudgetService;
pub use budgets_traits::{BudgetRepositoryTrait, BudgetServiceTrait};
