use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Decimal precision for display
pub const DISPLAY_DECIMAL_PRECISION: u32 = 2;

/// Spent-to-assigned percentage at which a budget category turns to warning
pub const BUDGET_WARNING_THRESHOLD: Decimal = dec!(80);

/// Days before a goal deadline during which the goal counts as near due
pub const GOAL_NEAR_DUE_DAYS: i64 = 30;

/// Number of categories kept by summary rollup views
pub const DEFAULT_TOP_CATEGORIES: usize = 5;
