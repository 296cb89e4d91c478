use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Domain model representing an account in the system
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    pub id: String,
    pub name: String,
    pub account_type: String,
    pub currency: String,
    pub balance: Decimal,
    pub is_active: bool,
}

/// Balance row supplied by the gateway for trend analysis.
///
/// `period_start_balance` is the balance as of the day before the requested
/// period started.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountBalanceRow {
    pub account_id: String,
    pub name: String,
    pub currency: String,
    pub current_balance: Decimal,
    pub period_start_balance: Decimal,
}

/// Qualitative classification of a balance's period movement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Trend {
    Positive,
    Negative,
    Stable,
}

impl Trend {
    pub fn from_variance(variance: Decimal) -> Self {
        if variance > Decimal::ZERO {
            Trend::Positive
        } else if variance < Decimal::ZERO {
            Trend::Negative
        } else {
            Trend::Stable
        }
    }
}

/// Per-account trend figures for one period
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountTrend {
    pub account_id: String,
    pub name: String,
    pub currency: String,
    pub current_balance: Decimal,
    pub period_start_balance: Decimal,
    pub period_variance: Decimal,
    pub variance_percentage: f64,
    pub trend: Trend,
}

/// Portfolio totals, recomputed on every call
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioOverview {
    pub net_worth: Decimal,
    pub total_period_movement: Decimal,
    pub accounts: Vec<AccountTrend>,
}
