use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A trip grouping travel expenses
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TravelTrip {
    pub id: String,
    pub name: String,
    pub start_date: NaiveDate,
    pub end_date: Option<NaiveDate>,
}

/// An expense paid in a foreign currency.
///
/// The local amount is always derived from the recorded exchange rate, never
/// stored.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TravelExpense {
    pub id: String,
    pub trip_id: String,
    pub description: Option<String>,
    pub amount: Decimal,
    pub currency: String,
    pub exchange_rate: Decimal,
    pub date: NaiveDate,
}

impl TravelExpense {
    pub fn local_amount(&self) -> Decimal {
        self.amount * self.exchange_rate
    }
}

/// Aggregated totals for one trip
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TripSummary {
    pub trip_id: String,
    pub name: String,
    pub expense_count: i64,
    pub total_local: Decimal,
    pub average_local: Decimal,
    /// Foreign totals keyed by currency code
    pub by_currency: HashMap<String, Decimal>,
}
