use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub const TRANSACTION_TYPE_INCOME: &str = "INCOME";
pub const TRANSACTION_TYPE_EXPENSE: &str = "EXPENSE";
pub const TRANSACTION_TYPE_TRANSFER: &str = "TRANSFER";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TransactionType {
    Income,
    Expense,
    Transfer,
}

impl TransactionType {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionType::Income => TRANSACTION_TYPE_INCOME,
            TransactionType::Expense => TRANSACTION_TYPE_EXPENSE,
            TransactionType::Transfer => TRANSACTION_TYPE_TRANSFER,
        }
    }
}

impl FromStr for TransactionType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            TRANSACTION_TYPE_INCOME => Ok(TransactionType::Income),
            TRANSACTION_TYPE_EXPENSE => Ok(TransactionType::Expense),
            TRANSACTION_TYPE_TRANSFER => Ok(TransactionType::Transfer),
            _ => Err(format!("Unknown transaction type: {}", s)),
        }
    }
}

impl fmt::Display for TransactionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Domain model representing a transaction as supplied by the gateway
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub id: String,
    pub account_id: String,
    pub category_id: Option<String>,
    pub amount: Decimal,
    pub transaction_type: TransactionType,
    pub date: NaiveDateTime,
    pub is_reconciled: bool,
}

/// Pre-aggregated income/expense totals for one user and period.
///
/// Fixed gateway row schema: transfers are excluded upstream.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PeriodTotals {
    pub income: Decimal,
    pub expense: Decimal,
    pub transaction_count: i64,
}
