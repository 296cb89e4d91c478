use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::transactions::TransactionType;

pub const FREQUENCY_DAILY: &str = "DAILY";
pub const FREQUENCY_WEEKLY: &str = "WEEKLY";
pub const FREQUENCY_BIWEEKLY: &str = "BIWEEKLY";
pub const FREQUENCY_MONTHLY: &str = "MONTHLY";
pub const FREQUENCY_BIMONTHLY: &str = "BIMONTHLY";
pub const FREQUENCY_QUARTERLY: &str = "QUARTERLY";
pub const FREQUENCY_ANNUAL: &str = "ANNUAL";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Frequency {
    Daily,
    Weekly,
    Biweekly,
    Monthly,
    Bimonthly,
    Quarterly,
    Annual,
}

/// Step between two executions: a fixed day count or calendar months
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Interval {
    Days(i64),
    Months(u32),
}

impl Frequency {
    pub fn interval(&self) -> Interval {
        match self {
            Frequency::Daily => Interval::Days(1),
            Frequency::Weekly => Interval::Days(7),
            Frequency::Biweekly => Interval::Days(14),
            Frequency::Monthly => Interval::Months(1),
            Frequency::Bimonthly => Interval::Months(2),
            Frequency::Quarterly => Interval::Months(3),
            Frequency::Annual => Interval::Months(12),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Frequency::Daily => FREQUENCY_DAILY,
            Frequency::Weekly => FREQUENCY_WEEKLY,
            Frequency::Biweekly => FREQUENCY_BIWEEKLY,
            Frequency::Monthly => FREQUENCY_MONTHLY,
            Frequency::Bimonthly => FREQUENCY_BIMONTHLY,
            Frequency::Quarterly => FREQUENCY_QUARTERLY,
            Frequency::Annual => FREQUENCY_ANNUAL,
        }
    }
}

impl FromStr for Frequency {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            FREQUENCY_DAILY => Ok(Frequency::Daily),
            FREQUENCY_WEEKLY => Ok(Frequency::Weekly),
            FREQUENCY_BIWEEKLY => Ok(Frequency::Biweekly),
            FREQUENCY_MONTHLY => Ok(Frequency::Monthly),
            FREQUENCY_BIMONTHLY => Ok(Frequency::Bimonthly),
            FREQUENCY_QUARTERLY => Ok(Frequency::Quarterly),
            FREQUENCY_ANNUAL => Ok(Frequency::Annual),
            _ => Err(format!("Unknown frequency: {}", s)),
        }
    }
}

impl fmt::Display for Frequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Template generating transactions on a schedule
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecurringRule {
    pub id: String,
    pub description: String,
    pub account_id: String,
    pub category_id: Option<String>,
    pub transaction_type: TransactionType,
    pub amount: Decimal,
    pub frequency: Frequency,
    pub start_date: NaiveDate,
    pub end_date: Option<NaiveDate>,
    pub is_active: bool,
    /// Date of the most recently materialized transaction, if any
    pub last_materialized: Option<NaiveDate>,
}

/// Lifecycle state of a rule; `Finished` is terminal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ScheduleState {
    Pending,
    Scheduled,
    Finished,
}

/// Computed schedule for one rule
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecurringSchedule {
    pub rule_id: String,
    pub description: String,
    pub amount: Decimal,
    pub transaction_type: TransactionType,
    pub frequency: Frequency,
    pub next_execution: Option<NaiveDate>,
    pub state: ScheduleState,
}
