use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub const GOAL_STATUS_ACTIVE: &str = "ACTIVE";
pub const GOAL_STATUS_COMPLETED: &str = "COMPLETED";
pub const GOAL_STATUS_PAUSED: &str = "PAUSED";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum GoalStatus {
    Active,
    Completed,
    Paused,
}

impl GoalStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            GoalStatus::Active => GOAL_STATUS_ACTIVE,
            GoalStatus::Completed => GOAL_STATUS_COMPLETED,
            GoalStatus::Paused => GOAL_STATUS_PAUSED,
        }
    }
}

impl FromStr for GoalStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            GOAL_STATUS_ACTIVE => Ok(GoalStatus::Active),
            GOAL_STATUS_COMPLETED => Ok(GoalStatus::Completed),
            GOAL_STATUS_PAUSED => Ok(GoalStatus::Paused),
            _ => Err(format!("Unknown goal status: {}", s)),
        }
    }
}

impl fmt::Display for GoalStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Domain model representing a savings goal
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Goal {
    pub id: String,
    pub name: String,
    pub target_amount: Decimal,
    pub current_amount: Decimal,
    pub deadline: Option<NaiveDate>,
    pub status: GoalStatus,
}

impl Goal {
    pub fn is_completed(&self) -> bool {
        self.status == GoalStatus::Completed
    }
}

/// A contribution toward a goal, direct or transaction-linked
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Contribution {
    pub id: String,
    pub goal_id: String,
    pub amount: Decimal,
    pub date: NaiveDate,
    pub transaction_id: Option<String>,
}

/// Visual urgency, mutually exclusive; overdue wins over near due
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum GoalUrgency {
    Overdue,
    NearDue,
    Normal,
}

/// Forecast figures derived per goal
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GoalForecast {
    pub goal_id: String,
    pub name: String,
    pub status: GoalStatus,
    pub target_amount: Decimal,
    pub current_amount: Decimal,
    pub progress_percentage: f64,
    pub remaining_amount: Decimal,
    pub deadline: Option<NaiveDate>,
    pub days_remaining: Option<i64>,
    pub required_daily_saving: Decimal,
    pub is_overdue: bool,
    pub is_near_due: bool,
    pub urgency: GoalUrgency,
}

/// Aggregate statistics across all goals of a user
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GoalStatistics {
    pub total_count: i64,
    pub active_count: i64,
    pub completed_count: i64,
    pub paused_count: i64,
    pub near_due_count: i64,
    pub total_target: Decimal,
    pub total_accumulated: Decimal,
    pub total_remaining: Decimal,
    pub average_progress: f64,
    pub completion_percentage: f64,
    pub accumulated_percentage: f64,
}
