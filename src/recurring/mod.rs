pub mod recurring_model;
pub mod recurring_service;
pub mod recurring_traits;

pub use recurring_model::{Frequency, RecurringRule, RecurringSchedule, ScheduleState};
pub use recurring_service::{next_occurrence, schedule_rule, RecurringScheduleService};
pub use recurring_traits::{RecurringRepositoryTrait, RecurringScheduleServiceTrait};
