mod activity;
mod alert;
pub mod calendar;
pub mod expiry;
mod reminder;
mod resource;
mod shared;
mod user;

pub use activity::{ActivityAction, ActivityItem};
pub use alert::{AlertChannel, AlertEntry, DeliveryStatus};
pub use calendar::{build_calendar, CalendarDay, CalendarEvent, CalendarQuery, CalendarView};
pub use expiry::{days_until, derive_status, ResourceStatus};
pub use reminder::{Reminder, ReminderAction, ReminderChannel, Severity};
pub use resource::{Resource, ResourceType};
pub use shared::entity::{Entity, ID};
pub use user::{Session, User};
