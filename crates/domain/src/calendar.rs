use crate::expiry::{ResourceStatus, MILLIS_PER_DAY};
use crate::reminder::Reminder;
use crate::resource::{Resource, ResourceType};
use chrono::{TimeZone, Utc};
use std::collections::{BTreeMap, HashMap};

/// Trailing part of the calendar window: events up to this many days in the
/// past are still shown.
pub const TRAILING_WINDOW_DAYS: i64 = 30;

pub const MIN_RANGE_DAYS: i64 = 1;
pub const MAX_RANGE_DAYS: i64 = 180;
pub const DEFAULT_RANGE_DAYS: i64 = 30;

#[derive(Debug, Clone, Default)]
pub struct CalendarQuery {
    pub range_days: Option<i64>,
    pub types: Option<Vec<ResourceType>>,
    pub statuses: Option<Vec<ResourceStatus>>,
}

/// A reminder joined with its resolved resource.
#[derive(Debug, Clone, PartialEq)]
pub struct CalendarEvent {
    pub reminder: Reminder,
    pub resource: Resource,
    /// Resource status recomputed against the `now` snapshot of the build
    pub resource_status: ResourceStatus,
}

/// One calendar day containing at least one qualifying event. `date` is the
/// 10 character ISO day key of the events' `scheduled_for`.
#[derive(Debug, Clone, PartialEq)]
pub struct CalendarDay {
    pub date: String,
    pub events: Vec<CalendarEvent>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CalendarView {
    /// The clamped forward range actually used
    pub range: i64,
    /// Total surviving events across all days
    pub count: usize,
    /// Days ascending by date
    pub days: Vec<CalendarDay>,
}

/// ISO day key (`YYYY-MM-DD`) for a millisecond timestamp.
pub fn day_key(timestamp_ms: i64) -> String {
    match Utc.timestamp_millis_opt(timestamp_ms).single() {
        Some(dt) => dt.format("%Y-%m-%d").to_string(),
        None => String::new(),
    }
}

/// Joins reminders to resources, filters by the rolling window and optional
/// type/status filters, and buckets the surviving events per calendar day.
///
/// Deterministic for a fixed (resources, reminders, query, now) tuple: day
/// buckets are ascending by date and events within a bucket keep reminder
/// iteration order.
pub fn build_calendar(
    resources: &[Resource],
    reminders: &[Reminder],
    query: &CalendarQuery,
    now_ms: i64,
) -> CalendarView {
    let range = query
        .range_days
        .unwrap_or(DEFAULT_RANGE_DAYS)
        .clamp(MIN_RANGE_DAYS, MAX_RANGE_DAYS);

    let resource_lookup: HashMap<&str, &Resource> = resources
        .iter()
        .map(|resource| (resource.id.as_str(), resource))
        .collect();

    let mut count = 0;
    let mut buckets: BTreeMap<String, Vec<CalendarEvent>> = BTreeMap::new();

    for reminder in reminders {
        // Orphaned reminders are dropped, not errored
        let resource = match resource_lookup.get(reminder.resource_id.as_str()) {
            Some(resource) => *resource,
            None => continue,
        };

        let offset_ms = reminder.scheduled_for - now_ms;
        if offset_ms > range * MILLIS_PER_DAY || offset_ms < -TRAILING_WINDOW_DAYS * MILLIS_PER_DAY
        {
            continue;
        }

        if let Some(types) = &query.types {
            if !types.contains(&resource.resource_type) {
                continue;
            }
        }

        let resource_status = resource.current_status(now_ms);
        if let Some(statuses) = &query.statuses {
            if !statuses.contains(&resource_status) {
                continue;
            }
        }

        count += 1;
        buckets
            .entry(day_key(reminder.scheduled_for))
            .or_default()
            .push(CalendarEvent {
                reminder: reminder.clone(),
                resource: resource.clone(),
                resource_status,
            });
    }

    CalendarView {
        range,
        count,
        days: buckets
            .into_iter()
            .map(|(date, events)| CalendarDay { date, events })
            .collect(),
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::reminder::{ReminderChannel, Severity};

    const NOW: i64 = 1_000 * MILLIS_PER_DAY;

    fn resource(id: &str, expiry_in_days: i64) -> Resource {
        Resource {
            id: id.into(),
            resource_type: ResourceType::Domain,
            label: format!("{} label", id),
            hostname: format!("{}.local", id),
            provider: "Acme".into(),
            expiry_date: day_key(NOW + expiry_in_days * MILLIS_PER_DAY),
            status: ResourceStatus::Healthy,
            renewal_url: String::new(),
            notes: String::new(),
            last_checked: NOW,
            tags: Vec::new(),
        }
    }

    fn reminder(id: &str, resource_id: &str, in_days: i64) -> Reminder {
        Reminder {
            id: id.into(),
            resource_id: resource_id.into(),
            due_in_days: in_days,
            scheduled_for: NOW + in_days * MILLIS_PER_DAY,
            severity: Severity::Medium,
            channel: ReminderChannel::Telegram,
            message: format!("renew {}", resource_id),
        }
    }

    #[test]
    fn excludes_orphaned_reminders() {
        let resources = vec![resource("r1", 5)];
        let reminders = vec![reminder("m1", "r1", 5), reminder("m2", "ghost", 5)];

        let view = build_calendar(&resources, &reminders, &CalendarQuery::default(), NOW);

        assert_eq!(view.count, 1);
        assert_eq!(view.days.len(), 1);
        assert_eq!(view.days[0].events[0].reminder.id, "m1".into());
    }

    #[test]
    fn clamps_range() {
        let view = build_calendar(
            &[],
            &[],
            &CalendarQuery {
                range_days: Some(500),
                ..Default::default()
            },
            NOW,
        );
        assert_eq!(view.range, 180);

        let view = build_calendar(
            &[],
            &[],
            &CalendarQuery {
                range_days: Some(0),
                ..Default::default()
            },
            NOW,
        );
        assert_eq!(view.range, 1);
    }

    #[test]
    fn window_keeps_trailing_thirty_days() {
        let resources = vec![resource("r1", 90)];
        let reminders = vec![
            reminder("past-out", "r1", -31),
            reminder("past-in", "r1", -30),
            reminder("future-in", "r1", 30),
            reminder("future-out", "r1", 31),
        ];

        let view = build_calendar(&resources, &reminders, &CalendarQuery::default(), NOW);

        let ids: Vec<_> = view
            .days
            .iter()
            .flat_map(|d| d.events.iter().map(|e| e.reminder.id.to_string()))
            .collect();
        assert_eq!(ids, vec!["past-in", "future-in"]);
    }

    #[test]
    fn buckets_are_ascending_and_stable_within_a_day() {
        let resources = vec![resource("r1", 90)];
        let reminders = vec![
            reminder("later", "r1", 10),
            reminder("first-of-day", "r1", 3),
            reminder("second-of-day", "r1", 3),
            reminder("earlier", "r1", 1),
        ];

        let view = build_calendar(&resources, &reminders, &CalendarQuery::default(), NOW);

        let dates: Vec<_> = view.days.iter().map(|d| d.date.clone()).collect();
        let mut sorted = dates.clone();
        sorted.sort();
        assert_eq!(dates, sorted);
        assert_eq!(view.days.len(), 3);

        let same_day = &view.days[1];
        assert_eq!(same_day.events[0].reminder.id, "first-of-day".into());
        assert_eq!(same_day.events[1].reminder.id, "second-of-day".into());
    }

    #[test]
    fn filters_by_type_and_status() {
        let mut ssl = resource("r2", 2);
        ssl.resource_type = ResourceType::Ssl;
        let resources = vec![resource("r1", 90), ssl];
        let reminders = vec![reminder("m1", "r1", 5), reminder("m2", "r2", 1)];

        let view = build_calendar(
            &resources,
            &reminders,
            &CalendarQuery {
                types: Some(vec![ResourceType::Ssl]),
                ..Default::default()
            },
            NOW,
        );
        assert_eq!(view.count, 1);
        assert_eq!(view.days[0].events[0].reminder.id, "m2".into());

        let view = build_calendar(
            &resources,
            &reminders,
            &CalendarQuery {
                statuses: Some(vec![ResourceStatus::DueSoon]),
                ..Default::default()
            },
            NOW,
        );
        assert_eq!(view.count, 1);
        assert_eq!(view.days[0].events[0].resource_status, ResourceStatus::DueSoon);
    }

    #[test]
    fn identical_inputs_produce_identical_output() {
        let resources = vec![resource("r1", 5), resource("r2", 40)];
        let reminders = vec![
            reminder("m1", "r1", 5),
            reminder("m2", "r2", 12),
            reminder("m3", "r1", -2),
        ];
        let query = CalendarQuery::default();

        let a = build_calendar(&resources, &reminders, &query, NOW);
        let b = build_calendar(&resources, &reminders, &query, NOW);
        assert_eq!(a, b);
    }

    #[test]
    fn seeded_resource_and_reminder_end_to_end() {
        let resources = vec![resource("r1", 5)];
        let reminders = vec![reminder("m1", "r1", 5)];

        let view = build_calendar(&resources, &reminders, &CalendarQuery::default(), NOW);

        assert_eq!(view.range, 30);
        assert_eq!(view.count, 1);
        assert_eq!(view.days.len(), 1);
        assert_eq!(view.days[0].date, day_key(NOW + 5 * MILLIS_PER_DAY));
        let event = &view.days[0].events[0];
        assert_eq!(event.reminder.id, "m1".into());
        assert_eq!(event.resource_status, ResourceStatus::DueSoon);
    }
}
