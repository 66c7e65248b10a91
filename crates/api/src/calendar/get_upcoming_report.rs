use super::get_calendar::{calendar_query, GetCalendarUseCase};
use crate::error::AlarmError;
use crate::shared::usecase::execute;
use actix_web::{web, HttpResponse};
use alarmhosting_api_structs::get_upcoming_report::{APIResponse, QueryParams};
use alarmhosting_domain::CalendarView;
use alarmhosting_infra::Context;

pub async fn get_upcoming_report_controller(
    query: web::Query<QueryParams>,
    ctx: web::Data<Context>,
) -> Result<HttpResponse, AlarmError> {
    let usecase = GetCalendarUseCase {
        query: calendar_query(query.range, &query.types, &query.statuses),
    };

    let view = execute(usecase, &ctx).await.map_err(AlarmError::from)?;

    if query.format.as_deref() == Some("csv") {
        return Ok(HttpResponse::Ok()
            .content_type("text/csv")
            .insert_header((
                "Content-Disposition",
                "attachment; filename=\"upcoming.csv\"",
            ))
            .body(render_csv(&view)));
    }

    Ok(HttpResponse::Ok().json(APIResponse::new(view)))
}

fn csv_escape(field: &str) -> String {
    format!("\"{}\"", field.replace('"', "\"\""))
}

/// Flattens the calendar into one CSV row per event, days ascending. Every
/// field is double-quoted, the header included.
fn render_csv(view: &CalendarView) -> String {
    let header: Vec<String> = ["Date", "Resource", "Type", "Status", "Message"]
        .iter()
        .map(|field| csv_escape(field))
        .collect();
    let mut out = header.join(",");
    out.push('\n');
    for day in &view.days {
        for event in &day.events {
            let row = [
                day.date.as_str(),
                event.resource.label.as_str(),
                event.resource.resource_type.as_str(),
                event.resource_status.as_str(),
                event.reminder.message.as_str(),
            ];
            let escaped: Vec<String> = row.iter().map(|field| csv_escape(field)).collect();
            out.push_str(&escaped.join(","));
            out.push('\n');
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use alarmhosting_domain::{
        CalendarDay, CalendarEvent, Reminder, ReminderChannel, Resource, ResourceStatus,
        ResourceType, Severity,
    };

    fn sample_view() -> CalendarView {
        let resource = Resource {
            id: "r1".into(),
            resource_type: ResourceType::Domain,
            label: "alarmhosting.io".into(),
            hostname: "alarmhosting.io".into(),
            provider: "Namecheap".into(),
            expiry_date: "2026-09-01".into(),
            status: ResourceStatus::DueSoon,
            renewal_url: String::new(),
            notes: String::new(),
            last_checked: 0,
            tags: vec![],
        };
        let reminder = Reminder {
            id: "m1".into(),
            resource_id: "r1".into(),
            due_in_days: 7,
            scheduled_for: 0,
            severity: Severity::High,
            channel: ReminderChannel::Telegram,
            message: "Renew \"alarmhosting.io\" soon".into(),
        };
        CalendarView {
            range: 30,
            count: 1,
            days: vec![CalendarDay {
                date: "2026-08-25".into(),
                events: vec![CalendarEvent {
                    reminder,
                    resource,
                    resource_status: ResourceStatus::DueSoon,
                }],
            }],
        }
    }

    #[test]
    fn renders_header_and_one_row_per_event() {
        let csv = render_csv(&sample_view());
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(
            lines[0],
            "\"Date\",\"Resource\",\"Type\",\"Status\",\"Message\""
        );
        assert_eq!(
            lines[1],
            "\"2026-08-25\",\"alarmhosting.io\",\"domain\",\"due-soon\",\"Renew \"\"alarmhosting.io\"\" soon\""
        );
    }

    #[test]
    fn empty_view_is_header_only() {
        let view = CalendarView {
            range: 30,
            count: 0,
            days: vec![],
        };
        assert_eq!(
            render_csv(&view),
            "\"Date\",\"Resource\",\"Type\",\"Status\",\"Message\"\n"
        );
    }

    #[test]
    fn every_field_is_quoted_including_the_header() {
        let csv = render_csv(&sample_view());
        for line in csv.lines() {
            assert!(line.starts_with('"'));
            assert!(line.ends_with('"'));
            assert_eq!(line.matches("\",\"").count(), 4);
        }
    }
}
