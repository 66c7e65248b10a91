mod get_calendar;
mod get_upcoming_report;

use actix_web::web;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route(
        "/calendar",
        web::get().to(get_calendar::get_calendar_controller),
    );
    cfg.route(
        "/reports/upcoming",
        web::get().to(get_upcoming_report::get_upcoming_report_controller),
    );
}
