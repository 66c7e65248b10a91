mod list_alert_history;

use actix_web::web;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route(
        "/alerts/history",
        web::get().to(list_alert_history::list_alert_history_controller),
    );
}
