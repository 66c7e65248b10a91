mod get_overview;

use actix_web::web;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route(
        "/dashboard/overview",
        web::get().to(get_overview::get_overview_controller),
    );
}
