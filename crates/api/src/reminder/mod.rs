mod dispatch_action;

use actix_web::web;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route(
        "/actions/telegram",
        web::post().to(dispatch_action::dispatch_action_controller),
    );
}
