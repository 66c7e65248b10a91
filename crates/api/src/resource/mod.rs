mod create_resource;

use actix_web::web;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route(
        "/resources",
        web::post().to(create_resource::create_resource_controller),
    );
}
