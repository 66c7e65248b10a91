use actix_web::{web, HttpResponse};
use alarmhosting_api_structs::dtos::to_iso;
use alarmhosting_api_structs::{get_api_banner, get_health};
use alarmhosting_infra::Context;

async fn banner() -> HttpResponse {
    HttpResponse::Ok().json(get_api_banner::APIResponse {
        message: "AlarmHosting API".into(),
        docs: "See README for available endpoints.".into(),
    })
}

async fn health(ctx: web::Data<Context>) -> HttpResponse {
    HttpResponse::Ok().json(get_health::APIResponse {
        status: "ok".into(),
        timestamp: to_iso(ctx.sys.get_timestamp_millis()),
    })
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(banner));
    cfg.route("/health", web::get().to(health));
}
