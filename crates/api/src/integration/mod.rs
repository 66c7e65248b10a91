mod test_integration;

use actix_web::web;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route(
        "/integrations/email/test",
        web::post().to(test_integration::test_email_controller),
    );
    cfg.route(
        "/integrations/slack/test",
        web::post().to(test_integration::test_slack_controller),
    );
}
