use actix_web::web;

mod user_routes; // Module for user endpoints

pub fn init(cfg: &mut web::ServiceConfig) {
    cfg.configure(user_routes::init); // Register user routes
}
