// src/routes/user_routes.rs

use actix_web::web;

use crate::controllers::user_controller::signup;

/// Initializes the user routes by registering each endpoint within the `/users` scope.
pub fn init(cfg: &mut web::ServiceConfig) {
    cfg.service(web::scope("/users").service(signup));
}
