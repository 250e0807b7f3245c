// src/controllers/user_controller.rs

use actix_web::{post, web, Error, HttpResponse};
use log::error;
use serde::Deserialize;
use serde_json::json;

use crate::errors::UserError;
use crate::state::AppState;

/// Request body for the signup endpoint.
///
/// Deliberately a separate type from the persisted entity: the client never
/// supplies an id or a role, and the active flag it sends is ignored.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewUserRequest {
    pub username: String,
    pub email: String,
    pub password1: String,
    pub password2: String,
    pub given_name: String,
    pub surname: String,
    pub is_active: bool,
}

/// POST /users
/// Registers a new user. The service validates the request (username shape,
/// uniqueness, password complexity and confirmation, email shape) and
/// persists the user on success.
#[post("")]
pub async fn signup(
    body: web::Json<NewUserRequest>,
    data: web::Data<AppState>,
) -> Result<HttpResponse, Error> {
    match data.user_service.register(body.into_inner()).await {
        Ok(()) => Ok(HttpResponse::Created().json(json!({
            "message": "User created successfully"
        }))),
        Err(UserError::Invalid(reason)) => Ok(HttpResponse::BadRequest().json(json!({
            "detail": reason
        }))),
        Err(UserError::Database(e)) => {
            error!("failed to register user: {e}");
            Err(actix_web::error::ErrorInternalServerError(
                "registration failed",
            ))
        }
    }
}
