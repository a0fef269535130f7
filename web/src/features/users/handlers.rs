use axum::{
    Json,
    extract::State,
    response::{IntoResponse, Response},
};
use serde_json::json;
use storage::dto::user::{RegisterRequest, RegisterResponse, SendOtpRequest};
use validator::Validate;

use crate::error::WebError;
use crate::state::AppState;

use super::services;

#[utoipa::path(
    post,
    path = "/send-otp",
    request_body = SendOtpRequest,
    responses(
        (status = 200, description = "OTP issued for the phone number"),
        (status = 400, description = "Invalid phone number")
    ),
    tag = "users"
)]
pub async fn send_otp(
    State(state): State<AppState>,
    Json(request): Json<SendOtpRequest>,
) -> Result<Response, WebError> {
    request.validate()?;

    let now = chrono::Local::now().naive_local();
    services::send_otp(state.db.pool(), &request.phone, now).await?;

    Ok(Json(json!({})).into_response())
}

#[utoipa::path(
    post,
    path = "/register",
    request_body = RegisterRequest,
    responses(
        (status = 200, description = "User registered", body = RegisterResponse),
        (status = 400, description = "Validation failed or OTP invalid or expired"),
        (status = 409, description = "Phone number already registered")
    ),
    tag = "users"
)]
pub async fn register(
    State(state): State<AppState>,
    Json(request): Json<RegisterRequest>,
) -> Result<Response, WebError> {
    request.validate()?;

    let now = chrono::Local::now().naive_local();
    let user_id = services::register(state.db.pool(), &state.ids, &request, now).await?;

    Ok(Json(RegisterResponse { user_id }).into_response())
}
