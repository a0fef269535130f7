use axum::{Router, routing::post};

use crate::state::AppState;

use super::handlers::{register, send_otp};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/send-otp", post(send_otp))
        .route("/register", post(register))
}
