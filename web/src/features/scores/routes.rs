use axum::{Router, routing::post};

use crate::state::AppState;

use super::handlers::save_score;

pub fn routes() -> Router<AppState> {
    Router::new().route("/save-score", post(save_score))
}
