use axum::{Router, routing::get};

use crate::state::AppState;

use super::handlers::{get_scorecard, get_weekly_score};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/scorecard/:user_id", get(get_scorecard))
        .route("/weekly-score/:user_id", get(get_weekly_score))
}
