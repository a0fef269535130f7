use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Request payload for submitting a score
///
/// `user_id` is the opaque public id; the score range itself is checked by
/// the submission guard, not by payload validation, so an out-of-range value
/// is reported as its own condition.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SaveScoreRequest {
    pub user_id: String,
    pub score: i32,
}
