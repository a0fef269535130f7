use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Global standing for one user: cumulative total and 1-based rank
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ScorecardResponse {
    pub name: String,
    pub total_score: i64,
    pub rank: i64,
}

/// One week's standing for a user
///
/// `week_no` counts 7-day buckets from the week-1 anchor date; events that
/// predate the anchor land in week 0 or below.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct WeeklyScoreEntry {
    pub week_no: i64,
    pub rank: i64,
    pub total_score: i64,
}
