use std::collections::{BTreeMap, HashMap};

use chrono::NaiveDate;

use crate::dto::ranking::WeeklyScoreEntry;
use crate::models::ScoreEvent;
use crate::repository::score::UserTotal;

/// Anchor date for weekly buckets: this day starts week 1.
pub fn week_epoch() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 4, 18).expect("fixed anchor date is valid")
}

/// 7-day bucket number for a calendar date, counted from the anchor.
///
/// Floor division keeps dates before the anchor meaningful: the seven days
/// immediately preceding it form week 0, the seven before those week -1,
/// and so on. Nothing is clamped or filtered.
pub fn week_number(date: NaiveDate) -> i64 {
    let days = (date - week_epoch()).num_days();
    days.div_euclid(7) + 1
}

/// A user's cumulative total together with their 1-based global rank.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankedTotal {
    pub total_score: i64,
    pub rank: i64,
}

/// Global rank of `user_id` within a snapshot of cumulative totals.
///
/// Rank is the 1-based position after a stable descending sort, so equal
/// totals keep the snapshot's enumeration order instead of sharing a rank
/// value. Returns `None` when the user is not part of the snapshot.
pub fn global_rank(user_id: i64, totals: &[UserTotal]) -> Option<RankedTotal> {
    let total_score = totals.iter().find(|t| t.user_id == user_id)?.total_score;

    let mut ordered: Vec<&UserTotal> = totals.iter().collect();
    ordered.sort_by(|a, b| b.total_score.cmp(&a.total_score));

    let rank = ordered.iter().position(|t| t.user_id == user_id)? as i64 + 1;

    Some(RankedTotal { total_score, rank })
}

/// Weekly standings for `user_id` computed from a snapshot of every score
/// event.
///
/// Each event lands in the 7-day bucket of its calendar date. For every week
/// the target participated in, that week's per-user totals are sorted
/// descending (stable, so equal totals keep the order in which each user
/// first appeared in the snapshot) and the target's 1-based position becomes
/// the week's rank. Entries come back ordered by ascending week number; a
/// user with no events yields an empty history.
pub fn weekly_history(user_id: i64, events: &[ScoreEvent]) -> Vec<WeeklyScoreEntry> {
    // Target user's per-week totals; BTreeMap keeps weeks ascending.
    let mut own_weeks: BTreeMap<i64, i64> = BTreeMap::new();
    // Per-week per-user totals, users in first-appearance order.
    let mut week_buckets: HashMap<i64, Vec<(i64, i64)>> = HashMap::new();

    for event in events {
        let week = week_number(event.created_at.date());
        let score = i64::from(event.score);

        if event.user_id == user_id {
            *own_weeks.entry(week).or_insert(0) += score;
        }

        let bucket = week_buckets.entry(week).or_default();
        match bucket.iter_mut().find(|(uid, _)| *uid == event.user_id) {
            Some((_, total)) => *total += score,
            None => bucket.push((event.user_id, score)),
        }
    }

    own_weeks
        .into_iter()
        .map(|(week_no, total_score)| {
            let mut standings = week_buckets.remove(&week_no).unwrap_or_default();
            standings.sort_by(|a, b| b.1.cmp(&a.1));

            let rank = standings
                .iter()
                .position(|(uid, _)| *uid == user_id)
                .map_or(0, |i| i as i64 + 1);

            WeeklyScoreEntry {
                week_no,
                rank,
                total_score,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn total(user_id: i64, total_score: i64) -> UserTotal {
        UserTotal {
            user_id,
            total_score,
        }
    }

    fn event(user_id: i64, score: i32, y: i32, m: u32, d: u32) -> ScoreEvent {
        let date = NaiveDate::from_ymd_opt(y, m, d).unwrap();
        ScoreEvent {
            score_id: 0,
            user_id,
            score,
            created_at: date.and_hms_opt(12, 0, 0).unwrap(),
        }
    }

    #[test]
    fn week_number_buckets_by_seven_days() {
        assert_eq!(week_number(week_epoch()), 1);
        assert_eq!(week_number(NaiveDate::from_ymd_opt(2025, 4, 24).unwrap()), 1);
        assert_eq!(week_number(NaiveDate::from_ymd_opt(2025, 4, 25).unwrap()), 2);
        assert_eq!(week_number(NaiveDate::from_ymd_opt(2025, 4, 27).unwrap()), 2);
    }

    #[test]
    fn week_number_before_the_anchor_is_zero_or_negative() {
        assert_eq!(week_number(NaiveDate::from_ymd_opt(2025, 4, 17).unwrap()), 0);
        assert_eq!(week_number(NaiveDate::from_ymd_opt(2025, 4, 11).unwrap()), 0);
        assert_eq!(week_number(NaiveDate::from_ymd_opt(2025, 4, 10).unwrap()), -1);
    }

    #[test]
    fn global_rank_sorts_descending_with_stable_ties() {
        let totals = vec![total(1, 300), total(2, 300), total(3, 150)];

        assert_eq!(
            global_rank(1, &totals),
            Some(RankedTotal {
                total_score: 300,
                rank: 1
            })
        );
        // Equal totals keep snapshot order: user 1 precedes user 2.
        assert_eq!(
            global_rank(2, &totals),
            Some(RankedTotal {
                total_score: 300,
                rank: 2
            })
        );
        assert_eq!(
            global_rank(3, &totals),
            Some(RankedTotal {
                total_score: 150,
                rank: 3
            })
        );
    }

    #[test]
    fn global_rank_counts_users_without_events() {
        let totals = vec![total(1, 0), total(2, 100)];

        assert_eq!(
            global_rank(1, &totals),
            Some(RankedTotal {
                total_score: 0,
                rank: 2
            })
        );
        assert_eq!(
            global_rank(2, &totals),
            Some(RankedTotal {
                total_score: 100,
                rank: 1
            })
        );
    }

    #[test]
    fn global_rank_unknown_user_is_none() {
        let totals = vec![total(1, 300)];
        assert_eq!(global_rank(99, &totals), None);
    }

    #[test]
    fn global_ranks_cover_one_to_n_without_gaps() {
        let totals = vec![total(1, 100), total(2, 100), total(3, 100), total(4, 50)];

        let mut ranks: Vec<i64> = totals
            .iter()
            .map(|t| global_rank(t.user_id, &totals).unwrap().rank)
            .collect();
        ranks.sort_unstable();

        assert_eq!(ranks, vec![1, 2, 3, 4]);
    }

    #[test]
    fn global_rank_is_idempotent() {
        let totals = vec![total(1, 220), total(2, 90), total(3, 220)];

        let first = global_rank(3, &totals);
        let second = global_rank(3, &totals);
        assert_eq!(first, second);
    }

    #[test]
    fn weekly_history_buckets_and_totals_per_week() {
        let events = vec![
            event(1, 100, 2025, 4, 18),
            event(1, 60, 2025, 4, 24),
            event(1, 90, 2025, 4, 26),
        ];

        let history = weekly_history(1, &events);

        assert_eq!(history.len(), 2);
        assert_eq!(history[0].week_no, 1);
        assert_eq!(history[0].total_score, 160);
        assert_eq!(history[0].rank, 1);
        assert_eq!(history[1].week_no, 2);
        assert_eq!(history[1].total_score, 90);
        assert_eq!(history[1].rank, 1);
    }

    #[test]
    fn weekly_rank_is_computed_within_each_week() {
        let events = vec![
            event(1, 200, 2025, 4, 18),
            event(2, 150, 2025, 4, 19),
            event(2, 300, 2025, 4, 25),
            event(1, 100, 2025, 4, 26),
        ];

        let first = weekly_history(1, &events);
        assert_eq!(first[0].week_no, 1);
        assert_eq!(first[0].rank, 1);
        assert_eq!(first[1].week_no, 2);
        assert_eq!(first[1].rank, 2);

        let second = weekly_history(2, &events);
        assert_eq!(second[0].week_no, 1);
        assert_eq!(second[0].rank, 2);
        assert_eq!(second[1].week_no, 2);
        assert_eq!(second[1].rank, 1);
    }

    #[test]
    fn weekly_tie_goes_to_first_appearance_not_lowest_id() {
        // User 2 scores first, so on equal weekly totals it outranks user 1.
        let events = vec![event(2, 120, 2025, 4, 18), event(1, 120, 2025, 4, 19)];

        let first = weekly_history(2, &events);
        assert_eq!(first[0].rank, 1);

        let second = weekly_history(1, &events);
        assert_eq!(second[0].rank, 2);
    }

    #[test]
    fn weekly_history_skips_weeks_without_own_events() {
        let events = vec![
            event(1, 80, 2025, 4, 18),
            event(2, 70, 2025, 4, 25),
            event(1, 90, 2025, 5, 2),
        ];

        let history = weekly_history(1, &events);

        let weeks: Vec<i64> = history.iter().map(|e| e.week_no).collect();
        assert_eq!(weeks, vec![1, 3]);
    }

    #[test]
    fn weekly_history_is_empty_for_user_without_events() {
        let events = vec![event(1, 80, 2025, 4, 18)];
        assert!(weekly_history(2, &events).is_empty());
    }

    #[test]
    fn events_before_the_anchor_keep_their_buckets() {
        let events = vec![
            event(1, 55, 2025, 4, 10),
            event(1, 65, 2025, 4, 17),
            event(1, 75, 2025, 4, 18),
        ];

        let history = weekly_history(1, &events);

        let weeks: Vec<i64> = history.iter().map(|e| e.week_no).collect();
        assert_eq!(weeks, vec![-1, 0, 1]);
    }

    #[test]
    fn weekly_totals_sum_to_the_cumulative_total() {
        let events = vec![
            event(1, 100, 2025, 4, 18),
            event(2, 500, 2025, 4, 19),
            event(1, 60, 2025, 4, 24),
            event(1, 90, 2025, 4, 27),
            event(1, 50, 2025, 5, 14),
        ];

        let history = weekly_history(1, &events);
        let weekly_sum: i64 = history.iter().map(|e| e.total_score).sum();

        let cumulative: i64 = events
            .iter()
            .filter(|e| e.user_id == 1)
            .map(|e| i64::from(e.score))
            .sum();

        assert_eq!(weekly_sum, cumulative);
        assert_eq!(weekly_sum, 300);
    }
}
