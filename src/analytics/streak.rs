use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct JournalingStreak {
    pub current_streak: i32,
    pub longest_streak: i32,
}

/// Journaling streaks from the dates a user wrote on.
///
/// The current streak is the run of consecutive days ending today or
/// yesterday; anything older means the streak is broken. The longest streak
/// is the longest run anywhere in the history. Duplicate dates count once and
/// dates after `today` are ignored.
pub fn journaling_streak(entry_dates: &[NaiveDate], today: NaiveDate) -> JournalingStreak {
    let mut dates: Vec<NaiveDate> = entry_dates
        .iter()
        .copied()
        .filter(|d| *d <= today)
        .collect();
    dates.sort_unstable_by(|a, b| b.cmp(a));
    dates.dedup();

    let Some(&latest) = dates.first() else {
        return JournalingStreak::default();
    };

    let current_streak = if latest == today || latest == today - Duration::days(1) {
        trailing_run(&dates)
    } else {
        0
    };

    JournalingStreak {
        current_streak,
        longest_streak: longest_run(&dates),
    }
}

fn is_next_day(later: NaiveDate, earlier: NaiveDate) -> bool {
    later.signed_duration_since(earlier) == Duration::days(1)
}

/// Length of the run starting at the newest date. `dates` is descending.
fn trailing_run(dates: &[NaiveDate]) -> i32 {
    let linked = dates
        .windows(2)
        .take_while(|pair| is_next_day(pair[0], pair[1]))
        .count();
    linked as i32 + 1
}

/// Longest run of consecutive days. `dates` is descending and non-empty.
fn longest_run(dates: &[NaiveDate]) -> i32 {
    let mut longest = 1;
    let mut streak = 1;

    for pair in dates.windows(2) {
        if is_next_day(pair[0], pair[1]) {
            streak += 1;
        } else {
            longest = longest.max(streak);
            streak = 1;
        }
    }

    longest.max(streak)
}
