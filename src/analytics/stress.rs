use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::stress::StressEvent;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StressPattern {
    pub trigger_tag: String,
    pub frequency: i64,
    pub average_intensity: f64,
}

/// Groups tagged stress events at or after `window_start` by trigger tag.
///
/// Most frequent trigger first; equal frequencies fall back to tag order.
/// Untagged events never form a group.
pub fn stress_patterns(events: &[StressEvent], window_start: DateTime<Utc>) -> Vec<StressPattern> {
    let mut groups: BTreeMap<&str, (i64, i64)> = BTreeMap::new();

    for event in events.iter().filter(|e| e.timestamp >= window_start) {
        let Some(tag) = event.tag() else {
            continue;
        };
        let (count, intensity_sum) = groups.entry(tag).or_default();
        *count += 1;
        *intensity_sum += i64::from(event.intensity);
    }

    let mut patterns: Vec<StressPattern> = groups
        .into_iter()
        .map(|(tag, (count, intensity_sum))| StressPattern {
            trigger_tag: tag.to_string(),
            frequency: count,
            average_intensity: intensity_sum as f64 / count as f64,
        })
        .collect();
    // Stable sort keeps the alphabetical order from the BTreeMap for ties.
    patterns.sort_by(|a, b| b.frequency.cmp(&a.frequency));
    patterns
}
