//! Calendar aggregation: turns sparse per-habit completion histories into
//! the fixed 364-day heatmap window with streak and intensity stats.
//!
//! Everything here is a pure function of its inputs; the handlers rebuild
//! these views from scratch on every request.

use crate::models::{DayCell, HeatmapStats, HistoryEntry, MonthMarker};
use chrono::{Datelike, Duration, NaiveDate};
use std::collections::BTreeMap;

/// 52 whole weeks, ending today.
pub const WINDOW_DAYS: usize = 364;

/// Merged status of one calendar day across all tracked habits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayStatus {
    pub completed: bool,
    pub streak: u32,
}

/// Canonical `YYYY-MM-DD` key. Lexicographic order on these strings is
/// chronological order.
pub fn date_key(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// The 364 dates `[today - 363, ..., today]`, oldest first.
pub fn generate_window(today: NaiveDate) -> Vec<NaiveDate> {
    (0..WINDOW_DAYS)
        .rev()
        .map(|offset| today - Duration::days(offset as i64))
        .collect()
}

/// Month-transition markers for the grid's column headers: one entry per
/// calendar month encountered while walking the window, tagged with the
/// week column (position / 7) where the month first appears. Week indices
/// are strictly increasing, so each column carries at most one label.
pub fn segment_months(window: &[NaiveDate]) -> Vec<MonthMarker> {
    let mut markers: Vec<MonthMarker> = Vec::new();
    let mut current = None;
    for (pos, date) in window.iter().enumerate() {
        let month = date.month0();
        if current != Some(month) {
            let week = pos / 7;
            // The window can open on a sliver of a month that ends inside
            // week 0; the next month takes over that column instead of
            // sharing it.
            match markers.last_mut() {
                Some(last) if last.week == week => last.month = month,
                _ => markers.push(MonthMarker { week, month }),
            }
            current = Some(month);
        }
    }
    markers
}

/// Fold every record from every habit history into one sparse map keyed
/// by date. A day counts as completed if ANY habit completed it; when two
/// completed records collide the larger streak wins, so the result does
/// not depend on habit order.
pub fn merge_histories<'a, I>(histories: I) -> BTreeMap<String, DayStatus>
where
    I: IntoIterator<Item = &'a [HistoryEntry]>,
{
    let mut map: BTreeMap<String, DayStatus> = BTreeMap::new();
    for history in histories {
        for entry in history {
            let incoming = DayStatus {
                completed: entry.completed,
                streak: entry.streak.unwrap_or(1),
            };
            map.entry(entry.date.clone())
                .and_modify(|stored| *stored = merge_status(*stored, incoming))
                .or_insert(incoming);
        }
    }
    map
}

fn merge_status(stored: DayStatus, incoming: DayStatus) -> DayStatus {
    match (stored.completed, incoming.completed) {
        (true, true) => DayStatus {
            completed: true,
            streak: stored.streak.max(incoming.streak),
        },
        (false, true) => incoming,
        _ => stored,
    }
}

/// Scalar stats over the window. Days outside the window never count,
/// even if the merged map contains them, so the percentage is always
/// `completed_days / 364`.
pub fn compute_stats(
    window: &[NaiveDate],
    map: &BTreeMap<String, DayStatus>,
    today: NaiveDate,
) -> HeatmapStats {
    let mut completed_days = 0usize;
    let mut longest = 0u32;
    let mut run = 0u32;
    for date in window {
        if is_completed(map, *date) {
            completed_days += 1;
            run += 1;
            longest = longest.max(run);
        } else {
            run = 0;
        }
    }

    // Newest to oldest; a missing day only breaks the streak once we are
    // at or before today, so stray future-dated records cannot zero it.
    let today_key = date_key(today);
    let mut current = 0u32;
    for date in window.iter().rev() {
        if is_completed(map, *date) {
            current += 1;
        } else if date_key(*date) <= today_key {
            break;
        }
    }

    let percentage = (completed_days as f64 / WINDOW_DAYS as f64 * 100.0).round() as u32;
    HeatmapStats {
        completed_days,
        completion_percentage: percentage,
        current_streak: current,
        longest_streak: longest,
    }
}

fn is_completed(map: &BTreeMap<String, DayStatus>, date: NaiveDate) -> bool {
    map.get(&date_key(date)).is_some_and(|status| status.completed)
}

/// Shade bucket for one cell, from the streak length recorded on that day.
pub fn intensity(completed: bool, streak: u32) -> u8 {
    if !completed {
        0
    } else if streak >= 6 {
        4
    } else if streak >= 4 {
        3
    } else if streak >= 2 {
        2
    } else {
        1
    }
}

/// Window-aligned cells for rendering: exactly one cell per window date.
pub fn day_cells(window: &[NaiveDate], map: &BTreeMap<String, DayStatus>) -> Vec<DayCell> {
    window
        .iter()
        .map(|date| {
            let key = date_key(*date);
            let status = map
                .get(&key)
                .copied()
                .unwrap_or(DayStatus {
                    completed: false,
                    streak: 0,
                });
            DayCell {
                date: key,
                completed: status.completed,
                streak: status.streak,
                intensity: intensity(status.completed, status.streak),
            }
        })
        .collect()
}

/// Window-aligned heatmap data for one "today".
#[derive(Debug)]
pub struct Heatmap {
    pub days: Vec<DayCell>,
    pub months: Vec<MonthMarker>,
    pub stats: HeatmapStats,
}

/// One-shot composition for the API handler: merge the given habit
/// histories and project them onto today's 364-day window.
pub fn build_heatmap<'a, I>(today: NaiveDate, histories: I) -> Heatmap
where
    I: IntoIterator<Item = &'a [HistoryEntry]>,
{
    let window = generate_window(today);
    let map = merge_histories(histories);
    Heatmap {
        stats: compute_stats(&window, &map, today),
        days: day_cells(&window, &map),
        months: segment_months(&window),
    }
}
