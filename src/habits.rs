//! Per-habit domain logic: toggling today's completion, streak
//! bookkeeping, and the list sort/filter rules.

use crate::calendar::date_key;
use crate::models::{Habit, HistoryEntry, SortKey, ViewMode};
use chrono::{Duration, NaiveDate};
use std::cmp::Reverse;

/// Flip today's completion for one habit and rebuild its streak fields.
/// Inserts a completed entry if today has none yet.
pub fn toggle_today(habit: &mut Habit, today: NaiveDate) {
    let key = date_key(today);
    match habit.history.iter_mut().find(|entry| entry.date == key) {
        Some(entry) => entry.completed = !entry.completed,
        None => habit.history.push(HistoryEntry {
            date: key,
            completed: true,
            streak: None,
        }),
    }
    normalize(habit, today);
}

/// Sort the history, re-annotate per-entry streaks, and refresh the
/// habit-level `completed`/`streak` fields for the given day. Also run
/// after loading from disk, so stale streak fields self-heal.
pub fn normalize(habit: &mut Habit, today: NaiveDate) {
    habit.history.sort_by(|a, b| a.date.cmp(&b.date));
    annotate_streaks(&mut habit.history);
    habit.completed = completed_on(habit, today);
    habit.streak = current_streak(habit, today);
}

/// Walk the sorted history and stamp each completed entry with the
/// length of the consecutive-day run ending on it. Runs break on an
/// uncompleted entry or a calendar gap.
fn annotate_streaks(history: &mut [HistoryEntry]) {
    let mut run = 0u32;
    let mut prev: Option<NaiveDate> = None;
    for entry in history.iter_mut() {
        let Ok(date) = NaiveDate::parse_from_str(&entry.date, "%Y-%m-%d") else {
            entry.streak = None;
            continue;
        };
        if entry.completed {
            run = match prev {
                Some(p) if run > 0 && date - p == Duration::days(1) => run + 1,
                _ => 1,
            };
            entry.streak = Some(run);
        } else {
            run = 0;
            entry.streak = None;
        }
        prev = Some(date);
    }
}

pub fn completed_on(habit: &Habit, date: NaiveDate) -> bool {
    let key = date_key(date);
    habit
        .history
        .iter()
        .any(|entry| entry.date == key && entry.completed)
}

/// Current streak: the run ending today, or the run ending yesterday
/// when today is still pending. Anything older means the streak is over.
pub fn current_streak(habit: &Habit, today: NaiveDate) -> u32 {
    let today_key = date_key(today);
    let yesterday_key = date_key(today - Duration::days(1));
    habit
        .history
        .iter()
        .rev()
        .find(|entry| entry.completed && (entry.date == today_key || entry.date == yesterday_key))
        .and_then(|entry| entry.streak)
        .unwrap_or(0)
}

/// Longest consecutive-completion run anywhere in the habit's history.
pub fn longest_streak(habit: &Habit) -> u32 {
    habit
        .history
        .iter()
        .filter(|entry| entry.completed)
        .filter_map(|entry| entry.streak)
        .max()
        .unwrap_or(0)
}

pub fn sort_habits(habits: &mut [Habit], key: SortKey) {
    match key {
        SortKey::Name => {
            habits.sort_by(|a, b| a.name.to_lowercase().cmp(&b.name.to_lowercase()))
        }
        SortKey::CurrentStreak => habits.sort_by_key(|habit| Reverse(habit.streak)),
        SortKey::LongestStreak => habits.sort_by_key(|habit| Reverse(longest_streak(habit))),
    }
}

/// View-mode filter: `active` = not completed today, `completed` =
/// completed today. Assumes `normalize` has run for today.
pub fn filter_habits(habits: Vec<Habit>, mode: ViewMode) -> Vec<Habit> {
    match mode {
        ViewMode::All => habits,
        ViewMode::Active => habits.into_iter().filter(|habit| !habit.completed).collect(),
        ViewMode::Completed => habits.into_iter().filter(|habit| habit.completed).collect(),
    }
}
