use serde::{Deserialize, Serialize};

/// One habit's completed/uncompleted status for one calendar day.
/// `streak`, when present, is the length of the consecutive-completion
/// run ending on that date.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub date: String,
    pub completed: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub streak: Option<u32>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Habit {
    pub id: u64,
    pub name: String,
    /// Completed today.
    pub completed: bool,
    /// Consecutive completed days ending today (or yesterday, if today
    /// is still pending).
    pub streak: u32,
    #[serde(default)]
    pub history: Vec<HistoryEntry>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppData {
    pub next_id: u64,
    pub habits: Vec<Habit>,
}

#[derive(Debug, Deserialize)]
pub struct CreateHabitRequest {
    pub name: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SortKey {
    Name,
    CurrentStreak,
    LongestStreak,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    #[default]
    All,
    Active,
    Completed,
}

#[derive(Debug, Default, Deserialize)]
pub struct ListParams {
    pub sort: Option<SortKey>,
    pub view: Option<ViewMode>,
}

/// One cell of the 364-day heatmap grid.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DayCell {
    pub date: String,
    pub completed: bool,
    pub streak: u32,
    pub intensity: u8,
}

/// Column header marker: the month changes at week `week` of the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthMarker {
    pub week: usize,
    /// 0-based month index (0 = January).
    pub month: u32,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct HeatmapStats {
    pub completed_days: usize,
    pub completion_percentage: u32,
    pub current_streak: u32,
    pub longest_streak: u32,
}

/// Today's habit counts shown on the dashboard cards.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct HabitSummary {
    pub total: usize,
    pub completed_today: usize,
    pub active: usize,
    pub completion_rate: u32,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct HeatmapResponse {
    pub today: String,
    pub days: Vec<DayCell>,
    pub months: Vec<MonthMarker>,
    pub stats: HeatmapStats,
    pub summary: HabitSummary,
}
