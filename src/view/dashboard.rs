//! Dashboard — totals, level control, activity chart and recent exercises.

use super::ViewStatus;
use crate::client::LearningClient;
use crate::domain::exercise::{ExerciseHistoryEntry, ScoreBand};
use crate::domain::stats::{
    clamp_level, ChartPoint, SettingsUpdated, Stats, DEFAULT_CHART_DAYS, DEFAULT_LEVEL,
};
use crate::error::SdkError;
use crate::mutation::Mutation;
use crate::query::QueryObserver;
use std::sync::Arc;

/// Recent exercises shown under the chart.
pub const RECENT_EXERCISES: u32 = 15;

/// Shortest bar, so days with no activity stay visible.
const MIN_BAR_PERCENT: f64 = 4.0;

/// One day of the activity chart, scaled against the busiest day.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartBar {
    pub date: String,
    pub count: u32,
    pub height_percent: f64,
}

pub fn chart_bars(points: &[ChartPoint]) -> Vec<ChartBar> {
    let max = points.iter().map(|p| p.count).max().unwrap_or(0).max(1);
    points
        .iter()
        .map(|p| ChartBar {
            date: p.date.clone(),
            count: p.count,
            height_percent: (f64::from(p.count) / f64::from(max) * 100.0).max(MIN_BAR_PERCENT),
        })
        .collect()
}

pub struct DashboardView {
    client: LearningClient,
    stats: QueryObserver<Stats>,
    chart: QueryObserver<Vec<ChartPoint>>,
    history: QueryObserver<Vec<ExerciseHistoryEntry>>,
    level: Mutation<SettingsUpdated>,
}

impl DashboardView {
    pub fn new(client: &LearningClient) -> Self {
        Self {
            stats: client.stats().watch(),
            chart: client.stats().watch_chart(DEFAULT_CHART_DAYS),
            history: client.exercise().watch_history(RECENT_EXERCISES, 0),
            level: client.stats().level_mutation(),
            client: client.clone(),
        }
    }

    /// Status of the totals; chart and history degrade on their own.
    pub fn status(&self) -> ViewStatus {
        ViewStatus::of(&self.stats.state())
    }

    pub async fn ready(&self) -> Result<(), Arc<SdkError>> {
        self.stats.wait().await?;
        // Secondary panels render their own errors.
        let _ = self.chart.wait().await;
        let _ = self.history.wait().await;
        Ok(())
    }

    pub fn stats(&self) -> Option<Arc<Stats>> {
        self.stats.data()
    }

    // ── Level ────────────────────────────────────────────────────────────

    pub fn level(&self) -> i64 {
        self.stats.data().map_or(DEFAULT_LEVEL, |s| s.level)
    }

    /// Step the level by `delta`. Returns `None` when the clamped level is unchanged.
    pub async fn change_level(
        &self,
        delta: i64,
    ) -> Result<Option<Arc<SettingsUpdated>>, Arc<SdkError>> {
        let current = self.level();
        let target = clamp_level(current.saturating_add(delta));
        if target == current {
            return Ok(None);
        }
        tracing::debug!(from = current, to = target, "changing level");
        self.level
            .run(self.client.stats().update_level(target))
            .await
            .map(Some)
    }

    pub fn is_changing_level(&self) -> bool {
        self.level.is_pending()
    }

    pub fn level_error(&self) -> Option<String> {
        self.level.error().map(|e| e.user_message())
    }

    // ── Chart ────────────────────────────────────────────────────────────

    pub fn chart_status(&self) -> ViewStatus {
        ViewStatus::of(&self.chart.state())
    }

    /// Hidden until there is at least one exercise in the window.
    pub fn show_chart(&self) -> bool {
        self.chart
            .data()
            .is_some_and(|points| points.iter().any(|p| p.count > 0))
    }

    pub fn chart_bars(&self) -> Vec<ChartBar> {
        self.chart
            .data()
            .map(|points| chart_bars(&points))
            .unwrap_or_default()
    }

    // ── Recent exercises ─────────────────────────────────────────────────

    pub fn history_status(&self) -> ViewStatus {
        ViewStatus::of(&self.history.state())
    }

    pub fn history(&self) -> Arc<Vec<ExerciseHistoryEntry>> {
        self.history.data().unwrap_or_default()
    }

    pub fn score_band(entry: &ExerciseHistoryEntry) -> Option<ScoreBand> {
        entry.average_score().map(ScoreBand::of)
    }
}
