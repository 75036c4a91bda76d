//! Stats sub-client — totals, chart, settings.

use crate::client::LearningClient;
use crate::domain::stats::{
    clamp_level, ChartPoint, LevelUpdate, Settings, SettingsUpdated, Stats, MAX_CHART_DAYS,
    MIN_CHART_DAYS,
};
use crate::error::SdkError;
use crate::http::client::with_query;
use crate::mutation::Mutation;
use crate::query::{keys, QueryObserver};

pub struct StatsClient<'a> {
    pub(crate) client: &'a LearningClient,
}

impl<'a> StatsClient<'a> {
    pub async fn get(&self) -> Result<Stats, SdkError> {
        let url = self.client.http.url("/stats");
        Ok(self.client.http.get(&url).await?)
    }

    /// Exercises per day over the last `days` days, oldest first.
    pub async fn chart(&self, days: u32) -> Result<Vec<ChartPoint>, SdkError> {
        if !(MIN_CHART_DAYS..=MAX_CHART_DAYS).contains(&days) {
            return Err(SdkError::Validation(format!(
                "days must be between {MIN_CHART_DAYS} and {MAX_CHART_DAYS}, got {days}"
            )));
        }
        let url = with_query(
            self.client.http.url("/stats/chart"),
            &[("days", Some(days.to_string()))],
        );
        let mut points: Vec<ChartPoint> = self.client.http.get(&url).await?;
        points.sort_by(|a, b| a.date.cmp(&b.date));
        Ok(points)
    }

    pub async fn settings(&self) -> Result<Settings, SdkError> {
        let url = self.client.http.url("/settings");
        Ok(self.client.http.get(&url).await?)
    }

    /// Set the exercise difficulty level, clamped to `[1, 100]`.
    pub async fn update_level(&self, level: i64) -> Result<SettingsUpdated, SdkError> {
        let body = LevelUpdate {
            level: clamp_level(level),
        };
        let url = self.client.http.url("/settings");
        Ok(self.client.http.put(&url, &body).await?)
    }

    // ── Cached reads ─────────────────────────────────────────────────────

    pub fn watch(&self) -> QueryObserver<Stats> {
        let client = self.client.clone();
        self.client.queries.observe(keys::stats(), move || {
            let client = client.clone();
            async move { client.stats().get().await }
        })
    }

    pub fn watch_chart(&self, days: u32) -> QueryObserver<Vec<ChartPoint>> {
        let client = self.client.clone();
        self.client
            .queries
            .observe(keys::stats_chart(days), move || {
                let client = client.clone();
                async move { client.stats().chart(days).await }
            })
    }

    pub fn watch_settings(&self) -> QueryObserver<Settings> {
        let client = self.client.clone();
        self.client.queries.observe(keys::settings(), move || {
            let client = client.clone();
            async move { client.stats().settings().await }
        })
    }

    // ── Mutations ────────────────────────────────────────────────────────

    pub fn level_mutation(&self) -> Mutation<SettingsUpdated> {
        self.client
            .mutation(vec![keys::stats(), keys::settings()])
    }
}
