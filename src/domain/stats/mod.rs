//! Stats domain — dashboard totals, the activity chart and app settings.

#[cfg(feature = "http")]
pub mod client;

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

pub const MIN_LEVEL: i64 = 1;
pub const MAX_LEVEL: i64 = 100;
/// Level the backend reports before one was ever set.
pub const DEFAULT_LEVEL: i64 = 15;

pub const MIN_CHART_DAYS: u32 = 7;
pub const MAX_CHART_DAYS: u32 = 90;
pub const DEFAULT_CHART_DAYS: u32 = 14;

/// Keep a difficulty level inside `[MIN_LEVEL, MAX_LEVEL]`.
pub fn clamp_level(level: i64) -> i64 {
    level.clamp(MIN_LEVEL, MAX_LEVEL)
}

/// Dashboard totals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stats {
    #[serde(default)]
    pub total_words: u32,
    #[serde(default)]
    pub mastered: u32,
    #[serde(default)]
    pub learning: u32,
    #[serde(default)]
    pub needs_work: u32,
    #[serde(default)]
    pub mastery_percent: f64,
    #[serde(default)]
    pub avg_score: Option<f64>,
    #[serde(default)]
    pub total_exercises: u32,
    #[serde(default)]
    pub total_concepts: u32,
    #[serde(default = "default_level")]
    pub level: i64,
    #[serde(default)]
    pub streak_days: u32,
}

fn default_level() -> i64 {
    DEFAULT_LEVEL
}

/// Exercises completed on one day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartPoint {
    pub date: String,
    pub count: u32,
}

/// Key/value app settings. Values are arbitrary JSON.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Settings(pub BTreeMap<String, serde_json::Value>);

impl Settings {
    pub fn get(&self, key: &str) -> Option<&serde_json::Value> {
        self.0.get(key)
    }

    /// Current level; numeric strings are accepted.
    pub fn level(&self) -> Option<i64> {
        match self.0.get("level")? {
            serde_json::Value::Number(n) => n.as_i64().or_else(|| n.as_f64().map(|f| f as i64)),
            serde_json::Value::String(s) => s.trim().parse().ok(),
            _ => None,
        }
    }

    pub fn exercise_word_count(&self) -> Option<u32> {
        self.0
            .get("exercise_word_count")?
            .as_u64()
            .map(|n| n as u32)
    }
}

/// Body of `PUT /settings`.
#[derive(Debug, Clone, Serialize)]
pub(crate) struct LevelUpdate {
    pub level: i64,
}

/// Response of `PUT /settings`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SettingsUpdated {
    pub status: String,
    #[serde(default)]
    pub updated: Vec<String>,
}
