use std::collections::HashMap;

use crate::domain::{Mode, Tier};

pub const BASE_URL_ENV: &str = "SMOGON_STATS_URL";

/// Reference ratings published for each skill bracket, ordered
/// unskilled, average, skilled, elite.
pub type RatingTable = [u32; 4];

pub struct RatingTables {
    pub overused: RatingTable,
    pub standard: RatingTable,
}

impl Default for RatingTables {
    fn default() -> Self {
        Self {
            // OU has a much larger ladder, so its upper brackets sit higher
            overused: [0, 1500, 1695, 1825],
            standard: [0, 1500, 1630, 1760],
        }
    }
}

impl RatingTables {
    pub fn for_tier(&self, tier: Tier) -> &RatingTable {
        match tier {
            Tier::Overused => &self.overused,
            _ => &self.standard,
        }
    }
}

pub struct StatSettings {
    pub base_url: String,
    pub mode_folders: HashMap<Mode, &'static str>,
    pub ratings: RatingTables,
    pub file_extension: &'static str,
}

impl Default for StatSettings {
    fn default() -> Self {
        Self {
            base_url: "https://www.smogon.com/stats".to_string(),
            mode_folders: HashMap::from([(Mode::Moves, "moveset/")]),
            ratings: RatingTables::default(),
            file_extension: ".txt",
        }
    }
}

impl StatSettings {
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn mode_folder(&self, mode: Mode) -> &str {
        self.mode_folders.get(&mode).copied().unwrap_or("")
    }
}

pub struct HttpSettings {
    pub user_agent: &'static str,
    pub timeout_secs: u64,
}

impl Default for HttpSettings {
    fn default() -> Self {
        Self {
            user_agent: "SmogonStatTool/0.1",
            timeout_secs: 30,
        }
    }
}

pub struct AppConfig {
    pub stats: StatSettings,
    pub http: HttpSettings,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl AppConfig {
    pub fn new() -> Self {
        Self {
            stats: StatSettings::default(),
            http: HttpSettings::default(),
        }
    }

    /// Defaults, with the base URL taken from `SMOGON_STATS_URL` when set.
    pub fn from_env() -> Self {
        let mut config = Self::new();
        if let Ok(url) = std::env::var(BASE_URL_ENV) {
            if !url.trim().is_empty() {
                config.stats = config.stats.with_base_url(url.trim());
            }
        }
        config
    }
}
