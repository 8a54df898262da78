use std::path::PathBuf;

use serde::Deserialize;

use crate::infra::config::{AppConfig, LogConfig, ProfileConfig, UiConfig};

/// Lower bound for the input poll timeout; zero would busy-loop.
const MIN_TICK_RATE_MS: u64 = 10;

#[derive(Debug, Deserialize, Default)]
pub struct FileConfig {
    pub logging: Option<FileLogConfig>,
    pub ui: Option<FileUiConfig>,
    pub profile: Option<FileProfileConfig>,
}

impl FileConfig {
    pub fn merge_into(self, config: &mut AppConfig) {
        if let Some(logging) = self.logging {
            logging.merge_into(&mut config.logging);
        }

        if let Some(ui) = self.ui {
            ui.merge_into(&mut config.ui);
        }

        if let Some(profile) = self.profile {
            profile.merge_into(&mut config.profile);
        }
    }
}

#[derive(Debug, Deserialize, Default)]
pub struct FileLogConfig {
    pub level: Option<String>,
    pub file: Option<PathBuf>,
}

impl FileLogConfig {
    fn merge_into(self, config: &mut LogConfig) {
        if let Some(level) = self.level {
            config.level = level;
        }

        if let Some(file) = self.file {
            config.file = Some(file);
        }
    }
}

#[derive(Debug, Deserialize, Default)]
pub struct FileUiConfig {
    pub tick_rate_ms: Option<u64>,
    pub emoji_columns: Option<usize>,
}

impl FileUiConfig {
    fn merge_into(self, config: &mut UiConfig) {
        if let Some(tick_rate_ms) = self.tick_rate_ms {
            config.tick_rate_ms = tick_rate_ms.max(MIN_TICK_RATE_MS);
        }

        if let Some(emoji_columns) = self.emoji_columns {
            config.emoji_columns = emoji_columns;
        }
    }
}

#[derive(Debug, Deserialize, Default)]
pub struct FileProfileConfig {
    pub name: Option<String>,
    pub bio: Option<String>,
}

impl FileProfileConfig {
    fn merge_into(self, config: &mut ProfileConfig) {
        if let Some(name) = self.name {
            config.name = Some(name);
        }

        if let Some(bio) = self.bio {
            config.bio = Some(bio);
        }
    }
}
