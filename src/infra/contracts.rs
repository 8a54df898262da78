use anyhow::Result;

use crate::infra::config::AppConfig;

pub trait ConfigAdapter {
    fn load(&self) -> Result<AppConfig>;
}

/// Source of the display time stamped on outgoing messages.
pub trait Clock {
    /// Current local time as "HH:MM".
    fn now_label(&self) -> String;
}
