use chrono::Local;

use crate::infra::contracts::Clock;

/// Local wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_label(&self) -> String {
        Local::now().format("%H:%M").to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn now_label_is_hours_and_minutes() {
        let label = SystemClock.now_label();

        assert_eq!(label.len(), 5);
        assert_eq!(label.as_bytes()[2], b':');
        assert!(label
            .chars()
            .filter(|ch| *ch != ':')
            .all(|ch| ch.is_ascii_digit()));
    }
}
