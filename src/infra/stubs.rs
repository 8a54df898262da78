use crate::infra::contracts::Clock;

/// Clock frozen at one label.
#[derive(Debug, Clone)]
pub struct FixedClock(pub &'static str);

impl Clock for FixedClock {
    fn now_label(&self) -> String {
        self.0.to_owned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_clock_returns_its_label() {
        assert_eq!(FixedClock("09:15").now_label(), "09:15");
    }
}
