//! Showcase panel state: the widget values exercised by the demo page.

/// Progress bar maximum.
const PROGRESS_MAX: u32 = 100;

/// Step added to progress per counter click.
const PROGRESS_STEP: u32 = 10;

/// State behind the component showcase cards.
pub struct ShowcaseState {
    count: u32,
    input: String,
    switch_on: bool,
    checkbox_on: bool,
}

impl ShowcaseState {
    pub fn new() -> Self {
        Self {
            count: 0,
            input: String::new(),
            switch_on: false,
            checkbox_on: false,
        }
    }

    pub fn count(&self) -> u32 {
        self.count
    }

    pub fn increment(&mut self) {
        self.count = self.count.saturating_add(1);
    }

    pub fn set_input(&mut self, value: impl Into<String>) {
        self.input = value.into();
    }

    pub fn set_switch(&mut self, on: bool) {
        self.switch_on = on;
    }

    pub fn set_checkbox(&mut self, on: bool) {
        self.checkbox_on = on;
    }

    /// Progress derived from the counter, clamped to the bar maximum.
    pub fn progress(&self) -> u32 {
        (self.count * PROGRESS_STEP).min(PROGRESS_MAX)
    }

    /// IPC payload describing the showcase state for the page.
    pub fn state_payload(&self) -> serde_json::Value {
        serde_json::json!({
            "count": self.count,
            "input": self.input,
            "switch_on": self.switch_on,
            "checkbox_on": self.checkbox_on,
            "progress": self.progress(),
        })
    }
}

impl Default for ShowcaseState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_zeroed() {
        let s = ShowcaseState::new();
        assert_eq!(s.count(), 0);
        assert_eq!(s.progress(), 0);
        assert_eq!(s.state_payload()["input"], "");
        assert_eq!(s.state_payload()["switch_on"], false);
    }

    #[test]
    fn increment_drives_progress_in_steps_of_ten() {
        let mut s = ShowcaseState::new();
        for _ in 0..3 {
            s.increment();
        }
        assert_eq!(s.count(), 3);
        assert_eq!(s.progress(), 30);
    }

    #[test]
    fn progress_clamps_at_maximum() {
        let mut s = ShowcaseState::new();
        for _ in 0..25 {
            s.increment();
        }
        assert_eq!(s.count(), 25);
        assert_eq!(s.progress(), 100);
    }

    #[test]
    fn widget_values_round_trip_through_payload() {
        let mut s = ShowcaseState::new();
        s.set_input("hello");
        s.set_switch(true);
        s.set_checkbox(true);
        let payload = s.state_payload();
        assert_eq!(payload["input"], "hello");
        assert_eq!(payload["switch_on"], true);
        assert_eq!(payload["checkbox_on"], true);
        assert_eq!(payload["progress"], 0);
    }
}
