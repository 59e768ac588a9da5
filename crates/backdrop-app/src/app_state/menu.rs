//! Selection menu state: which category dropdown is open.

use backdrop_common::MenuCategory;

/// At most one category dropdown is open at a time.
pub struct MenuState {
    open: Option<MenuCategory>,
}

impl MenuState {
    pub fn new() -> Self {
        Self { open: None }
    }

    /// The currently open category, if any.
    pub fn open(&self) -> Option<MenuCategory> {
        self.open
    }

    /// Toggle a category: close it if open, otherwise open it (closing any
    /// other open category).
    pub fn toggle(&mut self, category: MenuCategory) {
        if self.open == Some(category) {
            self.open = None;
        } else {
            self.open = Some(category);
        }
    }

    /// Close any open dropdown. Returns `true` if one was open.
    pub fn dismiss(&mut self) -> bool {
        self.open.take().is_some()
    }

    /// IPC payload describing the menu state for the page.
    pub fn state_payload(&self) -> serde_json::Value {
        serde_json::json!({
            "open": self.open.map(|c| c.as_str()),
        })
    }
}

impl Default for MenuState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_closed() {
        let menu = MenuState::new();
        assert_eq!(menu.open(), None);
        assert_eq!(menu.state_payload()["open"], serde_json::Value::Null);
    }

    #[test]
    fn toggle_opens_and_closes() {
        let mut menu = MenuState::new();
        menu.toggle(MenuCategory::Static);
        assert_eq!(menu.open(), Some(MenuCategory::Static));
        menu.toggle(MenuCategory::Static);
        assert_eq!(menu.open(), None);
    }

    #[test]
    fn opening_one_closes_the_other() {
        let mut menu = MenuState::new();
        menu.toggle(MenuCategory::Static);
        menu.toggle(MenuCategory::Solid);
        assert_eq!(menu.open(), Some(MenuCategory::Solid));
    }

    #[test]
    fn dismiss_closes_and_reports() {
        let mut menu = MenuState::new();
        assert!(!menu.dismiss());
        menu.toggle(MenuCategory::Live);
        assert!(menu.dismiss());
        assert_eq!(menu.open(), None);
    }

    #[test]
    fn payload_names_open_category() {
        let mut menu = MenuState::new();
        menu.toggle(MenuCategory::Live);
        assert_eq!(menu.state_payload()["open"], "live");
    }
}
