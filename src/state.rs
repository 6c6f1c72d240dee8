//! View State
//!
//! Which tab is showing and which page of it. Threaded through the tab bar
//! and the panels instead of living in globals.

/// The three resource panels
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Tab {
    #[default]
    Products,
    Categories,
    Orders,
}

impl Tab {
    pub const ALL: [Tab; 3] = [Tab::Products, Tab::Orders, Tab::Categories];

    pub fn label(&self) -> &'static str {
        match self {
            Tab::Products => "Products",
            Tab::Categories => "Categories",
            Tab::Orders => "Orders",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewState {
    pub tab: Tab,
    /// 1-based page of the active tab
    pub page: u32,
    /// Bumped to force the active panel to load again
    pub revision: u32,
}

impl Default for ViewState {
    fn default() -> Self {
        Self { tab: Tab::default(), page: 1, revision: 0 }
    }
}

impl ViewState {
    /// Activate `tab` at page 1
    pub fn switch_tab(&mut self, tab: Tab) {
        self.tab = tab;
        self.page = 1;
        self.revision = self.revision.wrapping_add(1);
    }

    pub fn goto(&mut self, page: u32) {
        self.page = page.max(1);
    }

    /// Load the active tab again from page 1
    pub fn reload(&mut self) {
        self.page = 1;
        self.revision = self.revision.wrapping_add(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_switch_tab_resets_page() {
        let mut view = ViewState::default();
        view.goto(4);
        view.switch_tab(Tab::Orders);
        assert_eq!(view.tab, Tab::Orders);
        assert_eq!(view.page, 1);
    }

    #[test]
    fn test_reload_changes_revision_and_page() {
        let mut view = ViewState::default();
        view.goto(3);
        let before = view;
        view.reload();
        assert_eq!(view.page, 1);
        assert_ne!(view, before);
        // reloading page 1 must still register as a change
        let before = view;
        view.reload();
        assert_ne!(view, before);
    }

    #[test]
    fn test_goto_never_zero() {
        let mut view = ViewState::default();
        view.goto(0);
        assert_eq!(view.page, 1);
    }
}
