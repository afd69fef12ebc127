/// Which category's option panel is visible
use tracing::debug;

use crate::catalog::Category;

/// Mutually exclusive tab selector over the fixed categories
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TabNavigation {
    active: Category,
}

impl TabNavigation {
    pub fn new() -> Self {
        Self {
            active: Category::ALL[0],
        }
    }

    pub fn active(&self) -> Category {
        self.active
    }

    pub fn is_active(&self, category: Category) -> bool {
        self.active == category
    }

    /// Show `category`'s panel. Activating the visible tab is a no-op.
    pub fn activate(&mut self, category: Category) {
        if self.active != category {
            debug!(from = %self.active, to = %category, "tab activated");
        }
        self.active = category;
    }

    pub fn cycle_next(&mut self) {
        self.activate(self.active.next());
    }

    pub fn cycle_previous(&mut self) {
        self.activate(self.active.previous());
    }
}

impl Default for TabNavigation {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_on_first_category() {
        assert_eq!(TabNavigation::new().active(), Category::Material);
    }

    #[test]
    fn test_activate_is_idempotent() {
        let mut once = TabNavigation::new();
        once.activate(Category::Color);

        let mut twice = TabNavigation::new();
        twice.activate(Category::Color);
        twice.activate(Category::Color);

        assert_eq!(once, twice);
        assert!(twice.is_active(Category::Color));
    }

    #[test]
    fn test_exactly_one_active() {
        let mut tabs = TabNavigation::new();
        tabs.activate(Category::Size);
        let active: Vec<_> = Category::ALL.into_iter().filter(|&c| tabs.is_active(c)).collect();
        assert_eq!(active, [Category::Size]);
    }

    #[test]
    fn test_cycling_visits_every_tab() {
        let mut tabs = TabNavigation::new();
        let mut seen = vec![tabs.active()];
        for _ in 0..3 {
            tabs.cycle_next();
            seen.push(tabs.active());
        }
        assert_eq!(seen, Category::ALL);

        tabs.cycle_next();
        assert_eq!(tabs.active(), Category::Material);
        tabs.cycle_previous();
        assert_eq!(tabs.active(), Category::Texture);
    }
}
