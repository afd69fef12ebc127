/// The configurator context handed to viewer hosts: one selection
/// controller and one tab selector, driven by input events in order.

use crate::catalog::{options_for, Category, ConfigOption};
use crate::error::Result;
use crate::render::{map_to_render_params, RenderParams};
use crate::state::{ConfigState, SelectionController};
use crate::tabs::TabNavigation;

/// A discrete user input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    ActivateTab(Category),
    Select { category: Category, value: String },
}

impl Event {
    pub fn select(category: Category, value: impl Into<String>) -> Self {
        Event::Select {
            category,
            value: value.into(),
        }
    }
}

/// What a host has to repaint after an event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The visible panel changed; the product did not
    TabChanged,
    /// The configuration changed; render parameters must be recomputed
    SelectionChanged,
    Unchanged,
}

/// One option button of the visible panel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PanelEntry {
    pub option: &'static ConfigOption,
    pub selected: bool,
}

#[derive(Debug, Clone, Default)]
pub struct Session {
    selection: SelectionController,
    tabs: TabNavigation,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn dispatch(&mut self, event: Event) -> Result<Outcome> {
        match event {
            Event::ActivateTab(category) => {
                let before = self.tabs.active();
                self.tabs.activate(category);
                Ok(if before == category {
                    Outcome::Unchanged
                } else {
                    Outcome::TabChanged
                })
            }
            Event::Select { category, value } => {
                let revision = self.selection.revision();
                self.selection.select(category, &value)?;
                Ok(if self.selection.revision() == revision {
                    Outcome::Unchanged
                } else {
                    Outcome::SelectionChanged
                })
            }
        }
    }

    pub fn state(&self) -> &ConfigState {
        self.selection.state()
    }

    pub fn revision(&self) -> u64 {
        self.selection.revision()
    }

    pub fn tabs(&self) -> &TabNavigation {
        &self.tabs
    }

    /// Recomputed from the current state on every call
    pub fn render_params(&self) -> RenderParams {
        map_to_render_params(self.state())
    }

    /// Options of the active tab with their selection flags
    pub fn panel(&self) -> Vec<PanelEntry> {
        self.panel_for(self.tabs.active())
    }

    pub fn panel_for(&self, category: Category) -> Vec<PanelEntry> {
        let state = self.state();
        options_for(category)
            .iter()
            .map(|option| PanelEntry {
                option,
                selected: state.is_selected(category, option),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ConfigError;

    #[test]
    fn test_outcomes() {
        let mut session = Session::new();
        assert_eq!(
            session.dispatch(Event::ActivateTab(Category::Material)).unwrap(),
            Outcome::Unchanged
        );
        assert_eq!(
            session.dispatch(Event::ActivateTab(Category::Size)).unwrap(),
            Outcome::TabChanged
        );
        assert_eq!(
            session.dispatch(Event::select(Category::Size, "large")).unwrap(),
            Outcome::SelectionChanged
        );
        assert_eq!(
            session.dispatch(Event::select(Category::Size, "large")).unwrap(),
            Outcome::Unchanged
        );
    }

    #[test]
    fn test_tabs_and_selection_are_independent() {
        let mut session = Session::new();
        session.dispatch(Event::ActivateTab(Category::Texture)).unwrap();
        session.dispatch(Event::select(Category::Material, "wood")).unwrap();
        assert_eq!(session.tabs().active(), Category::Texture);

        let state = *session.state();
        session.dispatch(Event::ActivateTab(Category::Color)).unwrap();
        assert_eq!(*session.state(), state);
    }

    #[test]
    fn test_panel_marks_exactly_the_selected_option() {
        let mut session = Session::new();
        session.dispatch(Event::ActivateTab(Category::Color)).unwrap();
        session.dispatch(Event::select(Category::Color, "blue")).unwrap();

        let selected: Vec<_> = session
            .panel()
            .iter()
            .filter(|entry| entry.selected)
            .map(|entry| entry.option.id)
            .collect();
        assert_eq!(selected, ["blue"]);
    }

    #[test]
    fn test_rejected_event_reports_error() {
        let mut session = Session::new();
        let err = session
            .dispatch(Event::select(Category::Size, "bogus"))
            .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidOption { category: Category::Size, .. }));
        assert_eq!(session.revision(), 0);
    }
}
