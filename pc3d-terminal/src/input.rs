/// Keyboard bindings
use crossterm::event::KeyCode;

use crate::config::ViewerConfig;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Action {
    Quit,
    NextTab,
    PreviousTab,
    /// Zero-based position in the visible option panel
    SelectOption(usize),
    Rotate { dx: f32, dy: f32, dz: f32 },
    ToggleAutoRotate,
}

pub fn action_for_key(code: KeyCode, config: &ViewerConfig) -> Option<Action> {
    let step = config.rotation_step;
    let rotate = |dx, dy, dz| Some(Action::Rotate { dx, dy, dz });

    match code {
        KeyCode::Char('q') | KeyCode::Esc => Some(Action::Quit),
        KeyCode::Tab => Some(Action::NextTab),
        KeyCode::BackTab => Some(Action::PreviousTab),
        KeyCode::Char(c @ '1'..='9') => Some(Action::SelectOption(c as usize - '1' as usize)),
        KeyCode::Char('w') | KeyCode::Up => rotate(step, 0.0, 0.0),
        KeyCode::Char('s') | KeyCode::Down => rotate(-step, 0.0, 0.0),
        KeyCode::Char('a') | KeyCode::Left => rotate(0.0, -step, 0.0),
        KeyCode::Char('d') | KeyCode::Right => rotate(0.0, step, 0.0),
        KeyCode::Char('e') => rotate(0.0, 0.0, step),
        KeyCode::Char('r') => rotate(0.0, 0.0, -step),
        KeyCode::Char(' ') => Some(Action::ToggleAutoRotate),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_number_keys_are_zero_based() {
        let config = ViewerConfig::default();
        assert_eq!(
            action_for_key(KeyCode::Char('1'), &config),
            Some(Action::SelectOption(0))
        );
        assert_eq!(
            action_for_key(KeyCode::Char('4'), &config),
            Some(Action::SelectOption(3))
        );
        assert_eq!(action_for_key(KeyCode::Char('0'), &config), None);
    }

    #[test]
    fn test_tab_keys() {
        let config = ViewerConfig::default();
        assert_eq!(action_for_key(KeyCode::Tab, &config), Some(Action::NextTab));
        assert_eq!(action_for_key(KeyCode::BackTab, &config), Some(Action::PreviousTab));
    }

    #[test]
    fn test_rotation_uses_configured_step() {
        let config = ViewerConfig {
            rotation_step: 0.25,
            ..ViewerConfig::default()
        };
        assert_eq!(
            action_for_key(KeyCode::Left, &config),
            Some(Action::Rotate {
                dx: 0.0,
                dy: -0.25,
                dz: 0.0
            })
        );
    }
}
