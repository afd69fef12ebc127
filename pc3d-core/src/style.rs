/// Appearance of option buttons and tab triggers, selected from explicit
/// variants rather than ad-hoc flags.

use std::fmt::Write;

use crate::color::Rgb;

const PRIMARY: Rgb = Rgb::new(0x25, 0x63, 0xeb);
const PRIMARY_HOVER: Rgb = Rgb::new(0x1d, 0x4e, 0xd8);
const OUTLINE_BORDER: Rgb = Rgb::new(0xd1, 0xd5, 0xdb);
const OUTLINE_TEXT: Rgb = Rgb::new(0x37, 0x41, 0x51);
const OUTLINE_HOVER: Rgb = Rgb::new(0xf3, 0xf4, 0xf6);
const MUTED_TEXT: Rgb = Rgb::new(0x6b, 0x72, 0x80);

/// Button visual variants
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum ButtonVariant {
    /// Filled with the primary color; marks the selected option
    #[default]
    Default,
    /// Border only, transparent background
    Outline,
}

impl ButtonVariant {
    pub fn for_selection(selected: bool) -> Self {
        if selected {
            ButtonVariant::Default
        } else {
            ButtonVariant::Outline
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Interaction {
    #[default]
    Enabled,
    Disabled,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ButtonStyle {
    /// `None` is transparent
    pub background: Option<Rgb>,
    pub hover_background: Option<Rgb>,
    pub foreground: Rgb,
    pub border: Option<Rgb>,
    pub opacity: f32,
}

pub fn button_style(variant: ButtonVariant, interaction: Interaction) -> ButtonStyle {
    let (background, hover_background, foreground, border) = match variant {
        ButtonVariant::Default => (Some(PRIMARY), Some(PRIMARY_HOVER), Rgb::WHITE, None),
        ButtonVariant::Outline => (None, Some(OUTLINE_HOVER), OUTLINE_TEXT, Some(OUTLINE_BORDER)),
    };

    match interaction {
        Interaction::Enabled => ButtonStyle {
            background,
            hover_background,
            foreground,
            border,
            opacity: 1.0,
        },
        // Hovering a disabled button keeps its resting background
        Interaction::Disabled => ButtonStyle {
            background,
            hover_background: background,
            foreground,
            border,
            opacity: 0.5,
        },
    }
}

impl ButtonStyle {
    /// Inline CSS declarations for the resting state
    pub fn to_css(&self) -> String {
        let mut css = String::new();
        let _ = write!(css, "background:{};", css_color(self.background));
        let _ = write!(css, "color:{};", self.foreground);
        match self.border {
            Some(border) => {
                let _ = write!(css, "border:1px solid {border};");
            }
            None => css.push_str("border:none;"),
        }
        if self.opacity < 1.0 {
            let _ = write!(css, "opacity:{};cursor:not-allowed;", self.opacity);
        } else {
            css.push_str("cursor:pointer;");
        }
        css
    }

    /// Resting and `:hover` rules for `selector`
    pub fn to_css_rules(&self, selector: &str) -> String {
        format!(
            "{selector}{{{}}}{selector}:hover{{background:{};}}",
            self.to_css(),
            css_color(self.hover_background)
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TabTriggerStyle {
    pub foreground: Rgb,
    pub hover_foreground: Rgb,
    pub underline: Option<Rgb>,
}

pub fn tab_trigger_style(active: bool) -> TabTriggerStyle {
    if active {
        TabTriggerStyle {
            foreground: PRIMARY,
            hover_foreground: PRIMARY,
            underline: Some(PRIMARY),
        }
    } else {
        TabTriggerStyle {
            foreground: MUTED_TEXT,
            hover_foreground: PRIMARY,
            underline: None,
        }
    }
}

impl TabTriggerStyle {
    pub fn to_css(&self) -> String {
        format!(
            "color:{};border:none;background:none;border-bottom:2px solid {};cursor:pointer;",
            self.foreground,
            css_color(self.underline)
        )
    }

    pub fn to_css_rules(&self, selector: &str) -> String {
        format!(
            "{selector}{{{}}}{selector}:hover{{color:{};}}",
            self.to_css(),
            self.hover_foreground
        )
    }
}

fn css_color(color: Option<Rgb>) -> String {
    color.map_or_else(|| "transparent".to_string(), |c| c.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selected_option_uses_default_variant() {
        assert_eq!(ButtonVariant::for_selection(true), ButtonVariant::Default);
        assert_eq!(ButtonVariant::for_selection(false), ButtonVariant::Outline);
    }

    #[test]
    fn test_outline_is_transparent_with_border() {
        let style = button_style(ButtonVariant::Outline, Interaction::Enabled);
        assert_eq!(style.background, None);
        assert_eq!(style.border, Some(OUTLINE_BORDER));
        assert_eq!(
            style.to_css(),
            "background:transparent;color:#374151;border:1px solid #d1d5db;cursor:pointer;"
        );
    }

    #[test]
    fn test_disabled_freezes_hover_and_dims() {
        for variant in [ButtonVariant::Default, ButtonVariant::Outline] {
            let style = button_style(variant, Interaction::Disabled);
            assert_eq!(style.hover_background, style.background);
            assert!((style.opacity - 0.5).abs() < f32::EPSILON);
            assert!(style.to_css().contains("not-allowed"));
        }
    }

    #[test]
    fn test_default_variant_hover_darkens() {
        let style = button_style(ButtonVariant::Default, Interaction::Enabled);
        assert_eq!(style.background, Some(PRIMARY));
        assert_eq!(style.hover_background, Some(PRIMARY_HOVER));
        assert!(PRIMARY_HOVER.luminance() < PRIMARY.luminance());
    }

    #[test]
    fn test_hover_background_reaches_css_rules() {
        let rules = |variant, interaction| button_style(variant, interaction).to_css_rules(".opt");

        let outline = rules(ButtonVariant::Outline, Interaction::Enabled);
        assert!(outline.starts_with(".opt{background:transparent;"));
        assert!(outline.ends_with(".opt:hover{background:#f3f4f6;}"));

        let default = rules(ButtonVariant::Default, Interaction::Enabled);
        assert!(default.contains(".opt:hover{background:#1d4ed8;}"));

        let disabled = rules(ButtonVariant::Default, Interaction::Disabled);
        assert!(disabled.contains(".opt:hover{background:#2563eb;}"));
    }

    #[test]
    fn test_inactive_tab_hovers_to_primary() {
        let rules = tab_trigger_style(false).to_css_rules(".tab");
        assert!(rules.contains("color:#6b7280;"));
        assert!(rules.ends_with(".tab:hover{color:#2563eb;}"));
    }

    #[test]
    fn test_tab_trigger_styles() {
        assert_eq!(tab_trigger_style(true).underline, Some(PRIMARY));
        assert!(tab_trigger_style(false)
            .to_css()
            .contains("border-bottom:2px solid transparent"));
    }
}
