//! # Theme
//!
//! Visual configuration handed to every view. There is no process-wide
//! style state: two renderers with different themes can coexist, which is
//! what the rendering tests rely on.

use std::str::FromStr;

use log::warn;
use ratatui::style::{Color, Modifier, Style};

use crate::core::config::ThemeConfig;

#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    pub title_fg: Color,
    pub title_bg: Color,
    pub selected_fg: Color,
    pub label_fg: Color,
    pub description_fg: Color,
    pub hint_fg: Color,
    pub detail_title_fg: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            title_fg: Color::Rgb(255, 253, 245),       // #FFFDF5
            title_bg: Color::Rgb(90, 86, 224),         // #5A56E0
            selected_fg: Color::Rgb(238, 111, 248),    // #EE6FF8
            label_fg: Color::Rgb(221, 221, 221),       // #DDDDDD
            description_fg: Color::Rgb(119, 119, 119), // #777777
            hint_fg: Color::Rgb(98, 98, 98),           // #626262
            detail_title_fg: Color::Reset,
        }
    }
}

impl Theme {
    /// Build a theme from config overrides. Unparseable colours are logged
    /// and replaced by the default for that slot.
    pub fn from_config(config: &ThemeConfig) -> Self {
        let base = Self::default();
        Self {
            title_fg: pick(&config.title_fg, base.title_fg, "title_fg"),
            title_bg: pick(&config.title_bg, base.title_bg, "title_bg"),
            selected_fg: pick(&config.selected_fg, base.selected_fg, "selected_fg"),
            label_fg: pick(&config.label_fg, base.label_fg, "label_fg"),
            description_fg: pick(&config.description_fg, base.description_fg, "description_fg"),
            hint_fg: pick(&config.hint_fg, base.hint_fg, "hint_fg"),
            detail_title_fg: pick(
                &config.detail_title_fg,
                base.detail_title_fg,
                "detail_title_fg",
            ),
        }
    }

    pub fn title_bar(&self) -> Style {
        Style::default()
            .fg(self.title_fg)
            .bg(self.title_bg)
            .add_modifier(Modifier::BOLD)
    }

    pub fn label(&self) -> Style {
        Style::default().fg(self.label_fg)
    }

    pub fn description(&self) -> Style {
        Style::default().fg(self.description_fg)
    }

    pub fn selected_label(&self) -> Style {
        Style::default()
            .fg(self.selected_fg)
            .add_modifier(Modifier::BOLD)
    }

    pub fn selected_description(&self) -> Style {
        Style::default().fg(self.selected_fg)
    }

    pub fn hint(&self) -> Style {
        Style::default().fg(self.hint_fg)
    }

    pub fn detail_title(&self) -> Style {
        Style::default()
            .fg(self.detail_title_fg)
            .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
    }
}

fn pick(value: &Option<String>, fallback: Color, slot: &str) -> Color {
    match value.as_deref().map(Color::from_str) {
        None => fallback,
        Some(Ok(color)) => color,
        Some(Err(_)) => {
            warn!(
                "Invalid colour {:?} for theme.{}, using default",
                value.as_deref().unwrap_or_default(),
                slot
            );
            fallback
        }
    }
}
