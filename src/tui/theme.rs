use ratatui::style::Color;

use crate::model::UiConfig;

/// Parsed color theme for the TUI
#[derive(Debug, Clone)]
pub struct Theme {
    pub background: Color,
    pub header_bg: Color,
    pub text: Color,
    pub text_bright: Color,
    pub highlight: Color,
    pub dim: Color,
    pub red: Color,
    pub green: Color,
    pub selection_bg: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Theme {
            background: Color::Rgb(0x1F, 0x1F, 0x1F),
            header_bg: Color::Rgb(0x82, 0x57, 0xE5),
            text: Color::Rgb(0xB2, 0xB2, 0xB2),
            text_bright: Color::Rgb(0xFF, 0xFF, 0xFF),
            highlight: Color::Rgb(0x82, 0x57, 0xE5),
            dim: Color::Rgb(0x66, 0x66, 0x66),
            red: Color::Rgb(0xE8, 0x3F, 0x5B),
            green: Color::Rgb(0x1D, 0xB8, 0x63),
            selection_bg: Color::Rgb(0x2E, 0x26, 0x43),
        }
    }
}

/// Parse a hex color string like "#1DB863" into an RGB Color
fn parse_hex_color(hex: &str) -> Option<Color> {
    let hex = hex.strip_prefix('#')?;
    if hex.len() != 6 || !hex.is_ascii() {
        return None;
    }
    let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
    Some(Color::Rgb(channel(0)?, channel(2)?, channel(4)?))
}

impl Theme {
    /// Create a theme from UI config, falling back to defaults
    pub fn from_config(ui: &UiConfig) -> Self {
        let mut theme = Theme::default();

        for (key, value) in &ui.colors {
            let Some(color) = parse_hex_color(value) else {
                log::warn!("ignoring invalid color {:?} for {}", value, key);
                continue;
            };
            match key.as_str() {
                "background" => theme.background = color,
                "header_bg" => theme.header_bg = color,
                "text" => theme.text = color,
                "text_bright" => theme.text_bright = color,
                "highlight" => theme.highlight = color,
                "dim" => theme.dim = color,
                "red" => theme.red = color,
                "green" => theme.green = color,
                "selection_bg" => theme.selection_bg = color,
                _ => log::warn!("unknown theme color {:?}", key),
            }
        }

        theme
    }

    /// Color for a task title depending on its completion
    pub fn task_color(&self, done: bool) -> Color {
        if done { self.green } else { self.text }
    }
}
