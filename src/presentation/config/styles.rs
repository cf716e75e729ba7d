use std::collections::HashMap;

use derive_deref::{Deref, DerefMut};
use ratatui::style::{Color, Modifier, Style};
use serde::{de::Deserializer, Deserialize};

/// Named styles used by the home screen components, e.g. `"search_bar": "white on black"`
#[derive(Clone, Debug, Default, Deref, DerefMut)]
pub struct Styles(pub HashMap<String, Style>);

impl Styles {
    /// Style registered under `name`, or the terminal default
    pub fn style(&self, name: &str) -> Style {
        self.get(name).copied().unwrap_or_default()
    }
}

impl<'de> Deserialize<'de> for Styles {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let parsed_map = HashMap::<String, String>::deserialize(deserializer)?;

        let styles = parsed_map
            .into_iter()
            .map(|(name, raw)| (name, parse_style(&raw)))
            .collect();

        Ok(Styles(styles))
    }
}

/// Parse a style description such as `"bold yellow on blue"`
pub fn parse_style(line: &str) -> Style {
    let (foreground, background) =
        line.split_at(line.to_lowercase().find("on ").unwrap_or(line.len()));
    let foreground = process_color_string(foreground);
    let background = process_color_string(&background.replace("on ", ""));

    let mut style = Style::default();
    if let Some(fg) = parse_color(&foreground.0) {
        style = style.fg(fg);
    }
    if let Some(bg) = parse_color(&background.0) {
        style = style.bg(bg);
    }
    style = style.add_modifier(foreground.1 | background.1);
    style
}

fn process_color_string(color_str: &str) -> (String, Modifier) {
    let color = color_str
        .replace("grey", "gray")
        .replace("bright ", "")
        .replace("bold ", "")
        .replace("underline ", "")
        .replace("inverse ", "")
        .replace("dim ", "")
        .replace("italic ", "");

    let mut modifiers = Modifier::empty();
    if color_str.contains("underline") {
        modifiers |= Modifier::UNDERLINED;
    }
    if color_str.contains("bold") {
        modifiers |= Modifier::BOLD;
    }
    if color_str.contains("inverse") {
        modifiers |= Modifier::REVERSED;
    }
    if color_str.contains("dim") {
        modifiers |= Modifier::DIM;
    }
    if color_str.contains("italic") {
        modifiers |= Modifier::ITALIC;
    }

    (color, modifiers)
}

fn parse_color(s: &str) -> Option<Color> {
    let s = s.trim().to_lowercase();
    let color = match s.as_str() {
        "black" => Color::Black,
        "red" => Color::Red,
        "green" => Color::Green,
        "yellow" => Color::Yellow,
        "blue" => Color::Blue,
        "magenta" => Color::Magenta,
        "cyan" => Color::Cyan,
        "gray" => Color::Gray,
        "darkgray" | "dark gray" => Color::DarkGray,
        "white" => Color::White,
        "reset" => Color::Reset,
        other => {
            if let Some(index) = other.strip_prefix("color") {
                Color::Indexed(index.parse().ok()?)
            } else if let Some(hex) = other.strip_prefix('#') {
                let rgb = u32::from_str_radix(hex, 16).ok()?;
                Color::Rgb((rgb >> 16) as u8, (rgb >> 8) as u8, rgb as u8)
            } else {
                return None;
            }
        }
    };
    Some(color)
}
