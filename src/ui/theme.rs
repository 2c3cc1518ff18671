use colored::{Color, Colorize};
use std::collections::HashMap;

/// Themes shipped with the game. `Config::validate` rejects anything else.
pub const THEME_NAMES: [&str; 3] = ["default", "classic", "mono"];

#[derive(Debug, Clone)]
pub struct Theme {
    pub name: String,
    pub styles: HashMap<String, StyleConfig>,
}

#[derive(Debug, Clone, Default)]
pub struct StyleConfig {
    pub foreground: Option<Color>,
    pub bold: bool,
    pub dimmed: bool,
    pub reversed: bool,
}

impl StyleConfig {
    fn fg(color: Color) -> Self {
        Self {
            foreground: Some(color),
            ..Default::default()
        }
    }

    fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    fn dimmed(mut self) -> Self {
        self.dimmed = true;
        self
    }

    fn reversed(mut self) -> Self {
        self.reversed = true;
        self
    }
}

#[derive(Debug)]
pub struct ThemeManager {
    themes: HashMap<String, Theme>,
    current_theme: String,
}

impl ThemeManager {
    pub fn new() -> Self {
        let mut manager = Self {
            themes: HashMap::new(),
            current_theme: "default".to_string(),
        };

        manager.load_default_themes();
        manager
    }

    pub fn set_theme(&mut self, theme_name: &str) -> bool {
        if self.themes.contains_key(theme_name) {
            self.current_theme = theme_name.to_string();
            true
        } else {
            false
        }
    }

    pub fn current_theme_name(&self) -> &str {
        &self.current_theme
    }

    pub fn apply_style(&self, text: &str, style_name: &str) -> String {
        let Some(style) = self
            .themes
            .get(&self.current_theme)
            .and_then(|theme| theme.styles.get(style_name))
        else {
            return text.to_string();
        };

        let mut styled = text.normal();
        if let Some(color) = style.foreground {
            styled = styled.color(color);
        }
        if style.bold {
            styled = styled.bold();
        }
        if style.dimmed {
            styled = styled.dimmed();
        }
        if style.reversed {
            styled = styled.reversed();
        }

        styled.to_string()
    }

    pub fn list_themes(&self) -> Vec<String> {
        let mut names: Vec<String> = self.themes.values().map(|theme| theme.name.clone()).collect();
        names.sort();
        names
    }

    fn load_default_themes(&mut self) {
        let default_styles = HashMap::from([
            ("title".to_string(), StyleConfig::fg(Color::Cyan).bold()),
            ("cross".to_string(), StyleConfig::fg(Color::Red).bold()),
            ("nought".to_string(), StyleConfig::fg(Color::Blue).bold()),
            ("empty".to_string(), StyleConfig::fg(Color::BrightBlack).dimmed()),
            ("solution".to_string(), StyleConfig::fg(Color::Green).bold().reversed()),
            ("status".to_string(), StyleConfig::fg(Color::Yellow)),
            ("success".to_string(), StyleConfig::fg(Color::Green).bold()),
            ("warning".to_string(), StyleConfig::fg(Color::Yellow).bold()),
            ("error".to_string(), StyleConfig::fg(Color::Red).bold()),
            ("separator".to_string(), StyleConfig::fg(Color::BrightBlack)),
        ]);
        self.insert_theme("default", default_styles);

        let classic_styles = HashMap::from([
            ("title".to_string(), StyleConfig::default().bold()),
            ("cross".to_string(), StyleConfig::fg(Color::White).bold()),
            ("nought".to_string(), StyleConfig::fg(Color::White).bold()),
            ("empty".to_string(), StyleConfig::default().dimmed()),
            ("solution".to_string(), StyleConfig::fg(Color::Yellow).bold().reversed()),
            ("status".to_string(), StyleConfig::fg(Color::White)),
            ("success".to_string(), StyleConfig::fg(Color::Yellow).bold()),
            ("warning".to_string(), StyleConfig::fg(Color::Yellow)),
            ("error".to_string(), StyleConfig::fg(Color::Red)),
            ("separator".to_string(), StyleConfig::default().dimmed()),
        ]);
        self.insert_theme("classic", classic_styles);

        // Plain text, for terminals without colour support.
        self.insert_theme("mono", HashMap::new());
    }

    fn insert_theme(&mut self, name: &str, styles: HashMap<String, StyleConfig>) {
        self.themes.insert(
            name.to_string(),
            Theme {
                name: name.to_string(),
                styles,
            },
        );
    }
}

impl Default for ThemeManager {
    fn default() -> Self {
        Self::new()
    }
}
