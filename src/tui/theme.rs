use ratatui::style::Color;

/// Theme configuration for the TUI
#[derive(Debug, Clone)]
pub struct Theme {
    pub name: String,
    pub colors: ThemeColors,
}

#[derive(Debug, Clone)]
pub struct ThemeColors {
    // UI elements
    pub border: ColorValue,
    pub header: ColorValue,
    pub status_bar: ColorValue,

    // Text colors
    pub text_primary: ColorValue,
    pub text_secondary: ColorValue,

    // Message colors
    pub user_message: ColorValue,
    pub bot_message: ColorValue,

    // Buttons
    pub button: ColorValue,
    pub button_selected: ColorValue,

    // Chart series, cycled in order
    pub series: Vec<ColorValue>,
}

#[derive(Debug, Clone)]
pub enum ColorValue {
    Rgb { r: u8, g: u8, b: u8 },
    Named(String),
}

impl ColorValue {
    fn named(name: &str) -> Self {
        ColorValue::Named(name.to_string())
    }

    pub fn to_color(&self) -> Color {
        match self {
            ColorValue::Rgb { r, g, b } => Color::Rgb(*r, *g, *b),
            ColorValue::Named(name) => match name.as_str() {
                "black" => Color::Black,
                "red" => Color::Red,
                "green" => Color::Green,
                "yellow" => Color::Yellow,
                "blue" => Color::Blue,
                "magenta" => Color::Magenta,
                "cyan" => Color::Cyan,
                "white" => Color::White,
                "gray" | "grey" => Color::Gray,
                "dark_gray" | "dark_grey" => Color::DarkGray,
                _ => Color::White,
            },
        }
    }
}

impl Theme {
    /// Pick a theme by its config name, defaulting to dark
    pub fn by_name(name: &str) -> Self {
        match name {
            "light" => Self::light(),
            _ => Self::dark(),
        }
    }

    /// Create the default dark theme
    pub fn dark() -> Self {
        Self {
            name: "Dark".to_string(),
            colors: ThemeColors {
                border: ColorValue::named("dark_gray"),
                header: ColorValue::named("cyan"),
                status_bar: ColorValue::named("black"),

                text_primary: ColorValue::named("white"),
                text_secondary: ColorValue::named("gray"),

                user_message: ColorValue::named("blue"),
                bot_message: ColorValue::named("green"),

                button: ColorValue::named("gray"),
                button_selected: ColorValue::named("yellow"),

                series: vec![
                    ColorValue::named("cyan"),
                    ColorValue::named("yellow"),
                    ColorValue::named("magenta"),
                    ColorValue::named("green"),
                    ColorValue::named("blue"),
                    ColorValue::named("red"),
                ],
            },
        }
    }

    /// Create a light theme
    pub fn light() -> Self {
        Self {
            name: "Light".to_string(),
            colors: ThemeColors {
                border: ColorValue::Rgb { r: 200, g: 200, b: 200 },
                header: ColorValue::Rgb { r: 0, g: 100, b: 200 },
                status_bar: ColorValue::Rgb { r: 240, g: 240, b: 240 },

                text_primary: ColorValue::named("black"),
                text_secondary: ColorValue::Rgb { r: 100, g: 100, b: 100 },

                user_message: ColorValue::Rgb { r: 0, g: 50, b: 200 },
                bot_message: ColorValue::Rgb { r: 0, g: 150, b: 50 },

                button: ColorValue::Rgb { r: 100, g: 100, b: 100 },
                button_selected: ColorValue::Rgb { r: 200, g: 100, b: 0 },

                series: vec![
                    ColorValue::Rgb { r: 0, g: 100, b: 200 },
                    ColorValue::Rgb { r: 200, g: 100, b: 0 },
                    ColorValue::Rgb { r: 150, g: 0, b: 150 },
                    ColorValue::Rgb { r: 0, g: 150, b: 50 },
                    ColorValue::Rgb { r: 0, g: 150, b: 200 },
                    ColorValue::Rgb { r: 200, g: 0, b: 0 },
                ],
            },
        }
    }

    /// Color for the n-th chart series
    pub fn series_color(&self, index: usize) -> Color {
        let palette = &self.colors.series;
        if palette.is_empty() {
            return Color::White;
        }
        palette[index % palette.len()].to_color()
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_by_name() {
        assert_eq!(Theme::by_name("light").name, "Light");
        assert_eq!(Theme::by_name("dark").name, "Dark");
        assert_eq!(Theme::by_name("whatever").name, "Dark");
    }

    #[test]
    fn test_series_color_cycles() {
        let theme = Theme::dark();
        let n = theme.colors.series.len();
        assert_eq!(theme.series_color(0), theme.series_color(n));
        assert_eq!(theme.series_color(1), Color::Yellow);
    }
}
