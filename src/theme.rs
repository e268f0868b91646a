pub use colored::{Color, Colorize};

#[derive(Debug, Clone, Copy, Default)]
pub struct ColorScheme {
    pub foreground: Option<Color>,
    pub bold: bool,
}

impl ColorScheme {
    pub fn apply(&self, text: &str) -> colored::ColoredString {
        let mut styled: colored::ColoredString = text.into();

        if let Some(fg) = self.foreground {
            styled = styled.color(fg);
        }
        if self.bold {
            styled = styled.bold();
        }

        styled
    }
}

/// Styling for the display layer. Passed in explicitly so tests and
/// `--no-color` runs can substitute [`Theme::monochrome`].
#[derive(Debug, Clone)]
pub struct Theme {
    pub label: ColorScheme,
    pub command: ColorScheme,
    pub explanation: ColorScheme,
    pub error: ColorScheme,
    pub hint: ColorScheme,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            label: ColorScheme {
                foreground: Some(Color::Magenta),
                bold: true,
            },
            command: ColorScheme {
                foreground: Some(Color::Green),
                bold: true,
            },
            explanation: ColorScheme {
                foreground: Some(Color::BrightBlack),
                bold: false,
            },
            error: ColorScheme {
                foreground: Some(Color::Red),
                bold: true,
            },
            hint: ColorScheme {
                foreground: Some(Color::Yellow),
                bold: true,
            },
        }
    }
}

impl Theme {
    pub fn monochrome() -> Self {
        let plain = ColorScheme::default();
        Self {
            label: plain,
            command: plain,
            explanation: plain,
            error: plain,
            hint: plain,
        }
    }
}
