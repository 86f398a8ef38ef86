use inksac::prelude::*;

#[derive(Debug, Clone, Copy)]
pub struct SyntaxHighlighter {
    color_support: ColorSupport,
}

impl Default for SyntaxHighlighter {
    fn default() -> Self {
        Self::new(true)
    }
}

impl SyntaxHighlighter {
    /// Colours only when `enabled` and the terminal supports it.
    pub fn new(enabled: bool) -> Self {
        let color_support = if enabled {
            check_color_support().unwrap_or(ColorSupport::NoColor)
        } else {
            ColorSupport::NoColor
        };
        Self { color_support }
    }

    pub fn plain() -> Self {
        Self {
            color_support: ColorSupport::NoColor,
        }
    }

    fn is_plain(&self) -> bool {
        matches!(self.color_support, ColorSupport::NoColor)
    }

    /// Colours the command word; the rest of the line is left byte-for-byte
    /// intact so the cursor position stays valid.
    pub fn highlight_command(&self, input: &str, known: bool) -> String {
        if self.is_plain() {
            return input.to_string();
        }

        let start = input.len() - input.trim_start_matches(' ').len();
        let end = input[start..]
            .find(' ')
            .map_or(input.len(), |pos| start + pos);
        if start == end {
            return input.to_string();
        }

        let style = if known {
            Style::builder().foreground(Color::Cyan).bold().build()
        } else {
            Style::builder().foreground(Color::Red).build()
        };

        format!(
            "{}{}{}",
            &input[..start],
            input[start..end].style(style),
            &input[end..]
        )
    }

    pub fn highlight_error(&self, error: &str) -> String {
        if self.is_plain() {
            return error.to_string();
        }

        let error_style = Style::builder().foreground(Color::Red).bold().build();
        error.style(error_style).to_string()
    }

    pub fn highlight_hint(&self, hint: &str) -> String {
        if self.is_plain() {
            return hint.to_string();
        }

        let hint_style = Style::builder()
            .foreground(Color::RGB(128, 128, 128))
            .build();
        hint.style(hint_style).to_string()
    }
}
